//! Per-run generation options.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Supported request-handling backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Express,
    Fastify,
}

impl Framework {
    /// Returns the framework identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Express => "express",
            Framework::Fastify => "fastify",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "express" => Ok(Framework::Express),
            "fastify" => Ok(Framework::Fastify),
            other => Err(Error::configuration(format!(
                "unknown framework '{}'",
                other
            ))),
        }
    }
}

fn default_framework() -> String {
    Framework::Express.as_str().to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_batch_size() -> u32 {
    100
}

/// Options for one generation run.
///
/// Constructed once per invocation, read-only thereafter, and passed
/// identically to every artifact generator for the same model. Feature
/// gating never reads these flags directly; it goes through
/// [`crate::FeatureResolution`] so independently generated artifacts
/// cannot observe different defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Backend identifier, resolved to a [`Framework`] at context build.
    pub framework: String,
    /// Generate publish/unpublish surfaces for models that support them.
    pub enable_domain_methods: bool,
    /// Generate batch create surfaces.
    pub enable_bulk_operations: bool,
    /// Upper bound for batch payload size; must be positive.
    pub max_batch_size: u32,
    /// Optional identifier-kind override (e.g. "uuid").
    pub id_strategy: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            framework: default_framework(),
            enable_domain_methods: default_true(),
            enable_bulk_operations: default_true(),
            max_batch_size: default_max_batch_size(),
            id_strategy: None,
        }
    }
}

impl Configuration {
    /// Resolve the backend identifier.
    pub fn framework(&self) -> Result<Framework> {
        Framework::from_str(&self.framework)
    }
}
