//! Identifier kinds and their parsing behavior.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::field::FieldType;

/// Kind of primary identifier carried by a model.
///
/// The kind determines how generated request handlers parse the route
/// parameter: numeric kinds are parsed and rejected on `NaN`, string kinds
/// pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    /// Auto-increment integer.
    Number,
    /// 64-bit-plus integer, `bigint` in the target.
    BigInt,
    /// UUID-shaped string.
    Uuid,
    /// CUID-shaped string.
    Cuid,
}

impl IdKind {
    /// Returns the identifier kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdKind::Number => "number",
            IdKind::BigInt => "bigint",
            IdKind::Uuid => "uuid",
            IdKind::Cuid => "cuid",
        }
    }

    /// Whether route parameters of this kind need a numeric parse.
    pub fn is_numeric(&self) -> bool {
        matches!(self, IdKind::Number | IdKind::BigInt)
    }

    /// Derive the identifier kind from an id field's type.
    ///
    /// Returns `None` for types that cannot key a model, leaving the caller
    /// to fail with a structural validation error (or accept an explicit
    /// `id_strategy` override instead).
    pub fn from_field_type(ty: &FieldType) -> Option<Self> {
        match ty {
            FieldType::Int => Some(IdKind::Number),
            FieldType::BigInt => Some(IdKind::BigInt),
            FieldType::Uuid => Some(IdKind::Uuid),
            FieldType::Cuid => Some(IdKind::Cuid),
            _ => None,
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "number" | "int" => Ok(IdKind::Number),
            "bigint" => Ok(IdKind::BigInt),
            "uuid" => Ok(IdKind::Uuid),
            "cuid" => Ok(IdKind::Cuid),
            _ => Err(format!(
                "unknown id strategy '{}', expected 'number', 'bigint', 'uuid', or 'cuid'",
                s
            )),
        }
    }
}
