//! Read-only summaries of a generation run for operator reporting.

use serde::Serialize;

use crate::generators::ModelBundle;

/// Per-model reporting data.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub name: String,
    pub directory: String,
    pub files: Vec<String>,
    pub line_count: usize,
}

/// Summary of everything a run generated.
///
/// Consumed purely as read-only data by auxiliary tooling (terminal
/// reports, the integration checklist); the core never reads it back.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationSummary {
    pub models: Vec<ModelSummary>,
}

impl GenerationSummary {
    pub fn from_bundles(bundles: &[ModelBundle]) -> Self {
        Self {
            models: bundles
                .iter()
                .map(|bundle| ModelSummary {
                    name: bundle.name.clone(),
                    directory: bundle.directory.clone(),
                    files: bundle.files.keys().cloned().collect(),
                    line_count: bundle.meta().line_count,
                })
                .collect(),
        }
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn file_count(&self) -> usize {
        self.models.iter().map(|m| m.files.len()).sum()
    }

    pub fn line_count(&self) -> usize {
        self.models.iter().map(|m| m.line_count).sum()
    }
}
