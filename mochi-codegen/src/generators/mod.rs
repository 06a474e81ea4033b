//! The artifact generators and per-model orchestration.
//!
//! Each generator derives one artifact kind from the shared
//! [`GeneratorContext`]; [`generate_model`] runs them all for one model
//! and combines the results, [`generate_all`] keeps sibling models
//! independent so one model's failure never aborts the rest.

mod barrel;
mod controller;
mod dto;
mod service;
mod validator;

pub use controller::ControllerGenerator;
pub use dto::DtoGenerator;
pub use service::ServiceGenerator;
pub use validator::ValidatorGenerator;

use indexmap::IndexMap;
use mochi_ir::ParsedModel;
use serde::Serialize;

use crate::config::Configuration;
use crate::context::GeneratorContext;
use crate::error::{Error, Result};
use crate::output::{GeneratorOutput, OutputMeta};

/// Trait implemented by every artifact generator.
///
/// Generation is pure: same context in, same bytes out, no I/O. A
/// generator either produces its complete output or fails; partial
/// artifacts do not exist.
pub trait ArtifactGenerator {
    /// Artifact kind identifier ("dto", "service", ...).
    fn kind(&self) -> &'static str;

    /// Derive this generator's artifacts from the shared context.
    fn generate(&self, ctx: &GeneratorContext) -> Result<GeneratorOutput>;
}

/// All artifacts generated for one model, ready for the writer.
#[derive(Debug, Clone, Serialize)]
pub struct ModelBundle {
    /// Entity name (PascalCase).
    pub name: String,
    /// Directory the files belong under (kebab-case entity name).
    pub directory: String,
    /// Relative filename -> content, in generation order.
    pub files: IndexMap<String, String>,
    /// Every symbol the bundle exports.
    pub exports: Vec<String>,
}

impl ModelBundle {
    /// Reporting metadata over the whole bundle.
    pub fn meta(&self) -> OutputMeta {
        OutputMeta {
            file_count: self.files.len(),
            line_count: self.files.values().map(|c| c.lines().count()).sum(),
        }
    }
}

/// Result of generating several models in one run.
#[derive(Debug, Default)]
pub struct GenerationRun {
    pub bundles: Vec<ModelBundle>,
    /// Per-model failures, by model name. Never paired with partial
    /// output for the same model.
    pub failures: Vec<(String, Box<Error>)>,
}

impl GenerationRun {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Generate every artifact for one model.
///
/// The context - and with it the feature resolution - is built once and
/// shared, so the artifacts cannot disagree about conditional symbols.
/// Any error aborts the whole model with no partial output.
pub fn generate_model(model: &ParsedModel, config: &Configuration) -> Result<ModelBundle> {
    let ctx = GeneratorContext::new(model, config)?;

    let generators: [&dyn ArtifactGenerator; 4] = [
        &DtoGenerator,
        &ValidatorGenerator,
        &ServiceGenerator,
        &ControllerGenerator,
    ];

    let mut outputs = Vec::with_capacity(generators.len() + 1);
    for generator in generators {
        outputs.push(generator.generate(&ctx)?);
    }
    let barrel = barrel::aggregate(&ctx, &outputs);
    outputs.push(barrel);

    let mut files = IndexMap::new();
    let mut exports = Vec::new();
    for output in &outputs {
        for (name, content) in &output.files {
            files.insert(name.clone(), content.clone());
        }
        exports.extend(output.exports.iter().cloned());
    }

    Ok(ModelBundle {
        name: ctx.names.pascal.clone(),
        directory: ctx.names.kebab.clone(),
        files,
        exports,
    })
}

/// Generate every model independently.
///
/// Models do not share mutable state; a failing model is recorded and
/// its siblings keep generating.
pub fn generate_all(models: &[ParsedModel], config: &Configuration) -> GenerationRun {
    let mut run = GenerationRun::default();
    for model in models {
        match generate_model(model, config) {
            Ok(bundle) => run.bundles.push(bundle),
            Err(err) => run.failures.push((model.name.clone(), err)),
        }
    }
    run
}
