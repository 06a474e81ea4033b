//! Generation-time error taxonomy.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations (boxed to keep the Ok path small).
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while deriving artifacts for one model.
///
/// All variants are fatal for the affected model: no partial file is ever
/// produced. Other models in the same run are unaffected, and generation
/// is deterministic, so nothing here is retryable.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The configuration requests something the generator cannot honor.
    #[error("unsupported configuration: {message}")]
    #[diagnostic(help(
        "supported frameworks are 'express' and 'fastify'; composite identifier keys are not supported"
    ))]
    Configuration { message: String },

    /// A field's type has no representation in the target language.
    #[error("field '{field}' on model '{model}' has no target representation for type '{ty}'")]
    #[diagnostic(help("supported field types: string, int, bigint, uuid, cuid, float, boolean, datetime, enum:<Name>, relation:<Entity>"))]
    TypeMapping {
        model: String,
        field: String,
        ty: String,
    },

    /// A model fails a structural precondition.
    #[error("model '{model}' failed validation: {message}")]
    Validation { model: String, message: String },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Configuration {
            message: message.into(),
        })
    }

    pub fn type_mapping(
        model: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::TypeMapping {
            model: model.into(),
            field: field.into(),
            ty: ty.into(),
        })
    }

    pub fn validation(model: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Validation {
            model: model.into(),
            message: message.into(),
        })
    }
}
