//! Resolved feature gates for one `(model, configuration)` pair.

use mochi_ir::ParsedModel;

use crate::config::Configuration;
use crate::error::{Error, Result};

/// The single source of truth for conditional generation.
///
/// Computed exactly once per `(model, configuration)` pair and shared by
/// reference with every generator invoked in that run. Generators must
/// gate optional symbols on these booleans and nothing else - never on
/// the raw configuration or the model flags - so artifacts generated
/// independently can never disagree about which symbols exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureResolution {
    /// The service exposes `findBySlug` and the controller routes to it.
    pub slug_lookup: bool,
    /// The service exposes `publish`/`unpublish` and the controller
    /// routes to them.
    pub domain_methods: bool,
    /// Batch create schema, service method, and endpoint are generated.
    pub bulk_operations: bool,
    /// Upper bound enforced by the batch validation schema.
    pub max_batch_size: u32,
}

impl FeatureResolution {
    /// Derive the feature set for a model under a configuration.
    pub fn resolve(model: &ParsedModel, config: &Configuration) -> Result<Self> {
        if config.max_batch_size == 0 {
            return Err(Error::configuration(
                "max_batch_size must be a positive integer",
            ));
        }
        Ok(Self {
            slug_lookup: model.has_slug_field(),
            domain_methods: config.enable_domain_methods && model.has_published_field(),
            bulk_operations: config.enable_bulk_operations,
            max_batch_size: config.max_batch_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use mochi_ir::{FieldType, ParsedField};

    use super::*;

    fn model(published: bool) -> ParsedModel {
        let mut fields = vec![
            ParsedField::id("id", FieldType::Int),
            ParsedField::new("title", FieldType::String),
        ];
        if published {
            fields.push(ParsedField::new("published", FieldType::Boolean).with_default());
        }
        ParsedModel::new("Post", fields)
    }

    #[test]
    fn domain_methods_need_model_and_config() {
        let config = Configuration::default();
        assert!(FeatureResolution::resolve(&model(true), &config).unwrap().domain_methods);
        assert!(!FeatureResolution::resolve(&model(false), &config).unwrap().domain_methods);

        let disabled = Configuration {
            enable_domain_methods: false,
            ..Configuration::default()
        };
        assert!(!FeatureResolution::resolve(&model(true), &disabled).unwrap().domain_methods);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = Configuration {
            max_batch_size: 0,
            ..Configuration::default()
        };
        let err = FeatureResolution::resolve(&model(false), &config).unwrap_err();
        assert!(matches!(*err, Error::Configuration { .. }));
    }
}
