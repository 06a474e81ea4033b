//! Shared context for one `(model, configuration)` pair.

use std::str::FromStr;

use mochi_ir::{IdKind, ParsedModel};

use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::features::FeatureResolution;
use crate::naming::EntityNames;
use crate::strategy::{FrameworkStrategy, strategy_for};

/// Everything a generator needs to know about one generation run.
///
/// Built once per `(model, configuration)` pair; every artifact generator
/// for that pair receives the same instance. Construction performs all
/// structural validation, so generators may assume a well-formed model:
/// exactly one identifier field of a supported kind, a recognized
/// framework, and a resolvable feature set.
pub struct GeneratorContext<'a> {
    pub model: &'a ParsedModel,
    pub config: &'a Configuration,
    pub names: EntityNames,
    /// Name of the single identifier field.
    pub id_name: String,
    pub id_kind: IdKind,
    pub strategy: &'static dyn FrameworkStrategy,
    pub features: FeatureResolution,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(model: &'a ParsedModel, config: &'a Configuration) -> Result<Self> {
        if model.name.trim().is_empty() {
            return Err(Error::validation("<unnamed>", "model name is empty"));
        }
        if model.fields.is_empty() {
            return Err(Error::validation(&model.name, "model has no fields"));
        }

        let id_fields = model.id_fields();
        let id_field = match id_fields.as_slice() {
            [] => {
                return Err(Error::validation(&model.name, "no identifier field"));
            }
            [single] => *single,
            composite => {
                let names = composite
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(Error::configuration(format!(
                    "model '{}' declares a composite identifier ({}); composite keys are not supported",
                    model.name, names
                )));
            }
        };

        let id_kind = match &config.id_strategy {
            Some(raw) => IdKind::from_str(raw).map_err(Error::configuration)?,
            None => IdKind::from_field_type(&id_field.ty).ok_or_else(|| {
                Error::validation(
                    &model.name,
                    format!(
                        "identifier field '{}' has type '{}'; expected int, bigint, uuid, or cuid (or set id_strategy)",
                        id_field.name, id_field.ty
                    ),
                )
            })?,
        };

        let framework = config.framework()?;
        let features = FeatureResolution::resolve(model, config)?;

        Ok(Self {
            model,
            config,
            names: EntityNames::new(&model.name),
            id_name: id_field.name.clone(),
            id_kind,
            strategy: strategy_for(framework),
            features,
        })
    }

    /// TypeScript type of the identifier as seen by service callers.
    pub fn id_ts_type(&self) -> &'static str {
        match self.id_kind {
            IdKind::Number => "number",
            IdKind::BigInt => "bigint",
            IdKind::Uuid | IdKind::Cuid => "string",
        }
    }

    /// zod schema expression for one identifier value.
    pub fn id_zod_type(&self) -> &'static str {
        match self.id_kind {
            IdKind::Number => "z.number().int()",
            IdKind::BigInt => "z.coerce.bigint()",
            IdKind::Uuid => "z.string().uuid()",
            IdKind::Cuid => "z.string().cuid()",
        }
    }
}

impl std::fmt::Debug for GeneratorContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorContext")
            .field("model", &self.model)
            .field("config", &self.config)
            .field("names", &self.names)
            .field("id_name", &self.id_name)
            .field("id_kind", &self.id_kind)
            .field("strategy", &self.strategy.framework())
            .field("features", &self.features)
            .finish()
    }
}
