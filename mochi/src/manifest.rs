//! `mochi.toml` manifest loading.
//!
//! The manifest is the thin glue between the operator's schema file and
//! the normalized models the core consumes. Field order in the file is
//! the field order in the generated contracts.

use std::{fs, path::Path};

use eyre::{Context, Result};
use indexmap::IndexMap;
use mochi_codegen::Configuration;
use mochi_core::to_pascal_case;
use mochi_ir::{FieldType, ParsedField, ParsedModel};
use serde::Deserialize;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    config: Configuration,
    #[serde(default)]
    models: IndexMap<String, ModelSpec>,
}

#[derive(Debug, Deserialize)]
struct ModelSpec {
    fields: IndexMap<String, FieldSpec>,
}

#[derive(Debug, Deserialize)]
struct FieldSpec {
    #[serde(rename = "type")]
    ty: FieldType,
    #[serde(default = "default_true")]
    required: bool,
    #[serde(default)]
    read_only: bool,
    #[serde(default)]
    updated_at: bool,
    #[serde(default)]
    id: bool,
    #[serde(default)]
    has_default: bool,
}

/// A loaded manifest: run configuration plus the models to generate.
#[derive(Debug)]
pub struct Manifest {
    pub config: Configuration,
    pub models: Vec<ParsedModel>,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Self::parse(&raw).wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }

    /// Parse manifest text.
    pub fn parse(raw: &str) -> Result<Self> {
        let file: ManifestFile = toml::from_str(raw)?;

        let models = file
            .models
            .into_iter()
            .map(|(name, spec)| {
                let fields = spec
                    .fields
                    .into_iter()
                    .map(|(field_name, field)| ParsedField {
                        name: field_name,
                        ty: field.ty,
                        is_required: field.required,
                        is_read_only: field.read_only || field.updated_at,
                        is_updated_at: field.updated_at,
                        is_id: field.id,
                        has_default: field.has_default || field.id,
                    })
                    .collect();
                ParsedModel::new(to_pascal_case(&name), fields)
            })
            .collect();

        Ok(Self {
            config: file.config,
            models,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
        [config]
        framework = "fastify"
        max_batch_size = 50

        [models.blog_post.fields.id]
        type = "int"
        id = true

        [models.blog_post.fields.title]
        type = "string"

        [models.blog_post.fields.summary]
        type = "string"
        required = false

        [models.blog_post.fields.updated_at]
        type = "datetime"
        updated_at = true
    "#;

    #[test]
    fn parses_config_and_models() {
        let manifest = Manifest::parse(EXAMPLE).unwrap();
        assert_eq!(manifest.config.framework, "fastify");
        assert_eq!(manifest.config.max_batch_size, 50);
        assert_eq!(manifest.models.len(), 1);

        let model = &manifest.models[0];
        assert_eq!(model.name, "BlogPost");
        let names: Vec<_> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "title", "summary", "updated_at"]);
    }

    #[test]
    fn field_flags_carry_over() {
        let manifest = Manifest::parse(EXAMPLE).unwrap();
        let model = &manifest.models[0];

        let id = &model.fields[0];
        assert!(id.is_id);
        assert!(id.has_default);

        let summary = &model.fields[2];
        assert!(!summary.is_required);

        let updated = &model.fields[3];
        assert!(updated.is_updated_at);
        assert!(updated.is_read_only);
    }

    #[test]
    fn missing_config_uses_defaults() {
        let manifest = Manifest::parse(
            r#"
            [models.tag.fields.id]
            type = "int"
            id = true
            "#,
        )
        .unwrap();
        assert_eq!(manifest.config.framework, "express");
        assert!(manifest.config.enable_bulk_operations);
    }

    #[test]
    fn unknown_field_type_survives_to_generation() {
        let manifest = Manifest::parse(
            r#"
            [models.event.fields.id]
            type = "int"
            id = true

            [models.event.fields.payload]
            type = "json"
            "#,
        )
        .unwrap();
        assert_eq!(
            manifest.models[0].fields[1].ty,
            FieldType::Unsupported("json".to_string())
        );
    }
}
