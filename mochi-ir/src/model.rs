//! The normalized entity model and its derived views.

use serde::{Deserialize, Serialize};

use crate::field::{FieldType, ParsedField};

/// One entity's normalized description.
///
/// `fields` is the master list; every partition and feature flag below is
/// recomputed from it on each call. Nothing here is independently settable,
/// so two generators consulting the same model always observe the same
/// answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedModel {
    /// Entity name as declared in the schema (e.g. "Post").
    pub name: String,
    /// Ordered master field list.
    pub fields: Vec<ParsedField>,
}

impl ParsedModel {
    pub fn new(name: impl Into<String>, fields: Vec<ParsedField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Fields a client may supply when creating the entity.
    ///
    /// Identifiers, update timestamps, read-only fields, and relations are
    /// server-managed and excluded.
    pub fn create_fields(&self) -> Vec<&ParsedField> {
        self.fields
            .iter()
            .filter(|f| !f.is_id && !f.is_updated_at && !f.is_read_only && f.ty.is_scalar())
            .collect()
    }

    /// Fields a client may supply when updating the entity.
    ///
    /// Same set as [`Self::create_fields`]; the update contract makes every
    /// entry optional regardless of required-ness.
    pub fn update_fields(&self) -> Vec<&ParsedField> {
        self.create_fields()
    }

    /// Fields present when reading the entity back.
    pub fn read_fields(&self) -> Vec<&ParsedField> {
        self.fields.iter().filter(|f| f.ty.is_scalar()).collect()
    }

    /// Every non-relation field, identifiers included.
    pub fn scalar_fields(&self) -> Vec<&ParsedField> {
        self.fields.iter().filter(|f| f.ty.is_scalar()).collect()
    }

    /// Every relation field.
    pub fn relation_fields(&self) -> Vec<&ParsedField> {
        self.fields.iter().filter(|f| f.ty.is_relation()).collect()
    }

    /// All fields flagged as identifiers.
    ///
    /// A well-formed model has exactly one; validation of that invariant
    /// belongs to the generator context, which can report a proper error.
    pub fn id_fields(&self) -> Vec<&ParsedField> {
        self.fields.iter().filter(|f| f.is_id).collect()
    }

    /// The model has a string field named `slug`.
    pub fn has_slug_field(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.name == "slug" && f.ty == FieldType::String)
    }

    /// The model has a boolean field named `published`.
    pub fn has_published_field(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.name == "published" && f.ty == FieldType::Boolean)
    }

    /// The model carries an auto-maintained update timestamp.
    pub fn has_timestamps(&self) -> bool {
        self.fields.iter().any(|f| f.is_updated_at)
    }
}
