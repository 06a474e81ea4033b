//! Field types and the per-field model description.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Semantic type of an entity field.
///
/// This is the backend-agnostic representation handed over by the schema
/// parser. Target-specific renderings (TypeScript types, zod schemas) are
/// the code generator's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Int,
    BigInt,
    /// UUID-shaped string identifier.
    Uuid,
    /// CUID-shaped string identifier.
    Cuid,
    Float,
    Boolean,
    DateTime,
    /// Named enum whose definition lives outside the generated module.
    Enum(String),
    /// Relation to another entity, by entity name.
    Relation(String),
    /// A parser-level type with no known target representation.
    ///
    /// Kept instead of rejected at parse time so that generation can fail
    /// with the offending field and model in the error message.
    Unsupported(String),
}

impl FieldType {
    /// Parse the schema-level spelling of a field type.
    ///
    /// Unrecognized spellings become [`FieldType::Unsupported`] rather than
    /// an error; the type mapper reports them when an artifact actually
    /// needs a target representation.
    pub fn parse(s: &str) -> Self {
        if let Some(name) = s.strip_prefix("enum:") {
            return FieldType::Enum(name.to_string());
        }
        if let Some(target) = s.strip_prefix("relation:") {
            return FieldType::Relation(target.to_string());
        }
        match s {
            "string" => FieldType::String,
            "int" => FieldType::Int,
            "bigint" => FieldType::BigInt,
            "uuid" => FieldType::Uuid,
            "cuid" => FieldType::Cuid,
            "float" => FieldType::Float,
            "boolean" | "bool" => FieldType::Boolean,
            "datetime" => FieldType::DateTime,
            other => FieldType::Unsupported(other.to_string()),
        }
    }

    /// True for relation fields.
    pub fn is_relation(&self) -> bool {
        matches!(self, FieldType::Relation(_))
    }

    /// True for every non-relation field.
    pub fn is_scalar(&self) -> bool {
        !self.is_relation()
    }

    /// True for fields represented as strings in the target.
    pub fn is_string_like(&self) -> bool {
        matches!(self, FieldType::String | FieldType::Uuid | FieldType::Cuid)
    }

    /// True for numeric fields.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Int | FieldType::BigInt | FieldType::Float)
    }

    /// True for date/time fields.
    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldType::DateTime)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Int => write!(f, "int"),
            FieldType::BigInt => write!(f, "bigint"),
            FieldType::Uuid => write!(f, "uuid"),
            FieldType::Cuid => write!(f, "cuid"),
            FieldType::Float => write!(f, "float"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::DateTime => write!(f, "datetime"),
            FieldType::Enum(name) => write!(f, "enum:{}", name),
            FieldType::Relation(target) => write!(f, "relation:{}", target),
            FieldType::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FieldType::parse(&raw))
    }
}

fn default_true() -> bool {
    true
}

/// One entity field as handed over by the schema parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedField {
    /// Field identifier in the source schema.
    pub name: String,
    /// Semantic field type.
    #[serde(rename = "type")]
    pub ty: FieldType,
    /// Whether the field must be present on create.
    #[serde(default = "default_true")]
    pub is_required: bool,
    /// Server-managed field, never writable by clients.
    #[serde(default)]
    pub is_read_only: bool,
    /// Auto-maintained update timestamp.
    #[serde(default)]
    pub is_updated_at: bool,
    /// Primary identifier field.
    #[serde(default)]
    pub is_id: bool,
    /// Whether the store fills in a value when none is supplied.
    #[serde(default)]
    pub has_default: bool,
}

impl ParsedField {
    /// Create a required, writable field.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_required: true,
            is_read_only: false,
            is_updated_at: false,
            is_id: false,
            has_default: false,
        }
    }

    /// Create an identifier field of the given type.
    pub fn id(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            is_id: true,
            has_default: true,
            ..Self::new(name, ty)
        }
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the field as read-only.
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    /// Mark the field as an auto-maintained update timestamp.
    pub fn updated_at(mut self) -> Self {
        self.is_updated_at = true;
        self.is_read_only = true;
        self
    }

    /// Mark the field as carrying a server-side default.
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Whether a create payload may omit this field.
    ///
    /// Server defaults count as optional even when the column itself is
    /// required: the store fills in the value.
    pub fn optional_for_create(&self) -> bool {
        !self.is_required || self.has_default
    }
}
