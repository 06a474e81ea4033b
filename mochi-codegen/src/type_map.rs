//! Mapping from semantic field types to target representations.

use mochi_ir::{FieldType, ParsedField};

use crate::error::{Error, Result};

/// TypeScript type for a scalar field.
///
/// Relation fields never reach this mapper (they are materialized through
/// `include`, not inline); asking for one is reported the same way as an
/// unknown type, naming the field and model.
pub fn ts_type(model: &str, field: &ParsedField) -> Result<String> {
    let mapped = match &field.ty {
        FieldType::String | FieldType::Uuid | FieldType::Cuid => "string".to_string(),
        FieldType::Int | FieldType::Float => "number".to_string(),
        FieldType::BigInt => "bigint".to_string(),
        FieldType::Boolean => "boolean".to_string(),
        FieldType::DateTime => "Date".to_string(),
        FieldType::Enum(name) => name.clone(),
        FieldType::Relation(_) | FieldType::Unsupported(_) => {
            return Err(Error::type_mapping(model, &field.name, field.ty.to_string()));
        }
    };
    Ok(mapped)
}

/// zod schema expression for a scalar field, without optionality.
pub fn zod_type(model: &str, field: &ParsedField) -> Result<String> {
    let mapped = match &field.ty {
        FieldType::String => "z.string()".to_string(),
        FieldType::Uuid => "z.string().uuid()".to_string(),
        FieldType::Cuid => "z.string().cuid()".to_string(),
        FieldType::Int => "z.number().int()".to_string(),
        FieldType::BigInt => "z.coerce.bigint()".to_string(),
        FieldType::Float => "z.number()".to_string(),
        FieldType::Boolean => "z.boolean()".to_string(),
        FieldType::DateTime => "z.coerce.date()".to_string(),
        FieldType::Enum(name) => format!("z.nativeEnum({})", name),
        FieldType::Relation(_) | FieldType::Unsupported(_) => {
            return Err(Error::type_mapping(model, &field.name, field.ty.to_string()));
        }
    };
    Ok(mapped)
}

/// Filter operators offered for free-text string fields.
pub const STRING_OPERATORS: &[&str] = &["equals", "contains", "startsWith", "endsWith"];
/// Filter operators offered for ordered (numeric/date) fields.
pub const RANGE_OPERATORS: &[&str] = &["equals", "gt", "gte", "lt", "lte"];
/// Fallback for types with no richer entry in the table.
pub const EQUALITY_OPERATOR: &[&str] = &["equals"];

/// The per-type filter operator table for query `where` structures.
///
/// Closed over [`FieldType`]: adding a scalar type forces a decision here
/// and nowhere else.
pub fn filter_operators(ty: &FieldType) -> &'static [&'static str] {
    match ty {
        FieldType::String => STRING_OPERATORS,
        FieldType::Int | FieldType::BigInt | FieldType::Float | FieldType::DateTime => {
            RANGE_OPERATORS
        }
        // Identifier-shaped strings are matched exactly, never searched.
        FieldType::Uuid | FieldType::Cuid => EQUALITY_OPERATOR,
        FieldType::Boolean | FieldType::Enum(_) => EQUALITY_OPERATOR,
        // Unreachable in practice: these fail type mapping before any
        // filter is built.
        FieldType::Relation(_) | FieldType::Unsupported(_) => EQUALITY_OPERATOR,
    }
}

#[cfg(test)]
mod tests {
    use mochi_ir::ParsedField;

    use super::*;

    #[test]
    fn scalar_ts_types() {
        let cases = [
            (FieldType::String, "string"),
            (FieldType::Uuid, "string"),
            (FieldType::Int, "number"),
            (FieldType::BigInt, "bigint"),
            (FieldType::Float, "number"),
            (FieldType::Boolean, "boolean"),
            (FieldType::DateTime, "Date"),
        ];
        for (ty, expected) in cases {
            let field = ParsedField::new("f", ty);
            assert_eq!(ts_type("Post", &field).unwrap(), expected);
        }
    }

    #[test]
    fn enum_maps_to_its_name() {
        let field = ParsedField::new("role", FieldType::Enum("Role".into()));
        assert_eq!(ts_type("User", &field).unwrap(), "Role");
        assert_eq!(zod_type("User", &field).unwrap(), "z.nativeEnum(Role)");
    }

    #[test]
    fn unsupported_type_names_the_field() {
        let field = ParsedField::new("payload", FieldType::Unsupported("json".into()));
        let err = ts_type("Event", &field).unwrap_err();
        match *err {
            Error::TypeMapping { model, field, ty } => {
                assert_eq!(model, "Event");
                assert_eq!(field, "payload");
                assert_eq!(ty, "json");
            }
            other => panic!("expected TypeMapping, got {:?}", other),
        }
    }

    #[test]
    fn relation_is_not_a_scalar() {
        let field = ParsedField::new("author", FieldType::Relation("Author".into()));
        assert!(ts_type("Post", &field).is_err());
        assert!(zod_type("Post", &field).is_err());
    }

    #[test]
    fn operator_table() {
        assert_eq!(filter_operators(&FieldType::String), STRING_OPERATORS);
        assert_eq!(filter_operators(&FieldType::Int), RANGE_OPERATORS);
        assert_eq!(filter_operators(&FieldType::DateTime), RANGE_OPERATORS);
        assert_eq!(filter_operators(&FieldType::Boolean), EQUALITY_OPERATOR);
        assert_eq!(filter_operators(&FieldType::Uuid), EQUALITY_OPERATOR);
        assert_eq!(
            filter_operators(&FieldType::Enum("Role".into())),
            EQUALITY_OPERATOR
        );
    }
}
