//! Generation-time error taxonomy: fatal per model, no partial output,
//! siblings unaffected.

use mochi_codegen::generators::{generate_all, generate_model};
use mochi_codegen::{Configuration, Error};
use mochi_ir::{FieldType, ParsedField, ParsedModel};

fn valid_model() -> ParsedModel {
    ParsedModel::new(
        "Post",
        vec![
            ParsedField::id("id", FieldType::Int),
            ParsedField::new("title", FieldType::String),
        ],
    )
}

#[test]
fn unknown_framework_is_a_configuration_error() {
    let config = Configuration {
        framework: "koa".to_string(),
        ..Configuration::default()
    };
    let err = generate_model(&valid_model(), &config).unwrap_err();
    match *err {
        Error::Configuration { message } => assert!(message.contains("koa")),
        other => panic!("expected Configuration, got {:?}", other),
    }
}

#[test]
fn composite_identifier_is_hard_rejected() {
    let model = ParsedModel::new(
        "Membership",
        vec![
            ParsedField::id("userId", FieldType::Int),
            ParsedField::id("groupId", FieldType::Int),
        ],
    );
    let err = generate_model(&model, &Configuration::default()).unwrap_err();
    match *err {
        Error::Configuration { message } => assert!(message.contains("composite")),
        other => panic!("expected Configuration, got {:?}", other),
    }
}

#[test]
fn missing_identifier_is_a_validation_error() {
    let model = ParsedModel::new("Tag", vec![ParsedField::new("label", FieldType::String)]);
    let err = generate_model(&model, &Configuration::default()).unwrap_err();
    assert!(matches!(*err, Error::Validation { .. }));
}

#[test]
fn unsupported_field_type_names_model_and_field() {
    let model = ParsedModel::new(
        "Event",
        vec![
            ParsedField::id("id", FieldType::Int),
            ParsedField::new("payload", FieldType::Unsupported("json".into())),
        ],
    );
    let err = generate_model(&model, &Configuration::default()).unwrap_err();
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
fn zero_batch_size_is_rejected() {
    let config = Configuration {
        max_batch_size: 0,
        ..Configuration::default()
    };
    let err = generate_model(&valid_model(), &config).unwrap_err();
    assert!(matches!(*err, Error::Configuration { .. }));
}

#[test]
fn invalid_id_strategy_override_is_rejected() {
    let config = Configuration {
        id_strategy: Some("composite".to_string()),
        ..Configuration::default()
    };
    let err = generate_model(&valid_model(), &config).unwrap_err();
    assert!(matches!(*err, Error::Configuration { .. }));
}

#[test]
fn one_failing_model_does_not_abort_siblings() {
    let broken = ParsedModel::new(
        "Event",
        vec![
            ParsedField::id("id", FieldType::Int),
            ParsedField::new("payload", FieldType::Unsupported("json".into())),
        ],
    );
    let run = generate_all(&[valid_model(), broken, valid_model()], &Configuration::default());

    assert_eq!(run.bundles.len(), 2);
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].0, "Event");
    // the failed model produced nothing at all
    assert!(run.bundles.iter().all(|b| b.name == "Post"));
}
