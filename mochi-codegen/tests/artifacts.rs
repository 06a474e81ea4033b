//! Structure tests over the generated artifacts for a representative
//! model, plus exact-render snapshots for the small ones.

use mochi_codegen::Configuration;
use mochi_codegen::generators::{ModelBundle, generate_model};
use mochi_ir::{FieldType, ParsedField, ParsedModel};

fn blog_post() -> ParsedModel {
    ParsedModel::new(
        "Post",
        vec![
            ParsedField::id("id", FieldType::Int),
            ParsedField::new("title", FieldType::String),
            ParsedField::new("slug", FieldType::String),
            ParsedField::new("body", FieldType::String).optional(),
            ParsedField::new("published", FieldType::Boolean).with_default(),
            ParsedField::new("viewCount", FieldType::Int).with_default(),
            ParsedField::new("author", FieldType::Relation("Author".into())).optional(),
            ParsedField::new("createdAt", FieldType::DateTime).with_default().read_only(),
            ParsedField::new("updatedAt", FieldType::DateTime).updated_at(),
        ],
    )
}

fn generate(config: &Configuration) -> ModelBundle {
    generate_model(&blog_post(), config).unwrap()
}

fn section<'a>(content: &'a str, open: &str) -> &'a str {
    let start = content.find(open).expect("section not found");
    let rest = &content[start..];
    let end = rest.find("\n}").expect("section not closed");
    &rest[..end]
}

#[test]
fn create_contract_optionality() {
    let bundle = generate(&Configuration::default());
    let content = &bundle.files["post.create-dto.ts"];
    assert!(content.contains("title: string;"));
    assert!(content.contains("slug: string;"));
    assert!(content.contains("body?: string;"));
    // store defaults make required columns optional on create
    assert!(content.contains("published?: boolean;"));
    assert!(content.contains("viewCount?: number;"));
    // server-managed fields never appear
    assert!(!content.contains("createdAt"));
    assert!(!content.contains("updatedAt"));
    assert!(!content.contains("id:"));
}

#[test]
fn update_contract_is_total_partial() {
    let bundle = generate(&Configuration::default());
    let content = &bundle.files["post.update-dto.ts"];
    let body = section(content, "export interface UpdatePostDto {");
    for line in body.lines().skip(1) {
        assert!(
            line.contains("?:"),
            "update contract field is not optional: {}",
            line
        );
    }
}

#[test]
fn read_contract_tracks_requiredness() {
    let bundle = generate(&Configuration::default());
    let content = &bundle.files["post.read-dto.ts"];
    assert!(content.contains("id: number;"));
    assert!(content.contains("title: string;"));
    assert!(content.contains("body?: string;"));
    assert!(content.contains("createdAt: Date;"));
    // relations are reached through include, not inline
    assert!(!content.contains("author"));
}

#[test]
fn query_contract_structures() {
    let bundle = generate(&Configuration::default());
    let content = &bundle.files["post.query-dto.ts"];
    assert!(content.contains("skip?: number;"));
    assert!(content.contains("take?: number;"));
    assert!(content.contains(
        "title?: { equals?: string; contains?: string; startsWith?: string; endsWith?: string };"
    ));
    assert!(content.contains(
        "viewCount?: { equals?: number; gt?: number; gte?: number; lt?: number; lte?: number };"
    ));
    assert!(content.contains(
        "createdAt?: { equals?: Date; gt?: Date; gte?: Date; lt?: Date; lte?: Date };"
    ));
    assert!(content.contains("published?: { equals?: boolean };"));
    assert!(content.contains("author?: Record<string, SortOrder>;"));
    assert!(content.contains("include?: PostInclude;"));
    assert!(content.contains("items: PostDto[];"));
    assert!(content.contains("hasMore: boolean;"));
}

#[test]
fn list_pagination_metadata_rule() {
    let bundle = generate(&Configuration::default());
    let content = &bundle.files["post.service.ts"];
    assert!(content.contains("hasMore: skip + take < total"));

    // the emitted rule, evaluated at its boundary cases
    let has_more = |total: i64, skip: i64, take: i64| skip + take < total;
    assert!(!has_more(25, 20, 10));
    assert!(has_more(25, 0, 10));
}

#[test]
fn numeric_identifier_parsing_precedes_service_calls() {
    let bundle = generate(&Configuration::default());
    let content = &bundle.files["post.controller.ts"];
    assert!(content.contains("const id = Number(req.params.id);"));
    for invocation in [
        "postService.findById(id)",
        "postService.update(id, parsed.data)",
        "postService.delete(id)",
    ] {
        let guard = content.find("Number.isNaN(id)").unwrap();
        let call = content.find(invocation).unwrap();
        assert!(guard < call, "guard must precede {}", invocation);
    }
}

#[test]
fn not_found_policy() {
    let bundle = generate(&Configuration::default());
    let content = &bundle.files["post.controller.ts"];
    // get and update answer 404 on null, delete on false
    assert!(content.contains("if (post === null) {"));
    assert!(content.contains("if (updated === null) {"));
    assert!(content.contains("if (!deleted) {"));
    // list, create, and count never 404
    let list = section(content, "export async function listPost");
    let create = section(content, "export async function createPost");
    let count = section(content, "export async function countPost");
    for handler in [list, create, count] {
        assert!(!handler.contains("404"), "unexpected 404 in: {}", handler);
    }
}

#[test]
fn bigint_identifier_uses_integer_guard() {
    let model = ParsedModel::new(
        "Ledger",
        vec![ParsedField::id("id", FieldType::BigInt)],
    );
    let bundle = generate_model(&model, &Configuration::default()).unwrap();
    let content = &bundle.files["ledger.controller.ts"];
    assert!(content.contains("if (!/^-?\\d+$/.test(raw)) {"));
    assert!(content.contains("const id = BigInt(raw);"));
    assert!(!content.contains("Number.isNaN"));
}

#[test]
fn create_dto_snapshot() {
    let model = ParsedModel::new(
        "Tag",
        vec![
            ParsedField::id("id", FieldType::Int),
            ParsedField::new("label", FieldType::String),
        ],
    );
    let bundle = generate_model(&model, &Configuration::default()).unwrap();
    insta::assert_snapshot!(bundle.files["tag.create-dto.ts"], @r#"
    /** Payload accepted when creating a Tag. */
    export interface CreateTagDto {
      label: string;
    }
    "#);
}

#[test]
fn barrel_snapshot() {
    let bundle = generate(&Configuration::default());
    insta::assert_snapshot!(bundle.files["index.ts"], @r#"
    export * from "./post.create-dto";
    export * from "./post.update-dto";
    export * from "./post.read-dto";
    export * from "./post.query-dto";
    export * from "./post.validator";
    export * from "./post.service";
    export * from "./post.controller";
    "#);
}
