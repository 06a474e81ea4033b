//! Request validation schema generator (zod).
//!
//! Emits one validator file per model exposing exactly the three schemas
//! the controller depends on - create, update, query - plus the single
//! batch schema when bulk operations are enabled. Accepted shapes mirror
//! the DTO contracts field for field.

use mochi_ir::FieldType;

use crate::ast::Import;
use crate::builder::CodeFragment;
use crate::code_file::CodeFile;
use crate::context::GeneratorContext;
use crate::error::Result;
use crate::output::GeneratorOutput;
use crate::type_map::{filter_operators, zod_type};

use super::ArtifactGenerator;

pub struct ValidatorGenerator;

impl ArtifactGenerator for ValidatorGenerator {
    fn kind(&self) -> &'static str {
        "validator"
    }

    fn generate(&self, ctx: &GeneratorContext) -> Result<GeneratorOutput> {
        let mut output = GeneratorOutput::new();

        let create_name = ctx.names.schema_value("create");
        let update_name = ctx.names.schema_value("update");
        let query_name = ctx.names.schema_value("query");

        let mut file = CodeFile::new();
        let zod_import = Import::new("zod").named("z");
        output.push_import(zod_import.spec());
        file = file.import(zod_import);
        if let Some(import) = enum_value_import(ctx) {
            output.push_import(import.spec());
            file = file.import(import);
        }

        file = file.add(vec![CodeFragment::line(
            "const sortOrder = z.enum([\"asc\", \"desc\"]);",
        )]);

        file = file.add(self.create_schema(ctx, &create_name)?);
        output.push_export(create_name);

        file = file.add(self.update_schema(ctx, &update_name)?);
        output.push_export(update_name);

        file = file.add(self.query_schema(ctx, &query_name)?);
        output.push_export(query_name);

        if ctx.features.bulk_operations {
            let bulk_name = ctx.names.schema_value("bulkCreate");
            file = file.add(self.bulk_schema(ctx, &bulk_name));
            output.push_export(bulk_name);
        }

        output.push_file(ctx.names.artifact_file("validator"), file.render());
        Ok(output)
    }
}

impl ValidatorGenerator {
    fn create_schema(&self, ctx: &GeneratorContext, name: &str) -> Result<Vec<CodeFragment>> {
        let mut entries = Vec::new();
        for field in ctx.model.create_fields() {
            let mut schema = zod_type(&ctx.model.name, field)?;
            if field.optional_for_create() {
                schema.push_str(".optional()");
            }
            entries.push(CodeFragment::Line(format!("{}: {},", field.name, schema)));
        }
        Ok(vec![CodeFragment::Block {
            header: format!("export const {} = z.object({{", name),
            body: entries,
            close: Some("});".to_string()),
        }])
    }

    fn update_schema(&self, ctx: &GeneratorContext, name: &str) -> Result<Vec<CodeFragment>> {
        let mut entries = Vec::new();
        for field in ctx.model.update_fields() {
            let schema = zod_type(&ctx.model.name, field)?;
            entries.push(CodeFragment::Line(format!(
                "{}: {}.optional(),",
                field.name, schema
            )));
        }
        Ok(vec![CodeFragment::Block {
            header: format!("export const {} = z.object({{", name),
            body: entries,
            close: Some("});".to_string()),
        }])
    }

    fn query_schema(&self, ctx: &GeneratorContext, name: &str) -> Result<Vec<CodeFragment>> {
        let scalars = ctx.model.scalar_fields();
        let relations = ctx.model.relation_fields();

        let mut body = vec![
            CodeFragment::line("skip: z.coerce.number().int().min(0).optional(),"),
            CodeFragment::line("take: z.coerce.number().int().min(1).optional(),"),
        ];

        let mut order_entries = Vec::new();
        for field in &scalars {
            order_entries.push(CodeFragment::Line(format!(
                "{}: sortOrder.optional(),",
                field.name
            )));
        }
        for field in &relations {
            order_entries.push(CodeFragment::Line(format!(
                "{}: z.record(sortOrder).optional(),",
                field.name
            )));
        }
        body.push(CodeFragment::Block {
            header: "orderBy: z.object({".to_string(),
            body: order_entries,
            close: Some("}).optional(),".to_string()),
        });

        let mut where_entries = Vec::new();
        for field in &scalars {
            let value = zod_type(&ctx.model.name, field)?;
            let ops = filter_operators(&field.ty)
                .iter()
                .map(|op| format!("{}: {}.optional()", op, value))
                .collect::<Vec<_>>()
                .join(", ");
            where_entries.push(CodeFragment::Line(format!(
                "{}: z.object({{ {} }}).optional(),",
                field.name, ops
            )));
        }
        body.push(CodeFragment::Block {
            header: "where: z.object({".to_string(),
            body: where_entries,
            close: Some("}).optional(),".to_string()),
        });

        if !relations.is_empty() {
            let include_entries = relations
                .iter()
                .map(|field| CodeFragment::Line(format!("{}: z.boolean().optional(),", field.name)))
                .collect();
            body.push(CodeFragment::Block {
                header: "include: z.object({".to_string(),
                body: include_entries,
                close: Some("}).optional(),".to_string()),
            });
        }

        let select_entries = ctx
            .model
            .fields
            .iter()
            .map(|field| CodeFragment::Line(format!("{}: z.boolean().optional(),", field.name)))
            .collect();
        body.push(CodeFragment::Block {
            header: "select: z.object({".to_string(),
            body: select_entries,
            close: Some("}).optional(),".to_string()),
        });

        Ok(vec![CodeFragment::Block {
            header: format!("export const {} = z.object({{", name),
            body,
            close: Some("});".to_string()),
        }])
    }

    fn bulk_schema(&self, ctx: &GeneratorContext, name: &str) -> Vec<CodeFragment> {
        vec![
            CodeFragment::JsDoc(format!(
                "Batch create payload, bounded at {} items.",
                ctx.features.max_batch_size
            )),
            CodeFragment::Line(format!(
                "export const {} = z.array({}).min(1).max({});",
                name,
                ctx.names.schema_value("create"),
                ctx.features.max_batch_size
            )),
        ]
    }
}

/// Runtime import of named enums (`z.nativeEnum` needs the value).
fn enum_value_import(ctx: &GeneratorContext) -> Option<Import> {
    let mut names: Vec<String> = Vec::new();
    for field in ctx.model.scalar_fields() {
        if let FieldType::Enum(name) = &field.ty
            && !names.contains(name)
        {
            names.push(name.clone());
        }
    }
    if names.is_empty() {
        return None;
    }
    Some(Import::new("../enums").named_all(names))
}

#[cfg(test)]
mod tests {
    use mochi_ir::{ParsedField, ParsedModel};

    use crate::config::Configuration;

    use super::*;

    fn article() -> ParsedModel {
        ParsedModel::new(
            "Article",
            vec![
                ParsedField::id("id", FieldType::Int),
                ParsedField::new("title", FieldType::String),
                ParsedField::new("summary", FieldType::String).optional(),
                ParsedField::new("publishedAt", FieldType::DateTime).optional(),
            ],
        )
    }

    fn generate(model: &ParsedModel, config: &Configuration) -> GeneratorOutput {
        let ctx = GeneratorContext::new(model, config).unwrap();
        ValidatorGenerator.generate(&ctx).unwrap()
    }

    #[test]
    fn create_schema_mirrors_create_contract() {
        let output = generate(&article(), &Configuration::default());
        let content = &output.files["article.validator.ts"];
        assert!(content.contains("import { z } from \"zod\";"));
        assert!(content.contains("title: z.string(),"));
        assert!(content.contains("summary: z.string().optional(),"));
        assert!(content.contains("publishedAt: z.coerce.date().optional(),"));
    }

    #[test]
    fn update_schema_is_fully_optional() {
        let output = generate(&article(), &Configuration::default());
        let content = &output.files["article.validator.ts"];
        assert!(content.contains("export const updateArticleSchema = z.object({"));
        assert!(content.contains("title: z.string().optional(),"));
    }

    #[test]
    fn bulk_schema_is_gated_and_bounded() {
        let config = Configuration {
            max_batch_size: 25,
            ..Configuration::default()
        };
        let output = generate(&article(), &config);
        let content = &output.files["article.validator.ts"];
        assert!(content.contains(
            "export const bulkCreateArticleSchema = z.array(createArticleSchema).min(1).max(25);"
        ));
        assert!(output.exports.contains(&"bulkCreateArticleSchema".to_string()));

        let disabled = Configuration {
            enable_bulk_operations: false,
            ..Configuration::default()
        };
        let output = generate(&article(), &disabled);
        let content = &output.files["article.validator.ts"];
        assert!(!content.contains("bulkCreate"));
        assert_eq!(output.exports.len(), 3);
    }

    #[test]
    fn query_schema_covers_pagination_and_filters() {
        let output = generate(&article(), &Configuration::default());
        let content = &output.files["article.validator.ts"];
        assert!(content.contains("skip: z.coerce.number().int().min(0).optional(),"));
        assert!(content.contains(
            "title: z.object({ equals: z.string().optional(), contains: z.string().optional(), startsWith: z.string().optional(), endsWith: z.string().optional() }).optional(),"
        ));
        assert!(content.contains("id: sortOrder.optional(),"));
    }
}
