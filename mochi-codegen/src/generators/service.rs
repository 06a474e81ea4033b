//! Persistence-service stub generator.
//!
//! Emits one service file per model: a facade object over the Prisma
//! client exposing `list`, `findById`, `create`, `update`, `delete`, and
//! `count`, plus the feature-gated lookups and domain methods. `update`
//! and `delete` report absence with `null`/`false` instead of throwing,
//! so every controller 404 path reads the same way.

use crate::ast::Import;
use crate::builder::CodeFragment;
use crate::code_file::CodeFile;
use crate::context::GeneratorContext;
use crate::error::Result;
use crate::output::GeneratorOutput;

use super::ArtifactGenerator;

pub struct ServiceGenerator;

impl ArtifactGenerator for ServiceGenerator {
    fn kind(&self) -> &'static str {
        "service"
    }

    fn generate(&self, ctx: &GeneratorContext) -> Result<GeneratorOutput> {
        let mut output = GeneratorOutput::new();
        let pascal = &ctx.names.pascal;

        let imports = vec![
            Import::new("@prisma/client").named("PrismaClient"),
            Import::new(ctx.names.artifact_module("create-dto"))
                .named(format!("Create{}Dto", pascal))
                .type_only(),
            Import::new(ctx.names.artifact_module("update-dto"))
                .named(format!("Update{}Dto", pascal))
                .type_only(),
            Import::new(ctx.names.artifact_module("read-dto"))
                .named(format!("{}Dto", pascal))
                .type_only(),
            Import::new(ctx.names.artifact_module("query-dto"))
                .named(format!("{}QueryDto", pascal))
                .named(format!("{}ListResponse", pascal))
                .type_only(),
        ];

        let mut file = CodeFile::new();
        for import in imports {
            output.push_import(import.spec());
            file = file.import(import);
        }

        file = file.add(vec![CodeFragment::line("const prisma = new PrismaClient();")]);

        let mut body = Vec::new();
        push_method(&mut body, &self.list_method(ctx), false);
        push_method(&mut body, &self.find_by_id_method(ctx), true);
        if ctx.features.slug_lookup {
            push_method(&mut body, &self.find_by_slug_method(ctx), true);
        }
        push_method(&mut body, &self.create_method(ctx), true);
        push_method(&mut body, &self.update_method(ctx), true);
        push_method(&mut body, &self.delete_method(ctx), true);
        push_method(&mut body, &self.count_method(ctx), true);
        if ctx.features.domain_methods {
            push_method(&mut body, &self.set_published_method(ctx, "publish", true), true);
            push_method(
                &mut body,
                &self.set_published_method(ctx, "unpublish", false),
                true,
            );
        }
        if ctx.features.bulk_operations {
            push_method(&mut body, &self.create_many_method(ctx), true);
        }

        let service_name = ctx.names.service_value();
        file = file.add(vec![
            CodeFragment::JsDoc(format!("Persistence facade for {} rows.", pascal)),
            CodeFragment::Block {
                header: format!("export const {} = {{", service_name),
                body,
                close: Some("};".to_string()),
            },
        ]);

        output.push_file(ctx.names.artifact_file("service"), file.render());
        output.push_export(service_name);
        Ok(output)
    }
}

/// One facade method: signature header plus body lines.
struct Method {
    header: String,
    body: Vec<CodeFragment>,
}

fn push_method(dest: &mut Vec<CodeFragment>, method: &Method, separate: bool) {
    if separate {
        dest.push(CodeFragment::Blank);
    }
    dest.push(CodeFragment::Block {
        header: method.header.clone(),
        body: method.body.clone(),
        close: Some("},".to_string()),
    });
}

impl ServiceGenerator {
    fn list_method(&self, ctx: &GeneratorContext) -> Method {
        let pascal = &ctx.names.pascal;
        let accessor = prisma_accessor(ctx);

        let mut find_args = vec![
            CodeFragment::line("skip,"),
            CodeFragment::line("take,"),
            CodeFragment::line("where: query.where,"),
            CodeFragment::line("orderBy: query.orderBy,"),
        ];
        if !ctx.model.relation_fields().is_empty() {
            find_args.push(CodeFragment::line("include: query.include,"));
        }

        Method {
            header: format!(
                "async list(query: {}QueryDto): Promise<{}ListResponse> {{",
                pascal, pascal
            ),
            body: vec![
                CodeFragment::line("const skip = query.skip ?? 0;"),
                CodeFragment::line("const take = query.take ?? 20;"),
                CodeFragment::Block {
                    header: "const [items, total] = await Promise.all([".to_string(),
                    body: vec![
                        CodeFragment::Block {
                            header: format!("{}.findMany({{", accessor),
                            body: find_args,
                            close: Some("}),".to_string()),
                        },
                        CodeFragment::Line(format!("{}.count({{ where: query.where }}),", accessor)),
                    ],
                    close: Some("]);".to_string()),
                },
                CodeFragment::line(
                    "return { items, total, skip, take, hasMore: skip + take < total };",
                ),
            ],
        }
    }

    fn find_by_id_method(&self, ctx: &GeneratorContext) -> Method {
        Method {
            header: format!(
                "async findById(id: {}): Promise<{}Dto | null> {{",
                ctx.id_ts_type(),
                ctx.names.pascal
            ),
            body: vec![CodeFragment::Line(format!(
                "return {}.findUnique({{ where: {} }});",
                prisma_accessor(ctx),
                id_where(ctx)
            ))],
        }
    }

    fn find_by_slug_method(&self, ctx: &GeneratorContext) -> Method {
        Method {
            header: format!(
                "async findBySlug(slug: string): Promise<{}Dto | null> {{",
                ctx.names.pascal
            ),
            body: vec![CodeFragment::Line(format!(
                "return {}.findUnique({{ where: {{ slug }} }});",
                prisma_accessor(ctx)
            ))],
        }
    }

    fn create_method(&self, ctx: &GeneratorContext) -> Method {
        Method {
            header: format!(
                "async create(data: Create{}Dto): Promise<{}Dto> {{",
                ctx.names.pascal, ctx.names.pascal
            ),
            body: vec![CodeFragment::Line(format!(
                "return {}.create({{ data }});",
                prisma_accessor(ctx)
            ))],
        }
    }

    fn update_method(&self, ctx: &GeneratorContext) -> Method {
        let accessor = prisma_accessor(ctx);
        Method {
            header: format!(
                "async update(id: {}, data: Update{}Dto): Promise<{}Dto | null> {{",
                ctx.id_ts_type(),
                ctx.names.pascal,
                ctx.names.pascal
            ),
            body: vec![
                CodeFragment::Line(format!(
                    "const existing = await {}.findUnique({{ where: {} }});",
                    accessor,
                    id_where(ctx)
                )),
                CodeFragment::Block {
                    header: "if (existing === null) {".to_string(),
                    body: vec![CodeFragment::line("return null;")],
                    close: Some("}".to_string()),
                },
                CodeFragment::Line(format!(
                    "return {}.update({{ where: {}, data }});",
                    accessor,
                    id_where(ctx)
                )),
            ],
        }
    }

    fn delete_method(&self, ctx: &GeneratorContext) -> Method {
        let accessor = prisma_accessor(ctx);
        Method {
            header: format!("async delete(id: {}): Promise<boolean> {{", ctx.id_ts_type()),
            body: vec![
                CodeFragment::Line(format!(
                    "const existing = await {}.findUnique({{ where: {} }});",
                    accessor,
                    id_where(ctx)
                )),
                CodeFragment::Block {
                    header: "if (existing === null) {".to_string(),
                    body: vec![CodeFragment::line("return false;")],
                    close: Some("}".to_string()),
                },
                CodeFragment::Line(format!(
                    "await {}.delete({{ where: {} }});",
                    accessor,
                    id_where(ctx)
                )),
                CodeFragment::line("return true;"),
            ],
        }
    }

    fn count_method(&self, ctx: &GeneratorContext) -> Method {
        Method {
            header: "async count(): Promise<number> {".to_string(),
            body: vec![CodeFragment::Line(format!(
                "return {}.count();",
                prisma_accessor(ctx)
            ))],
        }
    }

    fn set_published_method(&self, ctx: &GeneratorContext, name: &str, value: bool) -> Method {
        let accessor = prisma_accessor(ctx);
        Method {
            header: format!(
                "async {}(id: {}): Promise<{}Dto | null> {{",
                name,
                ctx.id_ts_type(),
                ctx.names.pascal
            ),
            body: vec![
                CodeFragment::Line(format!(
                    "const existing = await {}.findUnique({{ where: {} }});",
                    accessor,
                    id_where(ctx)
                )),
                CodeFragment::Block {
                    header: "if (existing === null) {".to_string(),
                    body: vec![CodeFragment::line("return null;")],
                    close: Some("}".to_string()),
                },
                CodeFragment::Line(format!(
                    "return {}.update({{ where: {}, data: {{ published: {} }} }});",
                    accessor,
                    id_where(ctx),
                    value
                )),
            ],
        }
    }

    fn create_many_method(&self, ctx: &GeneratorContext) -> Method {
        Method {
            header: format!(
                "async createMany(data: Create{}Dto[]): Promise<number> {{",
                ctx.names.pascal
            ),
            body: vec![
                CodeFragment::Line(format!(
                    "const result = await {}.createMany({{ data }});",
                    prisma_accessor(ctx)
                )),
                CodeFragment::line("return result.count;"),
            ],
        }
    }
}

/// Prisma delegate for the entity (`prisma.blogPost`).
fn prisma_accessor(ctx: &GeneratorContext) -> String {
    format!("prisma.{}", ctx.names.camel)
}

/// Unique-where clause for the identifier field.
fn id_where(ctx: &GeneratorContext) -> String {
    if ctx.id_name == "id" {
        "{ id }".to_string()
    } else {
        format!("{{ {}: id }}", ctx.id_name)
    }
}

#[cfg(test)]
mod tests {
    use mochi_ir::{FieldType, ParsedField, ParsedModel};

    use crate::config::Configuration;

    use super::*;

    fn post() -> ParsedModel {
        ParsedModel::new(
            "Post",
            vec![
                ParsedField::id("id", FieldType::Int),
                ParsedField::new("title", FieldType::String),
                ParsedField::new("slug", FieldType::String),
                ParsedField::new("published", FieldType::Boolean).with_default(),
            ],
        )
    }

    fn generate(model: &ParsedModel, config: &Configuration) -> GeneratorOutput {
        let ctx = GeneratorContext::new(model, config).unwrap();
        ServiceGenerator.generate(&ctx).unwrap()
    }

    #[test]
    fn exposes_the_base_facade() {
        let output = generate(&post(), &Configuration::default());
        let content = &output.files["post.service.ts"];
        for method in [
            "async list(query: PostQueryDto)",
            "async findById(id: number)",
            "async create(data: CreatePostDto)",
            "async update(id: number, data: UpdatePostDto)",
            "async delete(id: number): Promise<boolean>",
            "async count(): Promise<number>",
        ] {
            assert!(content.contains(method), "missing: {}", method);
        }
        assert_eq!(output.exports, ["postService"]);
    }

    #[test]
    fn absence_is_reported_not_thrown() {
        let output = generate(&post(), &Configuration::default());
        let content = &output.files["post.service.ts"];
        assert!(content.contains("if (existing === null) {"));
        assert!(content.contains("return false;"));
        assert!(!content.contains("throw"));
    }

    #[test]
    fn slug_and_domain_methods_follow_features() {
        let output = generate(&post(), &Configuration::default());
        let content = &output.files["post.service.ts"];
        assert!(content.contains("async findBySlug(slug: string)"));
        assert!(content.contains("async publish(id: number)"));
        assert!(content.contains("data: { published: true }"));
        assert!(content.contains("async unpublish(id: number)"));

        let config = Configuration {
            enable_domain_methods: false,
            ..Configuration::default()
        };
        let content = generate(&post(), &config).files["post.service.ts"].clone();
        assert!(!content.contains("async publish("));
        assert!(!content.contains("async unpublish("));
    }

    #[test]
    fn pagination_metadata_rule_is_emitted() {
        let output = generate(&post(), &Configuration::default());
        let content = &output.files["post.service.ts"];
        assert!(content.contains("hasMore: skip + take < total"));
    }

    #[test]
    fn custom_id_field_is_addressed_by_name() {
        let model = ParsedModel::new(
            "Session",
            vec![ParsedField::id("token", FieldType::Uuid)],
        );
        let output = generate(&model, &Configuration::default());
        let content = &output.files["session.service.ts"];
        assert!(content.contains("findUnique({ where: { token: id } })"));
        assert!(content.contains("async findById(id: string)"));
    }
}
