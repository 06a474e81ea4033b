//! Request-handler controller generator.
//!
//! Emits one controller file per model. Every handler follows the same
//! shape: validate the input (rejecting with 400 before any service
//! call), invoke the matching service operation, apply the not-found
//! policy, send the success response, and answer anything unexpected
//! with a generic 500. Backend idiom - signatures, request access,
//! responses - comes exclusively from the framework strategy; this
//! module contains no backend-identity checks.

use mochi_ir::IdKind;

use crate::ast::{Fn, Import};
use crate::builder::CodeFragment;
use crate::code_file::CodeFile;
use crate::context::GeneratorContext;
use crate::error::Result;
use crate::output::GeneratorOutput;
use crate::strategy::ParamsShape;

use super::ArtifactGenerator;

pub struct ControllerGenerator;

impl ArtifactGenerator for ControllerGenerator {
    fn kind(&self) -> &'static str {
        "controller"
    }

    fn generate(&self, ctx: &GeneratorContext) -> Result<GeneratorOutput> {
        let mut output = GeneratorOutput::new();
        let names = &ctx.names;

        let mut schema_import = Import::new(names.artifact_module("validator"))
            .named(names.schema_value("create"))
            .named(names.schema_value("update"))
            .named(names.schema_value("query"));
        if ctx.features.bulk_operations {
            schema_import = schema_import.named(names.schema_value("bulkCreate"));
        }
        let service_import =
            Import::new(names.artifact_module("service")).named(names.service_value());

        let mut file = CodeFile::new();
        for spec in ctx.strategy.imports(&names.camel) {
            output.push_import(spec.clone());
            file = file.import(Import::from(&spec));
        }
        output.push_import(schema_import.spec());
        file = file.import(schema_import);
        output.push_import(service_import.spec());
        file = file.import(service_import);

        let mut handlers: Vec<Fn> = vec![
            self.list_handler(ctx),
            self.get_handler(ctx),
            self.create_handler(ctx),
            self.update_handler(ctx),
            self.delete_handler(ctx),
            self.count_handler(ctx),
        ];
        if ctx.features.slug_lookup {
            handlers.push(self.get_by_slug_handler(ctx));
        }
        if ctx.features.domain_methods {
            handlers.push(self.set_published_handler(ctx, "publish"));
            handlers.push(self.set_published_handler(ctx, "unpublish"));
        }
        if ctx.features.bulk_operations {
            handlers.push(self.bulk_create_handler(ctx));
        }

        for handler in handlers {
            file = file.add(handler);
        }

        output.push_file(names.artifact_file("controller"), file.render());
        for verb in ["list", "get", "create", "update", "delete", "count"] {
            output.push_export(names.handler(verb));
        }
        if ctx.features.slug_lookup {
            output.push_export(format!("get{}BySlug", names.pascal));
        }
        if ctx.features.domain_methods {
            output.push_export(names.handler("publish"));
            output.push_export(names.handler("unpublish"));
        }
        if ctx.features.bulk_operations {
            output.push_export(names.handler("bulkCreate"));
        }
        Ok(output)
    }
}

impl ControllerGenerator {
    fn list_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = ctx.names.handler("list");
        let mut body = self.validated(ctx, &ctx.names.schema_value("query"), &ctx.strategy.request_query());
        body.push(CodeFragment::Line(format!(
            "const result = await {}.list(parsed.data);",
            ctx.names.service_value()
        )));
        body.extend(lines(ctx.strategy.json_response("result")));
        self.handler(ctx, &name, None, format!("List {} rows with filtering and pagination.", ctx.names.pascal), body)
    }

    fn get_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = ctx.names.handler("get");
        let subject = ctx.names.camel.clone();
        let mut body = self.id_parse(ctx);
        body.push(CodeFragment::Line(format!(
            "const {} = await {}.findById(id);",
            subject,
            ctx.names.service_value()
        )));
        body.extend(self.not_found_guard(ctx, &format!("{} === null", subject)));
        body.extend(lines(ctx.strategy.json_response(&subject)));
        self.handler(
            ctx,
            &name,
            Some(ParamsShape::single(&ctx.id_name)),
            format!("Fetch a single {} by identifier.", ctx.names.pascal),
            body,
        )
    }

    fn create_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = ctx.names.handler("create");
        let mut body = self.validated(ctx, &ctx.names.schema_value("create"), &ctx.strategy.request_body());
        body.push(CodeFragment::Line(format!(
            "const created = await {}.create(parsed.data);",
            ctx.names.service_value()
        )));
        body.extend(lines(ctx.strategy.status_response(201, Some("created"))));
        self.handler(ctx, &name, None, format!("Create a {}.", ctx.names.pascal), body)
    }

    fn update_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = ctx.names.handler("update");
        let mut body = self.id_parse(ctx);
        body.extend(self.validated(ctx, &ctx.names.schema_value("update"), &ctx.strategy.request_body()));
        body.push(CodeFragment::Line(format!(
            "const updated = await {}.update(id, parsed.data);",
            ctx.names.service_value()
        )));
        body.extend(self.not_found_guard(ctx, "updated === null"));
        body.extend(lines(ctx.strategy.json_response("updated")));
        self.handler(
            ctx,
            &name,
            Some(ParamsShape::single(&ctx.id_name)),
            format!("Apply a partial update to a {}.", ctx.names.pascal),
            body,
        )
    }

    fn delete_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = ctx.names.handler("delete");
        let mut body = self.id_parse(ctx);
        body.push(CodeFragment::Line(format!(
            "const deleted = await {}.delete(id);",
            ctx.names.service_value()
        )));
        body.extend(self.not_found_guard(ctx, "!deleted"));
        body.extend(lines(ctx.strategy.status_response(204, None)));
        self.handler(
            ctx,
            &name,
            Some(ParamsShape::single(&ctx.id_name)),
            format!("Delete a {}.", ctx.names.pascal),
            body,
        )
    }

    fn count_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = ctx.names.handler("count");
        let mut body = vec![CodeFragment::Line(format!(
            "const total = await {}.count();",
            ctx.names.service_value()
        ))];
        body.extend(lines(ctx.strategy.json_response("{ total }")));
        self.handler(ctx, &name, None, format!("Count {} rows.", ctx.names.pascal), body)
    }

    fn get_by_slug_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = format!("get{}BySlug", ctx.names.pascal);
        let subject = ctx.names.camel.clone();
        let mut body = vec![CodeFragment::Line(format!(
            "const slug = {};",
            ctx.strategy.request_param("slug")
        ))];
        body.push(CodeFragment::Line(format!(
            "const {} = await {}.findBySlug(slug);",
            subject,
            ctx.names.service_value()
        )));
        body.extend(self.not_found_guard(ctx, &format!("{} === null", subject)));
        body.extend(lines(ctx.strategy.json_response(&subject)));
        self.handler(
            ctx,
            &name,
            Some(ParamsShape::single("slug")),
            format!("Fetch a single {} by slug.", ctx.names.pascal),
            body,
        )
    }

    fn set_published_handler(&self, ctx: &GeneratorContext, verb: &str) -> Fn {
        let name = ctx.names.handler(verb);
        let mut body = self.id_parse(ctx);
        body.push(CodeFragment::Line(format!(
            "const updated = await {}.{}(id);",
            ctx.names.service_value(),
            verb
        )));
        body.extend(self.not_found_guard(ctx, "updated === null"));
        body.extend(lines(ctx.strategy.json_response("updated")));
        self.handler(
            ctx,
            &name,
            Some(ParamsShape::single(&ctx.id_name)),
            format!("Mark a {} as {}ed.", ctx.names.pascal, verb),
            body,
        )
    }

    fn bulk_create_handler(&self, ctx: &GeneratorContext) -> Fn {
        let name = ctx.names.handler("bulkCreate");
        let mut body = self.validated(
            ctx,
            &ctx.names.schema_value("bulkCreate"),
            &ctx.strategy.request_body(),
        );
        body.push(CodeFragment::Line(format!(
            "const count = await {}.createMany(parsed.data);",
            ctx.names.service_value()
        )));
        body.extend(lines(ctx.strategy.status_response(201, Some("{ count }"))));
        self.handler(
            ctx,
            &name,
            None,
            format!("Create a batch of {} rows.", ctx.names.pascal),
            body,
        )
    }

    /// Wrap a handler body in the uniform try/catch envelope.
    fn handler(
        &self,
        ctx: &GeneratorContext,
        name: &str,
        params: Option<ParamsShape>,
        doc: String,
        main: Vec<CodeFragment>,
    ) -> Fn {
        let mut fragments = vec![CodeFragment::Block {
            header: "try {".to_string(),
            body: main,
            close: None,
        }];
        fragments.push(CodeFragment::line("} catch (err) {"));
        let mut catch_body = vec![CodeFragment::Line(format!(
            "console.error(\"{} failed\", err);",
            name
        ))];
        catch_body.extend(lines(
            ctx.strategy
                .status_response(500, Some("{ message: \"Internal server error\" }")),
        ));
        fragments.push(CodeFragment::Indent(catch_body));
        fragments.push(CodeFragment::line("}"));

        Fn::with_signature(ctx.strategy.handler_signature(name, params.as_ref()))
            .doc(doc)
            .fragments(fragments)
    }

    /// Route-parameter handling per identifier kind: numeric parse with
    /// NaN rejection, integer-literal guard for bigint, pass-through for
    /// opaque string kinds. Always rejects before any service call.
    fn id_parse(&self, ctx: &GeneratorContext) -> Vec<CodeFragment> {
        let param = ctx.strategy.request_param(&ctx.id_name);
        let reject = self.reject_400(ctx, "{ message: \"Invalid identifier\" }");
        match ctx.id_kind {
            IdKind::Number => vec![
                CodeFragment::Line(format!("const id = Number({});", param)),
                CodeFragment::Block {
                    header: "if (Number.isNaN(id)) {".to_string(),
                    body: reject,
                    close: Some("}".to_string()),
                },
            ],
            IdKind::BigInt => vec![
                CodeFragment::Line(format!("const raw = {};", param)),
                CodeFragment::Block {
                    header: "if (!/^-?\\d+$/.test(raw)) {".to_string(),
                    body: reject,
                    close: Some("}".to_string()),
                },
                CodeFragment::line("const id = BigInt(raw);"),
            ],
            IdKind::Uuid | IdKind::Cuid => {
                vec![CodeFragment::Line(format!("const id = {};", param))]
            }
        }
    }

    /// Schema validation preamble; rejects with structured details.
    fn validated(&self, ctx: &GeneratorContext, schema: &str, source: &str) -> Vec<CodeFragment> {
        vec![
            CodeFragment::Line(format!("const parsed = {}.safeParse({});", schema, source)),
            CodeFragment::Block {
                header: "if (!parsed.success) {".to_string(),
                body: self.reject_400(ctx, "{ errors: parsed.error.flatten() }"),
                close: Some("}".to_string()),
            },
        ]
    }

    fn not_found_guard(&self, ctx: &GeneratorContext, condition: &str) -> Vec<CodeFragment> {
        let message = format!("{{ message: \"{} not found\" }}", ctx.names.pascal);
        vec![CodeFragment::Block {
            header: format!("if ({}) {{", condition),
            body: lines(ctx.strategy.status_response(404, Some(&message))),
            close: Some("}".to_string()),
        }]
    }

    fn reject_400(&self, ctx: &GeneratorContext, body: &str) -> Vec<CodeFragment> {
        lines(ctx.strategy.status_response(400, Some(body)))
    }
}

fn lines(statements: Vec<String>) -> Vec<CodeFragment> {
    statements.into_iter().map(CodeFragment::Line).collect()
}
