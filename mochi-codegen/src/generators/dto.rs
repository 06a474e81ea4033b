//! Data-transfer contract generator.
//!
//! Produces four files per model: the Create, Update, Read, and Query
//! contracts. The Query file also carries the companion list-response
//! contract with pagination metadata.

use mochi_ir::{FieldType, ParsedField};

use crate::ast::{Import, Interface, InterfaceField};
use crate::code_file::{CodeFile, RawBlock};
use crate::context::GeneratorContext;
use crate::error::Result;
use crate::output::GeneratorOutput;
use crate::type_map::{filter_operators, ts_type};

use super::ArtifactGenerator;

pub struct DtoGenerator;

impl ArtifactGenerator for DtoGenerator {
    fn kind(&self) -> &'static str {
        "dto"
    }

    fn generate(&self, ctx: &GeneratorContext) -> Result<GeneratorOutput> {
        let mut output = GeneratorOutput::new();
        self.create_contract(ctx, &mut output)?;
        self.update_contract(ctx, &mut output)?;
        self.read_contract(ctx, &mut output)?;
        self.query_contract(ctx, &mut output)?;
        Ok(output)
    }
}

impl DtoGenerator {
    fn create_contract(&self, ctx: &GeneratorContext, output: &mut GeneratorOutput) -> Result<()> {
        let name = format!("Create{}Dto", ctx.names.pascal);
        let mut interface = Interface::new(&name).doc(format!(
            "Payload accepted when creating a {}.",
            ctx.names.pascal
        ));

        for field in ctx.model.create_fields() {
            let ty = ts_type(&ctx.model.name, field)?;
            let mut entry = InterfaceField::new(&field.name, ty);
            if field.optional_for_create() {
                entry = entry.optional();
            }
            interface = interface.field_with(entry);
        }

        let mut file = CodeFile::new();
        if let Some(import) = enum_import(ctx.model.create_fields()) {
            output.push_import(import.spec());
            file = file.import(import);
        }
        output.push_file(ctx.names.artifact_file("create-dto"), file.add(interface).render());
        output.push_export(name);
        Ok(())
    }

    fn update_contract(&self, ctx: &GeneratorContext, output: &mut GeneratorOutput) -> Result<()> {
        let name = format!("Update{}Dto", ctx.names.pascal);
        let mut interface = Interface::new(&name).doc(format!(
            "Partial-update payload for a {}; every field is optional.",
            ctx.names.pascal
        ));

        for field in ctx.model.update_fields() {
            let ty = ts_type(&ctx.model.name, field)?;
            interface = interface.optional_field(&field.name, ty);
        }

        let mut file = CodeFile::new();
        if let Some(import) = enum_import(ctx.model.update_fields()) {
            output.push_import(import.spec());
            file = file.import(import);
        }
        output.push_file(ctx.names.artifact_file("update-dto"), file.add(interface).render());
        output.push_export(name);
        Ok(())
    }

    fn read_contract(&self, ctx: &GeneratorContext, output: &mut GeneratorOutput) -> Result<()> {
        let name = format!("{}Dto", ctx.names.pascal);
        let mut interface = Interface::new(&name).doc(format!(
            "A {} as read back from the API.",
            ctx.names.pascal
        ));

        for field in ctx.model.read_fields() {
            let ty = ts_type(&ctx.model.name, field)?;
            let mut entry = InterfaceField::new(&field.name, ty);
            if !field.is_required {
                entry = entry.optional();
            }
            interface = interface.field_with(entry);
        }

        let mut file = CodeFile::new();
        if let Some(import) = enum_import(ctx.model.read_fields()) {
            output.push_import(import.spec());
            file = file.import(import);
        }
        output.push_file(ctx.names.artifact_file("read-dto"), file.add(interface).render());
        output.push_export(name);
        Ok(())
    }

    fn query_contract(&self, ctx: &GeneratorContext, output: &mut GeneratorOutput) -> Result<()> {
        let pascal = &ctx.names.pascal;
        let read_dto = format!("{}Dto", pascal);
        let scalars = ctx.model.scalar_fields();
        let relations = ctx.model.relation_fields();

        let mut file = CodeFile::new();
        let read_import = Import::new(ctx.names.artifact_module("read-dto"))
            .named(&read_dto)
            .type_only();
        output.push_import(read_import.spec());
        file = file.import(read_import);
        if let Some(import) = enum_import(scalars.iter().copied()) {
            output.push_import(import.spec());
            file = file.import(import);
        }

        file = file.add(RawBlock::new("export type SortOrder = \"asc\" | \"desc\";"));
        output.push_export("SortOrder");

        // orderBy: every scalar directly, relations by related field.
        let order_by = format!("{}OrderBy", pascal);
        let mut order_interface = Interface::new(&order_by);
        for field in &scalars {
            order_interface = order_interface.optional_field(&field.name, "SortOrder");
        }
        for field in &relations {
            order_interface =
                order_interface.optional_field(&field.name, "Record<string, SortOrder>");
        }
        file = file.add(order_interface);
        output.push_export(order_by.clone());

        // where: operator object per scalar field, from the closed
        // per-type operator table.
        let where_name = format!("{}Where", pascal);
        let mut where_interface = Interface::new(&where_name);
        for field in &scalars {
            let value_ty = ts_type(&ctx.model.name, field)?;
            let ops = filter_operators(&field.ty)
                .iter()
                .map(|op| format!("{}?: {}", op, value_ty))
                .collect::<Vec<_>>()
                .join("; ");
            where_interface = where_interface.optional_field(&field.name, format!("{{ {} }}", ops));
        }
        file = file.add(where_interface);
        output.push_export(where_name.clone());

        // include: one boolean toggle per relation, omitted entirely for
        // relation-free models.
        let include_name = format!("{}Include", pascal);
        if !relations.is_empty() {
            let mut include_interface = Interface::new(&include_name);
            for field in &relations {
                include_interface = include_interface.optional_field(&field.name, "boolean");
            }
            file = file.add(include_interface);
            output.push_export(include_name.clone());
        }

        // select: one boolean toggle per field, master order.
        let select_name = format!("{}Select", pascal);
        let mut select_interface = Interface::new(&select_name);
        for field in &ctx.model.fields {
            select_interface = select_interface.optional_field(&field.name, "boolean");
        }
        file = file.add(select_interface);
        output.push_export(select_name.clone());

        let query_name = format!("{}QueryDto", pascal);
        let mut query_interface = Interface::new(&query_name)
            .doc(format!("List query accepted by the {} list endpoint.", pascal))
            .optional_field("skip", "number")
            .optional_field("take", "number")
            .optional_field("orderBy", &order_by)
            .optional_field("where", &where_name);
        if !relations.is_empty() {
            query_interface = query_interface.optional_field("include", &include_name);
        }
        query_interface = query_interface.optional_field("select", &select_name);
        file = file.add(query_interface);
        output.push_export(query_name);

        let list_name = format!("{}ListResponse", pascal);
        let list_interface = Interface::new(&list_name)
            .doc("Page of results; hasMore is true while skip + take < total.")
            .field("items", format!("{}[]", read_dto))
            .field("total", "number")
            .field("skip", "number")
            .field("take", "number")
            .field("hasMore", "boolean");
        file = file.add(list_interface);
        output.push_export(list_name);

        output.push_file(ctx.names.artifact_file("query-dto"), file.render());
        Ok(())
    }
}

/// Type-only import of any named enums used by the given fields.
fn enum_import<'a>(fields: impl IntoIterator<Item = &'a ParsedField>) -> Option<Import> {
    let mut names: Vec<String> = Vec::new();
    for field in fields {
        if let FieldType::Enum(name) = &field.ty
            && !names.contains(name)
        {
            names.push(name.clone());
        }
    }
    if names.is_empty() {
        return None;
    }
    Some(Import::new("../enums").named_all(names).type_only())
}
