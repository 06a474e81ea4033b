//! Barrel aggregation for a model's directory.
//!
//! Pure list concatenation: one star re-export per sibling artifact
//! file, in generation order, plus the aggregated export symbol list the
//! consistency contract relies on. No business logic lives here.

use crate::builder::CodeFragment;
use crate::code_file::CodeFile;
use crate::context::GeneratorContext;
use crate::output::GeneratorOutput;

/// Build the `index.ts` barrel from the sibling generator outputs.
pub fn aggregate(_ctx: &GeneratorContext, outputs: &[GeneratorOutput]) -> GeneratorOutput {
    let mut barrel = GeneratorOutput::new();

    let mut export_lines = Vec::new();
    for output in outputs {
        for file_name in output.files.keys() {
            let module = file_name.strip_suffix(".ts").unwrap_or(file_name);
            export_lines.push(CodeFragment::Line(format!(
                "export * from \"./{}\";",
                module
            )));
        }
        barrel.exports.extend(output.exports.iter().cloned());
    }

    let content = CodeFile::new().add(export_lines).render();
    barrel.push_file("index.ts", content);
    barrel
}

#[cfg(test)]
mod tests {
    use mochi_ir::{FieldType, ParsedField, ParsedModel};

    use crate::config::Configuration;

    use super::*;

    #[test]
    fn one_star_export_per_file_in_order() {
        let model = ParsedModel::new(
            "Post",
            vec![ParsedField::id("id", FieldType::Int)],
        );
        let config = Configuration::default();
        let ctx = GeneratorContext::new(&model, &config).unwrap();

        let mut a = GeneratorOutput::new();
        a.push_file("post.create-dto.ts", "");
        a.push_file("post.read-dto.ts", "");
        a.push_export("CreatePostDto");
        let mut b = GeneratorOutput::new();
        b.push_file("post.service.ts", "");
        b.push_export("postService");

        let barrel = aggregate(&ctx, &[a, b]);
        assert_eq!(
            barrel.files["index.ts"],
            "export * from \"./post.create-dto\";\nexport * from \"./post.read-dto\";\nexport * from \"./post.service\";\n"
        );
        assert_eq!(barrel.exports, ["CreatePostDto", "postService"]);
    }
}
