//! Integration checklist generator.
//!
//! An auxiliary artifact for operators: a markdown checklist of the
//! wiring steps the generated code still needs. Derived purely from the
//! generation summary, written once, and never overwritten - it belongs
//! to the operator after that.

use std::path::{Path, PathBuf};

use mochi_codegen::GenerationSummary;
use mochi_core::{FileRules, GeneratedFile};

pub struct Checklist {
    summary: GenerationSummary,
}

impl Checklist {
    pub fn new(summary: &GenerationSummary) -> Self {
        Self {
            summary: summary.clone(),
        }
    }
}

impl GeneratedFile for Checklist {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("CHECKLIST.md")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("# Integration checklist\n\n");
        out.push_str(
            "Written once by `mochi generate`; edit freely, it will not be overwritten.\n\n",
        );
        out.push_str("- [ ] Run `prisma generate` so the client matches your schema\n");
        out.push_str("- [ ] Install runtime dependencies (`zod`, your web framework)\n\n");

        for model in &self.summary.models {
            out.push_str(&format!(
                "## {} (`src/{}/`)\n\n",
                model.name, model.directory
            ));
            out.push_str(&format!(
                "- [ ] Mount the handlers from `{}.controller.ts` on your router\n",
                model.directory
            ));
            out.push_str("- [ ] Review the generated validation schemas\n\n");
            out.push_str("Files:\n\n");
            for file in &model.files {
                out.push_str(&format!("- `{}`\n", file));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "Totals: {} model(s), {} file(s), {} line(s).\n",
            self.summary.model_count(),
            self.summary.file_count(),
            self.summary.line_count()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use mochi_codegen::generators::generate_model;
    use mochi_codegen::Configuration;
    use mochi_core::WriteResult;
    use mochi_ir::{FieldType, ParsedField, ParsedModel};
    use tempfile::TempDir;

    use super::*;

    fn summary() -> GenerationSummary {
        let model = ParsedModel::new(
            "Post",
            vec![
                ParsedField::id("id", FieldType::Int),
                ParsedField::new("title", FieldType::String),
            ],
        );
        let config = Configuration::default();
        let bundle = generate_model(&model, &config).unwrap();
        GenerationSummary::from_bundles(&[bundle])
    }

    #[test]
    fn lists_every_generated_file() {
        let checklist = Checklist::new(&summary());
        let content = checklist.render();
        assert!(content.contains("## Post (`src/post/`)"));
        assert!(content.contains("- `post.controller.ts`"));
        assert!(content.contains("- `index.ts`"));
        assert!(content.contains("Totals: 1 model(s), 8 file(s)"));
    }

    #[test]
    fn is_never_overwritten() {
        let temp = TempDir::new().unwrap();
        let checklist = Checklist::new(&summary());
        assert_eq!(checklist.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(checklist.write(temp.path()).unwrap(), WriteResult::Skipped);
    }
}
