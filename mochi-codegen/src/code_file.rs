//! Structured assembly of one generated source file.

use crate::ast::Import;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// The block-assembly helper shared by every artifact generator.
///
/// A file is an import section followed by an ordered sequence of body
/// blocks. Blocks render in exactly the order supplied, separated by one
/// blank line, with a single trailing newline - the same inputs always
/// assemble to the same bytes.
///
/// # Example
///
/// ```
/// use mochi_codegen::{CodeFile, RawBlock};
/// use mochi_codegen::ast::Import;
///
/// let content = CodeFile::new()
///     .import(Import::new("zod").named("z"))
///     .add(RawBlock::new("export const ok = z.boolean();"))
///     .render();
///
/// assert_eq!(content, "import { z } from \"zod\";\n\nexport const ok = z.boolean();\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body block.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add several body blocks in order.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// The import statements collected so far.
    pub fn import_list(&self) -> &[Import] {
        &self.imports
    }

    /// Render the file to its final text.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// A pre-rendered block of code for use as a [`CodeFile`] body element.
#[derive(Debug, Clone)]
pub struct RawBlock(String);

impl RawBlock {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Build a block from individual lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_keep_supplied_order() {
        let content = CodeFile::new()
            .add(RawBlock::new("first();"))
            .add(RawBlock::new("second();"))
            .render();
        assert_eq!(content, "first();\n\nsecond();\n");
    }

    #[test]
    fn imports_precede_body() {
        let content = CodeFile::new()
            .import(Import::new("./a").named("a"))
            .import(Import::new("./b").named("b"))
            .add(RawBlock::new("a(b);"))
            .render();
        assert_eq!(
            content,
            "import { a } from \"./a\";\nimport { b } from \"./b\";\n\na(b);\n"
        );
    }

    #[test]
    fn empty_file_renders_empty() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn raw_block_preserves_interior_blank_lines() {
        let content = CodeFile::new()
            .add(RawBlock::new("one();\n\ntwo();"))
            .render();
        assert_eq!(content, "one();\n\ntwo();\n");
    }
}
