//! Line-oriented code buffer with indentation tracking.

use super::{CodeFragment, Renderable};

/// Indentation unit for emitted TypeScript (two spaces).
const INDENT: &str = "  ";

/// Builder for properly indented generated code.
///
/// All artifacts this workspace emits are TypeScript, so the indentation
/// unit is fixed at two spaces rather than configured per call site.
///
/// # Example
///
/// ```
/// use mochi_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .line("export function ping() {")
///     .indent()
///     .line("return \"pong\";")
///     .dedent()
///     .line("}");
///
/// assert_eq!(
///     builder.build(),
///     "export function ping() {\n  return \"pong\";\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line at the current indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or trailing newline.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line JSDoc comment.
    pub fn jsdoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Emit a [`Renderable`] node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.line(&s);
            }
            CodeFragment::Blank => {
                self.blank();
            }
            CodeFragment::Raw(s) => {
                self.raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(&header);
                self.indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.dedent();
                if let Some(c) = close {
                    self.line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.jsdoc(&text);
            }
        }
    }

    /// Current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Borrow the buffer content so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_line() {
        let mut builder = CodeBuilder::new();
        builder.line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn indentation() {
        let mut builder = CodeBuilder::new();
        builder
            .line("if (ok) {")
            .indent()
            .line("done();")
            .dedent()
            .line("}");
        assert_eq!(builder.build(), "if (ok) {\n  done();\n}\n");
    }

    #[test]
    fn blank_line() {
        let mut builder = CodeBuilder::new();
        builder.line("a();").blank().line("b();");
        assert_eq!(builder.build(), "a();\n\nb();\n");
    }

    #[test]
    fn jsdoc() {
        let mut builder = CodeBuilder::new();
        builder.jsdoc("A value").line("const v = 1;");
        assert_eq!(builder.build(), "/** A value */\nconst v = 1;\n");
    }

    #[test]
    fn block_fragment() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::Block {
            header: "function f() {".to_string(),
            body: vec![CodeFragment::line("return 1;")],
            close: Some("}".to_string()),
        });
        assert_eq!(builder.build(), "function f() {\n  return 1;\n}\n");
    }

    #[test]
    fn nested_indent_fragment() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::Sequence(vec![
            CodeFragment::line("outer {"),
            CodeFragment::Indent(vec![CodeFragment::line("inner;")]),
            CodeFragment::line("}"),
        ]));
        assert_eq!(builder.build(), "outer {\n  inner;\n}\n");
    }

    #[test]
    fn dedent_saturates() {
        let mut builder = CodeBuilder::new();
        builder.dedent().line("flush-left");
        assert_eq!(builder.build(), "flush-left\n");
    }
}
