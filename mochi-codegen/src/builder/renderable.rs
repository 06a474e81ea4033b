//! Intermediate representation for generated code pieces.

/// One piece of generated code, nestable.
///
/// Fragments let AST builders describe *what* to emit while
/// [`super::CodeBuilder`] decides indentation and line endings.
#[derive(Debug, Clone)]
pub enum CodeFragment {
    /// A single line at the current indentation.
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text, emitted verbatim.
    Raw(String),
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments emitted one level deeper.
    Indent(Vec<CodeFragment>),
    /// Fragments emitted in order at the current level.
    Sequence(Vec<CodeFragment>),
    /// A single-line JSDoc comment.
    JsDoc(String),
}

impl CodeFragment {
    /// Convenience constructor for a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        CodeFragment::Line(s.into())
    }
}

/// Trait for types that can be converted to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render directly to a string through a fresh builder.
    fn render(&self) -> String {
        let mut builder = super::CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
