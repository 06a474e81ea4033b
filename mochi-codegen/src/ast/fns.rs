//! TypeScript function builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for a generated function.
///
/// The opening signature line is supplied whole by the caller - for
/// request handlers it comes from the framework strategy, which owns the
/// backend-idiomatic declaration. The builder contributes the doc
/// comment, body indentation, and the closing brace.
#[derive(Debug, Clone)]
pub struct Fn {
    signature: String,
    doc: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    /// Create a function from its full opening line
    /// (e.g. `export async function getPost(req: Request, res: Response): Promise<void> {`).
    pub fn with_signature(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            doc: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a body fragment (blocks, blank lines, nested sequences).
    pub fn fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Add several body fragments in order.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }
        fragments.push(CodeFragment::Block {
            header: self.signature.clone(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_signature_body_and_close() {
        let f = Fn::with_signature("export async function ping(): Promise<void> {")
            .line("return;");
        assert_eq!(
            f.render(),
            "export async function ping(): Promise<void> {\n  return;\n}\n"
        );
    }

    #[test]
    fn renders_doc_and_nested_block() {
        let f = Fn::with_signature("export function guard(x: number) {")
            .doc("Reject negatives.")
            .fragment(CodeFragment::Block {
                header: "if (x < 0) {".to_string(),
                body: vec![CodeFragment::line("throw new Error(\"negative\");")],
                close: Some("}".to_string()),
            });
        assert_eq!(
            f.render(),
            "/** Reject negatives. */\nexport function guard(x: number) {\n  if (x < 0) {\n    throw new Error(\"negative\");\n  }\n}\n"
        );
    }
}
