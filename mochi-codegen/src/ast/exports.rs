//! TypeScript export statement builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for TypeScript export statements.
///
/// Covers the two shapes the barrel aggregator needs: star re-exports and
/// named re-exports from sibling modules.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    /// Re-export everything from a module (`export * from "..."`).
    pub fn star(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Re-export specific names from a module.
    pub fn named(from: impl Into<String>, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            from: from.into(),
            named: names.into_iter().map(Into::into).collect(),
            type_only: false,
        }
    }

    /// Make this a type-only export (`export type { ... } from "..."`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        if self.named.is_empty() {
            format!("export * from \"{}\";", self.from)
        } else {
            format!(
                "export {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            )
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_export() {
        let e = Export::star("./post.service");
        assert_eq!(e.render(), "export * from \"./post.service\";\n");
    }

    #[test]
    fn named_export() {
        let e = Export::named("./post.validator", ["createPostSchema", "updatePostSchema"]);
        assert_eq!(
            e.render(),
            "export { createPostSchema, updatePostSchema } from \"./post.validator\";\n"
        );
    }

    #[test]
    fn type_only_named_export() {
        let e = Export::named("./post.read-dto", ["PostDto"]).type_only();
        assert_eq!(e.render(), "export type { PostDto } from \"./post.read-dto\";\n");
    }
}
