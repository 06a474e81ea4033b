//! TypeScript import statement builder.

use crate::builder::{CodeFragment, Renderable};
use crate::output::ImportSpec;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render to a single statement line.
    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from \"{}\";", type_kw, def, self.from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from \"{}\";",
                type_kw,
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }

    /// The import described as a symbol-level [`ImportSpec`].
    pub fn spec(&self) -> ImportSpec {
        let mut symbols: Vec<String> = Vec::new();
        if let Some(def) = &self.default {
            symbols.push(def.clone());
        }
        symbols.extend(self.named.iter().cloned());
        ImportSpec {
            module: self.from.clone(),
            symbols,
            type_only: self.type_only,
        }
    }
}

impl From<&ImportSpec> for Import {
    fn from(spec: &ImportSpec) -> Self {
        let mut import = Import::new(&spec.module).named_all(spec.symbols.iter().cloned());
        if spec.type_only {
            import = import.type_only();
        }
        import
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}
