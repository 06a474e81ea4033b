//! The uniform result type of every artifact generator.

use indexmap::IndexMap;
use serde::Serialize;

/// Specification of one import declaration an artifact depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSpec {
    /// Module or package specifier.
    pub module: String,
    /// Symbols imported from the module (empty = side-effect import).
    pub symbols: Vec<String>,
    /// Whether this is a type-only import.
    pub type_only: bool,
}

impl ImportSpec {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
            type_only: false,
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }
}

/// Reporting metadata derived from a generator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputMeta {
    pub file_count: usize,
    pub line_count: usize,
}

/// The uniform result of one artifact generator.
///
/// Filenames map to complete file text. Key order is insertion order and
/// stable across runs; content is final (imports already precede code).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeneratorOutput {
    /// Relative filename -> file content.
    pub files: IndexMap<String, String>,
    /// Import declarations the content depends on.
    pub imports: Vec<ImportSpec>,
    /// Symbols the content exports.
    pub exports: Vec<String>,
}

impl GeneratorOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file. Filenames must be unique within an output.
    pub fn push_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(name.into(), content.into());
    }

    /// Record an import dependency.
    pub fn push_import(&mut self, spec: ImportSpec) {
        self.imports.push(spec);
    }

    /// Record an exported symbol.
    pub fn push_export(&mut self, symbol: impl Into<String>) {
        self.exports.push(symbol.into());
    }

    /// Reporting metadata: file count and total line count.
    pub fn meta(&self) -> OutputMeta {
        OutputMeta {
            file_count: self.files.len(),
            line_count: self.files.values().map(|c| c.lines().count()).sum(),
        }
    }
}
