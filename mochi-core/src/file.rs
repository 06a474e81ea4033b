//! The file-writing boundary layer.
//!
//! Generation itself is pure and in-memory; this module is the single
//! place where rendered artifacts touch the filesystem.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent one generated file.
pub trait GeneratedFile {
    /// File path relative to the base directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing this file.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file to disk according to its rules.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was skipped (already exists).
    Skipped,
}

/// How to handle an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite. For fully generated code the tool owns.
    #[default]
    Always,
    /// Only create if missing. For stubs and docs the operator may edit.
    IfMissing,
}

/// Rules that determine how a file is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for operator-owned files: create once, never overwrite.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// A rendered file paired with a concrete path, ready to write.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a file with default rules (always overwrite).
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Use create-once rules instead of the default.
    pub fn create_once(mut self) -> Self {
        self.rules = FileRules::create_once();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file according to its rules.
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}
