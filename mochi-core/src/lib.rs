//! Core utilities for the mochi CRUD generator.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: string casing helpers and the file-writing boundary layer.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
