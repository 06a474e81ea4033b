//! Model representation types for the mochi CRUD generator.
//!
//! This crate holds the normalized, in-memory description of one entity
//! that every artifact generator consumes. The types are produced by an
//! external schema parser and treated as read-only from then on.
//!
//! # Architecture
//!
//! ```text
//! mochi.toml (TOML) → manifest loading → mochi-ir (normalized models) → codegen
//! ```
//!
//! The representation is designed to be:
//! - Backend-agnostic (no Express/Fastify-specific concerns)
//! - The single source of truth: field partitions and feature flags are
//!   derived on demand from the master field list, never stored
//! - Self-contained (no dependencies beyond serde)

mod field;
mod id;
mod model;

pub use field::{FieldType, ParsedField};
pub use id::IdKind;
pub use model::ParsedModel;
