//! Artifact generation framework for the mochi CRUD generator.
//!
//! Given one normalized entity model ([`mochi_ir::ParsedModel`]) and one
//! read-only [`Configuration`], this crate derives a coordinated set of
//! TypeScript source artifacts: data-transfer contracts, request
//! validators, a persistence-service stub, request-handler controllers,
//! and a barrel of re-exports.
//!
//! # Module Organization
//!
//! - [`builder`] - Code assembly primitives (CodeBuilder, CodeFragment)
//! - [`ast`] - TypeScript syntax builders (Import, Interface, Fn, ...)
//! - [`strategy`] - Backend convention abstraction (Express, Fastify)
//! - [`generators`] - The artifact generators and orchestration
//! - [`config`] / [`features`] - Per-run options and resolved feature gates
//!
//! # Consistency under independent generation
//!
//! Every feature-gated artifact decision flows through one
//! [`FeatureResolution`] computed per `(model, configuration)` pair and
//! shared by the [`GeneratorContext`]. Two generators invoked for the same
//! pair therefore never disagree about which conditional symbols exist.
//!
//! Generation is pure: no I/O, no shared mutable state, byte-identical
//! output for identical inputs.

pub mod ast;
pub mod builder;
pub mod generators;
pub mod strategy;

mod code_file;
mod config;
mod context;
mod error;
mod features;
mod naming;
mod output;
mod summary;
mod type_map;

pub use code_file::{CodeFile, RawBlock};
pub use config::{Configuration, Framework};
pub use context::GeneratorContext;
pub use error::{Error, Result};
pub use features::FeatureResolution;
pub use naming::EntityNames;
pub use output::{GeneratorOutput, ImportSpec, OutputMeta};
pub use summary::{GenerationSummary, ModelSummary};
pub use type_map::{
    EQUALITY_OPERATOR, RANGE_OPERATORS, STRING_OPERATORS, filter_operators, ts_type, zod_type,
};
