//! Code assembly primitives.
//!
//! - [`CodeBuilder`] - line-oriented buffer with indentation tracking
//! - [`CodeFragment`] / [`Renderable`] - intermediate representation for
//!   composable pieces of generated code

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
