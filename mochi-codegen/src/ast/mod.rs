//! TypeScript syntax builders.
//!
//! High-level builders for the handful of TypeScript constructs the
//! artifact generators emit. Each renders through
//! [`crate::builder::CodeBuilder`] via [`crate::builder::Renderable`].

mod exports;
mod fns;
mod imports;
mod interface;

pub use exports::Export;
pub use fns::Fn;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
