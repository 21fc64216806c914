//! Core types, component model, and errors for the Centaur compiler.
//!
//! This crate provides the foundational types shared by the parser, the code
//! generator and the CLI:
//! - The component model (`Program`, `Component`, `Field`, `Item`)
//! - Closed value sets (component kinds, themes, styles, field types)
//! - Error types

pub mod ast;
pub mod errors;
pub mod types;

pub use ast::*;
pub use errors::*;
pub use types::*;
