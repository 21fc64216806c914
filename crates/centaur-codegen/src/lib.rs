//! Web asset generation for parsed Centaur components.
//!
//! Every component becomes three files: an HTML page rendered from a
//! per-kind Handlebars template, a stylesheet built from the theme palette
//! and accent, and a behaviour script for interactive kinds.
//!
//! # Example
//!
//! ```
//! use centaur_codegen::{CodeGenerator, WebGenerator};
//! use centaur_parser::parse_program;
//!
//! let program = parse_program("@component Login\n@type form\n{\n- Email input\n}");
//! let generator = WebGenerator::new().unwrap();
//! let generated = generator.generate(&program.components[0]).unwrap();
//! assert!(generated.html.contains("field-email"));
//! ```

pub mod error;
pub mod generators;
pub mod theme;

pub use error::{CodegenError, Result};
pub use generators::{
    CodeGenerator, CommentStyle, GeneratedComponent, GeneratedFile, GeneratorOptions,
    TemplateEngine, WebGenerator,
};
pub use theme::{Accent, Palette};
