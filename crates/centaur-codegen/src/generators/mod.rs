//! Generators turning components into web assets.

pub mod css;
pub mod header;
pub mod html;
pub mod js;
mod templates;
mod web;

pub use header::{provenance, CommentStyle};
pub use templates::TemplateEngine;
pub use web::WebGenerator;

use crate::error::Result;
use centaur_core::{Component, Program};

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target name, used in log lines.
    fn target_name(&self) -> &'static str;

    /// Generate the assets for one component.
    fn generate(&self, component: &Component) -> Result<GeneratedComponent>;

    /// Generate every component of a program, in source order.
    fn generate_program(&self, program: &Program) -> Result<Vec<GeneratedComponent>> {
        program
            .components
            .iter()
            .map(|component| self.generate(component))
            .collect()
    }
}

/// Authorship recorded in the provenance header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub human_author: String,
    pub ai_author: String,
}

impl GeneratorOptions {
    pub fn new(human_author: impl Into<String>, ai_author: impl Into<String>) -> Self {
        Self {
            human_author: human_author.into(),
            ai_author: ai_author.into(),
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new("Human", "Claude")
    }
}

/// The three assets rendered for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub name: String,
    pub html: String,
    pub css: String,
    pub js: String,
}

impl GeneratedComponent {
    /// Files named after the component: `<Name>.html`, `.css` and `.js`.
    pub fn files(&self) -> [GeneratedFile<'_>; 3] {
        [
            GeneratedFile {
                path: format!("{}.html", self.name),
                content: &self.html,
            },
            GeneratedFile {
                path: format!("{}.css", self.name),
                content: &self.css,
            },
            GeneratedFile {
                path: format!("{}.js", self.name),
                content: &self.js,
            },
        ]
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile<'a> {
    /// File path relative to the output directory.
    pub path: String,
    pub content: &'a str,
}
