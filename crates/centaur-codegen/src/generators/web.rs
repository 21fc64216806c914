//! Standalone HTML/CSS/JS generator.

use super::templates::TemplateEngine;
use super::{css, html, js, CodeGenerator, GeneratedComponent, GeneratorOptions};
use crate::error::Result;
use centaur_core::Component;

/// Renders each component as a self-contained page with its own
/// stylesheet and script.
pub struct WebGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: GeneratorOptions,
}

impl<'a> WebGenerator<'a> {
    /// Create a generator with the built-in templates and default authors.
    pub fn new() -> Result<Self> {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::with_builtin_templates()?,
            options,
        })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
}

impl<'a> CodeGenerator for WebGenerator<'a> {
    fn target_name(&self) -> &'static str {
        "web"
    }

    fn generate(&self, component: &Component) -> Result<GeneratedComponent> {
        log::debug!(
            "{}: rendering {} ({}, {})",
            self.target_name(),
            component.name,
            component.kind,
            component.theme
        );
        Ok(GeneratedComponent {
            name: component.name.clone(),
            html: html::render(&self.engine, component, &self.options)?,
            css: css::render(component, &self.options),
            js: js::render(component, &self.options),
        })
    }
}
