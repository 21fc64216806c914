//! Template engine for markup generation.

use crate::error::{CodegenError, Result};
use centaur_core::ComponentKind;
use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde::Serialize;

/// Page shell wrapping every component body.
pub const PAGE_TEMPLATE: &str = "html/page";

/// Built-in templates, keyed by registration name.
const BUILTIN_TEMPLATES: [(&str, &str); 14] = [
    (PAGE_TEMPLATE, include_str!("../../templates/html/page.hbs")),
    ("html/form", include_str!("../../templates/html/form.hbs")),
    ("html/hero", include_str!("../../templates/html/hero.hbs")),
    ("html/card", include_str!("../../templates/html/card.hbs")),
    ("html/navigation", include_str!("../../templates/html/navigation.hbs")),
    ("html/modal", include_str!("../../templates/html/modal.hbs")),
    ("html/table", include_str!("../../templates/html/table.hbs")),
    ("html/footer", include_str!("../../templates/html/footer.hbs")),
    ("html/gallery", include_str!("../../templates/html/gallery.hbs")),
    ("html/accordion", include_str!("../../templates/html/accordion.hbs")),
    ("html/tabs", include_str!("../../templates/html/tabs.hbs")),
    ("html/carousel", include_str!("../../templates/html/carousel.hbs")),
    ("html/pricing", include_str!("../../templates/html/pricing.hbs")),
    ("html/testimonial", include_str!("../../templates/html/testimonial.hbs")),
];

/// Registration name of the body template for a kind.
pub fn body_template(kind: ComponentKind) -> String {
    format!("html/{}", kind.as_str())
}

/// Template engine using Handlebars.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with helpers but no templates.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Create an engine with the page shell and one body template per kind.
    pub fn with_builtin_templates() -> Result<Self> {
        let mut engine = Self::new();
        for (name, template) in BUILTIN_TEMPLATES {
            engine.register_template(name, template)?;
        }
        Ok(engine)
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.has_template(name) {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    fn register_helpers(handlebars: &mut Handlebars) {
        handlebars.register_helper(
            "kebab_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&to_kebab_case(param))?;
                    Ok(())
                },
            ),
        );

        handlebars.register_helper(
            "pascal_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&param.to_case(Case::Pascal))?;
                    Ok(())
                },
            ),
        );

        // "github" -> "Github"
        handlebars.register_helper(
            "upper_first",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&upper_first(param))?;
                    Ok(())
                },
            ),
        );

        // Five-star rating, filled up to the first parameter.
        handlebars.register_helper(
            "stars",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let rating = h
                        .param(0)
                        .and_then(|v| v.value().as_u64())
                        .unwrap_or(0)
                        .min(5) as usize;
                    out.write(&format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating)))?;
                    Ok(())
                },
            ),
        );

        handlebars.register_helper(
            "join",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let arr = h.param(0).and_then(|v| v.value().as_array());
                    let sep = h
                        .param(1)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or(", ");

                    if let Some(items) = arr {
                        let joined = items
                            .iter()
                            .filter_map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(sep);
                        out.write(&joined)?;
                    }
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert to kebab-case.
pub(crate) fn to_kebab_case(s: &str) -> String {
    s.to_case(Case::Kebab)
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
