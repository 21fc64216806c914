//! Markup rendering: component body inside the page shell.

use super::header::{provenance, CommentStyle};
use super::templates::{body_template, to_kebab_case, TemplateEngine, PAGE_TEMPLATE};
use super::GeneratorOptions;
use crate::error::Result;
use centaur_core::{Component, Field, FieldType, FooterSection, Item, Options, SocialLink, Style};
use serde::Serialize;

/// Document language when no `@language` directive is given.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A field plus the control flags the form template switches on.
#[derive(Serialize)]
struct FieldView<'c> {
    #[serde(flatten)]
    field: &'c Field,
    is_checkbox: bool,
    is_textarea: bool,
    is_select: bool,
    is_input: bool,
}

impl<'c> FieldView<'c> {
    fn new(field: &'c Field) -> Self {
        let is_checkbox = field.field_type == FieldType::Checkbox;
        let is_textarea = field.field_type == FieldType::Textarea;
        let is_select = field.field_type == FieldType::Select;
        Self {
            field,
            is_checkbox,
            is_textarea,
            is_select,
            is_input: !(is_checkbox || is_textarea || is_select),
        }
    }
}

#[derive(Serialize)]
struct BodyContext<'c> {
    name: &'c str,
    slug: String,
    theme: &'static str,
    options: &'c Options,
    fields: Vec<FieldView<'c>>,
    items: &'c [Item],
    sections: Vec<&'c FooterSection>,
    socials: Vec<&'c SocialLink>,
}

impl<'c> BodyContext<'c> {
    fn new(component: &'c Component) -> Self {
        let mut sections = Vec::new();
        let mut socials = Vec::new();
        for item in &component.items {
            match item {
                Item::FooterSection(section) => sections.push(section),
                Item::SocialLink(link) => socials.push(link),
                _ => {}
            }
        }

        Self {
            name: &component.name,
            slug: to_kebab_case(&component.name),
            theme: component.theme.as_str(),
            options: &component.options,
            fields: component.fields.iter().map(FieldView::new).collect(),
            items: &component.items,
            sections,
            socials,
        }
    }
}

#[derive(Serialize)]
struct PageContext<'c> {
    header: String,
    language: &'c str,
    name: &'c str,
    theme: &'static str,
    tailwind: bool,
    body: String,
}

/// Render the standalone HTML page for a component.
pub fn render(
    engine: &TemplateEngine<'_>,
    component: &Component,
    options: &GeneratorOptions,
) -> Result<String> {
    let body = engine.render(&body_template(component.kind), &BodyContext::new(component))?;
    let page = PageContext {
        header: provenance(&component.name, CommentStyle::Html, options),
        language: component.directive_text("language").unwrap_or(DEFAULT_LANGUAGE),
        name: &component.name,
        theme: component.theme.as_str(),
        tailwind: component.style == Style::Tailwind,
        body,
    };
    engine.render(PAGE_TEMPLATE, &page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use centaur_parser::parse_program;

    fn page(source: &str) -> String {
        let program = parse_program(source);
        let engine = TemplateEngine::with_builtin_templates().unwrap();
        render(&engine, &program.components[0], &GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn test_page_shell() {
        let html = page("@component Login\n@theme dark\n{\n- Email input\n}");
        assert!(html.starts_with("<!--\n"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title>Login</title>"));
        assert!(html.contains("<body class=\"centaur-dark\">"));
        assert!(html.contains("href=\"Login.css\""));
        assert!(html.contains("src=\"Login.js\""));
        assert!(!html.contains("cdn.tailwindcss.com"));
    }

    #[test]
    fn test_language_and_tailwind() {
        let html = page("@component Hello\n@language de\n@style tailwind\n{\nhero banner\n}");
        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("cdn.tailwindcss.com"));
    }

    #[test]
    fn test_form_controls() {
        let html = page(
            "@component Signup\n@type form\n{\n- Email input required\n- Message textarea\n- Agree to terms checkbox\n}",
        );
        assert!(html.contains("id=\"signup-form\""));
        assert!(html.contains("<input type=\"email\" id=\"field-email\" name=\"email\""));
        assert!(html.contains("<textarea id=\"field-message\""));
        assert!(html.contains("<input type=\"checkbox\" id=\"field-terms\""));
    }

    #[test]
    fn test_navigation_links() {
        let html = page("@component Top\n@type nav\n{\n- Logo: \"Acme\"\n- Home\n- About us\n}");
        assert!(html.contains("class=\"nav-logo\">Acme</a>"));
        assert!(html.contains("<a href=\"#about-us\">About us</a>"));
    }

    #[test]
    fn test_accordion_default_open() {
        let html = page("@component Faq\n@type faq\n{\nfirst one expanded\n## One\nA\n## Two\nB\n}");
        assert_eq!(html.matches("accordion-item open").count(), 1);
    }

    #[test]
    fn test_table_body() {
        let html = page("@component Users\n@type table\n@columns Id, Name\n{\n| 1 | Ada |\n}");
        assert!(html.contains("<th>Id</th>"));
        assert!(html.contains("<td>Ada</td>"));
    }

    #[test]
    fn test_footer_sections_and_socials() {
        let html = page("@component Foot\n@type footer\n{\n# Company\n- About\n- github\n}");
        assert!(html.contains("<h4>Company</h4>"));
        assert!(html.contains(">Github</a>"));
    }

    #[test]
    fn test_pricing_and_testimonial_defaults() {
        let html = page("@component Plans\n@type pricing\n{\n}");
        assert!(html.contains("$29"));
        let html = page("@component Reviews\n@type testimonials\n{\nwith star ratings\n}");
        assert!(html.contains("★★★★★"));
    }
}
