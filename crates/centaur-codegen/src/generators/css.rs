//! Stylesheet assembly.

use super::header::{provenance, CommentStyle};
use super::GeneratorOptions;
use crate::theme::{css_variables, Accent};
use centaur_core::{Component, ComponentKind, Style};

const BASE: &str = include_str!("../../templates/css/base.css");
const RESPONSIVE: &str = include_str!("../../templates/css/responsive.css");

fn kind_rules(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Form => include_str!("../../templates/css/form.css"),
        ComponentKind::Hero => include_str!("../../templates/css/hero.css"),
        ComponentKind::Card => include_str!("../../templates/css/card.css"),
        ComponentKind::Navigation => include_str!("../../templates/css/navigation.css"),
        ComponentKind::Modal => include_str!("../../templates/css/modal.css"),
        ComponentKind::Table => include_str!("../../templates/css/table.css"),
        ComponentKind::Footer => include_str!("../../templates/css/footer.css"),
        ComponentKind::Gallery => include_str!("../../templates/css/gallery.css"),
        ComponentKind::Accordion => include_str!("../../templates/css/accordion.css"),
        ComponentKind::Tabs => include_str!("../../templates/css/tabs.css"),
        ComponentKind::Carousel => include_str!("../../templates/css/carousel.css"),
        ComponentKind::Pricing => include_str!("../../templates/css/pricing.css"),
        ComponentKind::Testimonial => include_str!("../../templates/css/testimonial.css"),
    }
}

/// Accent named by `@accent`, falling back to gold.
pub fn accent_of(component: &Component) -> Accent {
    match component.directive_text("accent") {
        Some(name) => Accent::parse(name).unwrap_or_else(|| {
            log::warn!("{}: unknown @accent '{}', using gold", component.name, name);
            Accent::default()
        }),
        None => Accent::default(),
    }
}

/// Whether the `@responsive` directive asks for media queries.
pub fn is_responsive(component: &Component) -> bool {
    component
        .directive("responsive")
        .is_some_and(|value| value.is_truthy())
}

/// Render the stylesheet for a component.
///
/// Tailwind output keeps the palette variables and kind rules but drops the
/// reset and button base, which the Tailwind preflight already provides.
pub fn render(component: &Component, options: &GeneratorOptions) -> String {
    let mut css = provenance(&component.name, CommentStyle::Css, options);
    css.push('\n');
    css.push_str(&css_variables(component.theme, accent_of(component)));
    css.push('\n');
    if component.style == Style::Vanilla {
        css.push_str(BASE);
        css.push('\n');
    }
    css.push_str(kind_rules(component.kind));
    if is_responsive(component) {
        css.push('\n');
        css.push_str(RESPONSIVE);
    }
    css
}
