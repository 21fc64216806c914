//! Behaviour scripts for interactive kinds.

use super::header::{provenance, CommentStyle};
use super::GeneratorOptions;
use centaur_core::{Component, ComponentKind};

/// Body emitted for kinds without behaviour.
pub const EMPTY_SCRIPT: &str = "(function () {})();\n";

fn behaviour(kind: ComponentKind) -> Option<&'static str> {
    let script = match kind {
        ComponentKind::Form => include_str!("../../templates/js/form.js"),
        ComponentKind::Navigation => include_str!("../../templates/js/navigation.js"),
        ComponentKind::Modal => include_str!("../../templates/js/modal.js"),
        ComponentKind::Table => include_str!("../../templates/js/table.js"),
        ComponentKind::Gallery => include_str!("../../templates/js/gallery.js"),
        ComponentKind::Accordion => include_str!("../../templates/js/accordion.js"),
        ComponentKind::Tabs => include_str!("../../templates/js/tabs.js"),
        ComponentKind::Carousel => include_str!("../../templates/js/carousel.js"),
        ComponentKind::Hero
        | ComponentKind::Card
        | ComponentKind::Footer
        | ComponentKind::Pricing
        | ComponentKind::Testimonial => return None,
    };
    Some(script)
}

/// Render the script for a component.
pub fn render(component: &Component, options: &GeneratorOptions) -> String {
    let mut js = provenance(&component.name, CommentStyle::Js, options);
    js.push('\n');
    js.push_str(behaviour(component.kind).unwrap_or(EMPTY_SCRIPT));
    js
}
