//! Kind-specific intent extractors.
//!
//! Each extractor is a pure function from an [`Intent`] (the free-text block
//! plus the component's directives) to an [`Extraction`]. Extractors never
//! fail: every value has a literal fallback.

mod accordion;
mod card;
mod carousel;
mod footer;
mod form;
mod gallery;
mod hero;
mod modal;
mod navigation;
mod pricing;
mod sections;
mod table;
mod tabs;
mod testimonial;

use crate::config::ParserConfig;
use crate::text::extract_quoted;
use centaur_core::{Component, ComponentKind, DirectiveValue, Field, Item, OptionValue, Options};
use indexmap::IndexMap;

/// Read-only view of a component's description handed to an extractor.
#[derive(Debug)]
pub struct Intent<'a> {
    pub component: &'a str,
    pub text: &'a str,
    /// Lower-cased copy of `text`.
    pub lower: String,
    pub lines: Vec<&'a str>,
    pub directives: &'a IndexMap<String, DirectiveValue>,
    pub config: &'a ParserConfig,
}

impl<'a> Intent<'a> {
    pub fn new(component: &'a Component, config: &'a ParserConfig) -> Self {
        let text = component.raw_description.as_str();
        Self {
            component: &component.name,
            text,
            lower: text.to_lowercase(),
            lines: text.lines().map(str::trim).filter(|l| !l.is_empty()).collect(),
            directives: &component.directives,
            config,
        }
    }

    /// Whether the lower-cased description contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(n))
    }

    pub fn directive_text(&self, name: &str) -> Option<&'a str> {
        self.directives.get(name).and_then(DirectiveValue::as_text)
    }

    pub fn each_line(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }
}

/// Structured data produced by an extractor.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub fields: Vec<Field>,
    pub items: Vec<Item>,
    pub options: Options,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.options.insert(key.to_string(), value.into());
    }

    /// Move the extracted data onto a component.
    pub fn apply_to(self, component: &mut Component) {
        component.fields = self.fields;
        component.items = self.items;
        component.options = self.options;
    }
}

/// Collects the first quoted text offered for one display role.
#[derive(Debug, Default)]
pub(crate) struct Slot {
    seen: bool,
    text: Option<String>,
}

impl Slot {
    /// Record a line classified under this role.
    pub fn offer(&mut self, line: &str) {
        self.seen = true;
        if self.text.is_none() {
            self.text = extract_quoted(line);
        }
    }

    pub fn or(self, default: &str) -> String {
        self.text.unwrap_or_else(|| default.to_string())
    }

    /// Text only when a line for this role exists.
    pub fn when_seen(self, default: &str) -> Option<String> {
        if self.seen {
            Some(self.or(default))
        } else {
            None
        }
    }
}

/// Run the extractor for `kind` over the component's description.
pub fn extract(kind: ComponentKind, intent: &Intent<'_>) -> Extraction {
    match kind {
        ComponentKind::Form => form::extract(intent),
        ComponentKind::Hero => hero::extract(intent),
        ComponentKind::Card => card::extract(intent),
        ComponentKind::Navigation => navigation::extract(intent),
        ComponentKind::Modal => modal::extract(intent),
        ComponentKind::Table => table::extract(intent),
        ComponentKind::Footer => footer::extract(intent),
        ComponentKind::Gallery => gallery::extract(intent),
        ComponentKind::Accordion => accordion::extract(intent),
        ComponentKind::Tabs => tabs::extract(intent),
        ComponentKind::Carousel => carousel::extract(intent),
        ComponentKind::Pricing => pricing::extract(intent),
        ComponentKind::Testimonial => testimonial::extract(intent),
    }
}
