//! Component model produced by the parser and consumed by the renderer.

use crate::types::{ComponentKind, FieldType, Style, Theme};
use indexmap::IndexMap;

/// A parsed source file: every component in source order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub components: Vec<Component>,
    /// Non-fatal findings raised while scanning.
    pub diagnostics: Vec<Diagnostic>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Value of a `@directive` line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DirectiveValue {
    /// Directive with a non-empty value.
    Text(String),
    /// Directive with no value, used as a boolean flag.
    Flag(bool),
}

impl DirectiveValue {
    /// Build from the raw (trimmed) value; an empty value becomes a truthy flag.
    pub fn from_raw(value: &str) -> Self {
        if value.is_empty() {
            Self::Flag(true)
        } else {
            Self::Text(value.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag(_) => None,
        }
    }

    /// Flags and any value other than `false`/`no`/`off` evaluate truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) => !matches!(s.to_lowercase().as_str(), "false" | "no" | "off" | "0"),
        }
    }
}

/// Scalar attribute stored in a component's open `options` map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
    /// Explicitly unset, e.g. an accordion with no entry open by default.
    None,
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::None)
    }
}

/// Ordered, string-keyed component options.
pub type Options = IndexMap<String, OptionValue>;

/// A form input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Field {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub field_type: FieldType,
    /// Semantic identifier taken from the matched rule.
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub min_length: Option<u32>,
    /// Choices for select fields; empty otherwise.
    pub options: Vec<String>,
}

/// Navigation or footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccordionEntry {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabEntry {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingPlan {
    pub name: String,
    /// Numeric part of the price, without currency symbol.
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub highlighted: bool,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    pub avatar: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// A kind-dependent list entry of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "item", rename_all = "camelCase"))]
pub enum Item {
    NavLink(NavLink),
    TableRow(TableRow),
    AccordionEntry(AccordionEntry),
    TabEntry(TabEntry),
    Slide(Slide),
    GalleryImage(GalleryImage),
    PricingPlan(PricingPlan),
    Testimonial(Testimonial),
    FooterSection(FooterSection),
    SocialLink(SocialLink),
}

/// One `@component` block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Component {
    pub name: String,
    pub kind: ComponentKind,
    pub theme: Theme,
    pub style: Style,
    pub raw_description: String,
    /// Every directive seen for this component, including unknown ones.
    pub directives: IndexMap<String, DirectiveValue>,
    pub fields: Vec<Field>,
    pub items: Vec<Item>,
    pub options: Options,
}

impl Component {
    /// Create an empty component with default theme, style and kind.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ComponentKind::default(),
            theme: Theme::default(),
            style: Style::default(),
            raw_description: String::new(),
            directives: IndexMap::new(),
            fields: Vec::new(),
            items: Vec::new(),
            options: Options::new(),
        }
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveValue> {
        self.directives.get(name)
    }

    /// Text value of a directive; flags have none.
    pub fn directive_text(&self, name: &str) -> Option<&str> {
        self.directives.get(name).and_then(DirectiveValue::as_text)
    }

    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    pub fn option_text(&self, key: &str) -> Option<&str> {
        match self.options.get(key) {
            Some(OptionValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Boolean option; absent keys read as `false`.
    pub fn option_bool(&self, key: &str) -> bool {
        matches!(self.options.get(key), Some(OptionValue::Bool(true)))
    }

    pub fn option_int(&self, key: &str) -> Option<i64> {
        match self.options.get(key) {
            Some(OptionValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn option_list(&self, key: &str) -> Option<&[String]> {
        match self.options.get(key) {
            Some(OptionValue::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn set_option(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.options.insert(key.to_string(), value.into());
    }
}

/// Non-fatal finding recorded while scanning a program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "diagnostic", rename_all = "camelCase"))]
pub enum Diagnostic {
    /// `@component` had no name; a placeholder was assigned.
    EmptyName { assigned: String, line: usize },
    /// `@type` matched no kind or alias; keyword detection was used instead.
    UnknownType { component: String, value: String, line: usize },
    UnknownTheme { component: String, value: String, line: usize },
    UnknownStyle { component: String, value: String, line: usize },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { assigned, line } => {
                write!(f, "line {line}: @component has no name, using '{assigned}'")
            }
            Self::UnknownType { component, value, line } => write!(
                f,
                "line {line}: unknown @type '{value}' on {component}, detecting from description"
            ),
            Self::UnknownTheme { component, value, line } => {
                write!(f, "line {line}: unknown @theme '{value}' on {component}, using light")
            }
            Self::UnknownStyle { component, value, line } => {
                write!(f, "line {line}: unknown @style '{value}' on {component}, using vanilla")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_value_from_raw() {
        assert_eq!(DirectiveValue::from_raw(""), DirectiveValue::Flag(true));
        assert_eq!(DirectiveValue::from_raw("dark"), DirectiveValue::Text("dark".into()));
        assert!(DirectiveValue::from_raw("").is_truthy());
        assert!(!DirectiveValue::from_raw("false").is_truthy());
    }

    #[test]
    fn test_new_component_has_empty_containers() {
        let c = Component::new("Login");
        assert_eq!(c.kind, ComponentKind::Form);
        assert!(c.fields.is_empty());
        assert!(c.items.is_empty());
        assert!(c.options.is_empty());
    }

    #[test]
    fn test_option_accessors() {
        let mut c = Component::new("X");
        c.set_option("sticky", true);
        c.set_option("interval", 5000i64);
        c.set_option("logo", "Acme");
        c.set_option("defaultOpen", None::<i64>);
        assert!(c.option_bool("sticky"));
        assert!(!c.option_bool("missing"));
        assert_eq!(c.option_int("interval"), Some(5000));
        assert_eq!(c.option_text("logo"), Some("Acme"));
        assert_eq!(c.option("defaultOpen"), Some(&OptionValue::None));
    }
}
