//! Closed value sets used by the component model.

use std::fmt;

/// Classification of a component, driving which extractor and renderer apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ComponentKind {
    #[default]
    Form,
    Hero,
    Card,
    Navigation,
    Modal,
    Table,
    Footer,
    Gallery,
    Accordion,
    Tabs,
    Carousel,
    Pricing,
    Testimonial,
}

impl ComponentKind {
    /// Every kind, in detection priority order.
    pub const ALL: [ComponentKind; 13] = [
        Self::Form,
        Self::Hero,
        Self::Card,
        Self::Navigation,
        Self::Modal,
        Self::Table,
        Self::Footer,
        Self::Gallery,
        Self::Accordion,
        Self::Tabs,
        Self::Carousel,
        Self::Pricing,
        Self::Testimonial,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Hero => "hero",
            Self::Card => "card",
            Self::Navigation => "navigation",
            Self::Modal => "modal",
            Self::Table => "table",
            Self::Footer => "footer",
            Self::Gallery => "gallery",
            Self::Accordion => "accordion",
            Self::Tabs => "tabs",
            Self::Carousel => "carousel",
            Self::Pricing => "pricing",
            Self::Testimonial => "testimonial",
        }
    }

    /// Resolve a `@type` value, accepting canonical names and aliases.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_alias(value: &str) -> Option<Self> {
        let kind = match value.trim().to_lowercase().as_str() {
            "form" | "contact" | "signup" | "login" => Self::Form,
            "hero" | "banner" | "jumbotron" => Self::Hero,
            "card" | "cards" => Self::Card,
            "navigation" | "nav" | "navbar" | "menu" => Self::Navigation,
            "modal" | "popup" | "dialog" => Self::Modal,
            "table" | "datatable" | "data-table" => Self::Table,
            "footer" => Self::Footer,
            "gallery" | "photos" | "images" => Self::Gallery,
            "accordion" | "faq" | "collapsible" => Self::Accordion,
            "tabs" | "tab" | "tabbed" => Self::Tabs,
            "carousel" | "slider" | "slideshow" => Self::Carousel,
            "pricing" | "plans" | "prices" => Self::Pricing,
            "testimonial" | "testimonials" | "reviews" => Self::Testimonial,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether the generated markup needs a companion script.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Self::Form
                | Self::Navigation
                | Self::Modal
                | Self::Table
                | Self::Gallery
                | Self::Accordion
                | Self::Tabs
                | Self::Carousel
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour theme of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Glass,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "glass" => Some(Self::Glass),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Glass => "glass",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling mode handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    #[default]
    Vanilla,
    Tailwind,
}

impl Style {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "vanilla" | "css" => Some(Self::Vanilla),
            "tailwind" => Some(Self::Tailwind),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::Tailwind => "tailwind",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTML input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldType {
    Text,
    Email,
    Password,
    Tel,
    Url,
    Number,
    Date,
    Select,
    Textarea,
    Checkbox,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_priority_order() {
        let names: Vec<_> = ComponentKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "form", "hero", "card", "navigation", "modal", "table", "footer", "gallery",
                "accordion", "tabs", "carousel", "pricing", "testimonial",
            ]
        );
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!(ComponentKind::from_alias("nav"), Some(ComponentKind::Navigation));
        assert_eq!(ComponentKind::from_alias("Navbar"), Some(ComponentKind::Navigation));
        assert_eq!(ComponentKind::from_alias("faq"), Some(ComponentKind::Accordion));
        assert_eq!(ComponentKind::from_alias("collapsible"), Some(ComponentKind::Accordion));
        assert_eq!(ComponentKind::from_alias("popup"), Some(ComponentKind::Modal));
        assert_eq!(ComponentKind::from_alias(" dialog "), Some(ComponentKind::Modal));
        assert_eq!(ComponentKind::from_alias("widget"), None);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_alias(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_theme_and_style_defaults() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Style::default(), Style::Vanilla);
        assert_eq!(Theme::parse("DARK"), Some(Theme::Dark));
        assert_eq!(Style::parse("tailwind"), Some(Style::Tailwind));
        assert_eq!(Theme::parse("neon"), None);
    }
}
