//! Card extraction.

use super::{Extraction, Intent, Slot};
use crate::text::contains_any;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_TITLE: &str = "Card Title";
pub const DEFAULT_CONTENT: &str = "Description text here.";
pub const DEFAULT_BUTTON_TEXT: &str = "View";

static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\d+(?:[.,]\d+)?").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Badge,
    Price,
    Button,
    Title,
    Content,
}

// Button lines are checked before content so "button text: ..." is not
// taken as body copy.
fn classify(lower: &str) -> Option<Role> {
    if lower.contains("badge") {
        Some(Role::Badge)
    } else if lower.contains("price") || lower.contains('$') {
        Some(Role::Price)
    } else if contains_any(lower, &["button", "cta"]) {
        Some(Role::Button)
    } else if contains_any(lower, &["title", "heading", "name"]) {
        Some(Role::Title)
    } else if contains_any(lower, &["content", "description", "text", "body"]) {
        Some(Role::Content)
    } else {
        None
    }
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut title = Slot::default();
    let mut content = Slot::default();
    let mut button = Slot::default();
    let mut price = Slot::default();
    let mut bare_price = None;
    let mut badge = Slot::default();

    for line in intent.each_line() {
        match classify(&line.to_lowercase()) {
            Some(Role::Badge) => badge.offer(line),
            Some(Role::Price) => {
                price.offer(line);
                if bare_price.is_none() {
                    bare_price = PRICE.find(line).map(|m| m.as_str().to_string());
                }
            }
            Some(Role::Button) => button.offer(line),
            Some(Role::Title) => title.offer(line),
            Some(Role::Content) => content.offer(line),
            None => {}
        }
    }

    let mut out = Extraction::new();
    out.set("title", title.or(DEFAULT_TITLE));
    out.set("content", content.or(DEFAULT_CONTENT));
    out.set("buttonText", button.or(DEFAULT_BUTTON_TEXT));
    out.set(
        "hasImage",
        intent.mentions_any(&["image", "photo", "picture"]) && !intent.mentions("no image"),
    );
    out.set("hasButton", intent.mentions_any(&["button", "cta"]));
    if let Some(quoted) = price.when_seen("") {
        let price = if quoted.is_empty() {
            bare_price.unwrap_or_default()
        } else {
            quoted
        };
        out.set("price", price);
    }
    if let Some(badge) = badge.when_seen("") {
        out.set("badge", badge);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_support::run;
    use centaur_core::{ComponentKind, OptionValue};

    #[test]
    fn test_defaults() {
        let out = run(ComponentKind::Card, "A simple card");
        assert_eq!(out.options.get("title"), Some(&OptionValue::Text(DEFAULT_TITLE.into())));
        assert_eq!(out.options.get("content"), Some(&OptionValue::Text(DEFAULT_CONTENT.into())));
        assert_eq!(out.options.get("buttonText"), Some(&OptionValue::Text("View".into())));
        assert_eq!(out.options.get("hasImage"), Some(&OptionValue::Bool(false)));
        assert_eq!(out.options.get("hasButton"), Some(&OptionValue::Bool(false)));
        assert!(out.options.get("price").is_none());
        assert!(out.options.get("badge").is_none());
    }

    #[test]
    fn test_button_line_is_not_content() {
        let out = run(
            ComponentKind::Card,
            "Title: \"Mountain Trip\"\nButton text: \"Book now\"\nDescription: 'Three days in the Alps'",
        );
        assert_eq!(out.options.get("title"), Some(&OptionValue::Text("Mountain Trip".into())));
        assert_eq!(out.options.get("buttonText"), Some(&OptionValue::Text("Book now".into())));
        assert_eq!(
            out.options.get("content"),
            Some(&OptionValue::Text("Three days in the Alps".into()))
        );
        assert_eq!(out.options.get("hasButton"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_image_flag_and_extras() {
        let out = run(ComponentKind::Card, "Product photo on top\nPrice: '$49'\nBadge: \"Sale\"");
        assert_eq!(out.options.get("hasImage"), Some(&OptionValue::Bool(true)));
        assert_eq!(out.options.get("price"), Some(&OptionValue::Text("$49".into())));
        assert_eq!(out.options.get("badge"), Some(&OptionValue::Text("Sale".into())));

        let out = run(ComponentKind::Card, "Costs $12.50 a month");
        assert_eq!(out.options.get("price"), Some(&OptionValue::Text("$12.50".into())));

        let out = run(ComponentKind::Card, "Card with no image");
        assert_eq!(out.options.get("hasImage"), Some(&OptionValue::Bool(false)));
    }
}
