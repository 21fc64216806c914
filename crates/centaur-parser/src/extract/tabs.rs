//! Tabs extraction.

use super::{sections, Extraction, Intent};
use centaur_core::{Item, TabEntry};

pub const DEFAULT_TABS: [(&str, &str); 3] = [
    ("Overview", "An overview of the product and what it offers."),
    ("Features", "A list of the main features."),
    ("Pricing", "Plans and pricing details."),
];

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut tabs: Vec<TabEntry> = sections::collect(intent.each_line(), "tab:")
        .into_iter()
        .map(|s| TabEntry {
            title: s.title,
            content: s.content,
        })
        .collect();

    if tabs.is_empty() {
        tabs = DEFAULT_TABS
            .iter()
            .map(|(title, content)| TabEntry {
                title: title.to_string(),
                content: content.to_string(),
            })
            .collect();
    }

    let mut out = Extraction::new();
    out.items = tabs.into_iter().map(Item::TabEntry).collect();
    out.set("vertical", intent.mentions("vertical"));
    out.set("pills", intent.mentions("pill"));
    out
}
