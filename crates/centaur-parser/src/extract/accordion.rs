//! Accordion / FAQ extraction.

use super::{sections, Extraction, Intent};
use centaur_core::{AccordionEntry, Item, OptionValue};

pub const DEFAULT_ENTRIES: [(&str, &str); 3] = [
    (
        "What is this product?",
        "A short answer explaining what the product does.",
    ),
    (
        "How do I get started?",
        "Sign up for an account and follow the onboarding guide.",
    ),
    (
        "Can I cancel anytime?",
        "Yes. You can cancel your subscription at any time.",
    ),
];

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut entries: Vec<AccordionEntry> = sections::collect(intent.each_line(), "q:")
        .into_iter()
        .map(|s| AccordionEntry {
            title: s.title,
            content: s.content,
        })
        .collect();

    if entries.is_empty() {
        entries = DEFAULT_ENTRIES
            .iter()
            .map(|(title, content)| AccordionEntry {
                title: title.to_string(),
                content: content.to_string(),
            })
            .collect();
    }

    let default_open = if intent.mentions_any(&["open", "expanded"]) {
        OptionValue::Int(0)
    } else {
        OptionValue::None
    };

    let mut out = Extraction::new();
    out.items = entries.into_iter().map(Item::AccordionEntry).collect();
    out.set("allowMultiple", intent.mentions("multiple"));
    out.set("defaultOpen", default_open);
    out
}
