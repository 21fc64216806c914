//! Modal dialog extraction.

use super::{Extraction, Intent, Slot};
use crate::text::contains_any;

pub const DEFAULT_TITLE: &str = "Modal Title";
pub const DEFAULT_CONTENT: &str = "This is the modal content.";
pub const DEFAULT_CONFIRM: &str = "Confirm";
pub const DEFAULT_CANCEL: &str = "Cancel";
pub const DEFAULT_TRIGGER: &str = "Open Modal";
pub const DEFAULT_SIZE: &str = "medium";

const SIZES: [&str; 3] = ["small", "medium", "large"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Trigger,
    Confirm,
    Cancel,
    Title,
    Content,
}

fn classify(lower: &str) -> Option<Role> {
    if contains_any(lower, &["trigger", "open button", "opens"]) {
        Some(Role::Trigger)
    } else if contains_any(lower, &["confirm", "primary", "ok button"]) {
        Some(Role::Confirm)
    } else if contains_any(lower, &["cancel", "dismiss"]) {
        Some(Role::Cancel)
    } else if contains_any(lower, &["title", "heading", "header"]) {
        Some(Role::Title)
    } else if contains_any(lower, &["content", "body", "message", "text"]) {
        Some(Role::Content)
    } else {
        None
    }
}

/// Size from the `@size` directive, else from keywords.
fn size(intent: &Intent<'_>) -> String {
    let directive = intent
        .directive_text("size")
        .map(|s| s.trim().to_lowercase())
        .filter(|s| SIZES.contains(&s.as_str()));
    if let Some(size) = directive {
        return size;
    }
    if intent.mentions("small") {
        "small".to_string()
    } else if intent.mentions("large") {
        "large".to_string()
    } else {
        DEFAULT_SIZE.to_string()
    }
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut trigger = Slot::default();
    let mut confirm = Slot::default();
    let mut cancel = Slot::default();
    let mut title = Slot::default();
    let mut content = Slot::default();

    for line in intent.each_line() {
        match classify(&line.to_lowercase()) {
            Some(Role::Trigger) => trigger.offer(line),
            Some(Role::Confirm) => confirm.offer(line),
            Some(Role::Cancel) => cancel.offer(line),
            Some(Role::Title) => title.offer(line),
            Some(Role::Content) => content.offer(line),
            None => {}
        }
    }

    let trigger_text = match intent.directive_text("trigger") {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => trigger.or(DEFAULT_TRIGGER),
    };

    let mut out = Extraction::new();
    out.set("title", title.or(DEFAULT_TITLE));
    out.set("content", content.or(DEFAULT_CONTENT));
    out.set("confirmText", confirm.or(DEFAULT_CONFIRM));
    out.set("cancelText", cancel.or(DEFAULT_CANCEL));
    out.set("triggerText", trigger_text);
    out.set("size", size(intent));
    out.set("showClose", !intent.mentions_any(&["no close", "without close"]));
    out.set("showConfirm", intent.mentions("confirm"));
    out.set("showCancel", intent.mentions("cancel"));
    out.set("closeOnOverlay", intent.mentions_any(&["overlay", "click outside"]));
    out.set("closeOnEscape", intent.mentions_any(&["escape", "esc key"]));
    out
}
