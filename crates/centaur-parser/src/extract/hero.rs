//! Hero section extraction.

use super::{Extraction, Intent, Slot};
use crate::text::contains_any;

pub const DEFAULT_HEADLINE: &str = "Welcome to Our Platform";
pub const DEFAULT_SUBHEADLINE: &str = "Build something amazing with us today.";
pub const DEFAULT_CTA: &str = "Get Started";
pub const DEFAULT_SECONDARY: &str = "Learn More";
pub const DEFAULT_BADGE: &str = "New";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Badge,
    Subheadline,
    Headline,
    Secondary,
    Cta,
}

fn classify(lower: &str) -> Option<Role> {
    if lower.contains("badge") {
        Some(Role::Badge)
    } else if contains_any(lower, &["subhead", "subtitle", "tagline", "description"]) {
        Some(Role::Subheadline)
    } else if contains_any(lower, &["headline", "heading", "title"]) {
        Some(Role::Headline)
    } else if lower.contains("secondary") && contains_any(lower, &["button", "cta", "link"]) {
        Some(Role::Secondary)
    } else if contains_any(lower, &["button", "cta", "call to action"]) {
        Some(Role::Cta)
    } else {
        None
    }
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut badge = Slot::default();
    let mut headline = Slot::default();
    let mut subheadline = Slot::default();
    let mut cta = Slot::default();
    let mut secondary = Slot::default();

    for line in intent.each_line() {
        match classify(&line.to_lowercase()) {
            Some(Role::Badge) => badge.offer(line),
            Some(Role::Subheadline) => subheadline.offer(line),
            Some(Role::Headline) => headline.offer(line),
            Some(Role::Secondary) => secondary.offer(line),
            Some(Role::Cta) => cta.offer(line),
            None => {}
        }
    }

    let mut out = Extraction::new();
    out.set("headline", headline.or(DEFAULT_HEADLINE));
    out.set("subheadline", subheadline.or(DEFAULT_SUBHEADLINE));
    out.set("ctaText", cta.or(DEFAULT_CTA));
    out.set("secondaryText", secondary.when_seen(DEFAULT_SECONDARY));
    out.set("badge", badge.when_seen(DEFAULT_BADGE));
    out.set(
        "backgroundImage",
        intent.mentions_any(&["background image", "background-image", "bg image", "image background"]),
    );
    out.set("centered", !intent.mentions_any(&["left aligned", "left-aligned"]));
    out
}
