//! Carousel / slider extraction.

use super::{Extraction, Intent};
use crate::text::{extract_quoted, is_list_item, list_item_text, placeholder_image};
use centaur_core::{Item, Slide};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_SLIDE_COUNT: usize = 4;
pub const DEFAULT_INTERVAL_MS: i64 = 5000;

static SECONDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+)\s*(?:seconds?|secs?)\b").unwrap());

fn slide(intent: &Intent<'_>, index: usize, title: String) -> Slide {
    Slide {
        image: placeholder_image(intent.component, index, 1200, 500),
        title,
        description: String::new(),
    }
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut slides: Vec<Slide> = intent
        .each_line()
        .filter(|line| is_list_item(line))
        .map(|line| extract_quoted(line).unwrap_or_else(|| list_item_text(line).to_string()))
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(i, text)| slide(intent, i, text))
        .collect();

    if slides.is_empty() {
        slides = (1..=DEFAULT_SLIDE_COUNT)
            .map(|n| slide(intent, n - 1, format!("Slide {n}")))
            .collect();
    }

    let interval = SECONDS
        .captures(&intent.lower)
        .and_then(|c| c[1].parse::<i64>().ok())
        .and_then(|secs| secs.checked_mul(1000))
        .unwrap_or(DEFAULT_INTERVAL_MS);

    let mut out = Extraction::new();
    out.items = slides.into_iter().map(Item::Slide).collect();
    out.set("autoplay", intent.mentions_any(&["autoplay", "auto-play", "automatic"]));
    out.set("interval", interval);
    out.set("showDots", !intent.mentions("no dots"));
    out.set("showArrows", !intent.mentions("no arrows"));
    out
}
