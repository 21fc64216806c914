//! Image gallery extraction.

use super::{Extraction, Intent};
use crate::text::{extract_quoted, is_list_item, list_item_text, placeholder_image};
use centaur_core::{GalleryImage, Item};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_COLUMNS: i64 = 3;
pub const DEFAULT_IMAGE_COUNT: usize = 6;

static COLUMNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*columns?").unwrap());

fn layout(intent: &Intent<'_>) -> &'static str {
    if intent.mentions("masonry") {
        "masonry"
    } else if intent.mentions_any(&["carousel", "slider"]) {
        "carousel"
    } else {
        "grid"
    }
}

fn image(intent: &Intent<'_>, index: usize, alt: String, caption: String) -> GalleryImage {
    GalleryImage {
        src: placeholder_image(intent.component, index, 400, 300),
        alt,
        caption,
    }
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut images: Vec<GalleryImage> = intent
        .each_line()
        .filter(|line| is_list_item(line))
        .map(|line| extract_quoted(line).unwrap_or_else(|| list_item_text(line).to_string()))
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(i, text)| image(intent, i, text.clone(), text))
        .collect();

    if images.is_empty() {
        images = (1..=DEFAULT_IMAGE_COUNT)
            .map(|n| image(intent, n - 1, format!("Gallery image {n}"), format!("Image {n}")))
            .collect();
    }

    let columns = COLUMNS
        .captures(&intent.lower)
        .and_then(|c| c[1].parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_COLUMNS);

    let mut out = Extraction::new();
    out.items = images.into_iter().map(Item::GalleryImage).collect();
    out.set("layout", layout(intent));
    out.set("columns", columns);
    out.set("lightbox", intent.mentions("lightbox"));
    out
}
