//! Navigation bar extraction.

use super::{Extraction, Intent};
use crate::text::{contains_any, extract_quoted, is_list_item, list_item_text, quoted_where, slugify};
use centaur_core::{Item, NavLink};

pub const DEFAULT_LOGO: &str = "Brand";
pub const DEFAULT_CTA: &str = "Get Started";

/// Menu used when the description lists no links.
pub const DEFAULT_LINKS: [(&str, &str); 4] = [
    ("Home", "#"),
    ("Features", "#features"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

fn is_logo_line(lower: &str) -> bool {
    contains_any(lower, &["logo", "brand"])
}

fn is_cta_line(lower: &str) -> bool {
    contains_any(lower, &["button", "cta"])
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let logo = quoted_where(intent.each_line(), is_logo_line).unwrap_or_else(|| DEFAULT_LOGO.to_string());

    let links: Vec<NavLink> = intent
        .each_line()
        .filter(|line| is_list_item(line))
        .filter(|line| {
            let lower = line.to_lowercase();
            !is_logo_line(&lower) && !is_cta_line(&lower)
        })
        .filter_map(|line| {
            let text = extract_quoted(line).unwrap_or_else(|| list_item_text(line).to_string());
            if text.is_empty() {
                return None;
            }
            let href = format!("#{}", slugify(&text));
            Some(NavLink { text, href })
        })
        .collect();

    let links = if links.is_empty() {
        DEFAULT_LINKS
            .iter()
            .map(|(text, href)| NavLink {
                text: text.to_string(),
                href: href.to_string(),
            })
            .collect()
    } else {
        links
    };

    let has_cta = intent.each_line().any(|l| is_cta_line(&l.to_lowercase()));

    let mut out = Extraction::new();
    out.items = links.into_iter().map(Item::NavLink).collect();
    out.set("logo", logo);
    out.set("sticky", intent.mentions_any(&["sticky", "fixed"]));
    if has_cta {
        let cta = quoted_where(intent.each_line(), is_cta_line).unwrap_or_else(|| DEFAULT_CTA.to_string());
        out.set("ctaText", cta);
    }
    out
}
