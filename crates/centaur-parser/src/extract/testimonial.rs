//! Testimonial extraction.
//!
//! A quote starts at a `>` line or a fully quoted line. The first list line
//! after it names the author as `Name, Role at Company` or
//! `Name, Role, Company`.

use super::{Extraction, Intent};
use crate::text::{is_list_item, list_item_text, placeholder_number, unquote};
use centaur_core::{Item, Testimonial};

pub const DEFAULT_RATING: u8 = 5;

const DEFAULTS: [(&str, &str, &str, &str); 3] = [
    (
        "This product completely changed how our team works.",
        "Sarah Johnson",
        "Product Manager",
        "TechCorp",
    ),
    (
        "Setup took five minutes and support has been fantastic.",
        "Michael Chen",
        "CTO",
        "StartupXYZ",
    ),
    (
        "The best investment we made this year.",
        "Emily Davis",
        "Founder",
        "DesignStudio",
    ),
];

fn avatar(component: &str, index: usize) -> String {
    format!("https://i.pravatar.cc/150?img={}", placeholder_number(component, index, 70))
}

/// Quote text carried by a line that opens a testimonial.
fn quote_of(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('>') {
        return Some(unquote(rest));
    }
    let quoted = (line.starts_with('"') && line.ends_with('"'))
        || (line.starts_with('\'') && line.ends_with('\''));
    if quoted && line.len() >= 2 {
        Some(unquote(line))
    } else {
        None
    }
}

/// Split `Name, Role at Company` / `Name, Role, Company`.
fn attribution(text: &str) -> (String, String, String) {
    let (author, rest) = match text.split_once(',') {
        Some((author, rest)) => (author.trim(), rest.trim()),
        None => (text.trim(), ""),
    };
    let (role, company) = match rest.split_once(" at ").or_else(|| rest.split_once(',')) {
        Some((role, company)) => (role.trim(), company.trim()),
        None => (rest, ""),
    };
    (author.to_string(), role.to_string(), company.to_string())
}

fn new_testimonial(component: &str, index: usize, quote: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        author: String::new(),
        role: String::new(),
        company: String::new(),
        avatar: avatar(component, index),
        rating: DEFAULT_RATING,
    }
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut testimonials: Vec<Testimonial> = Vec::new();
    let mut awaiting_author = false;

    for line in intent.each_line() {
        if let Some(quote) = quote_of(line) {
            testimonials.push(new_testimonial(intent.component, testimonials.len(), quote));
            awaiting_author = true;
        } else if awaiting_author && is_list_item(line) {
            if let Some(current) = testimonials.last_mut() {
                let (author, role, company) = attribution(list_item_text(line));
                current.author = author;
                current.role = role;
                current.company = company;
            }
            awaiting_author = false;
        }
    }

    if testimonials.is_empty() {
        testimonials = DEFAULTS
            .iter()
            .enumerate()
            .map(|(i, (quote, author, role, company))| Testimonial {
                author: author.to_string(),
                role: role.to_string(),
                company: company.to_string(),
                ..new_testimonial(intent.component, i, quote)
            })
            .collect();
    }

    let layout = if intent.mentions("grid") { "grid" } else { "carousel" };

    let mut out = Extraction::new();
    out.items = testimonials.into_iter().map(Item::Testimonial).collect();
    out.set("layout", layout);
    out.set("showStars", intent.mentions_any(&["star", "rating"]));
    out
}
