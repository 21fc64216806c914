//! Text helpers shared by the intent extractors.

use once_cell::sync::Lazy;
use regex::Regex;

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["']([^"']+)["']"#).unwrap());
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s-]+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Contents of the first single- or double-quoted substring on a line.
pub fn extract_quoted(line: &str) -> Option<String> {
    QUOTED.captures(line).map(|c| c[1].to_string())
}

/// First quoted text on the first line that satisfies `pred` and carries a quote.
pub fn quoted_where<'a, I, F>(lines: I, pred: F) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> bool,
{
    lines
        .into_iter()
        .filter(|line| pred(&line.to_lowercase()))
        .find_map(extract_quoted)
}

/// Whether a trimmed line is a `-` list item.
pub fn is_list_item(line: &str) -> bool {
    line.trim_start().starts_with('-')
}

/// Text of a list item with the leading dashes and whitespace removed.
pub fn list_item_text(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

/// Lowercase the text and hyphenate whitespace runs.
pub fn slugify(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), "-").to_lowercase()
}

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Stable pseudo-random number in `1..=modulo` for placeholder media.
///
/// FNV-1a over the component name and item index, so the value is the same
/// across runs and toolchains.
pub fn placeholder_number(component: &str, index: usize, modulo: u64) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    let hash = component
        .bytes()
        .chain((index as u64).to_le_bytes())
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME));
    hash % modulo.max(1) + 1
}

/// Placeholder image URL with a stable randomised parameter.
pub fn placeholder_image(component: &str, index: usize, width: u32, height: u32) -> String {
    format!(
        "https://picsum.photos/{width}/{height}?random={}",
        placeholder_number(component, index, 1000)
    )
}

/// Strip one pair of matching outer quotes, if present.
pub fn unquote(text: &str) -> &str {
    let t = text.trim();
    for q in ['"', '\''] {
        if t.len() >= 2 && t.starts_with(q) && t.ends_with(q) {
            return t[1..t.len() - 1].trim();
        }
    }
    t
}
