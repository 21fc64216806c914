//! Header/content grouping shared by the accordion and tabs extractors.

use crate::text::unquote;
use once_cell::sync::Lazy;
use regex::Regex;

static ANSWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^a:\s*").unwrap());
static QUOTED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^-\s*["']([^"']+)["']\s*$"#).unwrap());

/// A titled run of description lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// Title carried by a header line: `## Title`, `<prefix> Title` (for
/// `Q:` / `Tab:`) or a list item that is entirely quoted.
fn header_title(line: &str, prefix: &str) -> Option<String> {
    if let Some(rest) = line.strip_prefix("##") {
        return Some(unquote(rest.trim_start_matches('#')).to_string());
    }
    if let (Some(head), Some(rest)) = (line.get(..prefix.len()), line.get(prefix.len()..)) {
        if head.eq_ignore_ascii_case(prefix) {
            return Some(unquote(rest).to_string());
        }
    }
    QUOTED_ITEM.captures(line).map(|c| c[1].trim().to_string())
}

/// Group lines under their headers.
///
/// Content lines append `line + " "` to the open section, with any `A:`
/// prefix removed, so non-empty content keeps a trailing space. Lines
/// before the first header are dropped.
pub fn collect<'a>(lines: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for line in lines {
        if let Some(title) = header_title(line, prefix) {
            sections.push(Section {
                title,
                content: String::new(),
            });
            continue;
        }
        if let Some(section) = sections.last_mut() {
            section.content.push_str(&ANSWER.replace(line, ""));
            section.content.push(' ');
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_header_forms() {
        let lines = ["## First", "body one", "Q: Second?", "A: yes", "more", "- \"Third\"", "x"];
        let sections = collect(lines.iter().copied(), "q:");
        assert_eq!(
            sections,
            vec![
                Section { title: "First".into(), content: "body one ".into() },
                Section { title: "Second?".into(), content: "yes more ".into() },
                Section { title: "Third".into(), content: "x ".into() },
            ]
        );
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let sections = collect(["TAB: Specs", "Weight 2kg"].iter().copied(), "tab:");
        assert_eq!(sections[0].title, "Specs");
        assert_eq!(sections[0].content, "Weight 2kg ");
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let sections = collect(["intro", "## Only"].iter().copied(), "q:");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].content.is_empty());
    }

    #[test]
    fn test_multibyte_lines_do_not_split_chars() {
        let sections = collect(["## €uro", "€ is 3 bytes"].iter().copied(), "tab:");
        assert_eq!(sections[0].title, "€uro");
        assert_eq!(sections[0].content, "€ is 3 bytes ");
    }

    #[test]
    fn test_plain_list_item_is_content() {
        let sections = collect(["## A", "- plain bullet"].iter().copied(), "q:");
        assert_eq!(sections[0].content, "- plain bullet ");
    }
}
