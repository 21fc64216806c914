//! Property-based tests for the scanner and extractors.
//!
//! Parsing is total: arbitrary text must never panic, and every component
//! that comes out carries a kind and its defaults.

use centaur_core::ComponentKind;
use centaur_parser::{detect_kind, parse_program};
use proptest::prelude::*;

/// Lines drawn from the vocabulary the extractors react to.
fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("{".to_string()),
        Just("}".to_string()),
        Just("@component".to_string()),
        "[A-Za-z]{1,8}".prop_map(|n| format!("@component {n}")),
        prop::sample::select(vec![
            "@type form", "@type faq", "@type nav", "@type bogus", "@theme dark",
            "@theme glass", "@style tailwind", "@columns A, B", "@size large", "@",
        ])
        .prop_map(str::to_string),
        prop::sample::select(vec![
            "## Header", "Q: Why?", "A: Because.", "Tab: One", "- item", "- 'quoted'",
            "> A quote", "$29/month", "Button: \"Go\"", "Fields:", "Styling:",
            "Behavior:", "| a | b |", "4 columns", "3 seconds", "© 2020",
        ])
        .prop_map(str::to_string),
        "[ -~]{0,40}",
    ]
}

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec(source_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_parse_never_panics(input in "\\PC*") {
        let _ = parse_program(&input);
    }

    #[test]
    fn test_structured_sources_parse(input in source()) {
        let program = parse_program(&input);
        let declared = input
            .lines()
            .filter(|l| l.trim() == "@component" || l.trim().starts_with("@component "))
            .count();
        prop_assert_eq!(program.components.len(), declared);
        for component in &program.components {
            prop_assert!(ComponentKind::ALL.contains(&component.kind));
            prop_assert!(!component.name.is_empty());
        }
    }

    #[test]
    fn test_no_component_directive_no_components(input in "[^@]*") {
        prop_assert!(parse_program(&input).is_empty());
    }

    #[test]
    fn test_detection_is_total(text in "\\PC*") {
        let kind = detect_kind(&text);
        prop_assert!(ComponentKind::ALL.contains(&kind));
    }
}
