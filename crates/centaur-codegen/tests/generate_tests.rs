//! Rendering complete sources.

use centaur_codegen::{CodeGenerator, GeneratorOptions, WebGenerator};
use centaur_core::ComponentKind;
use centaur_parser::parse_program;

const LANDING: &str = include_str!("../../centaur-parser/tests/fixtures/landing.centaur");

#[test]
fn test_every_kind_renders_with_defaults() {
    let generator = WebGenerator::new().unwrap();
    for kind in ComponentKind::ALL {
        let source = format!("@component Sample\n@type {kind}\n{{\n}}");
        let program = parse_program(&source);
        let generated = generator.generate(&program.components[0]).unwrap();

        assert!(generated.html.contains("<!DOCTYPE html>"), "{kind}");
        assert!(generated.html.contains("@component Sample"), "{kind}");
        assert!(generated.css.contains("--centaur-accent"), "{kind}");
        assert!(generated.js.starts_with("/**\n"), "{kind}");
    }
}

#[test]
fn test_landing_page() {
    let program = parse_program(LANDING);
    let generator = WebGenerator::with_options(GeneratorOptions::new("Design Team", "Claude")).unwrap();
    let generated = generator.generate_program(&program).unwrap();
    assert_eq!(generated.len(), program.components.len());

    let nav = &generated[0];
    assert_eq!(nav.name, "SiteNav");
    assert!(nav.html.contains("<body class=\"centaur-dark\">"));
    assert!(nav.html.contains("centaur-nav sticky"));
    assert!(nav.js.contains("nav-toggle"));

    let hero = &generated[1];
    assert!(hero.css.contains("--centaur-accent: #00C853;"));
    assert!(hero.html.contains("Launch your next idea"));

    let contact = &generated[2];
    assert!(contact.html.contains("cdn.tailwindcss.com"));
    assert!(contact.html.contains("data-success=\"Thanks, we will reply soon\""));

    for output in &generated {
        assert!(output.html.contains("@human Design Team"));
    }
}

#[test]
fn test_html_escapes_description_text() {
    let program = parse_program("@component Top\n@type hero\n{\nHeadline: \"Fast <b>and</b> safe\"\n}");
    let generator = WebGenerator::new().unwrap();
    let generated = generator.generate(&program.components[0]).unwrap();
    assert!(!generated.html.contains("<b>and</b>"));
    assert!(generated.html.contains("&lt;b&gt;and&lt;/b&gt;"));
}
