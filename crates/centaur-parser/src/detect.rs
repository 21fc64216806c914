//! Component kind detection.
//!
//! Kinds are tried in a fixed priority order; the first kind with any
//! matching pattern wins. There is no scoring.

use centaur_core::ComponentKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Detection patterns per kind, in priority order.
pub const KIND_PATTERNS: &[(ComponentKind, &[&str])] = &[
    (
        ComponentKind::Form,
        &[
            r"\bform\b",
            r"\binputs?\b",
            r"\bfields?\s*:",
            r"\bsubmit\b",
            r"\bsign[ -]?up\b",
            r"\blog[ -]?in\b",
            r"\bpassword\b",
        ],
    ),
    (
        ComponentKind::Hero,
        &[r"\bhero\b", r"\bheadline\b", r"\bbanner\b", r"\blanding\b", r"\bjumbotron\b"],
    ),
    (ComponentKind::Card, &[r"\bcards?\b"]),
    (
        ComponentKind::Navigation,
        &[r"\bnav(igation|bar)?\b", r"\bmenu\b", r"\blogo\b"],
    ),
    (
        ComponentKind::Modal,
        &[r"\bmodal\b", r"\bdialog\b", r"\bpop-?up\b", r"\boverlay\b"],
    ),
    (
        ComponentKind::Table,
        &[r"\btable\b", r"\bcolumns?\s*:", r"\bdata ?grid\b", r"\bsortable\b"],
    ),
    (ComponentKind::Footer, &[r"\bfooter\b", r"\bcopyright\b", "©"]),
    (
        ComponentKind::Gallery,
        &[r"\bgallery\b", r"\bmasonry\b", r"\blightbox\b", r"\bphotos\b"],
    ),
    (
        ComponentKind::Accordion,
        &[r"\baccordion\b", r"\bfaq\b", r"\bcollapsible\b", r"(^|\n)q:"],
    ),
    (ComponentKind::Tabs, &[r"\btabs?\b", r"\btabbed\b", r"(^|\n)tab:"]),
    (
        ComponentKind::Carousel,
        &[r"\bcarousel\b", r"\bslider\b", r"\bslides?\b", r"\bslideshow\b"],
    ),
    (
        ComponentKind::Pricing,
        &[r"\bpricing\b", r"\bplans?\b", r"\bper month\b", r"\$\d+"],
    ),
    (
        ComponentKind::Testimonial,
        &[r"\btestimonials?\b", r"\breviews?\b", r"\bcustomer quotes?\b"],
    ),
];

static COMPILED: Lazy<Vec<(ComponentKind, Vec<Regex>)>> = Lazy::new(|| {
    KIND_PATTERNS
        .iter()
        .map(|(kind, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect();
            (*kind, compiled)
        })
        .collect()
});

/// Detect a kind from free text. Returns `None` when nothing matches.
pub fn match_kind(description: &str) -> Option<ComponentKind> {
    let lower = description.to_lowercase();
    COMPILED
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(&lower)))
        .map(|(kind, _)| *kind)
}

/// Detect a kind from free text, defaulting to form.
pub fn detect_kind(description: &str) -> ComponentKind {
    match_kind(description).unwrap_or(ComponentKind::Form)
}
