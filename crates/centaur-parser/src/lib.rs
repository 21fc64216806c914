//! Parser for Centaur sources.
//!
//! Turns `.centaur` text into a [`Program`]: one [`Component`] per
//! `@component` directive, with its kind resolved and its description
//! block mined for fields, items and options.
//!
//! Parsing is total. Malformed or unexpected input never fails; it falls
//! back to documented defaults and records [`Diagnostic`]s where a
//! directive value was not understood.
//!
//! [`Component`]: centaur_core::Component
//! [`Diagnostic`]: centaur_core::Diagnostic

mod config;
mod detect;
mod extract;
mod grammar;
mod lexer;
mod text;

pub use config::ParserConfig;
pub use detect::{detect_kind, match_kind, KIND_PATTERNS};
pub use extract::{extract, Extraction, Intent};

use centaur_core::{InputError, Program};

/// Parse a source with the default configuration.
///
/// # Example
///
/// ```
/// use centaur_parser::parse_program;
///
/// let program = parse_program("@component Login\n@type form\n{\n- Email input\n}");
/// assert_eq!(program.components.len(), 1);
/// assert_eq!(program.components[0].fields[0].name, "email");
/// ```
pub fn parse_program(source: &str) -> Program {
    Parser::new().parse(source)
}

/// Parse a source, rejecting input that is empty or only whitespace.
pub fn parse_document(source: &str) -> Result<Program, InputError> {
    Parser::new().parse_document(source)
}

/// Reusable parser carrying a [`ParserConfig`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a source. Each call builds a fresh program.
    pub fn parse(&self, source: &str) -> Program {
        grammar::parse(source, &self.config)
    }

    pub fn parse_document(&self, source: &str) -> Result<Program, InputError> {
        if source.trim().is_empty() {
            return Err(InputError::Empty);
        }
        Ok(self.parse(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centaur_core::ComponentKind;

    #[test]
    fn test_parse_document_rejects_blank_input() {
        assert!(matches!(parse_document(""), Err(InputError::Empty)));
        assert!(matches!(parse_document("  \n\t\n"), Err(InputError::Empty)));
    }

    #[test]
    fn test_parse_document_accepts_text_without_components() {
        let program = parse_document("just words").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_parser_with_config() {
        let parser = Parser::with_config(ParserConfig::new().with_copyright_year(1999));
        let program = parser.parse("@component Foot\n@type footer\n{\n}");
        let footer = program.component("Foot").unwrap();
        assert_eq!(footer.kind, ComponentKind::Footer);
        assert_eq!(
            footer.option_text("copyright"),
            Some("© 1999 Company. All rights reserved.")
        );
    }
}
