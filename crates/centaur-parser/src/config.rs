//! Parser configuration.

use chrono::Datelike;

/// Settings that influence extraction defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Year used in the default footer copyright line.
    pub copyright_year: i32,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self {
            copyright_year: current_year(),
        }
    }

    /// Pin the copyright year, for reproducible output.
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = year;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC calendar year.
fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_year_is_current() {
        let config = ParserConfig::default();
        let now = chrono::Utc::now().year();
        assert!((now - 1..=now).contains(&config.copyright_year));
    }

    #[test]
    fn test_with_copyright_year() {
        let config = ParserConfig::new().with_copyright_year(2025);
        assert_eq!(config.copyright_year, 2025);
    }
}
