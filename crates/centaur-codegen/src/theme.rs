//! Colour palettes and accents.

use centaur_core::Theme;
use serde::Serialize;

/// Base colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
}

const DARK: Palette = Palette {
    background: "#0a0a0b",
    surface: "#141416",
    text: "#ffffff",
    text_muted: "#888888",
    border: "#2a2a2f",
};

const LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f5f5f5",
    text: "#1a1a1a",
    text_muted: "#666666",
    border: "#e0e0e0",
};

const GLASS: Palette = Palette {
    background: "rgba(10,10,20,0.8)",
    surface: "rgba(255,255,255,0.1)",
    text: "#ffffff",
    text_muted: "rgba(255,255,255,0.7)",
    border: "rgba(255,255,255,0.2)",
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
        Theme::Glass => GLASS,
    }
}

/// Accent colour selected by `@accent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Gold,
    Emerald,
    Coral,
    Azure,
    Purple,
    Teal,
}

impl Accent {
    /// Parse an accent name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "gold" => Some(Self::Gold),
            "emerald" => Some(Self::Emerald),
            "coral" => Some(Self::Coral),
            "azure" => Some(Self::Azure),
            "purple" => Some(Self::Purple),
            "teal" => Some(Self::Teal),
            _ => None,
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Gold => "#D4AF37",
            Self::Emerald => "#00C853",
            Self::Coral => "#FF6B6B",
            Self::Azure => "#0088FF",
            Self::Purple => "#9C27B0",
            Self::Teal => "#00BCD4",
        }
    }
}

/// CSS custom properties for a theme and accent.
pub fn css_variables(theme: Theme, accent: Accent) -> String {
    let p = palette(theme);
    format!(
        ":root {{\n  --centaur-bg: {};\n  --centaur-surface: {};\n  --centaur-text: {};\n  --centaur-muted: {};\n  --centaur-border: {};\n  --centaur-accent: {};\n}}\n",
        p.background,
        p.surface,
        p.text,
        p.text_muted,
        p.border,
        accent.hex()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_parse() {
        assert_eq!(Accent::parse("Emerald"), Some(Accent::Emerald));
        assert_eq!(Accent::parse("neon"), None);
        assert_eq!(Accent::default().hex(), "#D4AF37");
    }

    #[test]
    fn test_css_variables() {
        let css = css_variables(Theme::Dark, Accent::Coral);
        assert!(css.contains("--centaur-bg: #0a0a0b;"));
        assert!(css.contains("--centaur-accent: #FF6B6B;"));
    }

    #[test]
    fn test_light_is_light() {
        assert_eq!(palette(Theme::Light).background, "#ffffff");
        assert_eq!(palette(Theme::Glass).text, "#ffffff");
    }
}
