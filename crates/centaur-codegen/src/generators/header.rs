//! Provenance header stamped on every generated file.

use super::GeneratorOptions;

/// Comment syntax of the file receiving the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    Html,
    Css,
    Js,
}

impl CommentStyle {
    fn delimiters(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Html => ("<!--", "    ", "-->"),
            Self::Css => ("/*", " * ", " */"),
            Self::Js => ("/**", " * ", " */"),
        }
    }
}

/// Build the header for one component.
///
/// No timestamp is written so that identical sources produce identical
/// output.
pub fn provenance(component: &str, style: CommentStyle, options: &GeneratorOptions) -> String {
    let (open, prefix, close) = style.delimiters();
    let lines = [
        "@centaur-generated true".to_string(),
        format!("@version {}", env!("CARGO_PKG_VERSION")),
        format!("@component {component}"),
        format!("@human {}", options.human_author),
        format!("@ai {}", options.ai_author),
    ];

    let mut out = String::from(open);
    out.push('\n');
    for line in lines {
        out.push_str(prefix);
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(close);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_header() {
        let header = provenance("Login", CommentStyle::Html, &GeneratorOptions::default());
        assert!(header.starts_with("<!--\n    @centaur-generated true\n"));
        assert!(header.contains("    @component Login\n"));
        assert!(header.contains("    @human Human\n    @ai Claude\n"));
        assert!(header.ends_with("-->\n"));
    }

    #[test]
    fn test_script_header_uses_doc_comment() {
        let options = GeneratorOptions::new("Ada", "Model");
        let header = provenance("Nav", CommentStyle::Js, &options);
        assert!(header.starts_with("/**\n * @centaur-generated true\n"));
        assert!(header.contains(" * @human Ada\n * @ai Model\n"));
        assert!(header.ends_with(" */\n"));
    }

    #[test]
    fn test_css_header() {
        let header = provenance("Nav", CommentStyle::Css, &GeneratorOptions::default());
        assert!(header.starts_with("/*\n * @centaur-generated true\n"));
        assert!(!header.contains("@timestamp"));
    }
}
