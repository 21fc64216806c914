//! Component record builder.
//!
//! Walks the significant lines of a source, tracking the component in
//! progress and whether its description block is open. Each component is
//! extracted when its block closes and sealed when the next `@component`
//! starts or the input ends.

use centaur_core::{Component, ComponentKind, DirectiveValue, Diagnostic, Program, Style, Theme};
use log::{debug, warn};

use crate::config::ParserConfig;
use crate::detect::detect_kind;
use crate::extract::{extract, Intent};
use crate::lexer::*;

/// Build a program from source text. Never fails.
pub fn parse(input: &str, config: &ParserConfig) -> Program {
    let lines = split_lines(input);
    let mut scanner = Scanner::new(&lines, config);
    scanner.scan()
}

/// Where the in-progress component is relative to its `{ }` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    /// Collecting directives, no block seen yet.
    Pending,
    Open,
    /// Block closed and extraction done; only `@component` matters now.
    Closed,
}

/// A component that has not been sealed yet.
#[derive(Debug)]
struct Draft<'a> {
    component: Component,
    state: BlockState,
    block: Vec<&'a str>,
    /// `@type` resolved to a known kind.
    explicit_kind: bool,
}

impl<'a> Draft<'a> {
    fn new(name: String) -> Self {
        Self {
            component: Component::new(name),
            state: BlockState::Pending,
            block: Vec::new(),
            explicit_kind: false,
        }
    }
}

/// Stateful scanner over the line list.
struct Scanner<'a> {
    lines: &'a [Line<'a>],
    pos: usize,
    config: &'a ParserConfig,
    program: Program,
    draft: Option<Draft<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(lines: &'a [Line<'a>], config: &'a ParserConfig) -> Self {
        Self {
            lines,
            pos: 0,
            config,
            program: Program::new(),
            draft: None,
        }
    }

    /// Get current line, if any.
    fn current(&self) -> Option<&'a Line<'a>> {
        self.lines.get(self.pos)
    }

    /// Advance to next line.
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn scan(&mut self) -> Program {
        while let Some(line) = self.current() {
            self.scan_line(line);
            self.advance();
        }
        self.seal();
        std::mem::take(&mut self.program)
    }

    fn scan_line(&mut self, line: &'a Line<'a>) {
        match line.kind() {
            LineKind::Directive { name: "component", value } => {
                self.seal();
                self.begin(value, line.line_number);
            }
            LineKind::Directive { name, value } => self.directive(name, value, line.line_number),
            LineKind::BlockOpen => self.open_block(line),
            LineKind::BlockClose => self.close_block(line),
            LineKind::Content => self.content(line.content),
            LineKind::Malformed => debug!("line {}: @ without a directive name, skipped", line.line_number),
        }
    }

    /// Start a new component.
    fn begin(&mut self, value: &str, line: usize) {
        let name = if value.is_empty() {
            let assigned = format!("Component{}", self.program.components.len() + 1);
            warn!("line {line}: @component without a name, using {assigned}");
            self.program.diagnostics.push(Diagnostic::EmptyName {
                assigned: assigned.clone(),
                line,
            });
            assigned
        } else {
            value.to_string()
        };

        debug!("line {line}: begin component {name}");
        let mut draft = Draft::new(name);
        draft
            .component
            .directives
            .insert("component".to_string(), DirectiveValue::from_raw(value));
        self.draft = Some(draft);
    }

    fn directive(&mut self, name: &str, value: &str, line: usize) {
        let Some(draft) = self.draft.as_mut() else {
            debug!("line {line}: @{name} before any @component, ignored");
            return;
        };
        if draft.state == BlockState::Closed {
            debug!(
                "line {line}: @{name} after the block of {} closed, ignored",
                draft.component.name
            );
            return;
        }

        let component = &mut draft.component;
        match name {
            "type" => match ComponentKind::from_alias(value) {
                Some(kind) => {
                    component.kind = kind;
                    draft.explicit_kind = true;
                }
                None => {
                    warn!("line {line}: unknown @type '{value}' on {}", component.name);
                    self.program.diagnostics.push(Diagnostic::UnknownType {
                        component: component.name.clone(),
                        value: value.to_string(),
                        line,
                    });
                }
            },
            "theme" => match Theme::parse(value) {
                Some(theme) => component.theme = theme,
                None => {
                    warn!("line {line}: unknown @theme '{value}' on {}", component.name);
                    self.program.diagnostics.push(Diagnostic::UnknownTheme {
                        component: component.name.clone(),
                        value: value.to_string(),
                        line,
                    });
                }
            },
            "style" => match Style::parse(value) {
                Some(style) => component.style = style,
                None => {
                    warn!("line {line}: unknown @style '{value}' on {}", component.name);
                    self.program.diagnostics.push(Diagnostic::UnknownStyle {
                        component: component.name.clone(),
                        value: value.to_string(),
                        line,
                    });
                }
            },
            _ => {}
        }
        component
            .directives
            .insert(name.to_string(), DirectiveValue::from_raw(value));
    }

    fn open_block(&mut self, line: &'a Line<'a>) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        match draft.state {
            BlockState::Pending => draft.state = BlockState::Open,
            // Blocks do not nest.
            BlockState::Open => draft.block.push(line.content),
            BlockState::Closed => debug!(
                "line {}: second block for {} ignored",
                line.line_number, draft.component.name
            ),
        }
    }

    fn close_block(&mut self, line: &'a Line<'a>) {
        match self.draft.as_mut() {
            Some(draft) if draft.state == BlockState::Open => {
                finish(draft, self.config);
            }
            _ => debug!("line {}: stray '}}' ignored", line.line_number),
        }
    }

    fn content(&mut self, text: &'a str) {
        if let Some(draft) = self.draft.as_mut() {
            if draft.state == BlockState::Open {
                draft.block.push(text);
            }
        }
    }

    /// Push the in-progress component onto the program.
    fn seal(&mut self) {
        if let Some(mut draft) = self.draft.take() {
            if draft.state != BlockState::Closed {
                if draft.state == BlockState::Open {
                    debug!("block of {} still open at seal, closing", draft.component.name);
                }
                finish(&mut draft, self.config);
            }
            debug!(
                "sealed {} as {}",
                draft.component.name, draft.component.kind
            );
            self.program.components.push(draft.component);
        }
    }
}

/// Close the block: store the description, resolve the kind, and extract.
fn finish(draft: &mut Draft<'_>, config: &ParserConfig) {
    let component = &mut draft.component;
    component.raw_description = draft.block.join("\n");
    if !draft.explicit_kind {
        component.kind = detect_kind(&component.raw_description);
    }

    let extraction = {
        let intent = Intent::new(component, config);
        extract(component.kind, &intent)
    };
    extraction.apply_to(component);
    draft.state = BlockState::Closed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use centaur_core::{FieldType, Item, OptionValue};

    fn parse_fixed(input: &str) -> Program {
        parse(input, &ParserConfig::new().with_copyright_year(2025))
    }

    #[test]
    fn test_parse_single_component() {
        let program = parse_fixed("@component Login\n@type form\n{\n- Email input required\n- Password input\n}");
        assert_eq!(program.components.len(), 1);
        let login = &program.components[0];
        assert_eq!(login.name, "Login");
        assert_eq!(login.kind, ComponentKind::Form);
        assert_eq!(login.raw_description, "- Email input required\n- Password input");
        let types: Vec<_> = login.fields.iter().map(|f| f.field_type).collect();
        assert_eq!(types, vec![FieldType::Email, FieldType::Password]);
        assert!(program.diagnostics.is_empty());
    }

    #[test]
    fn test_no_component_no_output() {
        assert!(parse_fixed("").is_empty());
        assert!(parse_fixed("@theme dark\n{\nhello\n}\n").is_empty());
    }

    #[test]
    fn test_directives_are_stored() {
        let program = parse_fixed("@component Hero\n@type banner\n@accent coral\n@responsive\n{\nBig headline\n}");
        let hero = &program.components[0];
        assert_eq!(hero.kind, ComponentKind::Hero);
        assert_eq!(hero.directive_text("accent"), Some("coral"));
        assert_eq!(hero.directive("responsive"), Some(&DirectiveValue::Flag(true)));
        assert_eq!(hero.directive_text("type"), Some("banner"));
        assert_eq!(hero.directive_text("component"), Some("Hero"));
    }

    #[test]
    fn test_explicit_type_beats_detection() {
        let program = parse_fixed("@component X\n@type card\n{\nA login form with a password\n}");
        assert_eq!(program.components[0].kind, ComponentKind::Card);
    }

    #[test]
    fn test_unknown_type_falls_back_to_detection() {
        let program = parse_fixed("@component X\n@type widget\n{\nA pricing section\n}");
        assert_eq!(program.components[0].kind, ComponentKind::Pricing);
        assert_eq!(
            program.diagnostics,
            vec![Diagnostic::UnknownType {
                component: "X".into(),
                value: "widget".into(),
                line: 2,
            }]
        );
    }

    #[test]
    fn test_empty_name_gets_placeholder() {
        let program = parse_fixed("@component A\n{\n}\n@component\n{\nhero banner\n}");
        assert_eq!(program.components[1].name, "Component2");
        assert_eq!(
            program.diagnostics,
            vec![Diagnostic::EmptyName {
                assigned: "Component2".into(),
                line: 4,
            }]
        );
    }

    #[test]
    fn test_directives_after_close_do_not_apply() {
        let program = parse_fixed("@component A\n@theme dark\n{\nhero\n}\n@theme glass\n@component B\n{\nhero\n}");
        assert_eq!(program.components[0].theme, Theme::Dark);
        assert!(program.components[0].directive("theme").is_some());
        assert_eq!(program.components[1].theme, Theme::Light);
    }

    #[test]
    fn test_unknown_theme_and_style() {
        let program = parse_fixed("@component A\n@theme neon\n@style bootstrap\n{\nhero\n}");
        let a = &program.components[0];
        assert_eq!(a.theme, Theme::Light);
        assert_eq!(a.style, Style::Vanilla);
        assert_eq!(program.diagnostics.len(), 2);
        assert!(matches!(program.diagnostics[0], Diagnostic::UnknownTheme { line: 2, .. }));
        assert!(matches!(program.diagnostics[1], Diagnostic::UnknownStyle { line: 3, .. }));
    }

    #[test]
    fn test_component_without_block_gets_defaults() {
        let program = parse_fixed("@component Empty\n@type hero");
        let hero = &program.components[0];
        assert_eq!(hero.raw_description, "");
        assert_eq!(
            hero.option("headline"),
            Some(&OptionValue::Text("Welcome to Our Platform".into()))
        );
    }

    #[test]
    fn test_unclosed_block_closes_at_end() {
        let program = parse_fixed("@component Menu\n@type nav\n{\n- Docs\n- Blog");
        let menu = &program.components[0];
        assert_eq!(menu.raw_description, "- Docs\n- Blog");
        assert_eq!(menu.items.len(), 2);
    }

    #[test]
    fn test_nested_brace_is_content() {
        let program = parse_fixed("@component A\n{\n{\nlorem\n}\n}");
        let a = &program.components[0];
        assert_eq!(a.raw_description, "{\nlorem");
    }

    #[test]
    fn test_second_block_is_ignored() {
        let program = parse_fixed("@component A\n{\nhero banner\n}\n{\nsite footer\n}");
        assert_eq!(program.components.len(), 1);
        assert_eq!(program.components[0].kind, ComponentKind::Hero);
        assert_eq!(program.components[0].raw_description, "hero banner");
    }

    #[test]
    fn test_content_outside_block_is_ignored() {
        let program = parse_fixed("stray text\n@component A\nnot in block\n{\n## Tab one\nBody\n}\nafter");
        let a = &program.components[0];
        assert_eq!(a.raw_description, "## Tab one\nBody");
        assert_eq!(a.kind, ComponentKind::Tabs);
        assert!(matches!(a.items.first(), Some(Item::TabEntry(_))));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let program = parse_fixed("// header\n\n@component A\n{\n  // note\n  lorem  \n\n}");
        assert_eq!(program.components[0].raw_description, "lorem");
    }

    #[test]
    fn test_directive_inside_open_block_applies() {
        let program = parse_fixed("@component A\n{\n@theme glass\nhero\n}");
        let a = &program.components[0];
        assert_eq!(a.theme, Theme::Glass);
        assert_eq!(a.raw_description, "hero");
    }

    #[test]
    fn test_nameless_directive_line_is_skipped() {
        let program = parse_fixed("@component A\n{\n@\nlorem\n}");
        let a = &program.components[0];
        assert_eq!(a.raw_description, "lorem");
        assert_eq!(a.directives.len(), 1);
        assert!(program.diagnostics.is_empty());
    }
}
