//! Form extraction: fields, submit button, styling and behaviour notes.

use super::{Extraction, Intent};
use crate::text::{extract_quoted, is_list_item, list_item_text};
use centaur_core::{Field, FieldType};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_BUTTON_TEXT: &str = "Submit";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success! Thank you for your submission.";
pub const DEFAULT_SELECT_OPTIONS: [&str; 3] = ["General", "Support", "Partnership"];

/// A keyword rule that yields one field when it matches the description.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub pattern: &'static str,
    pub field_type: FieldType,
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Field rules, in the order their fields are emitted.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        pattern: r"\be-?mail\b",
        field_type: FieldType::Email,
        name: "email",
        label: "Email Address",
        placeholder: "Enter your email",
    },
    FieldRule {
        pattern: r"\b(full\s+)?name\b",
        field_type: FieldType::Text,
        name: "name",
        label: "Full Name",
        placeholder: "Enter your name",
    },
    FieldRule {
        pattern: r"\busername\b",
        field_type: FieldType::Text,
        name: "username",
        label: "Username",
        placeholder: "Choose a username",
    },
    FieldRule {
        pattern: r"\bpassword\b",
        field_type: FieldType::Password,
        name: "password",
        label: "Password",
        placeholder: "Enter your password",
    },
    FieldRule {
        pattern: r"\b(phone|telephone|mobile)\b",
        field_type: FieldType::Tel,
        name: "phone",
        label: "Phone Number",
        placeholder: "Enter your phone number",
    },
    FieldRule {
        pattern: r"\b(website|url)\b",
        field_type: FieldType::Url,
        name: "website",
        label: "Website",
        placeholder: "https://",
    },
    FieldRule {
        pattern: r"\b(date|birthday)\b",
        field_type: FieldType::Date,
        name: "date",
        label: "Date",
        placeholder: "",
    },
    FieldRule {
        pattern: r"\b(quantity|amount)\b",
        field_type: FieldType::Number,
        name: "quantity",
        label: "Quantity",
        placeholder: "0",
    },
    FieldRule {
        pattern: r"\bsubject\b",
        field_type: FieldType::Select,
        name: "subject",
        label: "Subject",
        placeholder: "Select a subject",
    },
    FieldRule {
        pattern: r"\b(dropdown|select)\b",
        field_type: FieldType::Select,
        name: "select",
        label: "Select",
        placeholder: "Choose an option",
    },
    FieldRule {
        pattern: r"\b(message|textarea|comments?)\b",
        field_type: FieldType::Textarea,
        name: "message",
        label: "Message",
        placeholder: "Write your message here...",
    },
    FieldRule {
        pattern: r"\b(checkbox|agree|terms)\b",
        field_type: FieldType::Checkbox,
        name: "terms",
        label: "I agree to the terms and conditions",
        placeholder: "",
    },
];

static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    FIELD_RULES
        .iter()
        .map(|r| Regex::new(r.pattern).unwrap())
        .collect()
});
static REQUIRED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\brequired\b").unwrap());
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)placeholder[:\s]+["']([^"']+)["']"#).unwrap());
static MIN_LENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bmin(?:imum)?(?:\s+length)?\s*:?\s*(\d+)").unwrap());
static SELECT_OPTIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)options?[:\s]+([^)]+)").unwrap());

/// Section of a form description, switched by header lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    General,
    Fields,
    Styling,
    Behavior,
    Button,
}

impl Section {
    /// Section introduced by a header line, if it is one.
    fn from_header(lower: &str) -> Option<Self> {
        if lower.contains("field") && lower.contains(':') {
            Some(Self::Fields)
        } else if lower.contains("styling") || lower.contains("style") {
            Some(Self::Styling)
        } else if lower.contains("behavior") || lower.contains("behaviour") || lower.contains("when") {
            Some(Self::Behavior)
        } else if (lower.contains("submit button") || lower.contains("button:"))
            && !lower.contains("disable")
        {
            Some(Self::Button)
        } else {
            None
        }
    }
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut out = Extraction::new();
    out.fields = detect_fields(intent);

    let mut button = button_from_description(intent);
    let mut styling = Vec::new();
    let mut behavior = Vec::new();
    let mut section = Section::General;

    for line in intent.each_line() {
        let lower = line.to_lowercase();

        if !is_list_item(line) {
            if let Some(next) = Section::from_header(&lower) {
                section = next;
                if section == Section::Button {
                    if let Some(text) = extract_quoted(line) {
                        button = text;
                    }
                }
            }
            continue;
        }

        let content = list_item_text(line);
        match section {
            Section::Styling => styling.push(content.to_string()),
            Section::Behavior => behavior.push(content.to_string()),
            Section::Button => {
                if let Some(text) = extract_quoted(content) {
                    button = text;
                }
            }
            Section::General | Section::Fields => {}
        }
    }

    let success = success_message(&behavior);
    out.set("buttonText", button);
    out.set("successMessage", success);
    out.set("styling", styling);
    out.set("behavior", behavior);
    out
}

/// Apply every field rule to the whole description.
///
/// Rules are independent: each match appends one field. `required` is a
/// description-wide flag.
pub fn detect_fields(intent: &Intent<'_>) -> Vec<Field> {
    let required = REQUIRED.is_match(&intent.lower);

    FIELD_RULES
        .iter()
        .zip(RULES.iter())
        .filter(|(_, re)| re.is_match(&intent.lower))
        .map(|(rule, re)| {
            let line = intent
                .each_line()
                .find(|l| re.is_match(&l.to_lowercase()))
                .unwrap_or_default();
            build_field(rule, line, required)
        })
        .collect()
}

fn build_field(rule: &FieldRule, line: &str, required: bool) -> Field {
    let placeholder = PLACEHOLDER
        .captures(line)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| rule.placeholder.to_string());

    let min_length = MIN_LENGTH
        .captures(line)
        .and_then(|c| c[1].parse::<u32>().ok());

    let options = if rule.field_type == FieldType::Select {
        SELECT_OPTIONS
            .captures(line)
            .map(|c| {
                c[1].split(',')
                    .map(|o| o.trim().trim_matches(|ch: char| ch == '"' || ch == '\'').trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|opts| !opts.is_empty())
            .unwrap_or_else(|| DEFAULT_SELECT_OPTIONS.iter().map(|s| s.to_string()).collect())
    } else {
        Vec::new()
    };

    Field {
        field_type: rule.field_type,
        name: rule.name.to_string(),
        label: rule.label.to_string(),
        placeholder,
        required,
        min_length,
        options,
    }
}

/// Button text mentioned anywhere in the description.
fn button_from_description(intent: &Intent<'_>) -> String {
    intent
        .each_line()
        .filter(|line| {
            let lower = line.to_lowercase();
            let quoted = line.contains('"') || line.contains('\'');
            (lower.contains("button") && (lower.contains("text") || quoted))
                || (lower.contains("text:") && quoted)
        })
        .find_map(extract_quoted)
        .unwrap_or_else(|| DEFAULT_BUTTON_TEXT.to_string())
}

fn success_message(behavior: &[String]) -> String {
    behavior
        .iter()
        .filter(|b| {
            let lower = b.to_lowercase();
            lower.contains("success") || lower.contains("show")
        })
        .find_map(|b| extract_quoted(b))
        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string())
}
