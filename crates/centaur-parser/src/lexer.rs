//! Line tokenizer for Centaur sources.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::rest,
    sequence::{preceded, tuple},
    IResult,
};

/// Parse a directive name (a run of ASCII word characters).
pub fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// Parse `@name value`, returning the name and the trimmed value.
pub fn directive(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, (name, _, value)) = tuple((preceded(char('@'), identifier), space0, rest))(input)?;
    Ok((input, (name, value.trim())))
}

/// Classification of a significant source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Directive { name: &'a str, value: &'a str },
    BlockOpen,
    BlockClose,
    Content,
    /// `@` without a directive name.
    Malformed,
}

/// A trimmed, non-blank, non-comment line of input.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    pub content: &'a str,
    pub line_number: usize,
}

impl<'a> Line<'a> {
    pub fn kind(&self) -> LineKind<'a> {
        classify(self.content)
    }
}

/// Classify a trimmed line.
pub fn classify(content: &str) -> LineKind<'_> {
    match content {
        "{" => LineKind::BlockOpen,
        "}" => LineKind::BlockClose,
        _ if content.starts_with('@') => match directive(content) {
            Ok((_, (name, value))) => LineKind::Directive { name, value },
            Err(_) => LineKind::Malformed,
        },
        _ => LineKind::Content,
    }
}

/// Split input into trimmed lines, dropping blanks and `//` comments.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                None
            } else {
                Some(Line {
                    content: trimmed,
                    line_number: i + 1,
                })
            }
        })
        .collect()
}
