//! Template string parser using winnow.
//!
//! Handles:
//! - Literal text, including stray `%` and unclosed `%{`
//! - Simple placeholders: `%{name}`
//! - Operators: `%{count -> a,b}`, `%{count, sex -> a|b,c|d}`, `%{, sex -> a|b}`

use super::ast::*;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

/// Parse a template string into an AST.
///
/// Never fails: text that is not a placeholder is returned as literal
/// segments, and adjacent literals are merged.
///
/// # Example
///
/// ```
/// use tongue::parser::{parse_template, Segment};
///
/// let t = parse_template("%{n} %{n -> file,files}");
/// assert_eq!(t.segments.len(), 3);
/// assert!(matches!(t.segments[0], Segment::Placeholder(_)));
/// assert!(matches!(t.segments[2], Segment::Operator(_)));
/// ```
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template::literal(input),
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;

    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment. Operators are tried before simple placeholders.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((operator, placeholder, percent, literal_run)).parse_next(input)
}

/// Parse a run of text up to the next `%`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '%')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a `%` that does not open a placeholder.
fn percent(input: &mut &str) -> ModalResult<Segment> {
    "%".map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a simple placeholder: %{name}
///
/// A placeholder cannot contain another `%{`; the outer `%` is then literal
/// and parsing resumes inside.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(
        "%{",
        take_till(0.., '}').verify(|name: &str| !name.contains("%{")),
        '}',
    )
    .map(|name: &str| Segment::Placeholder(name.to_string()))
    .parse_next(input)
}

/// Parse an operator: %{count? (, sex)? -> forms}
fn operator(input: &mut &str) -> ModalResult<Segment> {
    delimited("%{", operator_body, '}').parse_next(input)
}

fn operator_body(input: &mut &str) -> ModalResult<Segment> {
    let count = opt(word).parse_next(input)?;
    let sex = opt(preceded((ws, ',', ws), word)).parse_next(input)?;
    (ws, "->", ws).void().parse_next(input)?;
    let forms: &str = take_till(0.., '}').parse_next(input)?;

    Ok(Segment::Operator(Operator {
        count: count.map(str::to_string),
        sex: sex.map(str::to_string),
        forms: forms.to_string(),
    }))
}

/// Parse optional whitespace.
fn ws<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

/// Parse a parameter name (ASCII letters, digits, underscore).
fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}
