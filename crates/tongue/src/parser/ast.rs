//! Public AST types for translation templates.
//!
//! These types are public so tooling (the CLI `check` command, linters) can
//! inspect templates without re-implementing the grammar.

/// A parsed template string.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// A template consisting of a single literal.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Literal(text.into())],
        }
    }

    /// Returns true if the template has no placeholders of either kind.
    pub fn is_plain(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Iterate over the operator placeholders in source order.
    pub fn operators(&self) -> impl Iterator<Item = &Operator> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Operator(op) => Some(op),
            _ => None,
        })
    }

    /// Returns true if any segment is an operator.
    pub fn has_operators(&self) -> bool {
        self.operators().next().is_some()
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text.
    Literal(String),
    /// A simple placeholder: `%{name}`. Holds the raw text between the braces.
    Placeholder(String),
    /// A plural/gender operator: `%{count, sex -> forms}`.
    Operator(Operator),
}

/// A plural/gender operator.
///
/// `forms` is the raw text after `->`. Comma-separated slots follow the
/// order of the language's plural forms; inside a slot, pipe-separated
/// variants are picked by the gender parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    /// Parameter holding the count, if any.
    pub count: Option<String>,
    /// Parameter holding the gender index, if any.
    pub sex: Option<String>,
    /// Raw forms text.
    pub forms: String,
}

impl Operator {
    /// The plural slots, in the order of the language's forms. Never empty.
    ///
    /// Slots are comma-separated, except for a count-only operator without
    /// commas (`%{n -> item|items}`), whose pipe-separated variants are the
    /// slots.
    pub fn plural_slots(&self) -> Vec<&str> {
        if self.pipes_are_slots() {
            self.forms.split('|').collect()
        } else {
            self.forms.split(',').collect()
        }
    }

    /// Whether the pipe-separated variants stand for plural slots rather
    /// than gender variants.
    pub fn pipes_are_slots(&self) -> bool {
        self.count.is_some() && self.sex.is_none() && !self.forms.contains(',')
    }
}
