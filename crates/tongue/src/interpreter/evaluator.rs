//! Template interpolation.
//!
//! Substitutes simple placeholders with parameter values and resolves
//! plural/gender operators against the language's plural rule.

use std::sync::Arc;

use crate::interpreter::{AuditEvent, EvalContext, PluralRule};
use crate::parser::ast::{Operator, Segment, Template};

/// Render a parsed template.
///
/// - Literal segments are copied to the output
/// - `%{name}` becomes the parameter's text, or stays verbatim if `name` is
///   not a parameter
/// - Operators are resolved with [`resolve_operator`]
///
/// `pluralizer` is called at most once, on the first operator, so templates
/// without operators never look up a plural rule.
pub fn eval_template(
    template: &Template,
    ctx: &EvalContext<'_>,
    pluralizer: impl FnOnce() -> Arc<dyn PluralRule>,
) -> String {
    let mut pluralizer = Some(pluralizer);
    let mut rule: Option<Arc<dyn PluralRule>> = None;
    let mut output = String::new();

    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => match ctx.get_param(name) {
                Some(value) => output.push_str(&value.to_string()),
                None => {
                    output.push_str("%{");
                    output.push_str(name);
                    output.push('}');
                }
            },
            Segment::Operator(op) => {
                if rule.is_none() {
                    rule = pluralizer.take().map(|f| f());
                }
                if let Some(rule) = &rule {
                    output.push_str(resolve_operator(op, rule.as_ref(), ctx));
                }
            }
        }
    }

    output
}

/// Resolve an operator to one of its variants.
///
/// The count parameter picks a comma-separated slot by plural index; the
/// gender parameter then picks a pipe-separated variant inside that slot by
/// position. Missing parameters and out-of-range indices select the first
/// slot or variant.
///
/// A count-only operator with a single slot (`%{n -> item|items}`) uses its
/// pipe-separated variants as the plural slots.
pub fn resolve_operator<'t>(
    op: &'t Operator,
    rule: &dyn PluralRule,
    ctx: &EvalContext<'_>,
) -> &'t str {
    let by_form = op.plural_slots();
    let slot = pick(&by_form, plural_index(op, rule, ctx));
    if op.pipes_are_slots() {
        return slot;
    }

    let by_sex: Vec<&str> = slot.split('|').collect();
    pick(&by_sex, gender_index(op, ctx))
}

/// The plural slot selected by the operator's count parameter.
fn plural_index(op: &Operator, rule: &dyn PluralRule, ctx: &EvalContext<'_>) -> Option<usize> {
    let name = op.count.as_deref()?;
    match ctx.get_param(name) {
        Some(count) => rule.form_index(count.as_count()),
        None => {
            ctx.audit(AuditEvent::KeyMiss);
            None
        }
    }
}

/// The variant selected by the operator's gender parameter.
fn gender_index(op: &Operator, ctx: &EvalContext<'_>) -> Option<usize> {
    let name = op.sex.as_deref()?;
    match ctx.get_param(name) {
        Some(sex) => sex.as_index(),
        None => {
            if ctx.reports_missing_gender() {
                ctx.audit(AuditEvent::KeywordMiss);
            }
            None
        }
    }
}

/// The element at `index`, or the first element when `index` is absent or
/// out of range.
fn pick<'t>(choices: &[&'t str], index: Option<usize>) -> &'t str {
    index
        .and_then(|i| choices.get(i))
        .or_else(|| choices.first())
        .copied()
        .unwrap_or_default()
}
