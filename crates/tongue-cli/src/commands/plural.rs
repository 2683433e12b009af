//! Implementation of the `tongue plural` command.

use std::sync::Arc;

use miette::IntoDiagnostic;
use serde::Serialize;
use tongue::{CldrRule, PluralForm, PluralRule, PluralizerRegistry};
use tracing::debug;

use crate::output::table::{format_plural_table, PluralRow};

/// Arguments for the plural command.
#[derive(Debug, clap::Args)]
pub struct PluralArgs {
    /// Language code (e.g., en, ru, pl)
    #[arg(long, required = true)]
    pub lang: String,

    /// Numbers to classify
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PluralJson {
    number: f64,
    form: &'static str,
    slot: Option<usize>,
}

/// The built-in rule for `language`, or one built from CLDR data.
fn rule_for(language: &str) -> miette::Result<Arc<dyn PluralRule>> {
    if let Some(rule) = PluralizerRegistry::default().pluralizer(language) {
        return Ok(rule);
    }
    debug!(language, "no built-in rule, using CLDR data");
    let rule = CldrRule::try_new(language).into_diagnostic()?;
    Ok(Arc::new(rule))
}

/// Run the plural command.
pub fn run_plural(args: PluralArgs) -> miette::Result<i32> {
    let rule = rule_for(&args.lang)?;

    let rows: Vec<PluralRow> = args
        .numbers
        .iter()
        .map(|&number| PluralRow {
            number,
            form: rule.form(number).as_str(),
            slot: rule.form_index(number),
        })
        .collect();

    if args.json {
        let output: Vec<PluralJson> = rows
            .iter()
            .map(|r| PluralJson {
                number: r.number,
                form: r.form,
                slot: r.slot,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        let forms: Vec<&str> = rule.forms().iter().map(PluralForm::as_str).collect();
        println!("Forms for {}: {}", args.lang, forms.join(", "));
        println!("{}", format_plural_table(&rows));
    }

    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_languages_use_registry_rules() {
        let rule = rule_for("ru").unwrap();
        assert_eq!(rule.form(21.0), PluralForm::One);
        assert_eq!(rule.form(5.0), PluralForm::Many);
    }

    #[test]
    fn other_languages_fall_back_to_cldr() {
        let rule = rule_for("pl").unwrap();
        assert_eq!(rule.form(3.0), PluralForm::Few);
        assert!(rule_for("not a locale!").is_err());
    }
}
