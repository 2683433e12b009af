//! Implementation of the `tongue check` command.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;
use tongue::parser::parse_template;
use tongue::{is_valid_key, CldrRule, PluralRule, PluralizerRegistry, TranslationEntry};

use super::build_registry;
use crate::catalog::load_catalog;
use crate::output::table::{format_issue_table, CheckIssue};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog file (JSON array of entries)
    #[arg(long, env = "TONGUE_CATALOG")]
    pub catalog: PathBuf,

    /// Extra languages to pluralize with CLDR data (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub cldr: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct IssueJson<'a> {
    entry: &'a str,
    kind: &'a str,
    message: &'a str,
}

/// Find problems in a list of catalog entries.
///
/// Languages missing from `registry` are looked up in CLDR data before
/// being reported.
pub fn find_issues(entries: &[TranslationEntry], registry: &PluralizerRegistry) -> Vec<CheckIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut unknown_languages = HashSet::new();

    for entry in entries {
        let id = entry.id();
        let name = id.to_string();

        if !seen.insert(id.clone()) {
            issues.push(CheckIssue {
                entry: name.clone(),
                kind: "duplicate",
                message: "entry defined more than once; the last one wins".to_string(),
            });
        }

        if !is_valid_key(id.key()) {
            issues.push(CheckIssue {
                entry: name.clone(),
                kind: "invalid-key",
                message: format!("'{}' is not a valid key", id.key()),
            });
        }

        let template = parse_template(entry.template());
        if !template.has_operators() {
            continue;
        }

        let rule: Arc<dyn PluralRule> = match registry.pluralizer(id.language()) {
            Some(rule) => rule,
            None => match CldrRule::try_new(id.language()) {
                Ok(rule) => Arc::new(rule),
                Err(e) => {
                    if unknown_languages.insert(id.language().to_string()) {
                        issues.push(CheckIssue {
                            entry: name.clone(),
                            kind: "no-pluralizer",
                            message: e.to_string(),
                        });
                    }
                    continue;
                }
            },
        };

        let forms = rule.forms().len();
        for op in template.operators() {
            if op.count.is_none() {
                continue;
            }
            let slots = op.plural_slots().len();
            if slots > forms {
                issues.push(CheckIssue {
                    entry: name.clone(),
                    kind: "extra-slots",
                    message: format!(
                        "'{}' has {} plural slots but '{}' has {} forms",
                        op.forms,
                        slots,
                        id.language(),
                        forms
                    ),
                });
            }
        }
    }

    issues
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let entries = load_catalog(&args.catalog)?;
    let registry = build_registry(PluralizerRegistry::default().default_language(), &args.cldr)?;
    let issues = find_issues(&entries, &registry);

    if args.json {
        let output: Vec<IssueJson<'_>> = issues
            .iter()
            .map(|i| IssueJson {
                entry: &i.entry,
                kind: i.kind,
                message: &i.message,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if issues.is_empty() {
        println!("{} {} entries checked", "ok:".green(), entries.len());
    } else {
        println!("{}", format_issue_table(&issues));
        println!("{} {} issue(s) found", "error:".red(), issues.len());
    }

    Ok(if issues.is_empty() {
        exitcode::OK
    } else {
        exitcode::DATAERR
    })
}

#[cfg(test)]
mod tests {
    use tongue::TranslationId;

    use super::*;

    fn entry(key: &str, language: &str, template: &str) -> TranslationEntry {
        TranslationEntry::new(TranslationId::new(key, language), template)
    }

    fn kinds(issues: &[CheckIssue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn clean_catalog_has_no_issues() {
        let entries = vec![
            entry("cart.items", "en", "%{n} %{n -> item,items}"),
            entry("cart.items", "ru", "%{n} %{n -> товар,товара,товаров}"),
            entry("cart.title", "en", "Cart"),
        ];
        assert!(find_issues(&entries, &PluralizerRegistry::default()).is_empty());
    }

    #[test]
    fn reports_invalid_keys_and_duplicates() {
        let entries = vec![
            entry("Cart", "en", "Cart"),
            entry("cart", "en", "Cart"),
            entry("cart", "en", "Basket"),
        ];
        let issues = find_issues(&entries, &PluralizerRegistry::default());
        assert_eq!(kinds(&issues), vec!["invalid-key", "duplicate"]);
    }

    #[test]
    fn reports_more_slots_than_forms() {
        let entries = vec![entry("items", "en", "%{n -> one,two,three}")];
        let issues = find_issues(&entries, &PluralizerRegistry::default());
        assert_eq!(kinds(&issues), vec!["extra-slots"]);
    }

    #[test]
    fn count_only_pipe_slots_are_checked() {
        let entries = vec![
            entry("ok", "en", "%{n -> item|items}"),
            entry("extra", "en", "%{n -> a|b|c}"),
        ];
        let issues = find_issues(&entries, &PluralizerRegistry::default());
        assert_eq!(kinds(&issues), vec!["extra-slots"]);
        assert_eq!(issues[0].entry, "en/0/extra");
    }

    #[test]
    fn gender_only_operators_are_not_slot_checked() {
        let entries = vec![entry("came", "en", "%{, sex -> he,she,they}")];
        assert!(find_issues(&entries, &PluralizerRegistry::default()).is_empty());
    }

    #[test]
    fn unregistered_languages_use_cldr_data() {
        let entries = vec![entry("items", "pl", "%{n -> plik,pliki,plików,pliku}")];
        assert!(find_issues(&entries, &PluralizerRegistry::default()).is_empty());
    }
}
