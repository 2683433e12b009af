//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tongue::{Section, TranslationEntry};

use crate::catalog::load_catalog;
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Catalog file (JSON array of entries)
    #[arg(long, env = "TONGUE_CATALOG")]
    pub catalog: PathBuf,

    /// Source language every other language is compared against.
    #[arg(long, env = "TONGUE_DEFAULT_LANG", default_value = "en")]
    pub source: String,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// The `section/key` pairs defined for `language`.
fn keys_of(entries: &[TranslationEntry], language: &str) -> BTreeSet<String> {
    entries
        .iter()
        .map(TranslationEntry::id)
        .filter(|id| id.language() == language)
        .map(|id| section_key(id.section(), id.key()))
        .collect()
}

fn section_key(section: &Section, key: &str) -> String {
    format!("{}/{}", section, key)
}

/// Compare each language's keys with the source language's.
pub fn compute_coverage(
    entries: &[TranslationEntry],
    source: &str,
    languages: &[String],
) -> (usize, Vec<LanguageCoverage>) {
    let source_keys = keys_of(entries, source);

    let coverage = languages
        .iter()
        .map(|language| {
            let translated = keys_of(entries, language);
            let missing: Vec<String> = source_keys.difference(&translated).cloned().collect();
            LanguageCoverage {
                language: language.clone(),
                translated: source_keys.len() - missing.len(),
                missing,
            }
        })
        .collect();

    (source_keys.len(), coverage)
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let entries = load_catalog(&args.catalog)?;
    let (source_count, coverage_data) = compute_coverage(&entries, &args.source, &args.lang);

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {}", name);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
