//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "ru", "it").
    pub language: String,
    /// Number of source keys translated.
    pub translated: usize,
    /// Missing keys, as `section/key`.
    pub missing: Vec<String>,
}

/// One row of `tongue plural` output.
pub struct PluralRow {
    pub number: f64,
    pub form: &'static str,
    pub slot: Option<usize>,
}

/// One problem found by `tongue check`.
pub struct CheckIssue {
    /// Storage key of the offending entry.
    pub entry: String,
    /// Short machine-readable kind, e.g. `invalid-key`.
    pub kind: &'static str,
    pub message: String,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = new_table(vec!["Language", "Coverage", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

/// Format plural forms as a table.
pub fn format_plural_table(rows: &[PluralRow]) -> Table {
    let mut table = new_table(vec!["Number", "Form", "Slot"]);

    for row in rows {
        table.add_row(vec![
            row.number.to_string(),
            row.form.to_string(),
            row.slot.map_or_else(|| "-".to_string(), |s| s.to_string()),
        ]);
    }

    table
}

/// Format check issues as a table.
pub fn format_issue_table(issues: &[CheckIssue]) -> Table {
    let mut table = new_table(vec!["Entry", "Issue", "Details"]);

    for issue in issues {
        table.add_row(vec![
            issue.entry.clone(),
            issue.kind.to_string(),
            issue.message.clone(),
        ]);
    }

    table
}
