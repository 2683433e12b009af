//! Implementation of the `tongue translate` command.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use miette::IntoDiagnostic;
use serde::Serialize;
use tongue::{
    AuditEvent, AuditSink, RecordingAuditSink, Section, TracingAuditSink, TranslationEngine,
    TranslationId, Value,
};

use super::{build_registry, parse_param, parse_section};
use crate::catalog::load_store;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Catalog file (JSON array of entries)
    #[arg(long, env = "TONGUE_CATALOG")]
    pub catalog: PathBuf,

    /// Language code of the translation (e.g., en, ru)
    #[arg(long, required = true)]
    pub lang: String,

    /// Section id or name
    #[arg(long, value_parser = parse_section, default_value = "0")]
    pub section: Section,

    /// Fallback language for plural rules
    #[arg(long, env = "TONGUE_DEFAULT_LANG", default_value = "en")]
    pub default_lang: String,

    /// Extra languages to pluralize with CLDR data (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub cldr: Vec<String>,

    /// Translation key
    pub key: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,

    /// Print the audit events of the lookup
    #[arg(long)]
    pub audit: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateResult {
    id: String,
    found: bool,
    text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<&'static str>,
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let store = load_store(&args.catalog)?;
    let registry = build_registry(&args.default_lang, &args.cldr)?;

    let recorder = Arc::new(RecordingAuditSink::new());
    let auditor: Arc<dyn AuditSink> = if args.audit {
        Arc::clone(&recorder) as Arc<dyn AuditSink>
    } else {
        Arc::new(TracingAuditSink)
    };

    let engine = TranslationEngine::builder()
        .store(store)
        .pluralizers(registry)
        .auditor(auditor)
        .build();

    let id = TranslationId::new(args.key, args.lang).with_section(args.section);
    let params: HashMap<String, Value> = args.params.into_iter().collect();

    let found = engine.is_exist(&id);
    let text = engine.translate(&id, &params);
    let events: Vec<&'static str> = recorder.kinds().iter().map(AuditEvent::as_str).collect();

    if args.json {
        let output = TranslateResult {
            id: id.to_string(),
            found,
            text,
            events,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", text);
        for event in &events {
            eprintln!("audit: {} {}", event, id);
        }
    }

    Ok(if found { exitcode::OK } else { exitcode::DATAERR })
}
