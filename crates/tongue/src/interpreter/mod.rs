//! Translation engine.
//!
//! This module holds the runtime: plural rules and their registry, template
//! storage, audit sinks, and the engine that resolves a key to a string.

mod audit;
mod context;
mod engine;
mod error;
mod evaluator;
mod plural;
mod registry;
mod store;

pub use audit::{AuditEvent, AuditSink, NullAuditSink, RecordingAuditSink, TracingAuditSink};
pub use context::EvalContext;
pub use engine::{TranslationEngine, is_valid_key};
pub use error::ConfigError;
pub use evaluator::{eval_template, resolve_operator};
pub use plural::{CldrRule, English, PluralRule, Russian};
pub use registry::{PluralizerRegistry, RuleFactory};
pub use store::{MemoryStore, TranslationStore};
