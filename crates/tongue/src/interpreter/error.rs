//! Error types for the translation engine.
//!
//! Only construction can fail. Lookups and interpolation always produce a
//! string and report problems through the audit sink instead.

use thiserror::Error;

/// A configuration error raised while building pluralizers.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The registry's default language has no built-in pluralizer.
    #[error("unable to look up pluralizer for fallback language '{language}'")]
    UnknownDefaultLanguage { language: String },

    /// A language tag could not be parsed as a locale.
    #[error("invalid locale '{language}': {reason}")]
    InvalidLocale { language: String, reason: String },

    /// No CLDR plural data is available for a locale.
    #[error("no plural rules for '{language}': {reason}")]
    MissingPluralData { language: String, reason: String },
}
