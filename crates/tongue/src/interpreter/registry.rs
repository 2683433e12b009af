//! Pluralizer registry: language code to plural rule factory.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::interpreter::plural::{CldrRule, English, PluralRule, Russian};
use crate::interpreter::ConfigError;

/// Factory producing a plural rule instance.
pub type RuleFactory = Box<dyn Fn() -> Arc<dyn PluralRule> + Send + Sync>;

/// A registry mapping language codes to plural rules.
///
/// Built-in languages are `en` and `it` (English rule) and `ru` (Russian
/// rule). The default language is validated against the built-ins when the
/// registry is created, so [`default_pluralizer`](Self::default_pluralizer)
/// can never fail.
///
/// # Example
///
/// ```
/// use tongue::{English, PluralizerRegistry};
///
/// let mut registry = PluralizerRegistry::new("ru").unwrap();
/// assert!(registry.pluralizer("de").is_none());
///
/// registry.add_pluralizer("de", || English);
/// assert!(registry.pluralizer("de").is_some());
///
/// assert!(PluralizerRegistry::new("xx").is_err());
/// ```
pub struct PluralizerRegistry {
    /// Language whose rule is used when a language has none.
    default_language: String,
    /// Rule factories keyed by language code.
    factories: HashMap<String, RuleFactory>,
}

impl PluralizerRegistry {
    /// Create a registry with the built-in rules and `default_language` as
    /// the fallback.
    ///
    /// Fails if `default_language` is not one of the built-in languages.
    pub fn new(default_language: impl Into<String>) -> Result<Self, ConfigError> {
        let default_language = default_language.into();
        let factories = builtin_factories();
        if !factories.contains_key(&default_language) {
            return Err(ConfigError::UnknownDefaultLanguage {
                language: default_language,
            });
        }
        Ok(Self {
            default_language,
            factories,
        })
    }

    /// The fallback language code.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Get a rule for `language`, or `None` if the language is not registered.
    pub fn pluralizer(&self, language: &str) -> Option<Arc<dyn PluralRule>> {
        self.factories.get(language).map(|factory| factory())
    }

    /// Get the rule for the default language.
    pub fn default_pluralizer(&self) -> Arc<dyn PluralRule> {
        self.pluralizer(&self.default_language)
            .expect("default language is validated at construction")
    }

    /// Register (or replace) the rule factory for `language`.
    pub fn add_pluralizer<F, R>(&mut self, language: impl Into<String>, factory: F)
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: PluralRule + 'static,
    {
        let language = language.into();
        debug!(language = %language, "registering pluralizer");
        self.factories.insert(
            language,
            Box::new(move || Arc::new(factory()) as Arc<dyn PluralRule>),
        );
    }

    /// Register a rule backed by CLDR data for `language`.
    ///
    /// Fails if the tag is not a valid locale or has no plural data.
    pub fn add_cldr_pluralizer(&mut self, language: &str) -> Result<(), ConfigError> {
        let rule = Arc::new(CldrRule::try_new(language)?);
        debug!(language, forms = rule.forms().len(), "registering CLDR pluralizer");
        self.factories.insert(
            language.to_string(),
            Box::new(move || Arc::clone(&rule) as Arc<dyn PluralRule>),
        );
        Ok(())
    }
}

impl Default for PluralizerRegistry {
    /// A registry with the built-in rules and English as the fallback.
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            factories: builtin_factories(),
        }
    }
}

impl std::fmt::Debug for PluralizerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluralizerRegistry")
            .field("default_language", &self.default_language)
            .field("languages", &self.languages())
            .finish()
    }
}

fn builtin_factories() -> HashMap<String, RuleFactory> {
    let mut factories: HashMap<String, RuleFactory> = HashMap::new();
    factories.insert("ru".to_string(), Box::new(|| Arc::new(Russian) as Arc<dyn PluralRule>));
    factories.insert("en".to_string(), Box::new(|| Arc::new(English) as Arc<dyn PluralRule>));
    factories.insert("it".to_string(), Box::new(|| Arc::new(English) as Arc<dyn PluralRule>));
    factories
}
