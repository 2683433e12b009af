//! The translation engine.
//!
//! [`TranslationEngine`] ties together a store, a pluralizer registry and an
//! audit sink, and is the entry point for resolving translations.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use bon::Builder;
use tracing::{debug, trace};

use crate::interpreter::evaluator::eval_template;
use crate::interpreter::{
    AuditEvent, AuditSink, EvalContext, MemoryStore, NullAuditSink, PluralRule,
    PluralizerRegistry, TranslationStore,
};
use crate::parser::parse_template;
use crate::types::{TranslationId, Value};

/// Resolves translation keys to localized strings.
///
/// `translate` never fails. Problems degrade to a substitute string and are
/// reported to the audit sink:
/// - an invalid key yields `""` ([`AuditEvent::KeyInvalid`])
/// - a missing translation yields the key itself ([`AuditEvent::KeyMiss`])
/// - an unknown language is pluralized with the registry's default rule
///   ([`AuditEvent::PluralizerMiss`], once per language)
///
/// The engine caches one plural rule per language on first use. The cache is
/// behind a lock, so a shared engine can translate from several threads;
/// mutating the store needs `&mut`.
///
/// # Example
///
/// ```
/// use tongue::{MemoryStore, TranslationEngine, TranslationEntry, TranslationId, params};
/// use tongue::TranslationStore;
///
/// let mut engine = TranslationEngine::builder()
///     .store(MemoryStore::new())
///     .build();
///
/// let id = TranslationId::new("inbox.count", "en");
/// engine
///     .store_mut()
///     .set(TranslationEntry::new(id.clone(), "%{n} %{n -> message,messages}"));
///
/// assert_eq!(engine.translate(&id, &params! { "n" => 1 }), "1 message");
/// assert_eq!(engine.translate(&id, &params! { "n" => 3 }), "3 messages");
/// ```
#[derive(Builder)]
pub struct TranslationEngine<S> {
    /// Where templates are looked up.
    store: S,

    /// Plural rules by language.
    #[builder(default)]
    pluralizers: PluralizerRegistry,

    /// Receiver of lookup outcomes.
    #[builder(default = Arc::new(NullAuditSink) as Arc<dyn AuditSink>)]
    auditor: Arc<dyn AuditSink>,

    /// Whether an operator naming an absent gender parameter emits
    /// [`AuditEvent::KeywordMiss`].
    #[builder(default = true)]
    report_missing_gender: bool,

    /// Plural rule per language, filled on first use.
    #[builder(skip)]
    pluralizer_cache: RwLock<HashMap<String, Arc<dyn PluralRule>>>,
}

impl TranslationEngine<MemoryStore> {
    /// Create an engine with an empty in-memory store, the default
    /// pluralizers and no auditing.
    pub fn new() -> Self {
        Self::builder().store(MemoryStore::new()).build()
    }
}

impl Default for TranslationEngine<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TranslationStore> TranslationEngine<S> {
    /// Resolve `id` and interpolate `params` into it.
    ///
    /// With empty `params` the stored template is returned untouched, even
    /// if it contains placeholders.
    pub fn translate(&self, id: &TranslationId, params: &HashMap<String, Value>) -> String {
        if !is_valid_key(id.key()) {
            self.auditor.log(id, AuditEvent::KeyInvalid);
            return String::new();
        }

        let Some(text) = self.store.get(id) else {
            self.auditor.log(id, AuditEvent::KeyMiss);
            return id.key().to_string();
        };

        self.auditor.log(id, AuditEvent::KeyUsed);

        if params.is_empty() {
            return text.to_string();
        }

        let template = parse_template(text);
        if template.is_plain() {
            return text.to_string();
        }

        let ctx = EvalContext::new(id, params, self.auditor.as_ref())
            .with_missing_gender_reports(self.report_missing_gender);
        eval_template(&template, &ctx, || self.pluralizer_for(id))
    }

    /// Resolve `id` without parameters.
    pub fn translate_plain(&self, id: &TranslationId) -> String {
        self.translate(id, &HashMap::new())
    }

    /// Returns true if a template is stored for `id`. Nothing is audited.
    pub fn is_exist(&self, id: &TranslationId) -> bool {
        self.store.get(id).is_some()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying store, for loaders.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The pluralizer registry.
    pub fn pluralizers(&self) -> &PluralizerRegistry {
        &self.pluralizers
    }

    /// The pluralizer registry, for registering languages.
    ///
    /// Clears the per-language rule cache so new registrations take effect.
    pub fn pluralizers_mut(&mut self) -> &mut PluralizerRegistry {
        self.pluralizer_cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        &mut self.pluralizers
    }

    /// The plural rule for `id`'s language.
    ///
    /// On first use for a language the registry is consulted; if it has no
    /// rule, [`AuditEvent::PluralizerMiss`] is emitted and the default rule
    /// is cached in its place.
    pub fn pluralizer_for(&self, id: &TranslationId) -> Arc<dyn PluralRule> {
        let language = id.language();
        if let Some(rule) = self
            .pluralizer_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(language)
        {
            return Arc::clone(rule);
        }

        let rule = match self.pluralizers.pluralizer(language) {
            Some(rule) => rule,
            None => {
                self.auditor.log(id, AuditEvent::PluralizerMiss);
                debug!(
                    language,
                    fallback = self.pluralizers.default_language(),
                    "no pluralizer registered, using default"
                );
                self.pluralizers.default_pluralizer()
            }
        };

        trace!(language, forms = rule.forms().len(), "caching pluralizer");
        let mut cache = self
            .pluralizer_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(language.to_string()).or_insert(rule))
    }
}

/// Returns true if `key` is a syntactically valid translation key.
///
/// Valid keys are non-empty and use only lowercase ASCII letters, digits and
/// `. # = { } [ ] -`. Existence is not checked.
///
/// ```
/// use tongue::is_valid_key;
///
/// assert!(is_valid_key("menu.items[0]"));
/// assert!(!is_valid_key("Menu"));
/// assert!(!is_valid_key(""));
/// ```
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(is_key_byte)
}

fn is_key_byte(b: u8) -> bool {
    matches!(
        b,
        b'a'..=b'z' | b'0'..=b'9' | b'.' | b'#' | b'=' | b'{' | b'}' | b'[' | b']' | b'-'
    )
}
