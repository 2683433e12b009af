//! Property tests for lookup outcomes that hold for every input.

use std::sync::Arc;

use proptest::prelude::*;
use tongue::{
    AuditEvent, English, MemoryStore, PluralForm, PluralRule, RecordingAuditSink, Russian,
    TranslationEngine, TranslationEntry, TranslationId, TranslationStore, Value,
};

fn recording_engine() -> (TranslationEngine<MemoryStore>, Arc<RecordingAuditSink>) {
    let sink = Arc::new(RecordingAuditSink::new());
    let engine = TranslationEngine::builder()
        .store(MemoryStore::new())
        .auditor(sink.clone())
        .build();
    (engine, sink)
}

fn params_strategy() -> impl Strategy<Value = std::collections::HashMap<String, Value>> {
    prop::collection::hash_map("[a-z]{1,6}", any::<i64>().prop_map(Value::from), 0..4)
}

proptest! {
    #[test]
    fn invalid_keys_translate_to_empty(
        key in "[a-z]{0,4}[A-Z _/]{1,3}[a-z]{0,4}",
        params in params_strategy(),
    ) {
        let (engine, sink) = recording_engine();
        let id = TranslationId::new(key, "en");
        prop_assert_eq!(engine.translate(&id, &params), "");
        prop_assert_eq!(sink.kinds(), vec![AuditEvent::KeyInvalid]);
    }

    #[test]
    fn missing_valid_keys_echo_the_key(
        key in "[a-z0-9.#=\\-]{1,16}",
        params in params_strategy(),
    ) {
        let (engine, sink) = recording_engine();
        let id = TranslationId::new(key.clone(), "ru");
        prop_assert_eq!(engine.translate(&id, &params), key);
        prop_assert_eq!(sink.kinds(), vec![AuditEvent::KeyMiss]);
    }

    #[test]
    fn templates_without_placeholders_are_unchanged(
        template in "[^%]{0,40}",
        params in params_strategy(),
    ) {
        let (mut engine, _) = recording_engine();
        let id = TranslationId::new("k", "en");
        engine.store_mut().set(TranslationEntry::new(id.clone(), template.clone()));
        prop_assert_eq!(engine.translate(&id, &params), template);
    }

    #[test]
    fn empty_params_never_interpolate(template in "\\PC{0,40}") {
        let (mut engine, _) = recording_engine();
        let id = TranslationId::new("k", "en");
        engine.store_mut().set(TranslationEntry::new(id.clone(), template.clone()));
        prop_assert_eq!(engine.translate_plain(&id), template);
    }

    #[test]
    fn is_exist_never_audits(key in "\\PC{0,12}", stored in any::<bool>()) {
        let (mut engine, sink) = recording_engine();
        let id = TranslationId::new(key, "en");
        if stored {
            engine.store_mut().set(TranslationEntry::new(id.clone(), "v"));
        }
        prop_assert_eq!(engine.is_exist(&id), stored);
        prop_assert!(sink.events().is_empty());
    }

    #[test]
    fn rule_forms_are_in_form_list(n in any::<f64>()) {
        prop_assert!(English.form_index(n).is_some());
        prop_assert!(Russian.form_index(n).is_some());
    }

    #[test]
    fn russian_fractions_are_other(whole in -1000i64..1000, frac in 0.01f64..0.99) {
        prop_assert_eq!(Russian.form(whole as f64 + frac), PluralForm::Other);
    }

    #[test]
    fn english_is_one_only_for_one(n in any::<i64>()) {
        let expected = if n == 1 { PluralForm::One } else { PluralForm::Other };
        prop_assert_eq!(English.form(n as f64), expected);
    }
}
