//! Tests for translation identities and the in-memory store.

use tongue::{MemoryStore, Section, TranslationEntry, TranslationId, TranslationStore};

fn entry(key: &str, lang: &str, template: &str) -> TranslationEntry {
    TranslationEntry::new(TranslationId::new(key, lang), template)
}

// =========================================================================
// Identity
// =========================================================================

#[test]
fn default_section_is_zero() {
    let id = TranslationId::new("title", "en");
    assert_eq!(id.section(), &Section::Id(0));
    assert_eq!(id.storage_key(), "en/0/title");
}

#[test]
fn storage_key_includes_section() {
    let id = TranslationId::new("title", "ru").with_section(7);
    assert_eq!(id.storage_key(), "ru/7/title");

    let id = TranslationId::new("title", "ru").with_section("admin");
    assert_eq!(id.storage_key(), "ru/admin/title");
}

#[test]
fn empty_section_name_is_default_section() {
    let id = TranslationId::new("title", "en").with_section("");
    assert_eq!(id.section(), &Section::Id(0));
}

#[test]
fn identities_compare_by_value() {
    let a = TranslationId::new("k", "en").with_section(1);
    let b = TranslationId::new("k", "en").with_section(1);
    assert_eq!(a, b);
    assert_ne!(a, TranslationId::new("k", "en"));
}

#[test]
fn identity_deserializes_with_default_section() {
    let id: TranslationId = serde_json::from_str(r#"{"key":"k","language":"en"}"#).unwrap();
    assert_eq!(id, TranslationId::new("k", "en"));

    let id: TranslationId =
        serde_json::from_str(r#"{"key":"k","language":"en","section":"faq"}"#).unwrap();
    assert_eq!(id.section(), &Section::Name("faq".to_string()));
}

#[test]
fn entry_deserializes_flat() {
    let entry: TranslationEntry = serde_json::from_str(
        r#"{"key":"k","language":"en","section":3,"template":"Hello"}"#,
    )
    .unwrap();
    assert_eq!(entry.id(), &TranslationId::new("k", "en").with_section(3));
    assert_eq!(entry.template(), "Hello");
}

#[test]
fn catalog_entry_with_empty_section_is_found_in_default_section() {
    let entry: TranslationEntry =
        serde_json::from_str(r#"{"key":"k","language":"en","section":"","template":"Hi"}"#)
            .unwrap();
    assert_eq!(entry.id().section(), &Section::Id(0));
    assert_eq!(entry.id().storage_key(), "en/0/k");

    let mut store = MemoryStore::new();
    store.set(entry);
    let id = TranslationId::new("k", "en").with_section("");
    assert_eq!(store.get(&id), Some("Hi"));
}

// =========================================================================
// MemoryStore
// =========================================================================

#[test]
fn get_missing_is_none() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(&TranslationId::new("k", "en")), None);
}

#[test]
fn set_overwrites_same_identity() {
    let mut store = MemoryStore::new();
    store.set(entry("k", "en", "first"));
    store.set(entry("k", "en", "second"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&TranslationId::new("k", "en")), Some("second"));
}

#[test]
fn identities_differing_in_any_part_do_not_collide() {
    let mut store = MemoryStore::new();
    store.set(entry("k", "en", "en"));
    store.set(entry("k", "ru", "ru"));
    store.set(TranslationEntry::new(
        TranslationId::new("k", "en").with_section(1),
        "en/1",
    ));
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.get(&TranslationId::new("k", "en").with_section(1)),
        Some("en/1")
    );
}

#[test]
fn numeric_and_named_zero_section_share_storage_key() {
    let mut store = MemoryStore::new();
    store.set(entry("k", "en", "numeric"));
    let named = TranslationId::new("k", "en").with_section("0");
    assert_eq!(store.get(&named), Some("numeric"));
}

#[test]
fn remove_deletes_entry() {
    let mut store = MemoryStore::new();
    store.set(entry("k", "en", "v"));
    store.remove(&TranslationId::new("k", "en"));
    assert!(store.is_empty());

    // Removing again is a no-op.
    store.remove(&TranslationId::new("k", "en"));
}

#[test]
fn batch_set_then_batch_delete() {
    let entries = vec![
        entry("a", "en", "A"),
        entry("b", "en", "B"),
        entry("a", "ru", "А"),
    ];
    let ids: Vec<TranslationId> = entries.iter().map(|e| e.id().clone()).collect();

    let mut store = MemoryStore::new();
    store.batch_set(entries.clone());
    for e in &entries {
        assert_eq!(store.get(e.id()), Some(e.template()));
    }

    store.batch_delete(&ids);
    for id in &ids {
        assert_eq!(store.get(id), None);
    }
    assert!(store.is_empty());
}

#[test]
fn batch_set_applies_in_order() {
    let mut store = MemoryStore::new();
    store.batch_set([entry("k", "en", "old"), entry("k", "en", "new")]);
    assert_eq!(store.get(&TranslationId::new("k", "en")), Some("new"));
}

#[test]
fn store_collects_from_entries() {
    let store: MemoryStore = [entry("a", "en", "A"), entry("b", "en", "B")]
        .into_iter()
        .collect();
    assert_eq!(store.len(), 2);
}
