//! Tests for the pluralizer registry.

use tongue::{ConfigError, English, PluralForm, PluralRule, PluralizerRegistry, Russian};

#[test]
fn default_registry_falls_back_to_english() {
    let registry = PluralizerRegistry::default();
    assert_eq!(registry.default_language(), "en");
    assert_eq!(
        registry.default_pluralizer().forms(),
        &[PluralForm::One, PluralForm::Other]
    );
}

#[test]
fn builtin_languages() {
    let registry = PluralizerRegistry::new("en").unwrap();
    assert_eq!(registry.languages(), ["en", "it", "ru"]);

    let ru = registry.pluralizer("ru").unwrap();
    assert_eq!(ru.form(3.0), PluralForm::Few);

    // Italian shares the English rule.
    let it = registry.pluralizer("it").unwrap();
    assert_eq!(it.forms(), English.forms());
}

#[test]
fn unknown_language_is_none() {
    let registry = PluralizerRegistry::default();
    assert!(registry.pluralizer("de").is_none());
    assert!(registry.pluralizer("").is_none());
}

#[test]
fn russian_default_language() {
    let registry = PluralizerRegistry::new("ru").unwrap();
    assert_eq!(registry.default_language(), "ru");
    assert_eq!(registry.default_pluralizer().form(5.0), PluralForm::Many);
}

#[test]
fn unregistered_default_language_is_a_config_error() {
    let err = PluralizerRegistry::new("de").unwrap_err();
    match err {
        ConfigError::UnknownDefaultLanguage { language } => assert_eq!(language, "de"),
        other => panic!("Expected UnknownDefaultLanguage, got {other:?}"),
    }
}

#[test]
fn config_error_message_names_language() {
    let err = PluralizerRegistry::new("fr").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unable to look up pluralizer for fallback language 'fr'"
    );
}

#[test]
fn add_pluralizer_registers_new_language() {
    let mut registry = PluralizerRegistry::default();
    registry.add_pluralizer("uk", || Russian);
    let uk = registry.pluralizer("uk").unwrap();
    assert_eq!(uk.form(22.0), PluralForm::Few);
    assert!(registry.languages().contains(&"uk"));
}

#[test]
fn add_pluralizer_overwrites_existing_language() {
    let mut registry = PluralizerRegistry::default();
    registry.add_pluralizer("en", || Russian);
    assert_eq!(registry.default_pluralizer().form(3.0), PluralForm::Few);
}

#[test]
fn add_cldr_pluralizer() {
    let mut registry = PluralizerRegistry::default();
    registry.add_cldr_pluralizer("pl").unwrap();
    let pl = registry.pluralizer("pl").unwrap();
    assert_eq!(pl.form(5.0), PluralForm::Many);
}

#[test]
fn add_cldr_pluralizer_rejects_bad_tag() {
    let mut registry = PluralizerRegistry::default();
    assert!(registry.add_cldr_pluralizer("??").is_err());
    assert!(registry.pluralizer("??").is_none());
}
