//! Catalog files: a JSON array of translation entries.
//!
//! ```json
//! [
//!   { "key": "cart.items", "language": "en", "template": "%{n -> item|items}" },
//!   { "key": "title", "language": "ru", "section": "shop", "template": "Магазин" }
//! ]
//! ```

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, IntoDiagnostic, Result};
use tongue::{MemoryStore, TranslationEntry};
use tracing::debug;

use crate::output::CatalogDiagnostic;

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<TranslationEntry>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read catalog {}: {}", path.display(), e))?;

    let entries = parse_catalog(path, &content)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded catalog");
    Ok(entries)
}

/// Parse catalog text. `path` is only used for diagnostics.
pub fn parse_catalog(path: &Path, content: &str) -> Result<Vec<TranslationEntry>> {
    serde_json::from_str(content)
        .map_err(|e| CatalogDiagnostic::from_json_error(path, content, &e).into())
}

/// Load a catalog straight into a store.
pub fn load_store(path: &Path) -> Result<MemoryStore> {
    Ok(load_catalog(path)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use tongue::{Section, TranslationId, TranslationStore};

    use super::*;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_entries_with_and_without_section() {
        let file = write_catalog(
            r#"[
                {"key": "greeting", "language": "en", "template": "Hello"},
                {"key": "title", "language": "ru", "section": "shop", "template": "Магазин"},
                {"key": "count", "language": "en", "section": 7, "template": "%{n}"}
            ]"#,
        );

        let entries = load_catalog(file.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id().section(), &Section::Id(0));
        assert_eq!(entries[1].id().section(), &Section::Name("shop".into()));
        assert_eq!(entries[2].id().section(), &Section::Id(7));
        assert_eq!(entries[1].template(), "Магазин");
    }

    #[test]
    fn load_store_indexes_by_identity() {
        let file = write_catalog(
            r#"[{"key": "title", "language": "ru", "section": "shop", "template": "Магазин"}]"#,
        );

        let store = load_store(file.path()).unwrap();
        let id = TranslationId::new("title", "ru").with_section("shop");
        assert_eq!(store.get(&id), Some("Магазин"));
        assert_eq!(store.get(&TranslationId::new("title", "ru")), None);
    }

    #[test]
    fn malformed_json_points_at_error() {
        let content = "[\n  {\"key\": \"a\", \"language\": \"en\" \"template\": \"x\"}\n]";
        let err = parse_catalog(Path::new("bad.json"), content).unwrap_err();
        let diagnostic = err.downcast_ref::<CatalogDiagnostic>().unwrap();
        assert!(diagnostic.to_string().starts_with("invalid catalog: expected `,`"));
    }

    #[test]
    fn missing_template_field_is_rejected() {
        let result = parse_catalog(Path::new("x.json"), r#"[{"key": "a", "language": "en"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
