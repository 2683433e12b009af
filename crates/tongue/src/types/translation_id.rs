use serde::{Deserialize, Serialize};

use super::Section;

/// Identity of one translation: key, language and section.
///
/// Equality is by value. The store addresses templates through
/// [`storage_key`](Self::storage_key), which renders the identity as
/// `language/section/key`.
///
/// # Example
///
/// ```
/// use tongue::TranslationId;
///
/// let id = TranslationId::new("menu.title", "en");
/// assert_eq!(id.storage_key(), "en/0/menu.title");
///
/// let id = TranslationId::new("menu.title", "ru").with_section("admin");
/// assert_eq!(id.storage_key(), "ru/admin/menu.title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationId {
    key: String,
    language: String,
    #[serde(default)]
    section: Section,
}

impl TranslationId {
    /// Create an identity in the default section.
    pub fn new(key: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            language: language.into(),
            section: Section::default(),
        }
    }

    /// Return a copy of this identity placed in `section`.
    pub fn with_section(self, section: impl Into<Section>) -> Self {
        Self {
            section: section.into(),
            ..self
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The composite key used by stores: `language/section/key`.
    pub fn storage_key(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TranslationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.language, self.section, self.key)
    }
}

/// A stored template together with its identity.
///
/// Entries are replaced as a whole, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    #[serde(flatten)]
    id: TranslationId,
    template: String,
}

impl TranslationEntry {
    pub fn new(id: TranslationId, template: impl Into<String>) -> Self {
        Self {
            id,
            template: template.into(),
        }
    }

    pub fn id(&self) -> &TranslationId {
        &self.id
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Split the entry into its identity and template.
    pub fn into_parts(self) -> (TranslationId, String) {
        (self.id, self.template)
    }
}
