//! Translation storage.

use std::collections::HashMap;

use crate::types::{TranslationEntry, TranslationId};

/// Key-value storage for translation templates.
///
/// Entries are addressed by [`TranslationId::storage_key`]. Batch operations
/// apply `set`/`remove` one entry at a time; there is no atomicity and
/// nothing to roll back, since individual operations cannot fail.
pub trait TranslationStore {
    /// Get the template stored for `id`.
    fn get(&self, id: &TranslationId) -> Option<&str>;

    /// Store `entry`, replacing any template with the same identity.
    fn set(&mut self, entry: TranslationEntry);

    /// Remove the template stored for `id`, if any.
    fn remove(&mut self, id: &TranslationId);

    /// Store every entry in order.
    fn batch_set<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = TranslationEntry>,
        Self: Sized,
    {
        for entry in entries {
            self.set(entry);
        }
    }

    /// Remove every listed identity in order.
    fn batch_delete<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a TranslationId>,
        Self: Sized,
    {
        for id in ids {
            self.remove(id);
        }
    }
}

/// An in-memory [`TranslationStore`].
///
/// # Example
///
/// ```
/// use tongue::{MemoryStore, TranslationEntry, TranslationId, TranslationStore};
///
/// let mut store = MemoryStore::new();
/// let id = TranslationId::new("greeting", "en");
/// store.set(TranslationEntry::new(id.clone(), "Hello"));
/// assert_eq!(store.get(&id), Some("Hello"));
///
/// store.remove(&id);
/// assert_eq!(store.get(&id), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Templates keyed by storage key.
    templates: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<TranslationEntry> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = TranslationEntry>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        store.batch_set(iter);
        store
    }
}

impl TranslationStore for MemoryStore {
    fn get(&self, id: &TranslationId) -> Option<&str> {
        self.templates.get(&id.storage_key()).map(String::as_str)
    }

    fn set(&mut self, entry: TranslationEntry) {
        let (id, template) = entry.into_parts();
        self.templates.insert(id.storage_key(), template);
    }

    fn remove(&mut self, id: &TranslationId) {
        self.templates.remove(&id.storage_key());
    }
}
