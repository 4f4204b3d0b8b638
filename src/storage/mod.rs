//! Bounded history storage for absurda
//!
//! Each content kind persists its items in one JSON file holding an array,
//! newest first, capped at [`MAX_ITEMS`]. Mirroring the original app's
//! localStorage layer, no store operation ever propagates a persistence
//! failure to the caller: reads degrade to an empty collection and writes
//! degrade to a logged no-op.

use crate::error::{AbsurdaError, Result};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub mod credentials;
pub use credentials::CredentialStore;

/// Maximum number of items retained per content kind
pub const MAX_ITEMS: usize = 50;

/// Common shape of every stored item
pub trait HistoryEntry {
    /// Unique, never-reused identifier
    fn id(&self) -> &str;
    /// RFC 3339 creation timestamp
    fn created_at(&self) -> &str;
    /// One-line summary for list output
    fn summary(&self) -> String;
}

/// Resolve the directory holding history files and the stored credential
///
/// Priority: `ABSURDA_DATA_DIR` environment override, then the configured
/// directory, then the platform data dir. The directory is created if
/// missing.
pub fn resolve_data_dir(configured: Option<&Path>) -> Result<PathBuf> {
    let dir = if let Ok(override_dir) = std::env::var("ABSURDA_DATA_DIR") {
        PathBuf::from(override_dir)
    } else if let Some(dir) = configured {
        dir.to_path_buf()
    } else {
        let proj_dirs = ProjectDirs::from("nl", "absurditeiten", "absurda")
            .ok_or_else(|| AbsurdaError::Storage("Could not determine data directory".into()))?;
        proj_dirs.data_dir().to_path_buf()
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| AbsurdaError::Storage(format!("Failed to create data directory: {}", e)))?;
    Ok(dir)
}

/// Bounded, persisted collection of items for one content kind
///
/// # Examples
///
/// ```no_run
/// use absurda::content::tongbreker::{Tongbreker, STORAGE_KEY};
/// use absurda::storage::HistoryStore;
///
/// # fn example() -> absurda::error::Result<()> {
/// let store: HistoryStore<Tongbreker> = HistoryStore::open(STORAGE_KEY, None)?;
/// store.save(&Tongbreker::new("De trol trapte twaalf turnsters."));
/// assert!(!store.get_all().is_empty());
/// # Ok(())
/// # }
/// ```
pub struct HistoryStore<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> HistoryStore<T>
where
    T: HistoryEntry + Serialize + DeserializeOwned,
{
    /// Open the store for a storage key, resolving the data directory
    pub fn open(key: &str, configured_dir: Option<&Path>) -> Result<Self> {
        let dir = resolve_data_dir(configured_dir)?;
        Ok(Self::at(&dir, key))
    }

    /// Open the store at an explicit directory
    ///
    /// Primarily useful for tests where the platform data dir is not
    /// desirable (for example, a temporary directory).
    pub fn at(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", key)),
            _marker: PhantomData,
        }
    }

    /// Get all items, newest first
    ///
    /// Any read or parse failure degrades to an empty collection; a
    /// corrupted file is logged and treated as absent.
    pub fn get_all(&self) -> Vec<T> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Error loading history from {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Corrupted history file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Prepend an item and persist, evicting the tail beyond [`MAX_ITEMS`]
    ///
    /// Returns whether the write succeeded; failures are logged, never
    /// propagated.
    pub fn save(&self, item: &T) -> bool {
        let mut history = self.get_all();
        let owned = match clone_via_json(item) {
            Some(owned) => owned,
            None => return false,
        };
        history.insert(0, owned);
        history.truncate(MAX_ITEMS);
        self.persist(&history)
    }

    /// Save unless an existing item matches the predicate
    ///
    /// Returns whether the item was saved. Used at import time by the
    /// kinds that treat identical content as a duplicate.
    pub fn save_if_new<F>(&self, item: &T, mut is_same: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        if self.get_all().iter().any(|existing| is_same(existing)) {
            tracing::debug!("Skipping duplicate item for {}", self.path.display());
            return false;
        }
        self.save(item)
    }

    /// Remove the item with the given id, if present
    ///
    /// Accepts a full id or a prefix of at least 4 characters. A missing
    /// id is a successful no-op.
    pub fn delete(&self, id: &str) -> bool {
        let history = self.get_all();
        let filtered: Vec<T> = history
            .into_iter()
            .filter(|item| !id_matches(item.id(), id))
            .collect();
        self.persist(&filtered)
    }

    /// Find an item by full id or id prefix
    pub fn find(&self, id: &str) -> Option<T> {
        self.get_all()
            .into_iter()
            .find(|item| id_matches(item.id(), id))
    }

    /// Remove the entire collection
    pub fn clear(&self) -> bool {
        match std::fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                tracing::warn!("Error clearing history {}: {}", self.path.display(), e);
                false
            }
        }
    }

    fn persist(&self, items: &[T]) -> bool {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Error serializing history for {}: {}", self.path.display(), e);
                return false;
            }
        };
        match std::fs::write(&self.path, json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Error writing history to {}: {}", self.path.display(), e);
                false
            }
        }
    }
}

/// Full-id match, or prefix match for lookups typed by hand
fn id_matches(full: &str, query: &str) -> bool {
    if full == query {
        return true;
    }
    query.len() >= 4 && query.len() < full.len() && full.starts_with(query)
}

/// Round-trip an item through JSON to obtain an owned copy
///
/// Items are plain data; requiring `Clone` on every kind buys nothing
/// over the serialization bound the store already has.
fn clone_via_json<T: Serialize + DeserializeOwned>(item: &T) -> Option<T> {
    match serde_json::to_value(item).and_then(serde_json::from_value) {
        Ok(owned) => Some(owned),
        Err(e) => {
            tracing::warn!("Error copying item for save: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestItem {
        id: String,
        text: String,
        created_at: String,
    }

    impl TestItem {
        fn new(id: &str, text: &str) -> Self {
            Self {
                id: id.to_string(),
                text: text.to_string(),
                created_at: "2025-01-01T00:00:00Z".to_string(),
            }
        }
    }

    impl HistoryEntry for TestItem {
        fn id(&self) -> &str {
            &self.id
        }
        fn created_at(&self) -> &str {
            &self.created_at
        }
        fn summary(&self) -> String {
            self.text.clone()
        }
    }

    /// Helper: create a store backed by a temp directory.
    ///
    /// Returns both the store and the `TempDir` so the caller keeps
    /// ownership of the directory (preventing it from being removed).
    fn create_test_store() -> (HistoryStore<TestItem>, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create tempdir");
        let store = HistoryStore::at(dir.path(), "test_history");
        (store, dir)
    }

    #[test]
    fn test_get_all_empty_for_new_store() {
        let (store, _dir) = create_test_store();
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_save_prepends_newest_first() {
        let (store, _dir) = create_test_store();
        assert!(store.save(&TestItem::new("id-a", "A")));
        assert!(store.save(&TestItem::new("id-b", "B")));
        assert!(store.save(&TestItem::new("id-c", "C")));

        let all = store.get_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].text, "C");
        assert_eq!(all[1].text, "B");
        assert_eq!(all[2].text, "A");
    }

    #[test]
    fn test_save_evicts_tail_beyond_max() {
        let (store, _dir) = create_test_store();
        for i in 0..MAX_ITEMS + 5 {
            store.save(&TestItem::new(&format!("id-{}", i), &format!("item {}", i)));
        }

        let all = store.get_all();
        assert_eq!(all.len(), MAX_ITEMS);
        // The 50 most recent, newest first.
        assert_eq!(all[0].text, format!("item {}", MAX_ITEMS + 4));
        assert_eq!(all[MAX_ITEMS - 1].text, "item 5");
    }

    #[test]
    fn test_delete_removes_matching_item() {
        let (store, _dir) = create_test_store();
        store.save(&TestItem::new("keep-1234", "keep"));
        store.save(&TestItem::new("drop-1234", "drop"));

        assert!(store.delete("drop-1234"));
        let all = store.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "keep-1234");
    }

    #[test]
    fn test_delete_by_prefix() {
        let (store, _dir) = create_test_store();
        store.save(&TestItem::new("abcdef12-3456", "x"));
        assert!(store.delete("abcdef12"));
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (store, _dir) = create_test_store();
        store.save(&TestItem::new("id-a", "A"));
        assert!(store.delete("no-such-id"));
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_delete_short_prefix_does_not_match() {
        let (store, _dir) = create_test_store();
        store.save(&TestItem::new("abcdef12", "x"));
        // Prefixes shorter than 4 characters are ignored.
        assert!(store.delete("ab"));
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_find_by_full_id_and_prefix() {
        let (store, _dir) = create_test_store();
        store.save(&TestItem::new("21173421-201f-4e56", "x"));

        assert!(store.find("21173421-201f-4e56").is_some());
        assert!(store.find("21173421").is_some());
        assert!(store.find("ffffffff").is_none());
    }

    #[test]
    fn test_clear_removes_collection() {
        let (store, _dir) = create_test_store();
        store.save(&TestItem::new("id-a", "A"));
        assert!(store.clear());
        assert!(store.get_all().is_empty());
        // Clearing again is fine.
        assert!(store.clear());
    }

    #[test]
    fn test_corrupted_file_degrades_to_empty() {
        let (store, dir) = create_test_store();
        std::fs::write(dir.path().join("test_history.json"), "{not json").unwrap();
        assert!(store.get_all().is_empty());

        // A subsequent save recovers the store.
        assert!(store.save(&TestItem::new("id-a", "A")));
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_save_if_new_skips_duplicates() {
        let (store, _dir) = create_test_store();
        store.save(&TestItem::new("id-a", "same text"));

        let dup = TestItem::new("id-b", "same text");
        assert!(!store.save_if_new(&dup, |existing| existing.text == dup.text));
        assert_eq!(store.get_all().len(), 1);

        let fresh = TestItem::new("id-c", "other text");
        assert!(store.save_if_new(&fresh, |existing| existing.text == fresh.text));
        assert_eq!(store.get_all().len(), 2);
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempdir().expect("tempdir");
        {
            let store: HistoryStore<TestItem> = HistoryStore::at(dir.path(), "persist");
            store.save(&TestItem::new("id-a", "A"));
        }
        let store: HistoryStore<TestItem> = HistoryStore::at(dir.path(), "persist");
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn test_id_matches() {
        assert!(id_matches("abcd-efgh", "abcd-efgh"));
        assert!(id_matches("abcd-efgh", "abcd"));
        assert!(!id_matches("abcd-efgh", "ab"));
        assert!(!id_matches("abcd-efgh", "efgh"));
        assert!(!id_matches("abcd", "abcd-efgh"));
    }
}
