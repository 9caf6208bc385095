//! JSON-index-backed emote metadata store.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::entities::EmoteRecord;
use crate::domain::errors::ResolveError;
use crate::domain::ports::EmoteStorePort;

/// Metadata store reading an `emotes.json` index.
///
/// The index is a flat JSON array of records; one record per frame. The whole
/// index is loaded once at construction and queries are served from memory,
/// grouped by name with frames sorted ascending.
pub struct JsonEmoteStore {
    by_name: HashMap<String, Vec<EmoteRecord>>,
}

impl JsonEmoteStore {
    /// Loads the index file at `path`.
    ///
    /// # Errors
    /// Returns [`ResolveError::Store`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ResolveError> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            warn!(path = %path.display(), error = %err, "failed to read emote index");
            ResolveError::store(format!("failed to read {}: {err}", path.display()))
        })?;

        let records: Vec<EmoteRecord> = serde_json::from_str(&content).map_err(|err| {
            ResolveError::store(format!("failed to parse {}: {err}", path.display()))
        })?;

        debug!(path = %path.display(), records = records.len(), "loaded emote index");
        Ok(Self::from_records(records))
    }

    /// Builds a store from already-parsed records.
    #[must_use]
    pub fn from_records(records: Vec<EmoteRecord>) -> Self {
        let mut by_name: HashMap<String, Vec<EmoteRecord>> = HashMap::new();
        for record in records {
            by_name.entry(record.name.clone()).or_default().push(record);
        }
        for frames in by_name.values_mut() {
            frames.sort_by_key(|record| record.frame_index);
        }
        Self { by_name }
    }

    /// Returns the number of distinct emote names in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the index holds no emotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl EmoteStorePort for JsonEmoteStore {
    fn records(&self, name: &str) -> Result<Vec<EmoteRecord>, ResolveError> {
        Ok(self.by_name.get(name).cloned().unwrap_or_default())
    }
}

impl std::fmt::Debug for JsonEmoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonEmoteStore")
            .field("emotes", &self.by_name.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_query() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("emotes.json");
        std::fs::write(
            &path,
            r#"[
                {"name":"smile"},
                {"name":"dance","animated":true,"delay_ms":200,"frame_index":1},
                {"name":"dance","animated":true,"delay_ms":100,"frame_index":0}
            ]"#,
        )
        .unwrap();

        let store = JsonEmoteStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);

        // Frames come back sorted by index even if the file is unordered.
        let dance = store.records("dance").unwrap();
        assert_eq!(dance.len(), 2);
        assert_eq!(dance[0].frame_index, 0);
        assert_eq!(dance[1].frame_index, 1);
    }

    #[test]
    fn test_unknown_name_yields_empty() {
        let store = JsonEmoteStore::from_records(vec![EmoteRecord::single("smile")]);
        assert!(store.records("nosuch").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_store_error() {
        let err = JsonEmoteStore::load(Path::new("/nonexistent/emotes.json")).unwrap_err();
        assert!(matches!(err, ResolveError::Store { .. }));
    }

    #[test]
    fn test_malformed_index_is_store_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("emotes.json");
        std::fs::write(&path, "{ not json ]").unwrap();

        let err = JsonEmoteStore::load(&path).unwrap_err();
        assert!(matches!(err, ResolveError::Store { .. }));
    }
}
