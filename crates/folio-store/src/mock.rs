//! Mock store implementation for testing.
//!
//! Provides [`MockStore`] for unit testing without filesystem access.

use std::collections::BTreeMap;

use crate::store::{Store, StoreError};

/// In-memory document store for tests.
///
/// Stores document content keyed by identifier. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```
/// use folio_store::{MockStore, Store};
///
/// let store = MockStore::new()
///     .with_document("guide", "---\ntitle: Guide\n---\n\n# Guide");
///
/// assert!(store.exists("guide"));
/// assert_eq!(store.scan_ids().unwrap(), vec!["guide".to_owned()]);
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    documents: BTreeMap<String, String>,
    unavailable: bool,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given identifier and raw content.
    #[must_use]
    pub fn with_document(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.documents.insert(id.into(), content.into());
        self
    }

    /// Make every scan fail as if the backing directory were missing.
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }
}

impl Store for MockStore {
    fn scan_ids(&self) -> Result<Vec<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable {
                path: std::path::PathBuf::from("<mock>"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "store marked unavailable"),
            });
        }
        Ok(self.documents.keys().cloned().collect())
    }

    fn read(&self, id: &str) -> Result<String, StoreError> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    fn exists(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }
}
