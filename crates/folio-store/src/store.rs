//! Store trait and error types.
//!
//! Provides the core [`Store`] trait for abstracting document enumeration
//! and retrieval, along with [`StoreError`] for unified error handling
//! across backends.
//!
//! # Identifier Convention
//!
//! All identifier parameters are storage names with the content suffix
//! stripped: the file `getting-started.md` has the identifier
//! `getting-started`. Identifiers never contain path separators; a store
//! is a flat collection.

use std::path::PathBuf;

/// Store error with the failing resource attached where known.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store directory is missing or cannot be enumerated.
    /// Fatal to any listing operation.
    #[error("Store unavailable: {path}: {source}", path = .path.display())]
    Unavailable {
        /// Store directory that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No document exists for the requested identifier.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// A document exists but could not be read.
    #[error("Failed to read document '{id}': {source}")]
    Io {
        /// Identifier of the document that failed to read.
        id: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Store abstraction for document enumeration and retrieval.
///
/// Implementations map identifiers to their internal storage format.
/// All operations are read-only and side-effect-free with respect to the
/// underlying store.
pub trait Store: Send + Sync {
    /// Enumerate the identifiers of every document in the store.
    ///
    /// Returns exactly one identifier per document, with no duplicates and
    /// no entries for non-document files. Order is deterministic
    /// (lexicographic) but carries no semantic meaning; consumers that
    /// need a display order sort on metadata themselves.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be
    /// enumerated.
    fn scan_ids(&self) -> Result<Vec<String>, StoreError>;

    /// Read the full raw content of one document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no document exists for the
    /// identifier, or [`StoreError::Io`] if it exists but cannot be read.
    fn read(&self, id: &str) -> Result<String, StoreError>;

    /// Check whether a document exists for the given identifier.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, id: &str) -> bool;
}
