//! Pipeline error types.

use folio_render::RenderError;
use folio_store::{MatterError, StoreError};

/// Error surfaced by indexing and rendering operations.
///
/// Errors propagate to the immediate caller; nothing is retried or
/// swallowed, and no operation returns partial results on failure.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// The document store cannot be read at all.
    #[error("{0}")]
    StoreUnavailable(#[source] StoreError),

    /// The requested identifier has no backing document.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// A document's front-matter header could not be parsed.
    #[error("Malformed document '{id}': {source}")]
    MalformedDocument {
        /// Identifier of the offending document.
        id: String,
        /// Underlying front-matter error.
        #[source]
        source: MatterError,
    },

    /// The markdown transformation failed; no partial markup is returned.
    #[error("Failed to render '{id}': {source}")]
    RenderFailure {
        /// Identifier of the document being rendered.
        id: String,
        /// Underlying renderer error.
        #[source]
        source: RenderError,
    },
}

impl From<StoreError> for PostError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::DocumentNotFound(id),
            other => Self::StoreUnavailable(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_document_not_found() {
        let err = PostError::from(StoreError::NotFound("missing".to_owned()));

        assert!(matches!(err, PostError::DocumentNotFound(id) if id == "missing"));
    }

    #[test]
    fn test_store_unavailable_maps_to_store_unavailable() {
        let err = PostError::from(StoreError::Unavailable {
            path: "/posts".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });

        assert!(matches!(err, PostError::StoreUnavailable(_)));
    }
}
