//! Filesystem store over a flat directory of markdown files.

use std::fs;
use std::path::PathBuf;

use crate::store::{Store, StoreError};

/// Suffix that marks a file as a document.
const CONTENT_SUFFIX: &str = ".md";

/// Filesystem-backed document store.
///
/// Documents are the `*.md` files directly inside the configured
/// directory. The identifier of a document is its filename with the `.md`
/// suffix stripped; re-appending the suffix locates the file again.
/// Hidden files, subdirectories and files with other extensions are not
/// documents and are ignored by [`scan_ids`](Store::scan_ids).
#[derive(Debug)]
pub struct FsStore {
    posts_dir: PathBuf,
}

impl FsStore {
    /// Create a store over the given directory.
    ///
    /// The directory is not required to exist at construction time;
    /// operations fail with [`StoreError::Unavailable`] if it is missing
    /// when they run.
    #[must_use]
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// Directory this store reads from.
    #[must_use]
    pub fn posts_dir(&self) -> &std::path::Path {
        &self.posts_dir
    }

    /// Resolve an identifier to its backing file path.
    ///
    /// Returns `None` for identifiers that cannot name a document in a
    /// flat store (empty, or containing path separators).
    fn content_path(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id.contains('/') || id.contains('\\') {
            return None;
        }
        Some(self.posts_dir.join(format!("{id}{CONTENT_SUFFIX}")))
    }
}

impl Store for FsStore {
    fn scan_ids(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.posts_dir).map_err(|source| StoreError::Unavailable {
            path: self.posts_dir.clone(),
            source,
        })?;

        let mut ids = Vec::new();
        for entry in entries.filter_map(Result::ok) {
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            if let Some(id) = name.strip_suffix(CONTENT_SUFFIX) {
                ids.push(id.to_owned());
            }
        }

        // read_dir order is platform-dependent
        ids.sort_unstable();
        tracing::debug!(count = ids.len(), dir = %self.posts_dir.display(), "Scanned store");
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<String, StoreError> {
        let Some(path) = self.content_path(id) else {
            return Err(StoreError::NotFound(id.to_owned()));
        };

        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(id.to_owned())
            } else {
                StoreError::Io {
                    id: id.to_owned(),
                    source,
                }
            }
        })
    }

    fn exists(&self, id: &str) -> bool {
        self.content_path(id).is_some_and(|path| path.is_file())
    }
}
