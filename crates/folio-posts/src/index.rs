//! Post index: enumeration, ordering and rendering of documents.

use std::sync::Arc;

use folio_render::MarkdownRenderer;
use folio_store::{Matter, Store, matter};

use crate::error::PostError;

/// One indexed post: identifier plus front-matter, body not rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct PostEntry {
    /// Stable identifier derived from the storage name.
    pub id: String,
    /// Parsed front-matter fields.
    pub matter: Matter,
}

/// One fully rendered post.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    /// Stable identifier derived from the storage name.
    pub id: String,
    /// Parsed front-matter fields, types preserved as declared.
    pub matter: Matter,
    /// Rendered HTML body with no front-matter remnants. Derived, never
    /// cached: recomputed fresh on every render call.
    pub html: String,
}

/// Index over a document store.
///
/// Holds the store and the markdown renderer; carries no other state.
/// Every operation reads the store fresh, so independent calls need no
/// coordination and may run concurrently.
pub struct PostIndex {
    store: Arc<dyn Store>,
    renderer: Arc<MarkdownRenderer>,
}

impl PostIndex {
    /// Create an index over the given store with the default renderer.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            renderer: Arc::new(MarkdownRenderer::new()),
        }
    }

    /// Replace the markdown renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// List every post with its front-matter, ordered by the `date`
    /// field compared as a string, descending.
    ///
    /// Posts without a `date` sort after all dated posts; an
    /// empty-string date sorts after every non-empty date. Posts with
    /// identical dates have no guaranteed relative order.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::StoreUnavailable`] if the store cannot be
    /// enumerated, or [`PostError::MalformedDocument`] if any document's
    /// header fails to parse. A single malformed document aborts the
    /// whole listing; there are no partial results.
    pub fn list_all(&self) -> Result<Vec<PostEntry>, PostError> {
        let ids = self.store.scan_ids()?;

        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            let content = self.store.read(&id)?;
            let (matter, _body) = matter::split(&content)
                .map_err(|source| PostError::MalformedDocument {
                    id: id.clone(),
                    source,
                })?;
            entries.push(PostEntry { id, matter });
        }

        // Descending string comparison; Option ordering puts missing
        // dates last.
        entries.sort_by(|a, b| b.matter.date().cmp(&a.matter.date()));

        tracing::debug!(count = entries.len(), "Listed posts");
        Ok(entries)
    }

    /// List the identifier of every post, without parsing front-matter.
    ///
    /// One entry per document, no duplicates. Used to enumerate routes
    /// for static generation independent of metadata parsing cost.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::StoreUnavailable`] if the store cannot be
    /// enumerated.
    pub fn list_ids(&self) -> Result<Vec<String>, PostError> {
        Ok(self.store.scan_ids()?)
    }

    /// Load one post and render its markdown body to HTML.
    ///
    /// The body conversion runs on the blocking pool; the call completes
    /// fully or fails, with no cancellation and no partial output. For an
    /// unchanged store, repeated calls yield byte-identical results.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::DocumentNotFound`] if the identifier has no
    /// backing document, [`PostError::MalformedDocument`] if the header
    /// cannot be parsed, or [`PostError::RenderFailure`] if the markdown
    /// transformation fails.
    pub async fn render(&self, id: &str) -> Result<Post, PostError> {
        let content = self.store.read(id)?;
        let (matter, body) = matter::split(&content)
            .map_err(|source| PostError::MalformedDocument {
                id: id.to_owned(),
                source,
            })?;

        let renderer = Arc::clone(&self.renderer);
        let body = body.to_owned();
        let html = tokio::task::spawn_blocking(move || renderer.render(&body))
            .await
            .expect("markdown render task panicked")
            .map_err(|source| PostError::RenderFailure {
                id: id.to_owned(),
                source,
            })?;

        tracing::debug!(id, bytes = html.len(), "Rendered post");
        Ok(Post {
            id: id.to_owned(),
            matter,
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_store::{FsStore, MockStore};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn dated_post(date: &str) -> String {
        format!("---\ndate: \"{date}\"\n---\n\nBody.\n")
    }

    fn index_with(store: MockStore) -> PostIndex {
        PostIndex::new(Arc::new(store))
    }

    #[test]
    fn test_list_all_sorted_by_date_descending() {
        let store = MockStore::new()
            .with_document("may", dated_post("2021-05-01"))
            .with_document("june", dated_post("2021-06-01"))
            .with_document("january", dated_post("2021-01-01"));
        let index = index_with(store);

        let entries = index.list_all().unwrap();

        let dates: Vec<_> = entries.iter().filter_map(|e| e.matter.date()).collect();
        assert_eq!(dates, vec!["2021-06-01", "2021-05-01", "2021-01-01"]);
    }

    #[test]
    fn test_list_all_missing_date_sorts_last() {
        let store = MockStore::new()
            .with_document("dated", dated_post("2021-05-01"))
            .with_document("undated", "---\ntitle: No date\n---\n\nBody.\n")
            .with_document("later", dated_post("2021-06-01"));
        let index = index_with(store);

        let entries = index.list_all().unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["later", "dated", "undated"]);
    }

    #[test]
    fn test_list_all_empty_date_sorts_after_dated() {
        let store = MockStore::new()
            .with_document("dated", dated_post("2021-05-01"))
            .with_document("empty", dated_post(""));
        let index = index_with(store);

        let entries = index.list_all().unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["dated", "empty"]);
    }

    #[test]
    fn test_list_all_includes_matter_fields() {
        let store = MockStore::new().with_document(
            "post",
            "---\ntitle: A Post\ndate: \"2021-05-01\"\npriority: 2\n---\n\nBody.\n",
        );
        let index = index_with(store);

        let entries = index.list_all().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "post");
        assert_eq!(entries[0].matter.title(), Some("A Post"));
        assert_eq!(entries[0].matter.get("priority"), Some(&json!(2)));
    }

    #[test]
    fn test_list_all_store_unavailable() {
        let index = index_with(MockStore::new().unavailable());

        assert!(matches!(
            index.list_all(),
            Err(PostError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn test_list_all_malformed_document_aborts_listing() {
        let store = MockStore::new()
            .with_document("good", dated_post("2021-05-01"))
            .with_document("bad", "---\ntitle: [broken\n---\nBody.\n");
        let index = index_with(store);

        let result = index.list_all();

        assert!(matches!(
            result,
            Err(PostError::MalformedDocument { id, .. }) if id == "bad"
        ));
    }

    #[test]
    fn test_list_ids_one_per_document() {
        let store = MockStore::new()
            .with_document("alpha", "a")
            .with_document("beta", "b");
        let index = index_with(store);

        assert_eq!(
            index.list_ids().unwrap(),
            vec!["alpha".to_owned(), "beta".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_render_strips_front_matter() {
        let store = MockStore::new().with_document(
            "post",
            "---\ntitle: Hello\ndate: \"2021-05-01\"\n---\n\n# Hello\n\nWorld.\n",
        );
        let index = index_with(store);

        let post = index.render("post").await.unwrap();

        assert_eq!(post.id, "post");
        assert_eq!(post.matter.title(), Some("Hello"));
        assert!(post.html.contains("<h1>Hello</h1>"));
        assert!(post.html.contains("<p>World.</p>"));
        assert!(!post.html.contains("---"));
        assert!(!post.html.contains("date:"));
    }

    #[tokio::test]
    async fn test_render_code_block_annotation() {
        let store = MockStore::new().with_document(
            "code",
            "---\ntitle: Code\n---\n\n```rust\nfn main() {}\n```\n",
        );
        let index = index_with(store);

        let post = index.render("code").await.unwrap();

        assert!(post.html.contains(r#"class="language-rust""#));
    }

    #[tokio::test]
    async fn test_render_unknown_id_not_found() {
        let index = index_with(MockStore::new());

        let result = index.render("missing").await;

        assert!(matches!(
            result,
            Err(PostError::DocumentNotFound(id)) if id == "missing"
        ));
    }

    #[tokio::test]
    async fn test_render_malformed_header() {
        let store = MockStore::new().with_document("bad", "---\ntitle: [broken\n---\nBody.\n");
        let index = index_with(store);

        assert!(matches!(
            index.render("bad").await,
            Err(PostError::MalformedDocument { .. })
        ));
    }

    #[tokio::test]
    async fn test_render_idempotent() {
        let store = MockStore::new().with_document(
            "post",
            "---\ntitle: Stable\ndate: \"2021-05-01\"\n---\n\nText with `code`.\n",
        );
        let index = index_with(store);

        let first = index.render("post").await.unwrap();
        let second = index.render("post").await.unwrap();

        assert_eq!(first.html, second.html);
        assert_eq!(first.matter, second.matter);
    }

    #[tokio::test]
    async fn test_render_without_front_matter() {
        let store = MockStore::new().with_document("plain", "# Plain\n\nNo header.\n");
        let index = index_with(store);

        let post = index.render("plain").await.unwrap();

        assert!(post.matter.is_empty());
        assert!(post.html.contains("<h1>Plain</h1>"));
    }

    #[tokio::test]
    async fn test_pipeline_over_filesystem_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("first-post.md"),
            "---\ntitle: First\ndate: \"2021-05-01\"\n---\n\n# First\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("second-post.md"),
            "---\ntitle: Second\ndate: \"2021-06-01\"\n---\n\n# Second\n",
        )
        .unwrap();

        let index = PostIndex::new(Arc::new(FsStore::new(dir.path())));

        let entries = index.list_all().unwrap();
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["second-post", "first-post"]);

        for id in index.list_ids().unwrap() {
            let post = index.render(&id).await.unwrap();
            assert_eq!(post.id, id);
            assert!(!post.html.is_empty());
        }
    }

    #[tokio::test]
    async fn test_identifier_round_trip() {
        let store = MockStore::new()
            .with_document("first-post", dated_post("2021-05-01"))
            .with_document("second-post", dated_post("2021-06-01"));
        let index = index_with(store);

        for id in index.list_ids().unwrap() {
            let post = index.render(&id).await.unwrap();
            assert_eq!(post.id, id);
        }
    }
}
