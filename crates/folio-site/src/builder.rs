//! Static site builder.
//!
//! Renders every post through the pipeline and writes the result as
//! plain HTML files: `index.html` plus `posts/<id>.html` per document.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use folio_posts::{PostEntry, PostError, PostIndex};
use folio_render::escape_html;

use crate::layout::{Layout, NavEntry};

/// Site build error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Pipeline failure (listing or rendering).
    #[error("{0}")]
    Post(#[from] PostError),

    /// Output file or directory could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Output path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result summary of a site build.
#[derive(Debug, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of post pages written (excluding the index page).
    pub pages: usize,
}

/// Builds a static site from a post index.
pub struct SiteBuilder {
    posts: PostIndex,
    layout: Layout,
}

impl SiteBuilder {
    /// Create a builder over the given index and layout.
    #[must_use]
    pub fn new(posts: PostIndex, layout: Layout) -> Self {
        Self { posts, layout }
    }

    /// Build the site into `out_dir`.
    ///
    /// Writes `index.html` (post listing, date descending) and one
    /// `posts/<id>.html` per document. Existing files are overwritten;
    /// nothing else in `out_dir` is touched.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Post`] on any pipeline failure and
    /// [`SiteError::Io`] if output files cannot be written. The build
    /// stops at the first failure.
    pub async fn build(&self, out_dir: &Path) -> Result<BuildSummary, SiteError> {
        let entries = self.posts.list_all()?;
        let nav = navigation(&entries);

        let posts_dir = out_dir.join("posts");
        fs::create_dir_all(&posts_dir).map_err(|source| SiteError::Io {
            path: posts_dir.clone(),
            source,
        })?;

        let index_html = self
            .layout
            .page(self.layout.site_title(), "/", &nav, &listing(&entries));
        write_file(&out_dir.join("index.html"), &index_html)?;

        let mut pages = 0;
        for id in self.posts.list_ids()? {
            let post = self.posts.render(&id).await?;
            let title = post.matter.title().unwrap_or(&post.id).to_owned();
            let current = format!("/posts/{id}");
            let page = self.layout.page(&title, &current, &nav, &post.html);
            write_file(&posts_dir.join(format!("{id}.html")), &page)?;
            pages += 1;
        }

        tracing::info!(pages, out_dir = %out_dir.display(), "Site built");
        Ok(BuildSummary { pages })
    }
}

/// Sidebar entries for all posts, in index (date descending) order.
fn navigation(entries: &[PostEntry]) -> Vec<NavEntry> {
    entries
        .iter()
        .map(|entry| NavEntry {
            href: format!("/posts/{}", entry.id),
            label: entry.matter.title().unwrap_or(&entry.id).to_owned(),
        })
        .collect()
}

/// Index page content: linked post titles with their dates.
fn listing(entries: &[PostEntry]) -> String {
    let mut out = String::from("<ul class=\"post-list\">\n");
    for entry in entries {
        let title = entry.matter.title().unwrap_or(&entry.id);
        let _ = write!(
            out,
            r#"<li><a href="/posts/{}">{}</a>"#,
            escape_html(&entry.id),
            escape_html(title)
        );
        if let Some(date) = entry.matter.date() {
            let _ = write!(out, r#" <small class="date">{}</small>"#, escape_html(date));
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
    out
}

fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    fs::write(path, content).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
