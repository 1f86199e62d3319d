//! Post indexing and rendering pipeline.
//!
//! Ties the document store and the markdown renderer together into the
//! two operations a documentation site is built from:
//!
//! - [`PostIndex::list_all`]: enumerate posts with their front-matter,
//!   ordered by date descending, for navigation and listing views
//! - [`PostIndex::render`]: load one post and convert its body to HTML
//!
//! The two operations share only the identifier convention; listing does
//! not render and rendering does not consult the index.

mod error;
mod index;

pub use error::PostError;
pub use index::{Post, PostEntry, PostIndex};
