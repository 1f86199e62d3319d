//! Static site generation for the post pipeline.
//!
//! Consumes [`folio_posts::PostIndex`] to produce a browsable site:
//! an index page listing all posts by date, one HTML page per post, and
//! a sidebar navigation with active-link highlighting.
//!
//! The builder writes plain files; serving them is out of scope.

mod builder;
mod layout;
mod nav;

pub use builder::{BuildSummary, SiteBuilder, SiteError};
pub use layout::{Layout, NavEntry};
pub use nav::{is_active, nav_link_class};
