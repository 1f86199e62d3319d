//! Document store abstraction for the content pipeline.
//!
//! A store is a flat collection of markdown documents, each addressed by a
//! stable identifier derived from its storage name. This crate provides:
//!
//! - [`Store`]: the trait consumed by the indexing and rendering pipeline
//! - [`FsStore`]: filesystem-backed store over a directory of `.md` files
//! - [`MockStore`]: in-memory store for unit testing
//! - [`matter`]: front-matter splitting and the [`Matter`] metadata mapping
//!
//! Stores are read-only: documents are authored outside this system and
//! never mutated by it.

mod fs;
pub mod matter;
mod mock;
mod store;

pub use fs::FsStore;
pub use matter::{Matter, MatterError};
pub use mock::MockStore;
pub use store::{Store, StoreError};
