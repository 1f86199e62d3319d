//! CLI command implementations.

mod build;
mod list;

pub(crate) use build::BuildArgs;
pub(crate) use list::ListArgs;
