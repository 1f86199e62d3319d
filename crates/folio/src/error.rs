//! CLI error types.

use folio_config::ConfigError;
use folio_posts::PostError;
use folio_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Post(#[from] PostError),

    #[error("{0}")]
    Site(#[from] SiteError),
}
