//! `folio list` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_posts::PostIndex;
use folio_store::FsStore;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Posts source directory (overrides config).
    #[arg(short, long)]
    posts_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            posts_dir: self.posts_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let store = Arc::new(FsStore::new(config.content_resolved.posts_dir.clone()));
        let posts = PostIndex::new(store);

        let entries = posts.list_all()?;
        for entry in &entries {
            let date = entry.matter.date().unwrap_or("          ");
            let title = entry.matter.title().unwrap_or(&entry.id);
            output.info(&format!("{date}  {}  ({})", title, entry.id));
        }
        output.info(&format!("{} posts", entries.len()));
        Ok(())
    }
}
