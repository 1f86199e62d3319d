//! `folio build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_posts::PostIndex;
use folio_site::{Layout, SiteBuilder};
use folio_store::FsStore;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Posts source directory (overrides config).
    #[arg(short, long)]
    posts_dir: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) async fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            title: self.title.clone(),
            posts_dir: self.posts_dir.clone(),
            output_dir: self.output_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Source: {}",
            config.content_resolved.posts_dir.display()
        ));
        output.info(&format!(
            "Output: {}",
            config.content_resolved.output_dir.display()
        ));

        let store = Arc::new(FsStore::new(config.content_resolved.posts_dir.clone()));
        let posts = PostIndex::new(store);

        let mut layout = Layout::new(config.site.title.clone());
        if let Some(description) = config.site.description.clone() {
            layout = layout.with_description(description);
        }

        let builder = SiteBuilder::new(posts, layout);
        let summary = builder.build(&config.content_resolved.output_dir).await?;

        output.success(&format!(
            "Site built successfully: {} pages in {}",
            summary.pages,
            config.content_resolved.output_dir.display()
        ));
        Ok(())
    }
}
