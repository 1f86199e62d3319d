//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`]. Site
//! title and content paths live here rather than as module-level
//! constants, so components can be constructed against fixture
//! directories in tests.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override posts source directory.
    pub posts_dir: Option<PathBuf>,
    /// Override site output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation configuration.
    pub site: SiteConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the layout and head metadata.
    pub title: String,
    /// Site description for head metadata.
    pub description: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: None,
        }
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    posts_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Source directory for markdown posts.
    pub posts_dir: PathBuf,
    /// Output directory for the generated site.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
        if let Some(posts_dir) = &settings.posts_dir {
            self.content_resolved.posts_dir.clone_from(posts_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.content_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            content_resolved: ContentConfig {
                posts_dir: base.join("posts"),
                output_dir: base.join("site"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        let posts = self.content.posts_dir.as_deref().unwrap_or("posts");
        let output = self.content.output_dir.as_deref().unwrap_or("site");
        self.content_resolved = ContentConfig {
            posts_dir: resolve_path(base, posts),
            output_dir: resolve_path(base, output),
        };
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Join a possibly-relative path onto a base directory.
fn resolve_path(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[site]
title = "My Docs"
description = "A test site"

[content]
posts_dir = "content/posts"
output_dir = "public"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config.site.description, Some("A test site".to_owned()));
        assert_eq!(
            config.content_resolved.posts_dir,
            dir.path().join("content/posts")
        );
        assert_eq!(config.content_resolved.output_dir, dir.path().join("public"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/folio.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_defaults_when_sections_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Documentation");
        assert!(config.site.description.is_none());
        assert_eq!(config.content_resolved.posts_dir, dir.path().join("posts"));
        assert_eq!(config.content_resolved.output_dir, dir.path().join("site"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site\ntitle = broken");

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[site]\ntitle = \"Discovered\"\n");
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        // Discovery walks up from the cwd; restore it before asserting.
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();
        let result = Config::load(None, None);
        std::env::set_current_dir(original).unwrap();

        let config = result.unwrap();
        let base = dir.path().canonicalize().unwrap();
        assert_eq!(config.site.title, "Discovered");
        assert_eq!(config.content_resolved.posts_dir, base.join("posts"));
        assert_eq!(config.config_path, Some(base.join(CONFIG_FILENAME)));
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\ntitle = \"From File\"\n");

        let settings = CliSettings {
            title: Some("From CLI".to_owned()),
            posts_dir: Some(PathBuf::from("/tmp/posts")),
            output_dir: None,
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.site.title, "From CLI");
        assert_eq!(config.content_resolved.posts_dir, PathBuf::from("/tmp/posts"));
        assert_eq!(config.content_resolved.output_dir, dir.path().join("site"));
    }

    #[test]
    fn test_validate_empty_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\ntitle = \"  \"\n");

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_absolute_paths_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[content]\nposts_dir = \"/var/posts\"\noutput_dir = \"/var/site\"\n",
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.content_resolved.posts_dir, PathBuf::from("/var/posts"));
        assert_eq!(config.content_resolved.output_dir, PathBuf::from("/var/site"));
    }
}
