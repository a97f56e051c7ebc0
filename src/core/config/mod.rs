//! core::config
//!
//! Configuration schema, loading, and merging.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides
//! earlier):
//! 1. Built-in defaults
//! 2. Configuration file (TOML)
//! 3. Per-run CLI overrides
//!
//! The merge happens exactly once, before the pipeline runs, via
//! [`Config::resolve`]. The pipeline only ever sees the resolved,
//! immutable [`Config`].
//!
//! # File Locations
//!
//! Searched in order:
//! 1. `--config <path>` (explicit; a missing file is an error)
//! 2. `$RELNOTE_CONFIG` if set
//! 3. `./relnote.toml`
//! 4. `~/.relnote/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use relnote::core::config::{Config, Overrides};
//!
//! let file = Config::load(None).unwrap();
//! let config = Config::resolve(file, Overrides::default()).unwrap();
//! assert!(!config.sections.is_empty());
//! ```

pub mod schema;

pub use schema::{FileConfig, SectionEntry};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::Section;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Per-run overrides, usually sourced from CLI flags.
///
/// Every populated field wins over both the configuration file and the
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Release title.
    pub title: Option<String>,
    /// Repository owner.
    pub owner: Option<String>,
    /// Repository name.
    pub repo: Option<String>,
    /// Publish as draft.
    pub draft: Option<bool>,
    /// Mark as prerelease.
    pub prerelease: Option<bool>,
}

/// Resolved configuration, read-only for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Changelog sections, in render order.
    pub sections: Vec<Section>,
    /// Per-item line template.
    pub line_template: String,
    /// Text prepended to the release body.
    pub header: Option<String>,
    /// Text appended to the release body.
    pub footer: Option<String>,
    /// Body used when there is nothing to report.
    pub no_changes_message: String,
    /// Release title; falls back to the tag name when unset.
    pub title: Option<String>,
    /// Publish as a draft release.
    pub draft: bool,
    /// Mark the release as a prerelease.
    pub prerelease: bool,
    /// Repository owner.
    pub owner: Option<String>,
    /// Repository name.
    pub repo: Option<String>,
}

impl Default for Config {
    /// Built-in defaults: conventional-commit style sections, the standard
    /// line template, and draft publishing.
    fn default() -> Self {
        Self {
            sections: vec![
                Section::new("🚀 Features", ["enhancement", "feat", "perf"]),
                Section::new("🐛 Bug Fixes", ["bug", "fix", "revert"]),
                Section::new(
                    "🧹 Maintenance",
                    ["docs", "style", "refactor", "test", "build", "ci", "chore"],
                ),
            ],
            line_template: "- {title} [#{number}]({url})".to_string(),
            header: None,
            footer: None,
            no_changes_message: "No changes since the previous release.".to_string(),
            title: None,
            draft: true,
            prerelease: false,
            owner: None,
            repo: None,
        }
    }
}

impl Config {
    /// Load the configuration file, if one exists.
    ///
    /// With an explicit path the file must exist; otherwise the standard
    /// locations are searched and a missing file simply yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any found
    /// file cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Option<FileConfig>, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Ok(Some(Self::read_file(path)?));
        }

        if let Ok(env_path) = std::env::var("RELNOTE_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                return Ok(Some(Self::read_file(&path)?));
            }
        }

        let cwd_path = Path::new("relnote.toml");
        if cwd_path.exists() {
            return Ok(Some(Self::read_file(cwd_path)?));
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".relnote/config.toml");
            if path.exists() {
                return Ok(Some(Self::read_file(&path)?));
            }
        }

        Ok(None)
    }

    /// Read, parse, and validate a configuration file.
    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: FileConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Merge defaults, file, and overrides into a resolved configuration.
    ///
    /// Pure: no filesystem or environment access. The file is validated
    /// again here so programmatically built values get the same checks as
    /// loaded ones.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the file layer fails
    /// validation.
    pub fn resolve(file: Option<FileConfig>, overrides: Overrides) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let file = file.unwrap_or_default();
        file.validate()?;

        let sections = match file.sections {
            Some(entries) => entries
                .into_iter()
                .map(|entry| Section::new(entry.title, entry.labels))
                .collect(),
            None => defaults.sections,
        };

        Ok(Config {
            sections,
            line_template: file.line_template.unwrap_or(defaults.line_template),
            header: file.header.or(defaults.header),
            footer: file.footer.or(defaults.footer),
            no_changes_message: file
                .no_changes_message
                .unwrap_or(defaults.no_changes_message),
            title: overrides.title.or(file.title).or(defaults.title),
            draft: overrides.draft.or(file.draft).unwrap_or(defaults.draft),
            prerelease: overrides
                .prerelease
                .or(file.prerelease)
                .unwrap_or(defaults.prerelease),
            owner: overrides.owner.or(file.owner).or(defaults.owner),
            repo: overrides.repo.or(file.repo).or(defaults.repo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file() {
        let config = Config::resolve(None, Overrides::default()).unwrap();

        assert_eq!(config.sections.len(), 3);
        assert_eq!(config.sections[0].title, "🚀 Features");
        assert_eq!(config.line_template, "- {title} [#{number}]({url})");
        assert!(config.draft);
        assert!(!config.prerelease);
        assert!(config.title.is_none());
        assert!(config.owner.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = FileConfig {
            sections: Some(vec![SectionEntry {
                title: "Changes".to_string(),
                labels: vec!["any".to_string()],
            }]),
            draft: Some(false),
            no_changes_message: Some("Nothing to see.".to_string()),
            ..Default::default()
        };

        let config = Config::resolve(Some(file), Overrides::default()).unwrap();

        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].title, "Changes");
        assert!(!config.draft);
        assert_eq!(config.no_changes_message, "Nothing to see.");
        // Untouched fields keep their defaults.
        assert_eq!(config.line_template, "- {title} [#{number}]({url})");
    }

    #[test]
    fn overrides_win_over_file() {
        let file = FileConfig {
            title: Some("from file".to_string()),
            owner: Some("file-owner".to_string()),
            draft: Some(true),
            ..Default::default()
        };
        let overrides = Overrides {
            title: Some("from cli".to_string()),
            owner: Some("cli-owner".to_string()),
            draft: Some(false),
            ..Default::default()
        };

        let config = Config::resolve(Some(file), overrides).unwrap();

        assert_eq!(config.title.as_deref(), Some("from cli"));
        assert_eq!(config.owner.as_deref(), Some("cli-owner"));
        assert!(!config.draft);
    }

    #[test]
    fn invalid_file_layer_rejected() {
        let file = FileConfig {
            line_template: Some("- {bogus}".to_string()),
            ..Default::default()
        };
        assert!(Config::resolve(Some(file), Overrides::default()).is_err());
    }

    #[test]
    fn load_explicit_missing_is_error() {
        let result = Config::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("relnote.toml");
        fs::write(
            &path,
            r#"
            owner = "octocat"
            repo = "hello-world"
            prerelease = true
            "#,
        )
        .unwrap();

        let file = Config::load(Some(&path)).unwrap().unwrap();
        let config = Config::resolve(Some(file), Overrides::default()).unwrap();

        assert_eq!(config.owner.as_deref(), Some("octocat"));
        assert_eq!(config.repo.as_deref(), Some("hello-world"));
        assert!(config.prerelease);
    }

    #[test]
    fn load_explicit_invalid_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("relnote.toml");
        fs::write(&path, "line_template = \"{nope}\"").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}
