//! core::config::schema
//!
//! Configuration file schema types.
//!
//! # File format
//!
//! ```toml
//! title = "Release title"
//! line_template = "- {title} [#{number}]({url})"
//! header = "# Changelog"
//! footer = "Thanks to all contributors!"
//! no_changes_message = "No changes."
//! draft = true
//! prerelease = false
//! owner = "myorg"
//! repo = "myrepo"
//!
//! [[sections]]
//! title = "🚀 Features"
//! labels = ["enhancement", "feat", "perf"]
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing: section titles must be non-empty
//! and unique, labels must be non-empty, and the line template may only
//! use the known placeholders.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Placeholders the line template may reference.
pub const TEMPLATE_PLACEHOLDERS: &[&str] = &["title", "number", "url"];

/// Configuration file contents.
///
/// Every field is optional; unset fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Changelog sections, in render order.
    pub sections: Option<Vec<SectionEntry>>,

    /// Per-item line template.
    pub line_template: Option<String>,

    /// Text prepended to the release body.
    pub header: Option<String>,

    /// Text appended to the release body.
    pub footer: Option<String>,

    /// Body used when there is nothing to report.
    pub no_changes_message: Option<String>,

    /// Release title.
    pub title: Option<String>,

    /// Publish as a draft release.
    pub draft: Option<bool>,

    /// Mark the release as a prerelease.
    pub prerelease: Option<bool>,

    /// Repository owner (user or organization).
    pub owner: Option<String>,

    /// Repository name.
    pub repo: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(sections) = &self.sections {
            let mut seen = std::collections::BTreeSet::new();
            for section in sections {
                section.validate()?;
                if !seen.insert(section.title.as_str()) {
                    return Err(ConfigError::InvalidValue(format!(
                        "duplicate section title '{}'",
                        section.title
                    )));
                }
            }
        }

        if let Some(template) = &self.line_template {
            validate_template(template)?;
        }

        Ok(())
    }
}

/// A single section entry in the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SectionEntry {
    /// Section title, rendered as a `##` heading.
    pub title: String,

    /// Labels that route a change-request into this section.
    pub labels: Vec<String>,
}

impl SectionEntry {
    /// Validate a section entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "section title cannot be empty".to_string(),
            ));
        }
        for label in &self.labels {
            if label.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "section '{}' has an empty label",
                    self.title
                )));
            }
        }
        Ok(())
    }
}

/// Validate that a line template only uses known placeholders.
fn validate_template(template: &str) -> Result<(), ConfigError> {
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return Err(ConfigError::InvalidValue(format!(
                "unclosed placeholder in line template '{}'",
                template
            )));
        };
        let name = &after[..close];
        if !TEMPLATE_PLACEHOLDERS.contains(&name) {
            return Err(ConfigError::InvalidValue(format!(
                "unknown placeholder '{{{}}}' in line template, expected one of: {}",
                name,
                TEMPLATE_PLACEHOLDERS
                    .iter()
                    .map(|p| format!("{{{}}}", p))
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        rest = &after[close + 1..];
    }
    Ok(())
}
