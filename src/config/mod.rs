//! Document configuration for manifest generation.
//!
//! The configuration mirrors the document-level settings of the publishing
//! pipeline. Keys keep their camelCase spelling so an existing JSON config can
//! be reused as-is:
//!
//! ```toml
//! shortName = "payment-request"
//! specStatus = "WD"
//!
//! [[editors]]
//! name = "Marcos Cáceres"
//! company = "W3C"
//! companyURL = "https://www.w3.org/"
//! ```
//!
//! Files ending in `.json` are parsed as JSON, everything else as TOML.

mod error;
mod person;

pub use error::{ConfigDiagnostic, ConfigError};
pub use person::Person;

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Supported configuration file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the syntax from the file extension (`.json` → JSON, otherwise TOML).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Root configuration record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestConfig {
    /// Short name of the document; forms the canonical `/TR/<shortName>/` id.
    pub short_name: String,

    /// Maturity code (WD, UNOFFICIAL, CG-DRAFT, ...), matched case-insensitively.
    pub spec_status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editors: Option<Vec<Person>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Person>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<Person>>,
}

impl ManifestConfig {
    /// Load and validate configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content, ConfigFormat::from_path(path))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields(&ignored, path);
        }

        config.validate()?;
        debug!("config"; "loaded {} (status {})", path.display(), config.spec_status);
        Ok(config)
    }

    /// Parse configuration from a string, ignoring unknown keys silently.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content, format)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse content, collecting any unknown fields.
    fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let record = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, record)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut deserializer, record)?;
                deserializer.end()?;
                config
            }
        };

        Ok((config, ignored))
    }

    /// Report keys the manifest builder does not use.
    ///
    /// Shared pipeline configs carry many unrelated keys, so this is not a warning.
    fn print_unknown_fields(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        debug!("config"; "ignoring {} unused key(s) in {}", fields.len(), display_path);
        for field in fields {
            debug!("config"; "- {}", field);
        }
    }

    /// Validate required values.
    ///
    /// # Checks
    /// - `shortName` must be non-empty
    /// - every person must have a non-empty `name`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                ConfigDiagnostic::new("shortName", "must not be empty")
                    .with_hint("set shortName, e.g.: \"payment-request\""),
            ));
        }

        if self.spec_status.trim().is_empty() {
            log!("warning"; "specStatus is empty, falling back to default assets");
        }

        for (key, people) in self.people() {
            for (index, person) in people.iter().enumerate() {
                if person.name.trim().is_empty() {
                    return Err(ConfigError::Validation(ConfigDiagnostic::new(
                        format!("{key}[{index}].name"),
                        "must not be empty",
                    )));
                }
            }
        }

        Ok(())
    }

    /// Configured people lists, keyed by their configuration name.
    ///
    /// Absent lists are skipped; order is editors, authors, creators.
    pub fn people(&self) -> impl Iterator<Item = (&'static str, &[Person])> {
        [
            ("editors", self.editors.as_deref()),
            ("authors", self.authors.as_deref()),
            ("creators", self.creators.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, people)| people.map(|p| (key, p)))
    }
}
