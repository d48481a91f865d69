//! CLI configuration.

use std::fs;
use std::path::Path;

use apib_ast::NodeKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for apib-visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisitConfig {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Node kinds the `count` command reports.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<NodeKind>,
}

fn default_kinds() -> Vec<NodeKind> {
    vec![NodeKind::Resource, NodeKind::Request, NodeKind::Response]
}

impl VisitConfig {
    /// Configuration file looked up in the current directory.
    pub const CONFIG_FILE: &'static str = ".apib-visit.json";

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            format: OutputFormat::default(),
            kinds: default_kinds(),
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CliError::config(format!("Invalid config: {}", e)))?;

        if config.kinds.is_empty() {
            return Err(CliError::config("'kinds' must name at least one node kind"));
        }
        Ok(config)
    }

    /// Loads `explicit` if given, else `.apib-visit.json` from `dir` when it
    /// exists, else the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            debug!("Using config {}", path.display());
            return Self::from_file(path);
        }

        let discovered = dir.join(Self::CONFIG_FILE);
        if discovered.is_file() {
            debug!("Found config {}", discovered.display());
            return Self::from_file(discovered);
        }

        Ok(Self::new())
    }
}

impl Default for VisitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_config_new() {
        let config = VisitConfig::new();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(
            config.kinds,
            vec![NodeKind::Resource, NodeKind::Request, NodeKind::Response]
        );
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "format": "json", "kinds": ["Group", "Action"] }"#;

        let config = VisitConfig::from_json(json).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.kinds, vec![NodeKind::Group, NodeKind::Action]);
    }

    #[test]
    fn test_config_defaults_missing_fields() {
        let config = VisitConfig::from_json("{}").unwrap();
        assert_eq!(config, VisitConfig::new());
    }

    #[rstest]
    #[case::unknown_kind(r#"{ "kinds": ["Header"] }"#)]
    #[case::unknown_field(r#"{ "colour": true }"#)]
    #[case::unknown_format(r#"{ "format": "sarif" }"#)]
    #[case::empty_kinds(r#"{ "kinds": [] }"#)]
    #[case::not_json("kinds = []")]
    fn test_config_rejects(#[case] json: &str) {
        let err = VisitConfig::from_json(json).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: "));
    }

    #[test]
    fn test_load_discovers_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(VisitConfig::CONFIG_FILE),
            r#"{ "format": "json" }"#,
        )
        .unwrap();

        let config = VisitConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = VisitConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, VisitConfig::default());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(VisitConfig::load(Some(missing.as_path()), dir.path()).is_err());
    }
}
