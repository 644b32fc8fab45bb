//! Stack configuration file (`stack.toml`) loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::domain::AppError;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "stack.toml";

/// Features and answers supplied ahead of time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    /// Requested features; `None` when the file does not choose.
    #[serde(default)]
    pub features: Option<Vec<String>>,
    /// Answers as `feature -> field -> value`.
    #[serde(default)]
    pub answers: BTreeMap<String, BTreeMap<String, String>>,
}

/// Parse stack configuration content.
pub fn parse_stack_config(content: &str) -> Result<StackConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Load the stack configuration.
///
/// An explicit path must exist. Without one, `stack.toml` in `dir` is used if
/// present, otherwise the configuration is empty.
pub fn load_stack_config(explicit: Option<&Path>, dir: &Path) -> Result<StackConfig, AppError> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                return Ok(StackConfig::default());
            }
            candidate
        }
    };

    info!("Loading stack configuration from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_stack_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_features_and_answers() {
        let config = parse_stack_config(
            r#"
features = ["traefik", "postgres"]

[answers.traefik]
domain = "example.com"
email = "ops@example.com"
"#,
        )
        .unwrap();

        assert_eq!(config.features, Some(vec!["traefik".to_string(), "postgres".to_string()]));
        assert_eq!(config.answers["traefik"]["domain"], "example.com");
    }

    #[test]
    fn empty_file_chooses_nothing() {
        assert_eq!(parse_stack_config("").unwrap(), StackConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = parse_stack_config("services = [\"traefik\"]\n");
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn missing_default_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_stack_config(None, dir.path()).unwrap(), StackConfig::default());
    }

    #[test]
    fn default_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "features = [\"qdrant\"]\n").unwrap();

        let config = load_stack_config(None, dir.path()).unwrap();

        assert_eq!(config.features, Some(vec!["qdrant".to_string()]));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_stack_config(Some(&dir.path().join("nope.toml")), dir.path());
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
