//! Site configuration (ogp.toml)

use crate::error::{OgpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file at the site root
pub const CONFIG_FILE: &str = "ogp.toml";

const DEFAULT_OUTPUT_DIR: &str = "meta";

/// Site-wide defaults applied to every page document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locales: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determiner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load ogp.toml from the given directory, defaults when it is missing
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Ok(Config::default());
        }
        Self::load(&config_path)
    }

    /// Load a configuration file
    pub fn load(config_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(config_path)?;

        toml::from_str(&contents).map_err(|e| {
            OgpError::Config(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Save config to ogp.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| OgpError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Directory fragments are written to, resolved against the site root
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        let dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        if dir.is_absolute() {
            dir
        } else {
            root.join(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir(temp.path()), temp.path().join("meta"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            site_name: Some("Example".to_string()),
            locales: vec!["en_US".to_string(), "fr_FR".to_string()],
            determiner: None,
            output_dir: Some(PathBuf::from("public/meta")),
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join("ogp.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.output_dir(temp.path()),
            temp.path().join("public/meta")
        );
    }

    #[test]
    fn test_unset_keys_not_written() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            site_name: Some("Example".to_string()),
            ..Config::default()
        };
        config.save_to_dir(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join("ogp.toml")).unwrap();
        assert!(content.contains("site_name = \"Example\""));
        assert!(!content.contains("locales"));
        assert!(!content.contains("output_dir"));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ogp.toml"), "sitename = \"typo\"\n").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(OgpError::Config(msg)) => assert!(msg.contains("ogp.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_absolute_output_dir_kept() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            output_dir: Some(temp.path().join("out")),
            ..Config::default()
        };
        assert_eq!(
            config.output_dir(Path::new("/elsewhere")),
            temp.path().join("out")
        );
    }
}
