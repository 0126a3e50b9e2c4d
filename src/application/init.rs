//! Initialize site use case

use crate::error::{OgpError, Result};
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};
use std::fs;
use std::path::Path;

/// Write a new ogp.toml at `path` with the given defaults.
pub fn init(path: &Path, site_name: Option<String>, locales: Vec<String>) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    if repo.is_initialized() {
        return Err(OgpError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    let config = Config {
        site_name,
        locales,
        ..Config::default()
    };
    repo.save_config(&config)?;

    Ok(config)
}
