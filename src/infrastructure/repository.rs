//! File system repository

use crate::error::{OgpError, Result};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from ogp.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to ogp.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if ogp.toml exists
    fn is_initialized(&self) -> bool;

    /// Page documents under the listing scope, relative to the root,
    /// sorted. Anything under `exclude` is skipped.
    fn list_documents(&self, exclude: &Path) -> Result<Vec<PathBuf>>;

    /// Write the rendered fragment of the document at `document` (relative
    /// path) under `out_dir`, returning the fragment path
    fn write_fragment(&self, out_dir: &Path, document: &Path, html: &str) -> Result<PathBuf>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    /// Directory whose documents are listed, at or below `root`
    pub scope: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository covering the whole root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository {
            scope: root.clone(),
            root,
        }
    }

    /// Discover the site root by walking up from `start` to the first
    /// directory holding an ogp.toml. Falls back to `start` itself.
    ///
    /// Documents are listed from `start` only. Both paths are absolute.
    pub fn discover_from(start: &Path) -> Result<Self> {
        if !start.is_dir() {
            return Err(OgpError::Config(format!(
                "Not a directory: {}",
                start.display()
            )));
        }

        let scope = std::path::absolute(start)?;
        let mut current = scope.clone();
        loop {
            if Self::has_config(&current) {
                return Ok(FileSystemRepository {
                    root: current,
                    scope,
                });
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok(FileSystemRepository::new(scope)),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    fn is_document(&self, path: &Path) -> bool {
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return false;
        }
        path != self.root.join(CONFIG_FILE)
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    fn list_documents(&self, exclude: &Path) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();

        let walker = WalkDir::new(&self.scope).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            if entry.path() == exclude {
                return false;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let entry = entry.map_err(|e| OgpError::Io(e.into()))?;
            if !entry.file_type().is_file() || !self.is_document(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            documents.push(rel.to_path_buf());
        }

        documents.sort();
        Ok(documents)
    }

    fn write_fragment(&self, out_dir: &Path, document: &Path, html: &str) -> Result<PathBuf> {
        let path = out_dir.join(document).with_extension("html");

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, format!("{}\n", html))?;
        Ok(path)
    }
}
