//! Render a single page document

use crate::domain::MetaList;
use crate::error::Result;
use crate::infrastructure::{Config, Document, FileSystemRepository, SiteRepository};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Service rendering one document with the site defaults applied
pub struct RenderService {
    config: Config,
}

impl RenderService {
    /// Create a render service with an already loaded config
    pub fn new(config: Config) -> Self {
        RenderService { config }
    }

    /// Create a render service for `document`, loading `config_path` when
    /// given, otherwise the ogp.toml of the site the document belongs to
    pub fn for_document(document: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path)?,
            None => FileSystemRepository::discover_from(&document_dir(document))?.load_config()?,
        };
        Ok(Self::new(config))
    }

    /// Load, complete and render the document at `path`
    pub fn execute(&self, path: &Path) -> Result<MetaList> {
        let mut document = Document::load(path)?;
        document.apply_defaults(&self.config);

        let meta = document.meta();
        debug!(
            path = %path.display(),
            object_type = document.object_type(),
            tags = meta.len(),
            "rendered document"
        );
        Ok(meta)
    }
}

fn document_dir(document: &Path) -> PathBuf {
    match document.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
