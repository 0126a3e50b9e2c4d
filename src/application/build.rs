//! Build use case: render every page document of a site

use crate::error::{OgpError, Result};
use crate::infrastructure::{Document, SiteRepository};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Options for a build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Output directory overriding `output_dir` from ogp.toml.
    /// Relative paths resolve against the site root.
    pub out_dir: Option<PathBuf>,
}

/// One rendered fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Document path, relative to the site root
    pub document: PathBuf,
    pub output: PathBuf,
    pub object_type: &'static str,
    pub tag_count: usize,
}

/// Result of a build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub out_dir: PathBuf,
    pub fragments: Vec<Fragment>,
    /// TOML files without a `type` key
    pub skipped: Vec<PathBuf>,
}

/// Service rendering all documents under a site root into HTML fragments
pub struct BuildService<R: SiteRepository> {
    repository: R,
}

impl<R: SiteRepository> BuildService<R> {
    pub fn new(repository: R) -> Self {
        BuildService { repository }
    }

    /// Execute the build
    ///
    /// Stops at the first document that fails to parse or write.
    pub fn execute(&self, options: BuildOptions) -> Result<BuildSummary> {
        let mut config = self.repository.load_config()?;
        if options.out_dir.is_some() {
            config.output_dir = options.out_dir;
        }
        let root = self.repository.root().to_path_buf();
        let out_dir = config.output_dir(&root);

        let mut summary = BuildSummary {
            out_dir: out_dir.clone(),
            ..BuildSummary::default()
        };

        for relative in self.repository.list_documents(&out_dir)? {
            let mut document = match Document::load(&root.join(&relative)) {
                Ok(document) => document,
                Err(OgpError::MissingType(path)) => {
                    warn!(path = %path.display(), "skipping TOML file without a 'type' key");
                    summary.skipped.push(relative);
                    continue;
                }
                Err(e) => return Err(e),
            };
            document.apply_defaults(&config);

            let meta = document.meta();
            let output = self
                .repository
                .write_fragment(&out_dir, &relative, &meta.to_html())?;
            debug!(
                document = %relative.display(),
                output = %output.display(),
                tags = meta.len(),
                "wrote fragment"
            );

            summary.fragments.push(Fragment {
                document: relative,
                output,
                object_type: document.object_type(),
                tag_count: meta.len(),
            });
        }

        info!(
            fragments = summary.fragments.len(),
            skipped = summary.skipped.len(),
            out_dir = %out_dir.display(),
            "build finished"
        );
        Ok(summary)
    }
}
