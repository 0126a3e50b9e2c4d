//! Error types for ogp

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the document and CLI layers
#[derive(Debug, Error)]
pub enum OgpError {
    #[error("Invalid document {}: {message}", .path.display())]
    InvalidDocument { path: PathBuf, message: String },

    #[error("Not a page document (no 'type' key): {}", .0.display())]
    MissingType(PathBuf),

    #[error("Unknown object type: {0}")]
    UnknownType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OgpError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            OgpError::InvalidDocument { .. } | OgpError::MissingType(_) => 2,
            OgpError::UnknownType(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            OgpError::InvalidDocument { path, message } => {
                format!(
                    "Invalid document {}: {}\n\n\
                    Suggestions:\n\
                    • Every document needs a 'type' key (e.g., type = \"website\")\n\
                    • Timestamps are quoted RFC 3339 strings (e.g., \"2025-01-17T09:00:00Z\")\n\
                    • Images, videos and audios are arrays of tables ([[images]])",
                    path.display(),
                    message
                )
            }
            OgpError::MissingType(path) => {
                format!(
                    "{} has no 'type' key\n\n\
                    Add one of the supported types at the top of the file, e.g.:\n\
                    type = \"website\"",
                    path.display()
                )
            }
            OgpError::UnknownType(object_type) => {
                format!(
                    "Unknown object type: '{}'\n\n\
                    Run 'ogp types' to list the supported types.\n\
                    Examples: website, article, music.song, video.episode",
                    object_type
                )
            }
            OgpError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\n\
                    Valid keys in ogp.toml: site_name, locales, determiner, output_dir",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using OgpError
pub type Result<T> = std::result::Result<T, OgpError>;
