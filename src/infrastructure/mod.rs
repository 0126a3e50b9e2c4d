//! Infrastructure layer - Site configuration, page documents and file I/O

pub mod config;
pub mod document;
pub mod repository;

pub use config::Config;
pub use document::{Document, OBJECT_TYPES};
pub use repository::{FileSystemRepository, SiteRepository};
