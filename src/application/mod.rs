//! Application layer - Use cases and orchestration

pub mod build;
pub mod init;
pub mod render;

pub use build::{BuildOptions, BuildService, BuildSummary, Fragment};
pub use render::RenderService;
