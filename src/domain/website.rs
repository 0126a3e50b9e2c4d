//! `website` object

use super::basic::{basic_setters, Basic, OpenGraph};
use super::meta::MetaList;

/// Builds a `website` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteBuilder {
    basic: Basic,
}

impl WebsiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();
}

impl OpenGraph for WebsiteBuilder {
    fn meta(&self) -> MetaList {
        self.basic.meta("website")
    }
}
