//! `article` object

use super::basic::{basic_setters, format_time, Basic, OpenGraph};
use super::meta::MetaList;
use super::profile::ProfileBuilder;
use chrono::{DateTime, FixedOffset, TimeZone};

const NS: &str = "article";

/// Builds an `article` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleBuilder {
    basic: Basic,
    published_time: Option<DateTime<FixedOffset>>,
    modified_time: Option<DateTime<FixedOffset>>,
    expiration_time: Option<DateTime<FixedOffset>>,
    section: String,
    tags: Vec<String>,
    authors: Vec<ProfileBuilder>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();

    /// Sets the `article:published_time` property.
    pub fn published_time<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.published_time = Some(time.fixed_offset());
        self
    }

    /// Sets the `article:modified_time` property.
    pub fn modified_time<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.modified_time = Some(time.fixed_offset());
        self
    }

    /// Sets the `article:expiration_time` property.
    pub fn expiration_time<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.expiration_time = Some(time.fixed_offset());
        self
    }

    /// Sets the `article:section` property.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Adds an `article:tag` property.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds an `article:author` property.
    pub fn author(mut self, author: ProfileBuilder) -> Self {
        self.authors.push(author);
        self
    }
}

impl OpenGraph for ArticleBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.basic.meta("article");
        if let Some(time) = &self.published_time {
            mb.add(NS, "published_time", format_time(time));
        }
        if let Some(time) = &self.modified_time {
            mb.add(NS, "modified_time", format_time(time));
        }
        if let Some(time) = &self.expiration_time {
            mb.add(NS, "expiration_time", format_time(time));
        }
        if !self.section.is_empty() {
            mb.add(NS, "section", &self.section);
        }
        for tag in &self.tags {
            mb.add(NS, "tag", tag);
        }
        for author in &self.authors {
            mb.include(author.reference("article:author"));
        }
        mb
    }
}
