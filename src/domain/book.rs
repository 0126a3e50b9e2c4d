//! `book` object

use super::basic::{basic_setters, format_time, Basic, OpenGraph};
use super::meta::MetaList;
use super::profile::ProfileBuilder;
use chrono::{DateTime, FixedOffset, TimeZone};

const NS: &str = "book";

/// Builds a `book` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookBuilder {
    basic: Basic,
    isbn: String,
    release_date: Option<DateTime<FixedOffset>>,
    tags: Vec<String>,
    authors: Vec<ProfileBuilder>,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();

    /// Sets the `book:isbn` property.
    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    /// Sets the `book:release_date` property.
    pub fn release_date<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self {
        self.release_date = Some(date.fixed_offset());
        self
    }

    /// Adds a `book:tag` property.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds a `book:author` property.
    pub fn author(mut self, author: ProfileBuilder) -> Self {
        self.authors.push(author);
        self
    }
}

impl OpenGraph for BookBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.basic.meta("book");
        if !self.isbn.is_empty() {
            mb.add(NS, "isbn", &self.isbn);
        }
        if let Some(date) = &self.release_date {
            mb.add(NS, "release_date", format_time(date));
        }
        for tag in &self.tags {
            mb.add(NS, "tag", tag);
        }
        for author in &self.authors {
            mb.include(author.reference("book:author"));
        }
        mb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageBuilder;
    use chrono::Utc;

    #[test]
    fn test_book() {
        let html = BookBuilder::new()
            .title("Oliver Twist")
            .url("http://example.com/book/oliver-twist")
            .image(ImageBuilder::new().url("http://example.com/image/cover.jpg"))
            .author(ProfileBuilder::new().url("http://example.com/profile/charles-dickens"))
            .isbn("9780174325482")
            .html();

        assert_eq!(
            html,
            "<meta property=\"og:type\" content=\"book\">\n\
             <meta property=\"og:title\" content=\"Oliver Twist\">\n\
             <meta property=\"og:url\" content=\"http://example.com/book/oliver-twist\">\n\
             <meta property=\"og:image\" content=\"http://example.com/image/cover.jpg\">\n\
             <meta property=\"book:isbn\" content=\"9780174325482\">\n\
             <meta property=\"book:author\" content=\"http://example.com/profile/charles-dickens\">"
        );
    }

    #[test]
    fn test_book_release_date_and_tags() {
        let date = Utc.with_ymd_and_hms(1838, 1, 1, 0, 0, 0).unwrap();
        let mb = BookBuilder::new()
            .tag("novel")
            .release_date(date)
            .meta();

        let html = mb.to_html();
        assert!(html.ends_with(
            "<meta property=\"book:release_date\" content=\"1838-01-01T00:00:00Z\">\n\
             <meta property=\"book:tag\" content=\"novel\">"
        ));
    }
}
