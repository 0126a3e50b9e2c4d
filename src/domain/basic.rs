//! Properties shared by every Open Graph object

use super::media::{AudioBuilder, ImageBuilder, VideoBuilder};
use super::meta::MetaList;
use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Namespace of the top-level object properties
pub const OG: &str = "og";

/// An Open Graph object that renders to a list of meta tags
pub trait OpenGraph {
    /// Collect the object's meta tags in declaration order
    fn meta(&self) -> MetaList;

    /// Render the object's meta tags as HTML, one tag per line
    fn html(&self) -> String {
        self.meta().to_html()
    }
}

/// Basic and optional metadata every object carries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Basic {
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) description: String,
    pub(crate) determiner: String,
    pub(crate) locales: Vec<String>,
    pub(crate) site_name: String,
    pub(crate) images: Vec<ImageBuilder>,
    pub(crate) videos: Vec<VideoBuilder>,
    pub(crate) audios: Vec<AudioBuilder>,
}

impl Basic {
    /// Tags of a top-level object of type `object_type`
    pub(crate) fn meta(&self, object_type: &str) -> MetaList {
        let mut mb = MetaList::new();
        mb.add(OG, "type", object_type);
        mb.add(OG, "title", &self.title);
        mb.add(OG, "url", &self.url);
        self.render_optional(OG, &mut mb);
        mb
    }

    /// Tags of the object referenced from another object under `ns`,
    /// led by its URL
    pub(crate) fn reference(&self, ns: &str) -> MetaList {
        let mut mb = MetaList::new();
        mb.add(ns, "", &self.url);
        if !self.title.is_empty() {
            mb.add(ns, "title", &self.title);
        }
        self.render_optional(ns, &mut mb);
        mb
    }

    fn render_optional(&self, ns: &str, mb: &mut MetaList) {
        if !self.description.is_empty() {
            mb.add(ns, "description", &self.description);
        }
        if !self.determiner.is_empty() {
            mb.add(ns, "determiner", &self.determiner);
        }
        for (index, locale) in self.locales.iter().enumerate() {
            if index == 0 {
                mb.add(ns, "locale", locale);
            } else {
                mb.add(ns, "locale:alternate", locale);
            }
        }
        if !self.site_name.is_empty() {
            mb.add(ns, "site_name", &self.site_name);
        }
        for image in &self.images {
            mb.include(image.meta(ns));
        }
        for video in &self.videos {
            mb.include(video.meta(ns));
        }
        for audio in &self.audios {
            mb.include(audio.meta(ns));
        }
    }
}

/// RFC 3339 with whole seconds, `Z` for UTC
pub(crate) fn format_time(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Setters for the [`Basic`] fields, expanded inside each builder's `impl`
/// block. The builder must keep them in a field named `basic`.
macro_rules! basic_setters {
    () => {
        /// Sets the `og:title` property.
        pub fn title(mut self, title: impl Into<String>) -> Self {
            self.basic.title = title.into();
            self
        }

        /// Sets the `og:url` property.
        pub fn url(mut self, url: impl Into<String>) -> Self {
            self.basic.url = url.into();
            self
        }

        /// Sets the `og:description` property.
        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.basic.description = description.into();
            self
        }

        /// Sets the `og:determiner` property.
        pub fn determiner(mut self, determiner: impl Into<String>) -> Self {
            self.basic.determiner = determiner.into();
            self
        }

        /// Sets `og:locale` on first call, adds an `og:locale:alternate` after.
        pub fn locale(mut self, locale: impl Into<String>) -> Self {
            self.basic.locales.push(locale.into());
            self
        }

        /// Sets the `og:site_name` property.
        pub fn site_name(mut self, site_name: impl Into<String>) -> Self {
            self.basic.site_name = site_name.into();
            self
        }

        /// Adds an `og:image` property.
        pub fn image(mut self, image: $crate::domain::ImageBuilder) -> Self {
            self.basic.images.push(image);
            self
        }

        /// Adds an `og:video` property.
        pub fn video(mut self, video: $crate::domain::VideoBuilder) -> Self {
            self.basic.videos.push(video);
            self
        }

        /// Adds an `og:audio` property.
        pub fn audio(mut self, audio: $crate::domain::AudioBuilder) -> Self {
            self.basic.audios.push(audio);
            self
        }

        pub(crate) fn with_basic(mut self, basic: $crate::domain::basic::Basic) -> Self {
            self.basic = basic;
            self
        }
    };
}

pub(crate) use basic_setters;
