//! Image, video and audio sub-objects

use super::meta::MetaList;

/// Builds an `og:image` structured property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBuilder {
    url: String,
    secure_url: String,
    mime: String,
    alt: String,
    width: u32,
    height: u32,
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `og:image` property.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the `og:image:secure_url` property.
    pub fn secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = url.into();
        self
    }

    /// Sets the `og:image:type` property.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    /// Sets the `og:image:alt` property.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Sets the `og:image:width` property.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the `og:image:height` property.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub(crate) fn meta(&self, ns: &str) -> MetaList {
        let mut mb = MetaList::new();
        render_visual(
            &mut mb,
            ns,
            "image",
            Visual {
                url: &self.url,
                secure_url: &self.secure_url,
                mime: &self.mime,
                alt: &self.alt,
                width: self.width,
                height: self.height,
            },
        );
        mb
    }
}

/// Builds an `og:video` structured property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoBuilder {
    url: String,
    secure_url: String,
    mime: String,
    alt: String,
    width: u32,
    height: u32,
}

impl VideoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `og:video` property.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the `og:video:secure_url` property.
    pub fn secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = url.into();
        self
    }

    /// Sets the `og:video:type` property.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    /// Sets the `og:video:alt` property.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Sets the `og:video:width` property.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the `og:video:height` property.
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub(crate) fn meta(&self, ns: &str) -> MetaList {
        let mut mb = MetaList::new();
        render_visual(
            &mut mb,
            ns,
            "video",
            Visual {
                url: &self.url,
                secure_url: &self.secure_url,
                mime: &self.mime,
                alt: &self.alt,
                width: self.width,
                height: self.height,
            },
        );
        mb
    }
}

/// Builds an `og:audio` structured property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioBuilder {
    url: String,
    secure_url: String,
    mime: String,
}

impl AudioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `og:audio` property.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the `og:audio:secure_url` property.
    pub fn secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = url.into();
        self
    }

    /// Sets the `og:audio:type` property.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    pub(crate) fn meta(&self, ns: &str) -> MetaList {
        let mut mb = MetaList::new();
        mb.add(ns, "audio", &self.url);
        if !self.secure_url.is_empty() {
            mb.add(ns, "audio:secure_url", &self.secure_url);
        }
        if !self.mime.is_empty() {
            mb.add(ns, "audio:type", &self.mime);
        }
        mb
    }
}

struct Visual<'a> {
    url: &'a str,
    secure_url: &'a str,
    mime: &'a str,
    alt: &'a str,
    width: u32,
    height: u32,
}

// Images and videos share the same structured properties.
fn render_visual(mb: &mut MetaList, ns: &str, kind: &str, visual: Visual<'_>) {
    mb.add(ns, kind, visual.url);
    if !visual.secure_url.is_empty() {
        mb.add(ns, &format!("{}:secure_url", kind), visual.secure_url);
    }
    if !visual.mime.is_empty() {
        mb.add(ns, &format!("{}:type", kind), visual.mime);
    }
    if !visual.alt.is_empty() {
        mb.add(ns, &format!("{}:alt", kind), visual.alt);
    }
    if visual.width > 0 {
        mb.add(ns, &format!("{}:width", kind), visual.width);
    }
    if visual.height > 0 {
        mb.add(ns, &format!("{}:height", kind), visual.height);
    }
}
