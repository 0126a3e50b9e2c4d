//! `video.*` objects

use super::basic::{basic_setters, format_time, Basic, OpenGraph};
use super::meta::MetaList;
use super::profile::ProfileBuilder;
use chrono::{DateTime, FixedOffset};

const NS: &str = "video";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Actor {
    profile: ProfileBuilder,
    role: String,
}

/// Properties shared by movies, TV shows, episodes and other videos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct VideoFields {
    duration: u32,
    release_date: Option<DateTime<FixedOffset>>,
    tags: Vec<String>,
    actors: Vec<Actor>,
    directors: Vec<ProfileBuilder>,
    writers: Vec<ProfileBuilder>,
}

impl VideoFields {
    fn render_details(&self, ns: &str, mb: &mut MetaList) {
        if self.duration > 0 {
            mb.add(ns, "duration", self.duration);
        }
        if let Some(date) = &self.release_date {
            mb.add(ns, "release_date", format_time(date));
        }
        for tag in &self.tags {
            mb.add(ns, "tag", tag);
        }
    }

    fn render_credits(&self, mb: &mut MetaList) {
        for actor in &self.actors {
            mb.include(actor.profile.reference("video:actor"));
            if !actor.role.is_empty() {
                mb.add("video:actor", "role", &actor.role);
            }
        }
        for director in &self.directors {
            mb.include(director.reference("video:director"));
        }
        for writer in &self.writers {
            mb.include(writer.reference("video:writer"));
        }
    }

    fn meta(&self, basic: &Basic, object_type: &str) -> MetaList {
        let mut mb = basic.meta(object_type);
        self.render_details(NS, &mut mb);
        self.render_credits(&mut mb);
        mb
    }
}

macro_rules! video_setters {
    () => {
        /// Sets the `video:duration` property, in seconds.
        pub fn duration(mut self, seconds: u32) -> Self {
            self.video.duration = seconds;
            self
        }

        /// Sets the `video:release_date` property.
        pub fn release_date<Tz: chrono::TimeZone>(mut self, date: DateTime<Tz>) -> Self {
            self.video.release_date = Some(date.fixed_offset());
            self
        }

        /// Adds a `video:tag` property.
        pub fn tag(mut self, tag: impl Into<String>) -> Self {
            self.video.tags.push(tag.into());
            self
        }

        /// Adds a `video:actor` property, with a `video:actor:role` unless
        /// `role` is empty.
        pub fn actor(mut self, actor: ProfileBuilder, role: impl Into<String>) -> Self {
            self.video.actors.push(Actor {
                profile: actor,
                role: role.into(),
            });
            self
        }

        /// Adds a `video:director` property.
        pub fn director(mut self, director: ProfileBuilder) -> Self {
            self.video.directors.push(director);
            self
        }

        /// Adds a `video:writer` property.
        pub fn writer(mut self, writer: ProfileBuilder) -> Self {
            self.video.writers.push(writer);
            self
        }
    };
}

/// Builds a `video.movie` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMovieBuilder {
    basic: Basic,
    video: VideoFields,
}

impl VideoMovieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();
    video_setters!();
}

impl OpenGraph for VideoMovieBuilder {
    fn meta(&self) -> MetaList {
        self.video.meta(&self.basic, "video.movie")
    }
}

/// Builds a `video.tv_show` object.
///
/// A TV show is also the `video:series` of an episode, see
/// [`VideoEpisodeBuilder::series`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoTvShowBuilder {
    basic: Basic,
    video: VideoFields,
}

impl VideoTvShowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();
    video_setters!();

    /// Tags of this show referenced under `ns`. Credits belong to the top
    /// level object only.
    pub(crate) fn reference(&self, ns: &str) -> MetaList {
        let mut mb = self.basic.reference(ns);
        self.video.render_details(ns, &mut mb);
        mb
    }
}

impl OpenGraph for VideoTvShowBuilder {
    fn meta(&self) -> MetaList {
        self.video.meta(&self.basic, "video.tv_show")
    }
}

/// Builds a `video.episode` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoEpisodeBuilder {
    basic: Basic,
    video: VideoFields,
    series: Option<VideoTvShowBuilder>,
}

impl VideoEpisodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();
    video_setters!();

    /// Sets the `video:series` property.
    pub fn series(mut self, series: VideoTvShowBuilder) -> Self {
        self.series = Some(series);
        self
    }
}

impl OpenGraph for VideoEpisodeBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.video.meta(&self.basic, "video.episode");
        if let Some(series) = &self.series {
            mb.include(series.reference("video:series"));
        }
        mb
    }
}

/// Builds a `video.other` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoOtherBuilder {
    basic: Basic,
    video: VideoFields,
}

impl VideoOtherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();
    video_setters!();
}

impl OpenGraph for VideoOtherBuilder {
    fn meta(&self) -> MetaList {
        self.video.meta(&self.basic, "video.other")
    }
}
