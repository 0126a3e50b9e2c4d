//! `music.*` objects

use super::basic::{basic_setters, format_time, Basic, OpenGraph};
use super::meta::MetaList;
use super::profile::ProfileBuilder;
use chrono::{DateTime, FixedOffset, TimeZone};

const NS: &str = "music";

/// A song or album referenced from another music object, with its position
/// on the album
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackRef {
    pub url: String,
    pub disc: u32,
    pub track: u32,
}

impl TrackRef {
    pub fn new(url: impl Into<String>, disc: u32, track: u32) -> Self {
        TrackRef {
            url: url.into(),
            disc,
            track,
        }
    }

    fn meta(&self, ns: &str) -> MetaList {
        let mut mb = MetaList::new();
        if !self.url.is_empty() {
            mb.add(ns, "", &self.url);
        }
        if self.disc > 0 {
            mb.add(ns, "disc", self.disc);
        }
        if self.track > 0 {
            mb.add(ns, "track", self.track);
        }
        mb
    }
}

/// Builds a `music.song` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicSongBuilder {
    basic: Basic,
    duration: u32,
    albums: Vec<TrackRef>,
    musicians: Vec<ProfileBuilder>,
}

impl MusicSongBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();

    /// Sets the `music:duration` property, in seconds.
    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration = seconds;
        self
    }

    /// Adds a `music:album` property with its `disc` and `track`.
    pub fn album(mut self, url: impl Into<String>, disc: u32, track: u32) -> Self {
        self.albums.push(TrackRef::new(url, disc, track));
        self
    }

    /// Adds a `music:musician` property.
    pub fn musician(mut self, musician: ProfileBuilder) -> Self {
        self.musicians.push(musician);
        self
    }
}

impl OpenGraph for MusicSongBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.basic.meta("music.song");
        if self.duration > 0 {
            mb.add(NS, "duration", self.duration);
        }
        for album in &self.albums {
            mb.include(album.meta("music:album"));
        }
        for musician in &self.musicians {
            mb.include(musician.reference("music:musician"));
        }
        mb
    }
}

/// Builds a `music.album` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicAlbumBuilder {
    basic: Basic,
    release_date: Option<DateTime<FixedOffset>>,
    songs: Vec<TrackRef>,
    musicians: Vec<ProfileBuilder>,
}

impl MusicAlbumBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();

    /// Sets the `music:release_date` property.
    pub fn release_date<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self {
        self.release_date = Some(date.fixed_offset());
        self
    }

    /// Adds a `music:song` property with its `disc` and `track`.
    pub fn song(mut self, url: impl Into<String>, disc: u32, track: u32) -> Self {
        self.songs.push(TrackRef::new(url, disc, track));
        self
    }

    /// Adds a `music:musician` property.
    pub fn musician(mut self, musician: ProfileBuilder) -> Self {
        self.musicians.push(musician);
        self
    }
}

impl OpenGraph for MusicAlbumBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.basic.meta("music.album");
        if let Some(date) = &self.release_date {
            mb.add(NS, "release_date", format_time(date));
        }
        for song in &self.songs {
            mb.include(song.meta("music:song"));
        }
        for musician in &self.musicians {
            mb.include(musician.reference("music:musician"));
        }
        mb
    }
}

/// Builds a `music.playlist` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicPlaylistBuilder {
    basic: Basic,
    songs: Vec<TrackRef>,
    creators: Vec<ProfileBuilder>,
}

impl MusicPlaylistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();

    /// Adds a `music:song` property with its `disc` and `track`.
    pub fn song(mut self, url: impl Into<String>, disc: u32, track: u32) -> Self {
        self.songs.push(TrackRef::new(url, disc, track));
        self
    }

    /// Adds a `music:creator` property.
    pub fn creator(mut self, creator: ProfileBuilder) -> Self {
        self.creators.push(creator);
        self
    }
}

impl OpenGraph for MusicPlaylistBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.basic.meta("music.playlist");
        for song in &self.songs {
            mb.include(song.meta("music:song"));
        }
        for creator in &self.creators {
            mb.include(creator.reference("music:creator"));
        }
        mb
    }
}

/// Builds a `music.radio_station` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicRadioStationBuilder {
    basic: Basic,
    creators: Vec<ProfileBuilder>,
}

impl MusicRadioStationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();

    /// Adds a `music:creator` property.
    pub fn creator(mut self, creator: ProfileBuilder) -> Self {
        self.creators.push(creator);
        self
    }
}

impl OpenGraph for MusicRadioStationBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.basic.meta("music.radio_station");
        for creator in &self.creators {
            mb.include(creator.reference("music:creator"));
        }
        mb
    }
}
