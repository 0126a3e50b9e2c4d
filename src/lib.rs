//! ogp - Open Graph meta tag builder
//!
//! One fluent builder per Open Graph object type. Each setter takes and
//! returns the builder; [`OpenGraph::html`] renders the collected properties
//! as `<meta property="..." content="...">` tags, one per line, in the order
//! the protocol declares them.
//!
//! ```
//! use ogp::OpenGraph;
//!
//! let html = ogp::article()
//!     .title("How to Train Your Dragons")
//!     .url("http://example.com/article/how-to-train-your-dragon")
//!     .image(ogp::image().url("http://example.com/image/dragon.jpg"))
//!     .author(ogp::profile().url("http://example.com/profile/dragon-master"))
//!     .html();
//!
//! assert_eq!(
//!     html,
//!     "<meta property=\"og:type\" content=\"article\">\n\
//!      <meta property=\"og:title\" content=\"How to Train Your Dragons\">\n\
//!      <meta property=\"og:url\" content=\"http://example.com/article/how-to-train-your-dragon\">\n\
//!      <meta property=\"og:image\" content=\"http://example.com/image/dragon.jpg\">\n\
//!      <meta property=\"article:author\" content=\"http://example.com/profile/dragon-master\">"
//! );
//! ```
//!
//! Content is written as given, without HTML escaping.
//!
//! The `ogp` binary renders the same objects from TOML page documents, see
//! [`infrastructure::document`].

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{
    ArticleBuilder, AudioBuilder, BookBuilder, ImageBuilder, MetaList, MetaTag, MusicAlbumBuilder,
    MusicPlaylistBuilder, MusicRadioStationBuilder, MusicSongBuilder, OpenGraph, ProfileBuilder,
    TrackRef, VideoBuilder, VideoEpisodeBuilder, VideoMovieBuilder, VideoOtherBuilder,
    VideoTvShowBuilder, WebsiteBuilder,
};
pub use error::OgpError;

/// Start a `website` object.
pub fn website() -> WebsiteBuilder {
    WebsiteBuilder::new()
}

/// Start an `article` object.
pub fn article() -> ArticleBuilder {
    ArticleBuilder::new()
}

/// Start a `book` object.
pub fn book() -> BookBuilder {
    BookBuilder::new()
}

/// Start a `profile` object, also used for authors, musicians and credits.
pub fn profile() -> ProfileBuilder {
    ProfileBuilder::new()
}

/// Start a `music.song` object.
pub fn song() -> MusicSongBuilder {
    MusicSongBuilder::new()
}

/// Start a `music.album` object.
pub fn album() -> MusicAlbumBuilder {
    MusicAlbumBuilder::new()
}

/// Start a `music.playlist` object.
pub fn playlist() -> MusicPlaylistBuilder {
    MusicPlaylistBuilder::new()
}

/// Start a `music.radio_station` object.
pub fn radio_station() -> MusicRadioStationBuilder {
    MusicRadioStationBuilder::new()
}

/// Start a `video.movie` object.
pub fn movie() -> VideoMovieBuilder {
    VideoMovieBuilder::new()
}

/// Start a `video.tv_show` object.
pub fn tv_show() -> VideoTvShowBuilder {
    VideoTvShowBuilder::new()
}

/// Start a `video.episode` object.
pub fn episode() -> VideoEpisodeBuilder {
    VideoEpisodeBuilder::new()
}

/// Start a `video.other` object.
pub fn video_other() -> VideoOtherBuilder {
    VideoOtherBuilder::new()
}

/// Start an `og:image` structured property.
pub fn image() -> ImageBuilder {
    ImageBuilder::new()
}

/// Start an `og:video` structured property.
pub fn video() -> VideoBuilder {
    VideoBuilder::new()
}

/// Start an `og:audio` structured property.
pub fn audio() -> AudioBuilder {
    AudioBuilder::new()
}
