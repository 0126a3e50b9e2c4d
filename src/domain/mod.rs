//! Domain layer - Open Graph objects and their meta tags

pub mod article;
pub mod basic;
pub mod book;
pub mod media;
pub mod meta;
pub mod music;
pub mod profile;
pub mod video;
pub mod website;

pub use article::ArticleBuilder;
pub use basic::OpenGraph;
pub use book::BookBuilder;
pub use media::{AudioBuilder, ImageBuilder, VideoBuilder};
pub use meta::{MetaList, MetaTag};
pub use music::{
    MusicAlbumBuilder, MusicPlaylistBuilder, MusicRadioStationBuilder, MusicSongBuilder, TrackRef,
};
pub use profile::ProfileBuilder;
pub use video::{VideoEpisodeBuilder, VideoMovieBuilder, VideoOtherBuilder, VideoTvShowBuilder};
pub use website::WebsiteBuilder;
