//! Page documents: one Open Graph object described in TOML
//!
//! ```toml
//! type = "article"
//! title = "How to Train Your Dragons"
//! url = "http://example.com/article/how-to-train-your-dragon"
//! published_time = "2024-03-01T09:30:00Z"
//!
//! [[images]]
//! url = "http://example.com/image/dragon.jpg"
//!
//! [[authors]]
//! url = "http://example.com/profile/dragon-master"
//! ```

use crate::domain::basic::Basic;
use crate::domain::{
    ArticleBuilder, AudioBuilder, BookBuilder, ImageBuilder, MetaList, MusicAlbumBuilder,
    MusicPlaylistBuilder, MusicRadioStationBuilder, MusicSongBuilder, OpenGraph, ProfileBuilder,
    VideoBuilder, VideoEpisodeBuilder, VideoMovieBuilder, VideoOtherBuilder, VideoTvShowBuilder,
    WebsiteBuilder,
};
use crate::error::{OgpError, Result};
use crate::infrastructure::Config;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Every value accepted by the `type` key
pub const OBJECT_TYPES: [&str; 12] = [
    "website",
    "article",
    "book",
    "profile",
    "music.song",
    "music.album",
    "music.playlist",
    "music.radio_station",
    "video.movie",
    "video.tv_show",
    "video.episode",
    "video.other",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaDoc {
    pub url: String,
    pub secure_url: String,
    pub mime: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AudioDoc {
    pub url: String,
    pub secure_url: String,
    pub mime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BasicDoc {
    pub title: String,
    pub url: String,
    pub description: String,
    pub determiner: String,
    pub locales: Vec<String>,
    pub site_name: String,
    pub images: Vec<MediaDoc>,
    pub videos: Vec<MediaDoc>,
    pub audios: Vec<AudioDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub gender: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActorDoc {
    #[serde(flatten)]
    pub profile: ProfileDoc,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackDoc {
    pub url: String,
    pub disc: u32,
    pub track: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WebsiteDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArticleDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub published_time: Option<DateTime<FixedOffset>>,
    pub modified_time: Option<DateTime<FixedOffset>>,
    pub expiration_time: Option<DateTime<FixedOffset>>,
    pub section: String,
    pub tags: Vec<String>,
    pub authors: Vec<ProfileDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub isbn: String,
    pub release_date: Option<DateTime<FixedOffset>>,
    pub tags: Vec<String>,
    pub authors: Vec<ProfileDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SongDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub duration: u32,
    pub albums: Vec<TrackDoc>,
    pub musicians: Vec<ProfileDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlbumDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub release_date: Option<DateTime<FixedOffset>>,
    pub songs: Vec<TrackDoc>,
    pub musicians: Vec<ProfileDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaylistDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub songs: Vec<TrackDoc>,
    pub creators: Vec<ProfileDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RadioStationDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub creators: Vec<ProfileDoc>,
}

/// Movies, TV shows and other videos
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoDoc {
    #[serde(flatten)]
    pub basic: BasicDoc,
    pub duration: u32,
    pub release_date: Option<DateTime<FixedOffset>>,
    pub tags: Vec<String>,
    pub actors: Vec<ActorDoc>,
    pub directors: Vec<ProfileDoc>,
    pub writers: Vec<ProfileDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EpisodeDoc {
    #[serde(flatten)]
    pub video: VideoDoc,
    pub series: Option<VideoDoc>,
}

/// A page document, selected by its `type` key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Document {
    #[serde(rename = "website")]
    Website(WebsiteDoc),
    #[serde(rename = "article")]
    Article(ArticleDoc),
    #[serde(rename = "book")]
    Book(BookDoc),
    #[serde(rename = "profile")]
    Profile(ProfileDoc),
    #[serde(rename = "music.song")]
    MusicSong(SongDoc),
    #[serde(rename = "music.album")]
    MusicAlbum(AlbumDoc),
    #[serde(rename = "music.playlist")]
    MusicPlaylist(PlaylistDoc),
    #[serde(rename = "music.radio_station")]
    MusicRadioStation(RadioStationDoc),
    #[serde(rename = "video.movie")]
    VideoMovie(VideoDoc),
    #[serde(rename = "video.tv_show")]
    VideoTvShow(VideoDoc),
    #[serde(rename = "video.episode")]
    VideoEpisode(EpisodeDoc),
    #[serde(rename = "video.other")]
    VideoOther(VideoDoc),
}

impl Document {
    /// Load and parse a document file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, path)
    }

    /// Parse document text; `path` is only used in error messages
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let invalid = |message: String| OgpError::InvalidDocument {
            path: path.to_path_buf(),
            message,
        };

        let table: toml::Table = toml::from_str(contents).map_err(|e| invalid(e.to_string()))?;

        match table.get("type") {
            Some(toml::Value::String(object_type)) => {
                if !OBJECT_TYPES.contains(&object_type.as_str()) {
                    return Err(OgpError::UnknownType(object_type.clone()));
                }
            }
            Some(_) => return Err(invalid("'type' must be a string".to_string())),
            None => return Err(OgpError::MissingType(path.to_path_buf())),
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| invalid(e.to_string()))
    }

    /// The `og:type` this document renders
    pub fn object_type(&self) -> &'static str {
        match self {
            Document::Website(_) => "website",
            Document::Article(_) => "article",
            Document::Book(_) => "book",
            Document::Profile(_) => "profile",
            Document::MusicSong(_) => "music.song",
            Document::MusicAlbum(_) => "music.album",
            Document::MusicPlaylist(_) => "music.playlist",
            Document::MusicRadioStation(_) => "music.radio_station",
            Document::VideoMovie(_) => "video.movie",
            Document::VideoTvShow(_) => "video.tv_show",
            Document::VideoEpisode(_) => "video.episode",
            Document::VideoOther(_) => "video.other",
        }
    }

    fn basic_mut(&mut self) -> &mut BasicDoc {
        match self {
            Document::Website(doc) => &mut doc.basic,
            Document::Article(doc) => &mut doc.basic,
            Document::Book(doc) => &mut doc.basic,
            Document::Profile(doc) => &mut doc.basic,
            Document::MusicSong(doc) => &mut doc.basic,
            Document::MusicAlbum(doc) => &mut doc.basic,
            Document::MusicPlaylist(doc) => &mut doc.basic,
            Document::MusicRadioStation(doc) => &mut doc.basic,
            Document::VideoMovie(doc) | Document::VideoTvShow(doc) | Document::VideoOther(doc) => {
                &mut doc.basic
            }
            Document::VideoEpisode(doc) => &mut doc.video.basic,
        }
    }

    /// Fill the site name, locales and determiner from the site config
    /// where the document leaves them unset
    pub fn apply_defaults(&mut self, config: &Config) {
        let basic = self.basic_mut();
        if basic.site_name.is_empty() {
            if let Some(site_name) = &config.site_name {
                basic.site_name = site_name.clone();
            }
        }
        if basic.locales.is_empty() {
            basic.locales = config.locales.clone();
        }
        if basic.determiner.is_empty() {
            if let Some(determiner) = &config.determiner {
                basic.determiner = determiner.clone();
            }
        }
    }

    /// Build the described object and collect its meta tags
    pub fn meta(&self) -> MetaList {
        match self {
            Document::Website(doc) => WebsiteBuilder::new().with_basic(doc.basic.build()).meta(),
            Document::Article(doc) => doc.build().meta(),
            Document::Book(doc) => doc.build().meta(),
            Document::Profile(doc) => doc.build().meta(),
            Document::MusicSong(doc) => doc.build().meta(),
            Document::MusicAlbum(doc) => doc.build().meta(),
            Document::MusicPlaylist(doc) => doc.build().meta(),
            Document::MusicRadioStation(doc) => doc.build().meta(),
            Document::VideoMovie(doc) => doc.build_movie().meta(),
            Document::VideoTvShow(doc) => doc.build_tv_show().meta(),
            Document::VideoEpisode(doc) => doc.build().meta(),
            Document::VideoOther(doc) => doc.build_other().meta(),
        }
    }
}

impl MediaDoc {
    fn build_image(&self) -> ImageBuilder {
        ImageBuilder::new()
            .url(&self.url)
            .secure_url(&self.secure_url)
            .mime(&self.mime)
            .alt(&self.alt)
            .width(self.width)
            .height(self.height)
    }

    fn build_video(&self) -> VideoBuilder {
        VideoBuilder::new()
            .url(&self.url)
            .secure_url(&self.secure_url)
            .mime(&self.mime)
            .alt(&self.alt)
            .width(self.width)
            .height(self.height)
    }
}

impl AudioDoc {
    fn build(&self) -> AudioBuilder {
        AudioBuilder::new()
            .url(&self.url)
            .secure_url(&self.secure_url)
            .mime(&self.mime)
    }
}

impl BasicDoc {
    fn build(&self) -> Basic {
        Basic {
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            determiner: self.determiner.clone(),
            locales: self.locales.clone(),
            site_name: self.site_name.clone(),
            images: self.images.iter().map(MediaDoc::build_image).collect(),
            videos: self.videos.iter().map(MediaDoc::build_video).collect(),
            audios: self.audios.iter().map(AudioDoc::build).collect(),
        }
    }
}

impl ProfileDoc {
    fn build(&self) -> ProfileBuilder {
        ProfileBuilder::new()
            .with_basic(self.basic.build())
            .first_name(&self.first_name)
            .last_name(&self.last_name)
            .username(&self.username)
            .gender(&self.gender)
    }
}

impl ArticleDoc {
    fn build(&self) -> ArticleBuilder {
        let mut builder = ArticleBuilder::new()
            .with_basic(self.basic.build())
            .section(&self.section);
        if let Some(time) = self.published_time {
            builder = builder.published_time(time);
        }
        if let Some(time) = self.modified_time {
            builder = builder.modified_time(time);
        }
        if let Some(time) = self.expiration_time {
            builder = builder.expiration_time(time);
        }
        for tag in &self.tags {
            builder = builder.tag(tag);
        }
        for author in &self.authors {
            builder = builder.author(author.build());
        }
        builder
    }
}

impl BookDoc {
    fn build(&self) -> BookBuilder {
        let mut builder = BookBuilder::new()
            .with_basic(self.basic.build())
            .isbn(&self.isbn);
        if let Some(date) = self.release_date {
            builder = builder.release_date(date);
        }
        for tag in &self.tags {
            builder = builder.tag(tag);
        }
        for author in &self.authors {
            builder = builder.author(author.build());
        }
        builder
    }
}

impl SongDoc {
    fn build(&self) -> MusicSongBuilder {
        let mut builder = MusicSongBuilder::new()
            .with_basic(self.basic.build())
            .duration(self.duration);
        for album in &self.albums {
            builder = builder.album(&album.url, album.disc, album.track);
        }
        for musician in &self.musicians {
            builder = builder.musician(musician.build());
        }
        builder
    }
}

impl AlbumDoc {
    fn build(&self) -> MusicAlbumBuilder {
        let mut builder = MusicAlbumBuilder::new().with_basic(self.basic.build());
        if let Some(date) = self.release_date {
            builder = builder.release_date(date);
        }
        for song in &self.songs {
            builder = builder.song(&song.url, song.disc, song.track);
        }
        for musician in &self.musicians {
            builder = builder.musician(musician.build());
        }
        builder
    }
}

impl RadioStationDoc {
    fn build(&self) -> MusicRadioStationBuilder {
        let mut builder = MusicRadioStationBuilder::new().with_basic(self.basic.build());
        for creator in &self.creators {
            builder = builder.creator(creator.build());
        }
        builder
    }
}

impl PlaylistDoc {
    fn build(&self) -> MusicPlaylistBuilder {
        let mut builder = MusicPlaylistBuilder::new().with_basic(self.basic.build());
        for song in &self.songs {
            builder = builder.song(&song.url, song.disc, song.track);
        }
        for creator in &self.creators {
            builder = builder.creator(creator.build());
        }
        builder
    }
}

/// Applies the shared video fields of a [`VideoDoc`] to any video builder
macro_rules! build_video {
    ($doc:expr, $builder:expr) => {{
        let doc = $doc;
        let mut builder = $builder.with_basic(doc.basic.build()).duration(doc.duration);
        if let Some(date) = doc.release_date {
            builder = builder.release_date(date);
        }
        for tag in &doc.tags {
            builder = builder.tag(tag);
        }
        for actor in &doc.actors {
            builder = builder.actor(actor.profile.build(), &actor.role);
        }
        for director in &doc.directors {
            builder = builder.director(director.build());
        }
        for writer in &doc.writers {
            builder = builder.writer(writer.build());
        }
        builder
    }};
}

impl VideoDoc {
    fn build_movie(&self) -> VideoMovieBuilder {
        build_video!(self, VideoMovieBuilder::new())
    }

    fn build_tv_show(&self) -> VideoTvShowBuilder {
        build_video!(self, VideoTvShowBuilder::new())
    }

    fn build_other(&self) -> VideoOtherBuilder {
        build_video!(self, VideoOtherBuilder::new())
    }
}

impl EpisodeDoc {
    fn build(&self) -> VideoEpisodeBuilder {
        let builder = build_video!(&self.video, VideoEpisodeBuilder::new());
        match &self.series {
            Some(series) => builder.series(series.build_tv_show()),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(contents: &str) -> Result<Document> {
        Document::parse(contents, Path::new("page.toml"))
    }

    fn pairs(mb: &MetaList) -> Vec<String> {
        mb.iter()
            .map(|t| format!("{}={}", t.name(), t.content))
            .collect()
    }

    #[test]
    fn test_parse_website() {
        let doc = parse(
            r#"
type = "website"
title = "Example"
url = "http://example.com"

[[images]]
url = "http://example.com/social.jpg"
width = 1200
"#,
        )
        .unwrap();

        assert_eq!(doc.object_type(), "website");
        assert_eq!(
            pairs(&doc.meta()),
            vec![
                "og:type=website",
                "og:title=Example",
                "og:url=http://example.com",
                "og:image=http://example.com/social.jpg",
                "og:image:width=1200",
            ]
        );
    }

    #[test]
    fn test_parse_article_with_authors_and_times() {
        let doc = parse(
            r#"
type = "article"
title = "Dragons"
url = "http://example.com/dragons"
published_time = "2024-03-01T09:30:00+02:00"
section = "Howto"
tags = ["dragons"]

[[authors]]
url = "http://example.com/master"
first_name = "Hiccup"
"#,
        )
        .unwrap();

        assert_eq!(
            pairs(&doc.meta())[3..].to_vec(),
            vec![
                "article:published_time=2024-03-01T09:30:00+02:00",
                "article:section=Howto",
                "article:tag=dragons",
                "article:author=http://example.com/master",
                "article:author:first_name=Hiccup",
            ]
        );
    }

    #[test]
    fn test_parse_episode_with_series_and_actors() {
        let doc = parse(
            r#"
type = "video.episode"
title = "Pilot"
url = "http://example.com/show/1"

[[actors]]
url = "http://example.com/lead"
role = "Captain"

[series]
title = "Show"
url = "http://example.com/show"
"#,
        )
        .unwrap();

        assert_eq!(
            pairs(&doc.meta())[3..].to_vec(),
            vec![
                "video:actor=http://example.com/lead",
                "video:actor:role=Captain",
                "video:series=http://example.com/show",
                "video:series:title=Show",
            ]
        );
    }

    #[test]
    fn test_parse_song_album_refs() {
        let doc = parse(
            r#"
type = "music.song"
url = "http://example.com/song"
duration = 200

[[albums]]
url = "http://example.com/album"
track = 4
"#,
        )
        .unwrap();

        let tags = pairs(&doc.meta());
        assert!(tags.contains(&"music:duration=200".to_string()));
        assert!(tags.contains(&"music:album:track=4".to_string()));
        assert!(!tags.iter().any(|t| t.starts_with("music:album:disc")));
    }

    #[test]
    fn test_parse_radio_station_creators() {
        let doc = parse(
            r#"
type = "music.radio_station"
title = "Jazz FM"
url = "http://example.com/jazz"

[[creators]]
url = "http://example.com/dj"
username = "dj"
"#,
        )
        .unwrap();

        assert_eq!(
            pairs(&doc.meta()),
            vec![
                "og:type=music.radio_station",
                "og:title=Jazz FM",
                "og:url=http://example.com/jazz",
                "music:creator=http://example.com/dj",
                "music:creator:username=dj",
            ]
        );
    }

    #[test]
    fn test_unknown_type() {
        match parse("type = \"blog\"\n") {
            Err(OgpError::UnknownType(t)) => assert_eq!(t, "blog"),
            other => panic!("Expected UnknownType, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_type() {
        match parse("title = \"No type\"\n") {
            Err(OgpError::MissingType(path)) => assert_eq!(path, PathBuf::from("page.toml")),
            other => panic!("Expected MissingType, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_type() {
        match parse("type = 3\n") {
            Err(OgpError::InvalidDocument { message, .. }) => assert!(message.contains("string")),
            other => panic!("Expected InvalidDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_timestamp_is_invalid_document() {
        let result = parse("type = \"book\"\nrelease_date = \"last tuesday\"\n");
        assert!(matches!(result, Err(OgpError::InvalidDocument { .. })));
    }

    #[test]
    fn test_apply_defaults_only_fills_unset() {
        let config = Config {
            site_name: Some("Example".to_string()),
            locales: vec!["en_US".to_string()],
            determiner: Some("the".to_string()),
            output_dir: None,
        };

        let mut doc = parse("type = \"website\"\nsite_name = \"Own\"\n").unwrap();
        doc.apply_defaults(&config);

        let tags = pairs(&doc.meta());
        assert!(tags.contains(&"og:site_name=Own".to_string()));
        assert!(tags.contains(&"og:locale=en_US".to_string()));
        assert!(tags.contains(&"og:determiner=the".to_string()));
    }

    #[test]
    fn test_every_object_type_parses() {
        for object_type in OBJECT_TYPES {
            let doc = parse(&format!("type = \"{}\"\n", object_type)).unwrap();
            assert_eq!(doc.object_type(), object_type);
            assert_eq!(doc.meta().tags()[0].content, object_type);
        }
    }
}
