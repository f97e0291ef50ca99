//! In-memory data source that records every call it receives

#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use mediatree_rs::model::{AlbumMode, MediaType, Node};
use mediatree_rs::source::DataSource;
use mediatree_rs::tree;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    AlbumsByMode { parent_id: String, mode: AlbumMode, limit: u32 },
    StarredArtists { parent_id: String, best_of_only: bool },
    StarredSongs { parent_id: String },
    StarredAlbums { parent_id: String },
    MusicFolders { parent_id: String },
    Playlists { parent_id: String },
    NewestPodcastEpisodes { parent_id: String, limit: u32 },
    InternetRadioStations { parent_id: String },
    AlbumTracks { album_key: String },
    ResolveItem { id: String },
}

#[derive(Default)]
pub struct RecordingSource {
    name: &'static str,
    calls: Mutex<Vec<Call>>,
    failing: bool,
}

impl RecordingSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// A source whose every request fails
    pub fn failing() -> Self {
        Self {
            name: "failing",
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            bail!("{} source is offline", self.name);
        }
        Ok(())
    }

    fn album(&self, parent_id: &str, key: &str) -> Node {
        Node::container(tree::encode(parent_id, key), format!("{} {}", self.name, key), MediaType::AlbumFolder)
    }

    pub fn track(&self, id: &str) -> Node {
        Node::playable(id, format!("{} track {}", self.name, id), MediaType::MusicTrack, format!("mem://{id}"))
            .with_album("Album")
            .with_artist("Artist")
    }
}

#[async_trait]
impl DataSource for RecordingSource {
    async fn albums_by_mode(&self, parent_id: &str, mode: AlbumMode, limit: u32) -> Result<Vec<Node>> {
        self.record(Call::AlbumsByMode {
            parent_id: parent_id.to_string(),
            mode,
            limit,
        })?;
        Ok(vec![
            self.album(parent_id, &format!("{mode}-1")),
            self.album(parent_id, &format!("{mode}-2")),
        ])
    }

    async fn starred_artists(&self, parent_id: &str, best_of_only: bool) -> Result<Vec<Node>> {
        self.record(Call::StarredArtists {
            parent_id: parent_id.to_string(),
            best_of_only,
        })?;
        Ok(vec![Node::container(
            tree::encode(parent_id, "artist"),
            "Artist",
            MediaType::ArtistFolder,
        )])
    }

    async fn starred_songs(&self, parent_id: &str) -> Result<Vec<Node>> {
        self.record(Call::StarredSongs {
            parent_id: parent_id.to_string(),
        })?;
        Ok(vec![self.track("starred")])
    }

    async fn starred_albums(&self, parent_id: &str) -> Result<Vec<Node>> {
        self.record(Call::StarredAlbums {
            parent_id: parent_id.to_string(),
        })?;
        Ok(vec![self.album(parent_id, "starred")])
    }

    async fn music_folders(&self, parent_id: &str) -> Result<Vec<Node>> {
        self.record(Call::MusicFolders {
            parent_id: parent_id.to_string(),
        })?;
        Ok(Vec::new())
    }

    async fn playlists(&self, parent_id: &str) -> Result<Vec<Node>> {
        self.record(Call::Playlists {
            parent_id: parent_id.to_string(),
        })?;
        Ok(vec![Node::container(
            tree::encode(parent_id, "mix"),
            "Mix",
            MediaType::PlaylistFolder,
        )])
    }

    async fn newest_podcast_episodes(&self, parent_id: &str, limit: u32) -> Result<Vec<Node>> {
        self.record(Call::NewestPodcastEpisodes {
            parent_id: parent_id.to_string(),
            limit,
        })?;
        Ok(Vec::new())
    }

    async fn internet_radio_stations(&self, parent_id: &str) -> Result<Vec<Node>> {
        self.record(Call::InternetRadioStations {
            parent_id: parent_id.to_string(),
        })?;
        Ok(Vec::new())
    }

    async fn album_tracks(&self, album_key: &str) -> Result<Vec<Node>> {
        self.record(Call::AlbumTracks {
            album_key: album_key.to_string(),
        })?;
        Ok(vec![
            self.track(&format!("{album_key}-1")),
            self.track(&format!("{album_key}-2")),
        ])
    }

    async fn resolve_item(&self, id: &str) -> Result<Node> {
        self.record(Call::ResolveItem { id: id.to_string() })?;
        Ok(self.track(id))
    }
}
