//! External catalogue providers consulted for dynamic categories
//!
//! - `spotify`: `DataSource` backed by the Spotify Web API through rspotify

mod spotify;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::{AlbumMode, Node};

pub use spotify::SpotifyDataSource;

/// Provider of everything the static tree does not know.
///
/// `parent_id` is the id of the category being listed; implementations use
/// it with [`crate::tree::encode`] to build ids for browsable children so
/// they can be drilled into later.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn albums_by_mode(&self, parent_id: &str, mode: AlbumMode, limit: u32) -> Result<Vec<Node>>;
    async fn starred_artists(&self, parent_id: &str, best_of_only: bool) -> Result<Vec<Node>>;
    async fn starred_songs(&self, parent_id: &str) -> Result<Vec<Node>>;
    async fn starred_albums(&self, parent_id: &str) -> Result<Vec<Node>>;
    async fn music_folders(&self, parent_id: &str) -> Result<Vec<Node>>;
    async fn playlists(&self, parent_id: &str) -> Result<Vec<Node>>;
    async fn newest_podcast_episodes(&self, parent_id: &str, limit: u32) -> Result<Vec<Node>>;
    async fn internet_radio_stations(&self, parent_id: &str) -> Result<Vec<Node>>;
    async fn album_tracks(&self, album_key: &str) -> Result<Vec<Node>>;

    /// Full metadata and streaming locator for a single playable item
    async fn resolve_item(&self, id: &str) -> Result<Node>;
}
