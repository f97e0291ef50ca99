//! Spotify Web API data source

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::{future::try_join_all, StreamExt, TryStreamExt};
use rspotify::{
    model::{
        AlbumId, EpisodeId, FullArtist, FullEpisode, FullTrack, Image, SimplifiedAlbum,
        SimplifiedEpisode, SimplifiedTrack, TrackId,
    },
    prelude::*,
    AuthCodeSpotify,
};

use super::DataSource;
use crate::model::{AlbumMode, MediaType, Node};
use crate::tree;

/// Spotify caps cursor-based endpoints (recently played, followed artists) at 50
const CURSOR_PAGE_LIMIT: u32 = 50;
/// Episodes fetched per saved show before merging
const EPISODES_PER_SHOW: usize = 10;

/// `DataSource` over an authorized rspotify client
#[derive(Clone)]
pub struct SpotifyDataSource {
    client: Arc<AuthCodeSpotify>,
    starred_limit: u32,
}

impl SpotifyDataSource {
    pub fn new(client: AuthCodeSpotify, starred_limit: u32) -> Self {
        Self {
            client: Arc::new(client),
            starred_limit,
        }
    }

    async fn top_track_albums(&self, parent_id: &str, limit: u32) -> Result<Vec<Node>> {
        let tracks: Vec<FullTrack> = self
            .client
            .current_user_top_tracks(None)
            .take(limit as usize)
            .try_collect()
            .await?;

        Ok(distinct_albums(
            parent_id,
            tracks.into_iter().map(|track| track.album),
            limit,
        ))
    }

    async fn recently_played_albums(&self, parent_id: &str, limit: u32) -> Result<Vec<Node>> {
        let history = self
            .client
            .current_user_recently_played(Some(limit.min(CURSOR_PAGE_LIMIT)), None)
            .await?;

        Ok(distinct_albums(
            parent_id,
            history.items.into_iter().map(|item| item.track.album),
            limit,
        ))
    }

    async fn saved_albums(&self, parent_id: &str, limit: u32) -> Result<Vec<Node>> {
        let saved: Vec<_> = self
            .client
            .current_user_saved_albums(None)
            .take(limit as usize)
            .try_collect()
            .await?;

        Ok(saved
            .into_iter()
            .map(|saved| {
                let album = saved.album;
                let node = Node::container(
                    tree::encode(parent_id, album.id.id()),
                    album.name,
                    MediaType::AlbumFolder,
                )
                .with_artwork(first_image(&album.images));
                match album.artists.first() {
                    Some(artist) => node.with_artist(artist.name.clone()),
                    None => node,
                }
            })
            .collect())
    }
}

impl SpotifyDataSource {
    /// Latest episodes across all saved shows, newest first
    async fn newest_episodes(&self, limit: u32) -> Result<Vec<Node>> {
        let shows: Vec<_> = self.client.get_saved_show().try_collect().await?;

        let requests = shows.iter().map(|saved| {
            let show = &saved.show;
            async move {
                let episodes: Vec<SimplifiedEpisode> = self
                    .client
                    .get_shows_episodes(show.id.clone(), None)
                    .take(EPISODES_PER_SHOW)
                    .try_collect()
                    .await
                    .with_context(|| format!("failed to list episodes of show {}", show.id.id()))?;
                Ok::<_, anyhow::Error>((show, episodes))
            }
        });
        let per_show = try_join_all(requests).await?;

        let mut episodes: Vec<(String, Node)> = per_show
            .into_iter()
            .flat_map(|(show, episodes)| {
                episodes.into_iter().map(move |episode| {
                    let uri = episode.id.uri();
                    let node = Node::playable(uri.clone(), episode.name, MediaType::PodcastEpisode, uri)
                        .with_album(show.name.clone())
                        .with_artist(show.publisher.clone())
                        .with_artwork(first_image(&episode.images));
                    (episode.release_date, node)
                })
            })
            .collect();

        // Release dates are ISO formatted, so string order is date order
        episodes.sort_by(|a, b| b.0.cmp(&a.0));
        episodes.truncate(limit as usize);
        Ok(episodes.into_iter().map(|(_, node)| node).collect())
    }
}

/// Album folders in first-seen order, skipping albums without an id
fn distinct_albums(
    parent_id: &str,
    albums: impl Iterator<Item = SimplifiedAlbum>,
    limit: u32,
) -> Vec<Node> {
    let mut seen = HashSet::new();
    albums
        .filter_map(|album| {
            let album_id = album.id.as_ref()?.id().to_string();
            if !seen.insert(album_id.clone()) {
                return None;
            }
            let node = Node::container(
                tree::encode(parent_id, &album_id),
                album.name,
                MediaType::AlbumFolder,
            )
            .with_artwork(first_image(&album.images));
            Some(match album.artists.first() {
                Some(artist) => node.with_artist(artist.name.clone()),
                None => node,
            })
        })
        .take(limit as usize)
        .collect()
}

fn first_image(images: &[Image]) -> Option<String> {
    images.first().map(|image| image.url.clone())
}

fn artist_node(parent_id: &str, artist: FullArtist) -> Node {
    let node = Node::container(
        tree::encode(parent_id, artist.id.id()),
        artist.name,
        MediaType::ArtistFolder,
    )
    .with_artwork(first_image(&artist.images));
    match artist.genres.into_iter().next() {
        Some(genre) => node.with_genre(genre),
        None => node,
    }
}

/// Which endpoint resolves a playable id
#[derive(Debug, PartialEq)]
enum PlayableRef {
    Track(TrackId<'static>),
    Episode(EpisodeId<'static>),
}

/// Parses a playable node id; bare ids are taken as tracks
fn playable_ref(id: &str) -> Result<PlayableRef> {
    if id.starts_with("spotify:episode:") {
        let episode = EpisodeId::from_uri(id).with_context(|| format!("invalid episode uri `{id}`"))?;
        return Ok(PlayableRef::Episode(episode.into_static()));
    }
    let track = TrackId::from_id_or_uri(id).with_context(|| format!("invalid track id `{id}`"))?;
    Ok(PlayableRef::Track(track.into_static()))
}

fn full_track_node(track: FullTrack) -> Option<Node> {
    let uri = track.id.as_ref()?.uri();
    let artist = track.artists.first().map(|a| a.name.clone()).unwrap_or_default();
    Some(
        Node::playable(uri.clone(), track.name, MediaType::MusicTrack, uri)
        .with_album(track.album.name)
        .with_artist(artist)
        .with_artwork(first_image(&track.album.images)),
    )
}

fn album_track_node(track: &SimplifiedTrack, album: &str, artwork: Option<String>) -> Option<Node> {
    let uri = track.id.as_ref()?.uri();
    let artist = track.artists.first().map(|a| a.name.clone()).unwrap_or_default();
    Some(
        Node::playable(uri.clone(), track.name.clone(), MediaType::MusicTrack, uri)
        .with_album(album)
        .with_artist(artist)
        .with_artwork(artwork),
    )
}

fn episode_node(episode: FullEpisode) -> Node {
    let uri = episode.id.uri();
    Node::playable(uri.clone(), episode.name, MediaType::PodcastEpisode, uri)
        .with_album(episode.show.name)
        .with_artist(episode.show.publisher)
        .with_artwork(first_image(&episode.images))
}

#[async_trait]
impl DataSource for SpotifyDataSource {
    async fn albums_by_mode(&self, parent_id: &str, mode: AlbumMode, limit: u32) -> Result<Vec<Node>> {
        crate::log_api_request!("albums_by_mode", mode = %mode, limit);
        let result = match mode {
            AlbumMode::Frequent => self.top_track_albums(parent_id, limit).await,
            AlbumMode::Recent => self.recently_played_albums(parent_id, limit).await,
            AlbumMode::Newest => self.saved_albums(parent_id, limit).await,
        };
        crate::log_api_result!("albums_by_mode", result);
        result
    }

    async fn starred_artists(&self, parent_id: &str, best_of_only: bool) -> Result<Vec<Node>> {
        crate::log_api_request!("starred_artists", best_of_only);
        let result: Result<Vec<FullArtist>> = if best_of_only {
            self.client
                .current_user_top_artists(None)
                .take(self.starred_limit as usize)
                .try_collect()
                .await
                .map_err(Into::into)
        } else {
            self.client
                .current_user_followed_artists(None, Some(self.starred_limit.min(CURSOR_PAGE_LIMIT)))
                .await
                .map(|page| page.items)
                .map_err(Into::into)
        };
        crate::log_api_result!("starred_artists", result);

        Ok(result?
            .into_iter()
            .map(|artist| artist_node(parent_id, artist))
            .collect())
    }

    async fn starred_songs(&self, _parent_id: &str) -> Result<Vec<Node>> {
        crate::log_api_request!("starred_songs", limit = self.starred_limit);
        let result: Result<Vec<_>> = self
            .client
            .current_user_saved_tracks(None)
            .take(self.starred_limit as usize)
            .try_collect()
            .await
            .map_err(Into::into);
        crate::log_api_result!("starred_songs", result);

        Ok(result?
            .into_iter()
            .filter_map(|saved| full_track_node(saved.track))
            .collect())
    }

    async fn starred_albums(&self, parent_id: &str) -> Result<Vec<Node>> {
        crate::log_api_request!("starred_albums", limit = self.starred_limit);
        let result = self.saved_albums(parent_id, self.starred_limit).await;
        crate::log_api_result!("starred_albums", result);
        result
    }

    async fn music_folders(&self, parent_id: &str) -> Result<Vec<Node>> {
        tracing::debug!(parent_id, "Spotify has no music folders");
        Ok(Vec::new())
    }

    async fn playlists(&self, parent_id: &str) -> Result<Vec<Node>> {
        crate::log_api_request!("playlists", parent_id);
        let result: Result<Vec<_>> = self
            .client
            .current_user_playlists()
            .try_collect()
            .await
            .map_err(Into::into);
        crate::log_api_result!("playlists", result);

        Ok(result?
            .into_iter()
            .map(|playlist| {
                let owner = playlist
                    .owner
                    .display_name
                    .clone()
                    .unwrap_or_else(|| playlist.owner.id.id().to_string());
                Node::container(
                    tree::encode(parent_id, playlist.id.id()),
                    playlist.name,
                    MediaType::PlaylistFolder,
                )
                .with_artist(owner)
                .with_artwork(first_image(&playlist.images))
            })
            .collect())
    }

    async fn newest_podcast_episodes(&self, _parent_id: &str, limit: u32) -> Result<Vec<Node>> {
        crate::log_api_request!("newest_podcast_episodes", limit);
        let result = self.newest_episodes(limit).await;
        crate::log_api_result!("newest_podcast_episodes", result);
        result
    }

    async fn internet_radio_stations(&self, parent_id: &str) -> Result<Vec<Node>> {
        tracing::debug!(parent_id, "Spotify has no internet radio stations");
        Ok(Vec::new())
    }

    async fn album_tracks(&self, album_key: &str) -> Result<Vec<Node>> {
        crate::log_api_request!("album_tracks", album_key);
        let id = AlbumId::from_id(album_key).with_context(|| format!("invalid album id `{album_key}`"))?;
        let result = self.client.album(id, None).await;
        crate::log_api_result!("album_tracks", result);
        let album = result?;

        let artwork = first_image(&album.images);
        Ok(album
            .tracks
            .items
            .iter()
            .filter_map(|track| album_track_node(track, &album.name, artwork.clone()))
            .collect())
    }

    async fn resolve_item(&self, id: &str) -> Result<Node> {
        crate::log_api_request!("resolve_item", id);
        let result = match playable_ref(id)? {
            PlayableRef::Track(track_id) => self
                .client
                .track(track_id, None)
                .await
                .map_err(anyhow::Error::from)
                .and_then(|track| {
                    full_track_node(track).with_context(|| format!("track `{id}` has no playable id"))
                }),
            PlayableRef::Episode(episode_id) => self
                .client
                .get_an_episode(episode_id, None)
                .await
                .map(episode_node)
                .map_err(anyhow::Error::from),
        };
        crate::log_api_result!("resolve_item", result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_uris_resolve_as_episodes() {
        let parsed = playable_ref("spotify:episode:4rOoJ6Egrf8K2IrywzwOMk").unwrap();
        assert!(matches!(parsed, PlayableRef::Episode(ref id) if id.id() == "4rOoJ6Egrf8K2IrywzwOMk"));
    }

    #[test]
    fn track_uris_and_bare_ids_resolve_as_tracks() {
        for id in ["spotify:track:7ouMYWpwJ422jRcDASZB7P", "7ouMYWpwJ422jRcDASZB7P"] {
            let parsed = playable_ref(id).unwrap();
            assert!(matches!(parsed, PlayableRef::Track(ref t) if t.id() == "7ouMYWpwJ422jRcDASZB7P"), "{id}");
        }
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(playable_ref("spotify:episode:not valid!").is_err());
        assert!(playable_ref("[mostPlayedID]abc").is_err());
    }
}
