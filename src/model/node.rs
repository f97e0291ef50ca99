//! Browsable/playable node descriptors handed to the browsing client

use serde::Serialize;

/// Content-type tag carried by every node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    MixedFolder,
    AlbumFolder,
    PlaylistFolder,
    ArtistFolder,
    PodcastFolder,
    RadioFolder,
    MusicTrack,
    PodcastEpisode,
}

impl MediaType {
    pub fn is_folder(self) -> bool {
        !matches!(self, MediaType::MusicTrack | MediaType::PodcastEpisode)
    }
}

/// A single entry of the navigation tree.
///
/// Nodes are either pure containers (browsable, no source locator) or leaf
/// content items (playable, with a source locator). Use [`Node::container`]
/// and [`Node::playable`] to build them; the optional metadata setters never
/// change which of the two a node is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub title: String,
    pub playable: bool,
    pub browsable: bool,
    pub media_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_uri: Option<String>,
}

impl Node {
    pub fn container(id: impl Into<String>, title: impl Into<String>, media_type: MediaType) -> Self {
        debug_assert!(media_type.is_folder(), "container nodes need a folder media type");
        Self {
            id: id.into(),
            title: title.into(),
            playable: false,
            browsable: true,
            media_type,
            album: None,
            artist: None,
            genre: None,
            source_uri: None,
            artwork_uri: None,
        }
    }

    pub fn playable(
        id: impl Into<String>,
        title: impl Into<String>,
        media_type: MediaType,
        source_uri: impl Into<String>,
    ) -> Self {
        debug_assert!(!media_type.is_folder(), "playable nodes need a content media type");
        Self {
            id: id.into(),
            title: title.into(),
            playable: true,
            browsable: false,
            media_type,
            album: None,
            artist: None,
            genre: None,
            source_uri: Some(source_uri.into()),
            artwork_uri: None,
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Sets the artwork locator, ignoring empty strings
    pub fn with_artwork(mut self, artwork_uri: Option<String>) -> Self {
        self.artwork_uri = artwork_uri.filter(|uri| !uri.is_empty());
        self
    }

    /// True when the node respects the container-xor-playable rule
    pub fn is_well_formed(&self) -> bool {
        if self.playable {
            !self.browsable && self.source_uri.is_some()
        } else {
            self.browsable && self.source_uri.is_none()
        }
    }
}
