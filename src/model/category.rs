//! The fixed set of category nodes and the query each dynamic one maps to

use std::fmt;

use super::node::MediaType;

/// Every category node the tree knows about, in declaration order.
///
/// Declaration order doubles as child order when the tree is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Root,
    Home,
    Library,
    Other,
    MostPlayed,
    LastPlayed,
    RecentlyAdded,
    BestOf,
    MadeForYou,
    StarredTracks,
    StarredAlbums,
    StarredArtists,
    Folders,
    Playlists,
    Podcasts,
    Radio,
    Downloads,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::Root,
        Category::Home,
        Category::Library,
        Category::Other,
        Category::MostPlayed,
        Category::LastPlayed,
        Category::RecentlyAdded,
        Category::BestOf,
        Category::MadeForYou,
        Category::StarredTracks,
        Category::StarredAlbums,
        Category::StarredArtists,
        Category::Folders,
        Category::Playlists,
        Category::Podcasts,
        Category::Radio,
        Category::Downloads,
    ];

    /// Categories whose ids may prefix an entity key, in match priority order
    pub const DETAIL_PREFIXES: [Category; 11] = [
        Category::MostPlayed,
        Category::LastPlayed,
        Category::RecentlyAdded,
        Category::BestOf,
        Category::MadeForYou,
        Category::StarredAlbums,
        Category::StarredArtists,
        Category::Folders,
        Category::Playlists,
        Category::Podcasts,
        Category::Radio,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Root => "[rootID]",
            Category::Home => "[homeID]",
            Category::Library => "[libraryID]",
            Category::Other => "[otherID]",
            Category::MostPlayed => "[mostPlayedID]",
            Category::LastPlayed => "[lastPlayedID]",
            Category::RecentlyAdded => "[recentlyAddedID]",
            Category::BestOf => "[bestOfID]",
            Category::MadeForYou => "[madeForYouID]",
            Category::StarredTracks => "[starredTracksID]",
            Category::StarredAlbums => "[starredAlbumsID]",
            Category::StarredArtists => "[starredArtistsID]",
            Category::Folders => "[folderID]",
            Category::Playlists => "[playlistID]",
            Category::Podcasts => "[podcastID]",
            Category::Radio => "[radioID]",
            Category::Downloads => "[downloadID]",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Root => "Root Folder",
            Category::Home => "Home",
            Category::Library => "Library",
            Category::Other => "Other",
            Category::MostPlayed => "Most played",
            Category::LastPlayed => "Last played",
            Category::RecentlyAdded => "Recently added",
            Category::BestOf => "Best of",
            Category::MadeForYou => "Made for you",
            Category::StarredTracks => "Starred tracks",
            Category::StarredAlbums => "Starred albums",
            Category::StarredArtists => "Starred artists",
            Category::Folders => "Folders",
            Category::Playlists => "Playlists",
            Category::Podcasts => "Podcasts",
            Category::Radio => "Radio stations",
            Category::Downloads => "Downloads",
        }
    }

    pub fn media_type(self) -> MediaType {
        match self {
            Category::Root
            | Category::Home
            | Category::Library
            | Category::Other
            | Category::StarredTracks
            | Category::Folders => MediaType::MixedFolder,
            Category::MostPlayed
            | Category::LastPlayed
            | Category::RecentlyAdded
            | Category::StarredAlbums => MediaType::AlbumFolder,
            Category::BestOf | Category::MadeForYou | Category::Playlists => {
                MediaType::PlaylistFolder
            }
            Category::StarredArtists => MediaType::ArtistFolder,
            Category::Podcasts => MediaType::PodcastFolder,
            Category::Radio | Category::Downloads => MediaType::RadioFolder,
        }
    }

    /// The category this one hangs under, `None` for the root
    pub fn parent(self) -> Option<Category> {
        match self {
            Category::Root => None,
            Category::Home | Category::Library | Category::Other => Some(Category::Root),
            Category::MostPlayed
            | Category::LastPlayed
            | Category::RecentlyAdded
            | Category::BestOf
            | Category::MadeForYou
            | Category::StarredTracks
            | Category::StarredAlbums
            | Category::StarredArtists => Some(Category::Home),
            Category::Folders | Category::Playlists => Some(Category::Library),
            Category::Podcasts | Category::Radio | Category::Downloads => Some(Category::Other),
        }
    }

    /// Containers whose children are fully known from the static tree
    pub fn is_static(self) -> bool {
        matches!(
            self,
            Category::Root | Category::Home | Category::Library | Category::Other
        )
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    /// The fixed data-source query behind a dynamic category.
    ///
    /// Returns `None` for the static containers.
    pub fn query(self, page_size: u32, episode_limit: u32) -> Option<CategoryQuery> {
        let query = match self {
            Category::Root | Category::Home | Category::Library | Category::Other => return None,
            Category::MostPlayed => CategoryQuery::Albums {
                mode: AlbumMode::Frequent,
                limit: page_size,
            },
            Category::LastPlayed => CategoryQuery::Albums {
                mode: AlbumMode::Recent,
                limit: page_size,
            },
            Category::RecentlyAdded => CategoryQuery::Albums {
                mode: AlbumMode::Newest,
                limit: page_size,
            },
            Category::BestOf | Category::MadeForYou => {
                CategoryQuery::StarredArtists { best_of_only: true }
            }
            Category::StarredArtists => CategoryQuery::StarredArtists {
                best_of_only: false,
            },
            Category::StarredTracks => CategoryQuery::StarredSongs,
            Category::StarredAlbums => CategoryQuery::StarredAlbums,
            Category::Folders => CategoryQuery::MusicFolders,
            Category::Playlists => CategoryQuery::Playlists,
            Category::Podcasts => CategoryQuery::PodcastEpisodes {
                limit: episode_limit,
            },
            Category::Radio => CategoryQuery::RadioStations,
            Category::Downloads => CategoryQuery::Nothing,
        };
        Some(query)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Ordering used when listing albums
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlbumMode {
    Frequent,
    Recent,
    Newest,
}

impl AlbumMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AlbumMode::Frequent => "frequent",
            AlbumMode::Recent => "recent",
            AlbumMode::Newest => "newest",
        }
    }
}

impl fmt::Display for AlbumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data-source call backing a dynamic category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryQuery {
    Albums { mode: AlbumMode, limit: u32 },
    StarredArtists { best_of_only: bool },
    StarredSongs,
    StarredAlbums,
    MusicFolders,
    Playlists,
    PodcastEpisodes { limit: u32 },
    RadioStations,
    /// Defined in the tree but backed by nothing yet
    Nothing,
}
