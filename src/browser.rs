//! Media browser - the entry point used by the browsing client
//!
//! `MediaBrowser` owns the static tree and the current data source. Requests
//! for static containers are answered from the registry; everything else is
//! routed through the id grammar to the data source.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::config::BrowserConfig;
use crate::error::{BrowseError, BrowseResult};
use crate::model::{Category, CategoryQuery, Node};
use crate::source::DataSource;
use crate::tree::{self, NodeRegistry, Route};

/// Hints sent along with a children request.
///
/// They are accepted and logged; no category changes its answer based on them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseParams {
    pub recent: bool,
    pub offline: bool,
    pub suggested: bool,
}

pub struct MediaBrowser {
    config: BrowserConfig,
    tree: OnceLock<NodeRegistry>,
    source: RwLock<Option<Arc<dyn DataSource>>>,
}

impl MediaBrowser {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            tree: OnceLock::new(),
            source: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Installs `source` and builds the static tree on first call.
    ///
    /// Later calls only replace the data source. Concurrent first calls
    /// build exactly one tree.
    pub fn initialize(&self, source: Arc<dyn DataSource>) {
        *self.source.write().unwrap_or_else(PoisonError::into_inner) = Some(source);

        let mut built = false;
        let registry = self.tree.get_or_init(|| {
            built = true;
            tree::build_tree(&self.config.links)
        });

        if built {
            tracing::info!(nodes = registry.len(), "Media browser initialized");
        } else {
            tracing::debug!("Media browser already initialized, data source replaced");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.tree.get().is_some()
    }

    pub fn registry(&self) -> BrowseResult<&NodeRegistry> {
        self.tree.get().ok_or(BrowseError::NotInitialized)
    }

    fn source(&self) -> BrowseResult<Arc<dyn DataSource>> {
        self.source
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(BrowseError::NotInitialized)
    }

    pub fn root_item(&self) -> BrowseResult<Node> {
        self.registry()?
            .get(Category::Root.id())
            .cloned()
            .ok_or(BrowseError::NotInitialized)
    }

    /// Lists the children of `id` in the order the tree or data source gives them
    pub async fn get_children(&self, id: &str, params: Option<&BrowseParams>) -> BrowseResult<Vec<Node>> {
        let registry = self.registry()?;
        tracing::debug!(id, params = ?params, "get_children");

        let Some(route) = tree::route(id) else {
            tracing::warn!(id, "No node matches id");
            return Err(BrowseError::BadValue(id.to_string()));
        };

        match route {
            Route::Static(category) => registry
                .children(category.id())
                .map(<[Node]>::to_vec)
                .ok_or_else(|| BrowseError::BadValue(id.to_string())),
            Route::Category(category) => self.list_category(category).await,
            Route::Detail { category, key } => self.list_detail(category, key).await,
        }
    }

    async fn list_category(&self, category: Category) -> BrowseResult<Vec<Node>> {
        let Some(query) = category.query(self.config.page_size, self.config.podcast_episode_limit) else {
            return Err(BrowseError::BadValue(category.id().to_string()));
        };
        if query == CategoryQuery::Nothing {
            tracing::debug!(category = %category, "Category has no backing query");
            return Ok(Vec::new());
        }

        let source = self.source()?;
        let parent_id = category.id();
        tracing::debug!(category = %category, query = ?query, "Delegating to data source");

        let nodes = match query {
            CategoryQuery::Albums { mode, limit } => source.albums_by_mode(parent_id, mode, limit).await,
            CategoryQuery::StarredArtists { best_of_only } => {
                source.starred_artists(parent_id, best_of_only).await
            }
            CategoryQuery::StarredSongs => source.starred_songs(parent_id).await,
            CategoryQuery::StarredAlbums => source.starred_albums(parent_id).await,
            CategoryQuery::MusicFolders => source.music_folders(parent_id).await,
            CategoryQuery::Playlists => source.playlists(parent_id).await,
            CategoryQuery::PodcastEpisodes { limit } => {
                source.newest_podcast_episodes(parent_id, limit).await
            }
            CategoryQuery::RadioStations => source.internet_radio_stations(parent_id).await,
            CategoryQuery::Nothing => Ok(Vec::new()),
        };

        match nodes {
            Ok(nodes) => {
                tracing::debug!(category = %category, count = nodes.len(), "Category listed");
                Ok(nodes)
            }
            Err(e) => {
                tracing::error!(category = %category, error = %e, "Data source failed");
                Err(e.into())
            }
        }
    }

    async fn list_detail(&self, category: Category, key: &str) -> BrowseResult<Vec<Node>> {
        match category {
            Category::MostPlayed
            | Category::LastPlayed
            | Category::RecentlyAdded
            | Category::StarredAlbums => {
                let source = self.source()?;
                tracing::debug!(category = %category, album = key, "Listing album tracks");
                source.album_tracks(key).await.map_err(|e| {
                    tracing::error!(album = key, error = %e, "Failed to list album tracks");
                    BrowseError::from(e)
                })
            }
            Category::BestOf
            | Category::MadeForYou
            | Category::StarredArtists
            | Category::Folders
            | Category::Playlists
            | Category::Podcasts
            | Category::Radio => {
                tracing::warn!(category = %category, key, "Detail view not implemented");
                Err(BrowseError::Unimplemented {
                    category,
                    key: key.to_string(),
                })
            }
            Category::Root
            | Category::Home
            | Category::Library
            | Category::Other
            | Category::StarredTracks
            | Category::Downloads => Err(BrowseError::BadValue(tree::encode(category.id(), key))),
        }
    }

    /// Resolves one node: static nodes from the registry, anything else
    /// through the data source
    pub async fn get_item(&self, id: &str) -> BrowseResult<Node> {
        let registry = self.registry()?;
        if let Some(node) = registry.get(id) {
            return Ok(node.clone());
        }
        // Category and compound ids name containers, never playable items
        if id.is_empty() || tree::route(id).is_some() {
            tracing::warn!(id, "Item id is not a content item");
            return Err(BrowseError::BadValue(id.to_string()));
        }

        let source = self.source()?;
        tracing::debug!(id, "Resolving item through data source");
        source.resolve_item(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "Failed to resolve item");
            BrowseError::from(e)
        })
    }
}
