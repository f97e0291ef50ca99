//! Browser configuration loaded from a TOML file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Category;

pub const DEFAULT_CONFIG_FILE: &str = "mediatree.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Albums requested for the most played / last played / recently added lists
    pub page_size: u32,
    pub podcast_episode_limit: u32,
    /// Upper bound for starred tracks, albums and artists
    pub starred_limit: u32,
    pub links: LinkConfig,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            podcast_episode_limit: 100,
            starred_limit: 50,
            links: LinkConfig::default(),
        }
    }
}

/// Inclusion flags for categories that are defined but hidden from traversal.
///
/// Unlinked categories still answer when addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub starred_tracks: bool,
    pub starred_albums: bool,
    pub starred_artists: bool,
    pub downloads: bool,
}

impl LinkConfig {
    /// Whether `category` gets an edge from its parent
    pub fn is_linked(&self, category: Category) -> bool {
        match category {
            Category::StarredTracks => self.starred_tracks,
            Category::StarredAlbums => self.starred_albums,
            Category::StarredArtists => self.starred_artists,
            Category::Downloads => self.downloads,
            _ => true,
        }
    }
}

impl BrowserConfig {
    /// Loads the config at `path`, falling back to defaults when it is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded browser config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
