//! Construction of the fixed three-level category hierarchy

use crate::config::LinkConfig;
use crate::model::{Category, Node};

use super::registry::NodeRegistry;

/// Registers every category node and wires the edges `links` allows.
///
/// All categories are registered, including hidden ones, so they stay
/// addressable by id. Children appear in [`Category::ALL`] order.
pub fn build_tree(links: &LinkConfig) -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    for category in Category::ALL {
        registry.put(category_node(category));
    }

    for category in Category::ALL {
        let Some(parent) = category.parent() else {
            continue;
        };
        if links.is_linked(category) {
            registry.add_child(parent.id(), category.id());
        } else {
            tracing::debug!(category = %category, "Category defined but not linked");
        }
    }

    tracing::debug!(nodes = registry.len(), "Static tree built");
    registry
}

pub fn category_node(category: Category) -> Node {
    Node::container(category.id(), category.title(), category.media_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_ids(registry: &NodeRegistry, parent: Category) -> Vec<&str> {
        registry
            .children(parent.id())
            .unwrap()
            .iter()
            .map(|node| node.id.as_str())
            .collect()
    }

    #[test]
    fn default_tree_matches_category_layout() {
        let registry = build_tree(&LinkConfig::default());

        assert_eq!(registry.len(), Category::ALL.len());
        assert_eq!(
            child_ids(&registry, Category::Root),
            ["[homeID]", "[libraryID]", "[otherID]"]
        );
        assert_eq!(
            child_ids(&registry, Category::Home),
            [
                "[mostPlayedID]",
                "[lastPlayedID]",
                "[recentlyAddedID]",
                "[bestOfID]",
                "[madeForYouID]"
            ]
        );
        assert_eq!(
            child_ids(&registry, Category::Library),
            ["[folderID]", "[playlistID]"]
        );
        assert_eq!(
            child_ids(&registry, Category::Other),
            ["[podcastID]", "[radioID]"]
        );
    }

    #[test]
    fn hidden_categories_are_registered_but_unlinked() {
        let registry = build_tree(&LinkConfig::default());
        for hidden in [
            Category::StarredTracks,
            Category::StarredAlbums,
            Category::StarredArtists,
            Category::Downloads,
        ] {
            assert!(registry.contains(hidden.id()));
        }
    }

    #[test]
    fn link_flags_append_hidden_categories() {
        let links = LinkConfig {
            starred_tracks: true,
            starred_artists: true,
            downloads: true,
            ..LinkConfig::default()
        };
        let registry = build_tree(&links);

        let home = child_ids(&registry, Category::Home);
        assert_eq!(home.len(), 7);
        assert_eq!(&home[5..], ["[starredTracksID]", "[starredArtistsID]"]);
        assert_eq!(
            child_ids(&registry, Category::Other),
            ["[podcastID]", "[radioID]", "[downloadID]"]
        );
    }

    #[test]
    fn every_category_node_is_a_container() {
        let registry = build_tree(&LinkConfig::default());
        for category in Category::ALL {
            let node = registry.get(category.id()).unwrap();
            assert!(node.is_well_formed());
            assert!(node.browsable && !node.playable);
        }
    }
}
