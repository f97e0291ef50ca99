//! Identifier grammar for simple and compound node ids
//!
//! A compound id is a drillable category id immediately followed by an
//! entity key, e.g. `[mostPlayedID]` + album id. There is no separator, so
//! decoding strips the first category prefix that matches in
//! [`Category::DETAIL_PREFIXES`] order.

use crate::model::Category;

/// Where a request for an id should be answered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route<'a> {
    /// Container whose children live in the registry
    Static(Category),
    /// Top-level dynamic category answered by the data source
    Category(Category),
    /// Contents of one entity listed under a category
    Detail { category: Category, key: &'a str },
}

/// Builds the compound id addressing `key` under the category `parent_id`
pub fn encode(parent_id: &str, key: &str) -> String {
    format!("{parent_id}{key}")
}

/// Splits a compound id into its category and entity key
pub fn decode(id: &str) -> Option<(Category, &str)> {
    Category::DETAIL_PREFIXES
        .into_iter()
        .find_map(|category| id.strip_prefix(category.id()).map(|key| (category, key)))
}

/// Classifies an id, `None` when nothing recognizes it
pub fn route(id: &str) -> Option<Route<'_>> {
    if let Some(category) = Category::from_id(id) {
        return Some(if category.is_static() {
            Route::Static(category)
        } else {
            Route::Category(category)
        });
    }

    decode(id).map(|(category, key)| Route::Detail { category, key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_inverts_encode_for_every_prefix() {
        for category in Category::DETAIL_PREFIXES {
            for key in ["4aawyAB9vmqN3uQ7FjRGTy", "x", "[weird]key", "ünïcødé"] {
                let id = encode(category.id(), key);
                assert_eq!(decode(&id), Some((category, key)), "{id}");
            }
        }
    }

    #[test]
    fn unknown_prefixes_do_not_decode() {
        assert_eq!(decode("album-123"), None);
        assert_eq!(decode(""), None);
        // Home is not drillable
        assert_eq!(decode("[homeID]abc"), None);
        assert_eq!(decode("[downloadID]abc"), None);
    }

    #[test]
    fn routes_static_dynamic_and_detail_ids() {
        assert_eq!(route("[rootID]"), Some(Route::Static(Category::Root)));
        assert_eq!(route("[otherID]"), Some(Route::Static(Category::Other)));
        assert_eq!(
            route("[lastPlayedID]"),
            Some(Route::Category(Category::LastPlayed))
        );
        assert_eq!(
            route("[downloadID]"),
            Some(Route::Category(Category::Downloads))
        );
        assert_eq!(
            route("[playlistID]37i9dQZF1DX"),
            Some(Route::Detail {
                category: Category::Playlists,
                key: "37i9dQZF1DX"
            })
        );
        assert_eq!(route("[starredTracksID]abc"), None);
        assert_eq!(route("nonsense"), None);
    }
}
