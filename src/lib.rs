//! Navigation tree over a music catalogue.
//!
//! A fixed hierarchy of category nodes is built once; everything below the
//! categories (albums, tracks, playlists, episodes) comes from a
//! [`source::DataSource`] at request time. [`browser::MediaBrowser`] is the
//! entry point: `initialize`, `root_item`, `get_children` and `get_item`.

pub mod auth;
pub mod browser;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod source;
pub mod tree;

pub use browser::{BrowseParams, MediaBrowser};
pub use error::{BrowseError, BrowseResult};
