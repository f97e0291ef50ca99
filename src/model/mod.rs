//! Model module - node descriptors and the category catalogue
//!
//! - `node`: the `Node` handed to the browsing client and its `MediaType`
//! - `category`: the fixed category nodes, their ids and data-source queries

mod category;
mod node;

pub use category::{AlbumMode, Category, CategoryQuery};
pub use node::{MediaType, Node};
