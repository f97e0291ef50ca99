//! Static navigation tree: registry, id grammar and builder

mod builder;
pub mod id;
mod registry;

pub use builder::{build_tree, category_node};
pub use id::{Route, decode, encode, route};
pub use registry::NodeRegistry;
