//! Store of statically-known nodes and their ordered parent→child edges

use std::collections::HashMap;

use crate::model::Node;

struct Entry {
    node: Node,
    children: Vec<Node>,
}

/// Node registry built once by the tree builder and read-only afterwards
#[derive(Default)]
pub struct NodeRegistry {
    entries: HashMap<String, Entry>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node under its own id.
    ///
    /// # Panics
    ///
    /// Panics if a node with the same id is already registered.
    pub fn put(&mut self, node: Node) {
        let id = node.id.clone();
        let previous = self.entries.insert(
            id.clone(),
            Entry {
                node,
                children: Vec::new(),
            },
        );
        assert!(previous.is_none(), "node `{id}` registered twice");
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.entries.get(id).map(|entry| &entry.node)
    }

    /// Appends an already-registered node to a parent's children.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown; edges are wired by a trusted
    /// initializer, so a miss is a programming error.
    pub fn add_child(&mut self, parent_id: &str, child_id: &str) {
        let child = match self.entries.get(child_id) {
            Some(entry) => entry.node.clone(),
            None => panic!("cannot link unknown child `{child_id}` under `{parent_id}`"),
        };
        match self.entries.get_mut(parent_id) {
            Some(parent) => parent.children.push(child),
            None => panic!("cannot link `{child_id}` under unknown parent `{parent_id}`"),
        }
    }

    /// Children of a registered node in insertion order
    pub fn children(&self, id: &str) -> Option<&[Node]> {
        self.entries.get(id).map(|entry| entry.children.as_slice())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
