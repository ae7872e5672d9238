//! MindMap - ordered node store with the CRUD operations the editor needs.
//!
//! Nodes live in an `IndexMap` keyed by id: O(1) lookup for the gesture
//! handlers, insertion order for stable rendering.
//!
//! Lookup misses are never errors. Every mutating call returns `false` when
//! the id does not resolve and leaves the map untouched.

use eframe::egui::Pos2;
use indexmap::IndexMap;
use log::{debug, info};

use super::node::{DEFAULT_NODE_TEXT, Node, NodeId};

#[derive(Debug, Clone, Default)]
pub struct MindMap {
    nodes: IndexMap<NodeId, Node>,
}

impl MindMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node with the default label, centered on `center`.
    pub fn add_node(&mut self, center: Pos2) -> NodeId {
        self.add_node_with_text(center, DEFAULT_NODE_TEXT)
    }

    /// Append a node centered on `center`. Always succeeds.
    pub fn add_node_with_text(&mut self, center: Pos2, text: impl Into<String>) -> NodeId {
        let id = NodeId::new();
        let origin = center - Node::SIZE * 0.5;
        let node = Node::new(id, text, origin);
        info!("Added node {} \"{}\" at ({:.1}, {:.1})", id, node.text, origin.x, origin.y);
        self.nodes.insert(id, node);
        id
    }

    /// Replace the label of `id`. Empty text is accepted.
    pub fn update_node_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.text = text.into();
                debug!("Node {} text -> \"{}\"", id, node.text);
                true
            }
            None => {
                debug!("update_node_text: no node {}", id);
                false
            }
        }
    }

    /// Point `child` at `parent`.
    ///
    /// Neither self-parenting nor cycles are checked here; the connection
    /// gesture filters those before calling in.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) -> bool {
        match self.nodes.get_mut(&child) {
            Some(node) => {
                node.parent = Some(parent);
                debug!("Node {} parent -> {}", child, parent);
                true
            }
            None => {
                debug!("set_parent: no node {}", child);
                false
            }
        }
    }

    /// Overwrite the top-left position of `id`.
    pub fn move_node(&mut self, id: NodeId, pos: Pos2) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of parent references that resolve to an existing node.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| n.parent.is_some_and(|p| self.contains(p)))
            .count()
    }

    /// True if `ancestor` is reachable from `id` by following parent links.
    ///
    /// The walk is capped at the node count, so an existing cycle cannot hang it.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.get(id).and_then(|n| n.parent);
        for _ in 0..self.nodes.len() {
            match current {
                Some(p) if p == ancestor => return true,
                Some(p) => current = self.get(p).and_then(|n| n.parent),
                None => return false,
            }
        }
        false
    }

    /// Insert a fully formed node (used by tests and seeding code that needs
    /// explicit positions or dangling parents).
    pub fn insert(&mut self, node: Node) {
        self.nodes.insert(node.id, node);
    }
}
