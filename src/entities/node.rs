//! Node - a single text box on the mind map canvas.
//!
//! Position is the top-left corner of the box in canvas coordinates
//! (egui screen space, +Y down). Edges attach to the anchor, which is the
//! visual center of the box.

use eframe::egui::{Pos2, Rect, Vec2, vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label given to freshly added nodes.
pub const DEFAULT_NODE_TEXT: &str = "New Node";

/// Unique node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Fresh random id (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mind map node.
///
/// `parent` is a tree edge. It may dangle (point at an id that no longer
/// resolves); consumers skip such edges instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub text: String,
    pub pos: Pos2,
    pub parent: Option<NodeId>,
}

impl Node {
    /// Box size used for layout, hit testing and anchor placement.
    pub const SIZE: Vec2 = vec2(120.0, 40.0);

    pub fn new(id: NodeId, text: impl Into<String>, pos: Pos2) -> Self {
        Self {
            id,
            text: text.into(),
            pos,
            parent: None,
        }
    }

    /// Edge attachment point: origin plus half the box size.
    pub fn anchor(&self) -> Pos2 {
        self.pos + Self::SIZE * 0.5
    }

    /// Screen rect of the node body.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, Self::SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_anchor_is_box_center() {
        let node = Node::new(NodeId::new(), "a", pos2(10.0, 20.0));
        assert_eq!(node.anchor(), pos2(70.0, 40.0));
        assert_eq!(node.rect().center(), node.anchor());
    }

    #[test]
    fn test_new_node_has_no_parent() {
        let node = Node::new(NodeId::new(), DEFAULT_NODE_TEXT, Pos2::ZERO);
        assert!(node.parent.is_none());
        assert_eq!(node.text, "New Node");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(NodeId::new(), NodeId::new());
    }
}
