//! Node picking for pointer events.
//!
//! Nodes are tested top-to-bottom (reverse insertion order, since later
//! nodes are painted over earlier ones). Within a node the connection handle
//! is tested before the body, so a press on the handle never reaches the
//! drag path.
//!
//! Complexity: O(nodes) per call.

use eframe::egui::{Pos2, pos2};

use crate::entities::{MindMap, Node, NodeId};

/// Default connection handle radius in points.
pub const HANDLE_RADIUS: f32 = 6.0;

/// What lies under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Empty,
    Body(NodeId),
    Handle(NodeId),
}

impl HitTarget {
    /// Node hit by either region.
    pub fn node(&self) -> Option<NodeId> {
        match *self {
            HitTarget::Empty => None,
            HitTarget::Body(id) | HitTarget::Handle(id) => Some(id),
        }
    }
}

/// Center of the connection handle: midpoint of the node's right edge.
pub fn handle_center(node: &Node) -> Pos2 {
    handle_center_at(node.pos)
}

/// Handle center for a node whose top-left corner is `origin`.
pub fn handle_center_at(origin: Pos2) -> Pos2 {
    pos2(origin.x + Node::SIZE.x, origin.y + Node::SIZE.y * 0.5)
}

/// Pick the topmost node region at `pos`.
pub fn hit_test(map: &MindMap, pos: Pos2, handle_radius: f32) -> HitTarget {
    for node in map.iter().rev() {
        if handle_center(node).distance(pos) <= handle_radius {
            return HitTarget::Handle(node.id);
        }
        if node.rect().contains(pos) {
            return HitTarget::Body(node.id);
        }
    }
    HitTarget::Empty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(nodes: &[(f32, f32)]) -> (MindMap, Vec<NodeId>) {
        let mut map = MindMap::new();
        let ids = nodes
            .iter()
            .map(|&(x, y)| {
                let id = NodeId::new();
                map.insert(Node::new(id, "n", pos2(x, y)));
                id
            })
            .collect();
        (map, ids)
    }

    #[test]
    fn test_empty_canvas() {
        let (map, _) = map_with(&[(0.0, 0.0)]);
        assert_eq!(hit_test(&map, pos2(500.0, 500.0), HANDLE_RADIUS), HitTarget::Empty);
    }

    #[test]
    fn test_body_hit() {
        let (map, ids) = map_with(&[(0.0, 0.0)]);
        assert_eq!(hit_test(&map, pos2(10.0, 10.0), HANDLE_RADIUS), HitTarget::Body(ids[0]));
    }

    #[test]
    fn test_handle_beats_body() {
        let (map, ids) = map_with(&[(0.0, 0.0)]);
        // Inside the body rect and within the handle radius
        let p = pos2(Node::SIZE.x - 2.0, Node::SIZE.y * 0.5);
        assert_eq!(hit_test(&map, p, HANDLE_RADIUS), HitTarget::Handle(ids[0]));
        // Outside the rect, still on the handle
        let p = pos2(Node::SIZE.x + 4.0, Node::SIZE.y * 0.5);
        assert_eq!(hit_test(&map, p, HANDLE_RADIUS), HitTarget::Handle(ids[0]));
    }

    #[test]
    fn test_topmost_wins() {
        let (map, ids) = map_with(&[(0.0, 0.0), (20.0, 10.0)]);
        assert_eq!(hit_test(&map, pos2(30.0, 20.0), HANDLE_RADIUS), HitTarget::Body(ids[1]));
        assert_eq!(hit_test(&map, pos2(5.0, 5.0), HANDLE_RADIUS), HitTarget::Body(ids[0]));
    }

    #[test]
    fn test_hit_target_node() {
        let id = NodeId::new();
        assert_eq!(HitTarget::Body(id).node(), Some(id));
        assert_eq!(HitTarget::Handle(id).node(), Some(id));
        assert_eq!(HitTarget::Empty.node(), None);
    }
}
