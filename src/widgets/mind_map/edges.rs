//! Edge projection: mind map + interaction state -> line segments.
//!
//! Pure function, no caching. Output order is node insertion order, with
//! the provisional connection segment (if any) last.

use eframe::egui::Pos2;

use super::interaction::Interaction;
use crate::entities::MindMap;

/// Line between two canvas points. `dashed` marks the provisional edge of a
/// connection in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
    pub dashed: bool,
}

impl Segment {
    pub fn solid(from: Pos2, to: Pos2) -> Self {
        Self { from, to, dashed: false }
    }

    pub fn dashed(from: Pos2, to: Pos2) -> Self {
        Self { from, to, dashed: true }
    }
}

/// Parent->child segments for every resolvable parent, plus the live edge
/// while connecting. Dangling parent references produce nothing.
pub fn project_edges(map: &MindMap, interaction: &Interaction) -> Vec<Segment> {
    let mut segments: Vec<Segment> = map
        .iter()
        .filter_map(|child| {
            let parent = map.get(child.parent?)?;
            Some(Segment::solid(parent.anchor(), child.anchor()))
        })
        .collect();

    if let Interaction::Connecting { source, pointer } = interaction
        && let Some(src) = map.get(*source)
    {
        segments.push(Segment::dashed(src.anchor(), *pointer));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Node, NodeId};
    use eframe::egui::pos2;

    #[test]
    fn test_no_edges_without_parents() {
        let mut map = MindMap::new();
        map.add_node(pos2(0.0, 0.0));
        map.add_node(pos2(200.0, 0.0));
        assert!(project_edges(&map, &Interaction::Idle).is_empty());
    }

    #[test]
    fn test_parent_child_segment() {
        let mut map = MindMap::new();
        let a = map.add_node(pos2(100.0, 100.0));
        let b = map.add_node(pos2(300.0, 200.0));
        map.set_parent(b, a);

        let segs = project_edges(&map, &Interaction::Idle);
        assert_eq!(segs, vec![Segment::solid(pos2(100.0, 100.0), pos2(300.0, 200.0))]);
    }

    #[test]
    fn test_dangling_parent_skipped() {
        let mut map = MindMap::new();
        let a = map.add_node(pos2(0.0, 0.0));
        let b = map.add_node(pos2(100.0, 0.0));
        map.set_parent(b, a);

        let mut orphan = Node::new(NodeId::new(), "orphan", pos2(50.0, 50.0));
        orphan.parent = Some(NodeId::new());
        let orphan_anchor = orphan.anchor();
        map.insert(orphan);

        let segs = project_edges(&map, &Interaction::Idle);
        assert_eq!(segs.len(), 1);
        assert!(segs.iter().all(|s| s.to != orphan_anchor));
    }

    #[test]
    fn test_provisional_segment_while_connecting() {
        let mut map = MindMap::new();
        let a = map.add_node(pos2(0.0, 0.0));
        let state = Interaction::Connecting { source: a, pointer: pos2(250.0, 80.0) };

        let segs = project_edges(&map, &state);
        assert_eq!(segs, vec![Segment::dashed(pos2(0.0, 0.0), pos2(250.0, 80.0))]);
    }

    #[test]
    fn test_no_provisional_for_missing_source() {
        let map = MindMap::new();
        let state = Interaction::Connecting { source: NodeId::new(), pointer: pos2(1.0, 1.0) };
        assert!(project_edges(&map, &state).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut map = MindMap::new();
        let a = map.add_node(pos2(0.0, 0.0));
        let b = map.add_node(pos2(10.0, 50.0));
        let c = map.add_node(pos2(90.0, 20.0));
        map.set_parent(b, a);
        map.set_parent(c, a);
        let state = Interaction::Connecting { source: c, pointer: pos2(5.0, 5.0) };

        let first = project_edges(&map, &state);
        let second = project_edges(&map, &state);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.last().is_some_and(|s| s.dashed));
    }
}
