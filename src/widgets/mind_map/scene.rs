//! Scene rendering through a swappable presenter.
//!
//! The canvas only ever hands the presenter plain values: one `NodeView`
//! per node and one `Segment` per line. Styling is entirely the
//! presenter's business.

use eframe::egui::Pos2;

use super::edges::{Segment, project_edges};
use super::editor::Editor;
use crate::entities::NodeId;

/// What a presenter needs to draw one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeView<'a> {
    pub id: NodeId,
    pub pos: Pos2,
    pub text: &'a str,
    /// Node is the subject of the active gesture.
    pub highlighted: bool,
}

pub trait Presenter {
    fn segment(&mut self, segment: &Segment);
    fn node(&mut self, view: &NodeView<'_>);
}

/// Emit segments first (so boxes cover line ends), then nodes in
/// insertion order.
pub fn render_scene(editor: &Editor, presenter: &mut impl Presenter) {
    for segment in project_edges(editor.map(), editor.interaction()) {
        presenter.segment(&segment);
    }
    let subject = editor.interaction().subject();
    for node in editor.map().iter() {
        presenter.node(&NodeView {
            id: node.id,
            pos: node.pos,
            text: &node.text,
            highlighted: subject == Some(node.id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::mind_map::interaction::PointerEvent;
    use crate::widgets::mind_map::pick::handle_center;
    use eframe::egui::{pos2, vec2};

    #[derive(Default)]
    struct Recorder {
        segments: Vec<Segment>,
        nodes: Vec<(NodeId, String, bool)>,
        order: Vec<&'static str>,
    }

    impl Presenter for Recorder {
        fn segment(&mut self, segment: &Segment) {
            self.segments.push(*segment);
            self.order.push("segment");
        }

        fn node(&mut self, view: &NodeView<'_>) {
            self.nodes.push((view.id, view.text.to_string(), view.highlighted));
            self.order.push("node");
        }
    }

    #[test]
    fn test_segments_before_nodes() {
        let mut ed = Editor::default();
        let a = ed.add_node(pos2(0.0, 0.0));
        let b = ed.add_node(pos2(200.0, 0.0));
        ed.connect(a, b);

        let mut rec = Recorder::default();
        render_scene(&ed, &mut rec);
        assert_eq!(rec.order, vec!["segment", "node", "node"]);
        assert_eq!(rec.nodes.iter().map(|n| n.0).collect::<Vec<_>>(), vec![a, b]);
        assert!(rec.nodes.iter().all(|n| !n.2));
    }

    #[test]
    fn test_connection_source_highlighted() {
        let mut ed = Editor::default();
        let a = ed.add_node(pos2(0.0, 0.0));
        let b = ed.add_node(pos2(300.0, 0.0));
        let h = handle_center(ed.map().get(a).unwrap());
        ed.handle(PointerEvent::Press(h));
        ed.handle(PointerEvent::Move(h + vec2(40.0, 0.0)));

        let mut rec = Recorder::default();
        render_scene(&ed, &mut rec);
        assert_eq!(rec.segments.len(), 1);
        assert!(rec.segments[0].dashed);
        assert!(rec.nodes.iter().any(|n| n.0 == a && n.2));
        assert!(rec.nodes.iter().any(|n| n.0 == b && !n.2));
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut ed = Editor::default();
        let a = ed.add_node(pos2(0.0, 0.0));
        let b = ed.add_node(pos2(0.0, 200.0));
        ed.connect(a, b);

        let mut first = Recorder::default();
        let mut second = Recorder::default();
        render_scene(&ed, &mut first);
        render_scene(&ed, &mut second);
        assert_eq!(first.segments, second.segments);
        assert_eq!(first.nodes, second.nodes);
    }
}
