//! Interaction state for the canvas.
//!
//! One tagged union instead of separate "dragging id" / "connecting id"
//! fields, so a drag and a connection can never be live at the same time.
//! Text editing is a state of its own: while it is active every pointer
//! event is dropped.

use eframe::egui::{Pos2, Vec2};

use crate::entities::NodeId;

/// Current gesture, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    /// Repositioning `node`. `offset` = pointer - node origin at press time.
    Dragging { node: NodeId, offset: Vec2 },
    /// Connection gesture started on `source`'s handle; `pointer` is the
    /// live cursor for the provisional edge.
    Connecting { source: NodeId, pointer: Pos2 },
    /// Modal text edit of `node`. `buffer` starts as the current label.
    Editing { node: NodeId, buffer: String },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Interaction::Editing { .. })
    }

    /// Node the gesture is about (drag subject, connection source, edit target).
    pub fn subject(&self) -> Option<NodeId> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging { node, .. } => Some(*node),
            Interaction::Connecting { source, .. } => Some(*source),
            Interaction::Editing { node, .. } => Some(*node),
        }
    }

    /// Short name for the status bar.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Interaction::Idle => "Idle",
            Interaction::Dragging { .. } => "Dragging",
            Interaction::Connecting { .. } => "Connecting",
            Interaction::Editing { .. } => "Editing",
        }
    }
}

/// Raw pointer input in absolute canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Pos2),
    Move(Pos2),
    Release(Pos2),
    DoubleClick(Pos2),
}
