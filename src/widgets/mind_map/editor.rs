//! Editor - mind map plus the gesture state machine that drives it.
//!
//! # Transitions
//!
//! ```text
//!   Idle ──press body──────▶ Dragging ──move──▶ Dragging (node follows)
//!    ▲                          │
//!    └──────── release (anywhere) ┘
//!
//!   Idle ──press handle────▶ Connecting ──move──▶ Connecting (pointer tracked)
//!    ▲                          │
//!    └── release: over other node => target.parent = source
//!                 elsewhere / over source => cancel
//!
//!   Idle ──double click────▶ Editing ──commit / cancel──▶ Idle
//! ```
//!
//! Presses on empty canvas change nothing. While `Editing`, pointer input
//! is ignored until the edit is committed or cancelled.
//!
//! Every handler runs synchronously on the UI thread and is O(1) apart
//! from hit testing (O(nodes)).

use eframe::egui::Pos2;
use log::{debug, info, trace};

use super::interaction::{Interaction, PointerEvent};
use super::pick::{self, HANDLE_RADIUS, HitTarget};
use crate::entities::{DEFAULT_NODE_TEXT, MindMap, NodeId};

/// Tunables the editor reads on every event. Synced from `AppSettings`.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorOptions {
    pub default_node_text: String,
    pub handle_radius: f32,
    /// Reject connections that would make a node its own ancestor.
    pub prevent_cycles: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_node_text: DEFAULT_NODE_TEXT.to_string(),
            handle_radius: HANDLE_RADIUS,
            prevent_cycles: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Editor {
    map: MindMap,
    interaction: Interaction,
    pub options: EditorOptions,
}

impl Editor {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            map: MindMap::new(),
            interaction: Interaction::Idle,
            options,
        }
    }

    pub fn map(&self) -> &MindMap {
        &self.map
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Add a node with the configured default label, centered on `center`.
    pub fn add_node(&mut self, center: Pos2) -> NodeId {
        let text = self.options.default_node_text.clone();
        self.map.add_node_with_text(center, text)
    }

    pub fn update_node_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        self.map.update_node_text(id, text)
    }

    pub fn move_node(&mut self, id: NodeId, pos: Pos2) -> bool {
        self.map.move_node(id, pos)
    }

    /// Direct reparent, bypassing the gesture. Same guards as a drop.
    pub fn connect(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child {
            debug!("Ignoring self-connection on {}", child);
            return false;
        }
        if !self.map.contains(parent) {
            debug!("connect: no parent node {}", parent);
            return false;
        }
        if self.options.prevent_cycles && self.map.is_ancestor(child, parent) {
            info!("Rejected connection {} -> {}: would create a cycle", parent, child);
            return false;
        }
        self.map.set_parent(child, parent)
    }

    pub fn hit_test(&self, pos: Pos2) -> HitTarget {
        pick::hit_test(&self.map, pos, self.options.handle_radius)
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Returns true if the map or the interaction state changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        if self.interaction.is_editing() {
            trace!("Editing in progress, dropping {:?}", event);
            return false;
        }
        match event {
            PointerEvent::Press(pos) => self.on_press(pos),
            PointerEvent::Move(pos) => self.on_move(pos),
            PointerEvent::Release(pos) => self.on_release(pos),
            PointerEvent::DoubleClick(pos) => self.on_double_click(pos),
        }
    }

    fn on_press(&mut self, pos: Pos2) -> bool {
        match self.hit_test(pos) {
            HitTarget::Handle(source) => {
                debug!("Connect start from {}", source);
                self.interaction = Interaction::Connecting { source, pointer: pos };
                true
            }
            HitTarget::Body(node) => {
                let Some(origin) = self.map.get(node).map(|n| n.pos) else {
                    return false;
                };
                debug!("Drag start {} at ({:.1}, {:.1})", node, pos.x, pos.y);
                self.interaction = Interaction::Dragging { node, offset: pos - origin };
                true
            }
            HitTarget::Empty => false,
        }
    }

    fn on_move(&mut self, pos: Pos2) -> bool {
        match &mut self.interaction {
            Interaction::Dragging { node, offset } => {
                let (node, target) = (*node, pos - *offset);
                if self.map.move_node(node, target) {
                    true
                } else {
                    debug!("Drag subject {} vanished, back to idle", node);
                    self.interaction = Interaction::Idle;
                    true
                }
            }
            Interaction::Connecting { pointer, .. } => {
                *pointer = pos;
                true
            }
            _ => false,
        }
    }

    fn on_release(&mut self, pos: Pos2) -> bool {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => false,
            Interaction::Dragging { node, .. } => {
                debug!("Drag end {}", node);
                true
            }
            Interaction::Connecting { source, .. } => {
                match self.hit_test(pos).node() {
                    Some(target) if target != source => {
                        if self.connect(source, target) {
                            info!("Connected {} -> {}", source, target);
                        }
                    }
                    Some(_) => debug!("Connection dropped on its own source, ignored"),
                    None => debug!("Connection from {} cancelled", source),
                }
                true
            }
            editing @ Interaction::Editing { .. } => {
                self.interaction = editing;
                false
            }
        }
    }

    fn on_double_click(&mut self, pos: Pos2) -> bool {
        match self.hit_test(pos) {
            HitTarget::Body(node) => self.begin_edit(node),
            _ => false,
        }
    }

    // ========== Text editing ==========

    /// Enter `Editing` for `node` with its current text in the buffer.
    pub fn begin_edit(&mut self, node: NodeId) -> bool {
        let Some(text) = self.map.get(node).map(|n| n.text.clone()) else {
            return false;
        };
        debug!("Edit start {}", node);
        self.interaction = Interaction::Editing { node, buffer: text };
        true
    }

    /// Mutable edit buffer, if an edit is in progress.
    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        match &mut self.interaction {
            Interaction::Editing { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    /// Write the buffer back to the node and return to idle.
    pub fn commit_edit(&mut self) -> bool {
        match std::mem::take(&mut self.interaction) {
            Interaction::Editing { node, buffer } => self.map.update_node_text(node, buffer),
            other => {
                self.interaction = other;
                false
            }
        }
    }

    /// Drop the buffer; node text stays as it was.
    pub fn cancel_edit(&mut self) -> bool {
        if self.interaction.is_editing() {
            debug!("Edit cancelled");
            self.interaction = Interaction::Idle;
            true
        } else {
            false
        }
    }
}
