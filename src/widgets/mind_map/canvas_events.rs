//! Canvas events.
//!
//! Pointer events are routed to the editor by the mounted
//! [`CanvasListeners`](super::CanvasListeners); the rest are handled by the
//! app in its event loop.

use eframe::egui::Pos2;

/// Primary button pressed inside the canvas
#[derive(Clone, Copy, Debug)]
pub struct PointerPressEvent(pub Pos2);

/// Pointer moved (anywhere in the window)
#[derive(Clone, Copy, Debug)]
pub struct PointerMoveEvent(pub Pos2);

/// Primary button released (anywhere in the window)
#[derive(Clone, Copy, Debug)]
pub struct PointerReleaseEvent(pub Pos2);

/// Primary double click inside the canvas
#[derive(Clone, Copy, Debug)]
pub struct PointerDoubleClickEvent(pub Pos2);

/// Add a node. `None` centers it on the visible canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct AddNodeEvent(pub Option<Pos2>);

/// Accept the text in the edit dialog
#[derive(Clone, Copy, Debug)]
pub struct CommitTextEditEvent;

/// Close the edit dialog without touching the node
#[derive(Clone, Copy, Debug)]
pub struct CancelTextEditEvent;
