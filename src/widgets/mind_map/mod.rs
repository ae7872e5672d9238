//! Mind map canvas widget.
//!
//! Editor state machine, hit testing, edge projection and the egui canvas
//! that feeds them. Pointer input travels over the EventBus: the canvas
//! emits, the mounted `CanvasListeners` route into the shared `Editor`.

mod canvas_ui;
pub mod canvas_events;
pub mod edges;
pub mod editor;
pub mod interaction;
pub mod listeners;
pub mod pick;
pub mod scene;

pub use canvas_events::*;
pub use canvas_ui::render;
pub use edges::{Segment, project_edges};
pub use editor::{Editor, EditorOptions};
pub use interaction::{Interaction, PointerEvent};
pub use listeners::{CanvasListeners, SharedEditor};
pub use pick::{HitTarget, hit_test};
pub use scene::{NodeView, Presenter, render_scene};
