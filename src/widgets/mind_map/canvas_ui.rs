//! Canvas UI - turns egui input into pointer events and paints the scene.
//!
//! Input side: presses and double clicks count only inside the canvas and
//! only when no other layer (window, menu) covers the pointer. Moves and
//! releases are forwarded from anywhere, so a gesture always ends even if
//! the button comes up outside the canvas.
//!
//! The editor lock is never held while emitting: listeners take it
//! themselves.

use eframe::egui::{
    self, Align2, Color32, CursorIcon, FontId, Painter, PointerButton, Rect, Sense, Shape, Stroke,
    StrokeKind, Ui, Visuals,
};
use log::trace;

use super::canvas_events::*;
use super::edges::Segment;
use super::interaction::{Interaction, PointerEvent};
use super::listeners::SharedEditor;
use super::pick::{HitTarget, handle_center_at};
use super::scene::{NodeView, Presenter, render_scene};
use crate::core::event_bus::EventEmitter;
use crate::entities::Node;

const CORNER_RADIUS: f32 = 6.0;
const LABEL_SIZE: f32 = 14.0;
const DASH_LENGTH: f32 = 6.0;
const DASH_GAP: f32 = 4.0;

/// Colors pulled from the current egui visuals once per frame.
#[derive(Clone, Copy, Debug)]
struct CanvasStyle {
    node_fill: Color32,
    node_stroke: Stroke,
    highlight_stroke: Stroke,
    text: Color32,
    edge: Stroke,
    provisional: Stroke,
    handle: Color32,
}

impl CanvasStyle {
    fn from_visuals(v: &Visuals) -> Self {
        Self {
            node_fill: v.widgets.inactive.bg_fill,
            node_stroke: v.widgets.noninteractive.bg_stroke,
            highlight_stroke: Stroke::new(2.0, v.selection.stroke.color),
            text: v.text_color(),
            edge: Stroke::new(1.5, v.widgets.noninteractive.fg_stroke.color),
            provisional: Stroke::new(1.5, v.selection.stroke.color),
            handle: v.selection.bg_fill,
        }
    }
}

/// egui painter backed presenter.
struct PainterPresenter {
    painter: Painter,
    style: CanvasStyle,
    handle_radius: f32,
}

impl Presenter for PainterPresenter {
    fn segment(&mut self, segment: &Segment) {
        if segment.dashed {
            self.painter.extend(Shape::dashed_line(
                &[segment.from, segment.to],
                self.style.provisional,
                DASH_LENGTH,
                DASH_GAP,
            ));
        } else {
            self.painter
                .line_segment([segment.from, segment.to], self.style.edge);
        }
    }

    fn node(&mut self, view: &NodeView<'_>) {
        let rect = Rect::from_min_size(view.pos, Node::SIZE);
        let stroke = if view.highlighted {
            self.style.highlight_stroke
        } else {
            self.style.node_stroke
        };
        self.painter
            .rect(rect, CORNER_RADIUS, self.style.node_fill, stroke, StrokeKind::Inside);
        self.painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            view.text,
            FontId::proportional(LABEL_SIZE),
            self.style.text,
        );
        self.painter
            .circle_filled(handle_center_at(view.pos), self.handle_radius, self.style.handle);
    }
}

/// Translate this frame's raw input into pointer events, in arrival order.
fn collect_pointer_events(ctx: &egui::Context, canvas: Rect, pointer_on_canvas: bool) -> Vec<PointerEvent> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for event in &i.events {
            match event {
                egui::Event::PointerMoved(pos) => out.push(PointerEvent::Move(*pos)),
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !*pressed {
                        out.push(PointerEvent::Release(*pos));
                    } else if pointer_on_canvas && canvas.contains(*pos) {
                        out.push(PointerEvent::Press(*pos));
                    }
                }
                _ => {}
            }
        }
        if i.pointer.button_double_clicked(PointerButton::Primary)
            && pointer_on_canvas
            && let Some(pos) = i.pointer.interact_pos()
            && canvas.contains(pos)
        {
            out.push(PointerEvent::DoubleClick(pos));
        }
        out
    })
}

fn emit_pointer_event(emitter: &EventEmitter, event: PointerEvent) {
    match event {
        PointerEvent::Press(p) => emitter.emit(PointerPressEvent(p)),
        PointerEvent::Move(p) => emitter.emit(PointerMoveEvent(p)),
        PointerEvent::Release(p) => emitter.emit(PointerReleaseEvent(p)),
        PointerEvent::DoubleClick(p) => emitter.emit(PointerDoubleClickEvent(p)),
    }
}

/// Render the mind map canvas into the remaining space of `ui`.
///
/// Returns the canvas rect so the caller can center new nodes on it.
pub fn render(ui: &mut Ui, editor: &SharedEditor, emitter: &EventEmitter) -> Rect {
    let canvas_rect = ui.max_rect();
    let response = ui.interact(
        canvas_rect,
        ui.id().with("mind_map_canvas"),
        Sense::click_and_drag(),
    );

    for event in collect_pointer_events(ui.ctx(), canvas_rect, response.contains_pointer()) {
        trace!("canvas {:?}", event);
        emit_pointer_event(emitter, event);
    }

    let editor = editor.lock().unwrap_or_else(|e| e.into_inner());

    let cursor = match editor.interaction() {
        Interaction::Dragging { .. } => Some(CursorIcon::Grabbing),
        Interaction::Connecting { .. } => Some(CursorIcon::Crosshair),
        Interaction::Idle => response.hover_pos().and_then(|p| match editor.hit_test(p) {
            HitTarget::Handle(_) => Some(CursorIcon::Crosshair),
            HitTarget::Body(_) => Some(CursorIcon::Grab),
            HitTarget::Empty => None,
        }),
        Interaction::Editing { .. } => None,
    };
    if let Some(icon) = cursor {
        ui.ctx().set_cursor_icon(icon);
    }

    let mut presenter = PainterPresenter {
        painter: ui.painter_at(canvas_rect),
        style: CanvasStyle::from_visuals(ui.visuals()),
        handle_radius: editor.options.handle_radius,
    };
    render_scene(&editor, &mut presenter);

    if editor.map().is_empty() {
        ui.painter().text(
            canvas_rect.center(),
            Align2::CENTER_CENTER,
            "Press N or use \"Add Node\" to start",
            FontId::proportional(LABEL_SIZE),
            ui.visuals().weak_text_color(),
        );
    }

    canvas_rect
}
