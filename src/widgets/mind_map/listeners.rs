//! Pointer listeners for the canvas, scoped to the canvas lifetime.
//!
//! `mount()` subscribes the editor to the four pointer event types on the
//! bus. The returned value owns the subscriptions; dropping it (or calling
//! `unmount()`) deregisters all of them. Hold exactly one per mounted
//! canvas.

use std::sync::{Arc, Mutex};

use log::debug;

use super::canvas_events::*;
use super::editor::Editor;
use super::interaction::PointerEvent;
use crate::core::event_bus::{EventBus, Subscription};

/// Editor shared between the UI and bus callbacks.
pub type SharedEditor = Arc<Mutex<Editor>>;

fn dispatch(editor: &SharedEditor, event: PointerEvent) {
    editor.lock().unwrap_or_else(|e| e.into_inner()).handle(event);
}

pub struct CanvasListeners {
    subscriptions: Vec<Subscription>,
}

impl CanvasListeners {
    pub fn mount(bus: &EventBus, editor: &SharedEditor) -> Self {
        let press = Arc::clone(editor);
        let moved = Arc::clone(editor);
        let release = Arc::clone(editor);
        let double = Arc::clone(editor);

        let subscriptions = vec![
            bus.subscribe_scoped::<PointerPressEvent, _>(move |e| {
                dispatch(&press, PointerEvent::Press(e.0));
            }),
            bus.subscribe_scoped::<PointerMoveEvent, _>(move |e| {
                dispatch(&moved, PointerEvent::Move(e.0));
            }),
            bus.subscribe_scoped::<PointerReleaseEvent, _>(move |e| {
                dispatch(&release, PointerEvent::Release(e.0));
            }),
            bus.subscribe_scoped::<PointerDoubleClickEvent, _>(move |e| {
                dispatch(&double, PointerEvent::DoubleClick(e.0));
            }),
        ];
        debug!("Canvas listeners mounted ({})", subscriptions.len());
        Self { subscriptions }
    }

    /// Explicit teardown; same as dropping.
    pub fn unmount(self) {
        drop(self);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl Drop for CanvasListeners {
    fn drop(&mut self) {
        debug!("Canvas listeners released ({})", self.subscriptions.len());
    }
}

impl std::fmt::Debug for CanvasListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasListeners")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::mind_map::pick::handle_center;
    use eframe::egui::{pos2, vec2};

    fn shared() -> SharedEditor {
        Arc::new(Mutex::new(Editor::default()))
    }

    #[test]
    fn test_mount_routes_pointer_events() {
        let bus = EventBus::new();
        let editor = shared();
        let a = editor.lock().unwrap().add_node(pos2(100.0, 100.0));
        let origin = editor.lock().unwrap().map().get(a).unwrap().pos;
        let _listeners = CanvasListeners::mount(&bus, &editor);

        let start = origin + vec2(5.0, 5.0);
        bus.emit(PointerPressEvent(start));
        bus.emit(PointerMoveEvent(start + vec2(20.0, 10.0)));
        bus.emit(PointerReleaseEvent(pos2(-1000.0, -1000.0)));

        let ed = editor.lock().unwrap();
        assert!(ed.interaction().is_idle());
        assert_eq!(ed.map().get(a).unwrap().pos, origin + vec2(20.0, 10.0));
    }

    #[test]
    fn test_connection_through_bus() {
        let bus = EventBus::new();
        let editor = shared();
        let (a, b, h, drop_at) = {
            let mut ed = editor.lock().unwrap();
            let a = ed.add_node(pos2(100.0, 100.0));
            let b = ed.add_node(pos2(400.0, 100.0));
            let h = handle_center(ed.map().get(a).unwrap());
            (a, b, h, ed.map().get(b).unwrap().anchor())
        };
        let _listeners = CanvasListeners::mount(&bus, &editor);

        bus.emit(PointerPressEvent(h));
        bus.emit(PointerMoveEvent(drop_at));
        bus.emit(PointerReleaseEvent(drop_at));

        assert_eq!(editor.lock().unwrap().map().get(b).unwrap().parent, Some(a));
    }

    #[test]
    fn test_teardown_deregisters() {
        let bus = EventBus::new();
        let editor = shared();
        let listeners = CanvasListeners::mount(&bus, &editor);
        assert_eq!(listeners.len(), 4);
        assert_eq!(bus.subscriber_count::<PointerMoveEvent>(), 1);
        assert_eq!(bus.subscriber_count::<PointerReleaseEvent>(), 1);

        listeners.unmount();
        assert!(!bus.has_subscribers::<PointerPressEvent>());
        assert!(!bus.has_subscribers::<PointerMoveEvent>());
        assert!(!bus.has_subscribers::<PointerReleaseEvent>());
        assert!(!bus.has_subscribers::<PointerDoubleClickEvent>());
    }

    #[test]
    fn test_remount_does_not_duplicate() {
        let bus = EventBus::new();
        let editor = shared();
        for _ in 0..3 {
            let listeners = CanvasListeners::mount(&bus, &editor);
            assert_eq!(bus.subscriber_count::<PointerMoveEvent>(), 1);
            drop(listeners);
        }
        assert_eq!(bus.subscriber_count::<PointerMoveEvent>(), 0);
    }

    #[test]
    fn test_events_after_teardown_ignored() {
        let bus = EventBus::new();
        let editor = shared();
        let a = editor.lock().unwrap().add_node(pos2(0.0, 0.0));
        let origin = editor.lock().unwrap().map().get(a).unwrap().pos;

        drop(CanvasListeners::mount(&bus, &editor));
        bus.emit(PointerPressEvent(origin + vec2(2.0, 2.0)));
        bus.emit(PointerMoveEvent(origin + vec2(80.0, 80.0)));

        let ed = editor.lock().unwrap();
        assert!(ed.interaction().is_idle());
        assert_eq!(ed.map().get(a).unwrap().pos, origin);
    }
}
