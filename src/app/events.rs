//! Event handling for MindMapApp.
//!
//! Contains handlers for:
//! - Event bus events (handle_events)
//! - Keyboard input (handle_keyboard_input)

use super::MindMapApp;
use crate::core::event_bus::downcast_event;
use crate::dialogs::prefs::AppSettings;
use crate::dialogs::prefs::prefs_events::{ResetSettingsEvent, ToggleHelpEvent, ToggleSettingsEvent};
use crate::widgets::mind_map::{
    AddNodeEvent, CancelTextEditEvent, CommitTextEditEvent, PointerDoubleClickEvent, PointerMoveEvent,
    PointerPressEvent, PointerReleaseEvent,
};

use eframe::egui::{self, Pos2, Vec2};
use log::{debug, info, trace};

/// Positions for `count` nodes on a diagonal through `center`.
pub fn seed_positions(center: Pos2, count: usize, step: Vec2) -> Vec<Pos2> {
    let mid = count.saturating_sub(1) as f32 / 2.0;
    (0..count)
        .map(|i| center + step * (i as f32 - mid))
        .collect()
}

impl MindMapApp {
    /// Handle events from event bus.
    ///
    /// Pointer events were already delivered to the editor by the canvas
    /// listeners at emit time; here they only drain from the queue.
    pub fn handle_events(&mut self) {
        let events = self.event_bus.poll();
        for event in events {
            if downcast_event::<PointerMoveEvent>(&event).is_some() {
                continue;
            }
            if let Some(e) = downcast_event::<PointerPressEvent>(&event) {
                trace!("press at {:?}", e.0);
                continue;
            }
            if let Some(e) = downcast_event::<PointerReleaseEvent>(&event) {
                trace!("release at {:?}", e.0);
                continue;
            }
            if let Some(e) = downcast_event::<PointerDoubleClickEvent>(&event) {
                trace!("double-click at {:?}", e.0);
                continue;
            }

            // === Editor commands ===
            if let Some(e) = downcast_event::<AddNodeEvent>(&event) {
                let center = e.0.unwrap_or_else(|| self.canvas_center());
                let id = self
                    .editor
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .add_node(center);
                self.status_bar.set_message(format!("Added node {}", id));
                continue;
            }
            if downcast_event::<CommitTextEditEvent>(&event).is_some() {
                let committed = self.editor.lock().unwrap_or_else(|e| e.into_inner()).commit_edit();
                if committed {
                    self.status_bar.set_message("Text updated");
                }
                continue;
            }
            if downcast_event::<CancelTextEditEvent>(&event).is_some() {
                if self.editor.lock().unwrap_or_else(|e| e.into_inner()).cancel_edit() {
                    debug!("Text edit cancelled");
                }
                continue;
            }

            // === Windows / settings ===
            if downcast_event::<ToggleHelpEvent>(&event).is_some() {
                self.show_help = !self.show_help;
                continue;
            }
            if downcast_event::<ToggleSettingsEvent>(&event).is_some() {
                self.show_settings = !self.show_settings;
                continue;
            }
            if downcast_event::<ResetSettingsEvent>(&event).is_some() {
                info!("Resetting settings to default");
                self.settings = AppSettings::default();
                self.sync_editor_options();
                continue;
            }

            trace!("Unhandled event: {}", event.type_name());
        }
    }

    /// Handle keyboard input.
    ///
    /// Skipped while a text field has focus so typing "n" in the edit
    /// dialog does not add nodes.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (add, help, prefs) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::F1),
                i.key_pressed(egui::Key::F12),
            )
        });

        // N and Ctrl+N both land here: key_pressed ignores modifiers
        if add {
            self.event_bus.emit(AddNodeEvent(None));
        }
        if help {
            self.event_bus.emit(ToggleHelpEvent);
        }
        if prefs {
            self.event_bus.emit(ToggleSettingsEvent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::mind_map::{Interaction, PointerEvent};
    use eframe::egui::{Rect, pos2, vec2};

    fn app_with_canvas() -> MindMapApp {
        let mut app = MindMapApp::default();
        app.canvas_rect = Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)));
        app
    }

    #[test]
    fn test_seed_positions_diagonal() {
        let pts = seed_positions(pos2(100.0, 100.0), 3, vec2(10.0, 10.0));
        assert_eq!(pts, vec![pos2(90.0, 90.0), pos2(100.0, 100.0), pos2(110.0, 110.0)]);
        assert!(seed_positions(pos2(0.0, 0.0), 0, vec2(1.0, 1.0)).is_empty());
    }

    #[test]
    fn test_add_node_event_centers_on_canvas() {
        let mut app = app_with_canvas();
        app.event_bus.emit(AddNodeEvent(None));
        app.handle_events();

        let editor = app.editor.lock().unwrap();
        assert_eq!(editor.map().len(), 1);
        let node = editor.map().iter().next().unwrap();
        assert_eq!(node.anchor(), pos2(400.0, 300.0));
        assert_eq!(node.text, "New Node");
        assert!(node.parent.is_none());
    }

    #[test]
    fn test_add_node_explicit_position() {
        let mut app = app_with_canvas();
        app.event_bus.emit(AddNodeEvent(Some(pos2(60.0, 20.0))));
        app.handle_events();
        let editor = app.editor.lock().unwrap();
        assert_eq!(editor.map().iter().next().unwrap().anchor(), pos2(60.0, 20.0));
    }

    #[test]
    fn test_commit_and_cancel_events() {
        let mut app = app_with_canvas();
        let id = app.editor.lock().unwrap().add_node(pos2(100.0, 100.0));

        {
            let mut editor = app.editor.lock().unwrap();
            assert!(editor.begin_edit(id));
            *editor.edit_buffer_mut().unwrap() = "Idea".to_string();
        }
        app.event_bus.emit(CommitTextEditEvent);
        app.handle_events();
        {
            let editor = app.editor.lock().unwrap();
            assert_eq!(editor.map().get(id).unwrap().text, "Idea");
            assert!(editor.interaction().is_idle());
        }

        {
            let mut editor = app.editor.lock().unwrap();
            assert!(editor.begin_edit(id));
            *editor.edit_buffer_mut().unwrap() = "Discarded".to_string();
        }
        app.event_bus.emit(CancelTextEditEvent);
        app.handle_events();
        let editor = app.editor.lock().unwrap();
        assert_eq!(editor.map().get(id).unwrap().text, "Idea");
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn test_toggle_and_reset_events() {
        let mut app = app_with_canvas();
        let help = app.show_help;
        app.event_bus.emit(ToggleHelpEvent);
        app.event_bus.emit(ToggleSettingsEvent);
        app.handle_events();
        assert_eq!(app.show_help, !help);
        assert!(app.show_settings);

        app.settings.prevent_cycles = true;
        app.event_bus.emit(ResetSettingsEvent);
        app.handle_events();
        assert_eq!(app.settings, AppSettings::default());
    }

    #[test]
    fn test_pointer_events_reach_editor_through_bus() {
        let mut app = app_with_canvas();
        let id = app.editor.lock().unwrap().add_node(pos2(100.0, 100.0));

        // Node body spans (40,80)..(160,120); press inside, away from the handle
        app.event_bus.emit(PointerPressEvent(pos2(60.0, 100.0)));
        assert!(matches!(
            app.editor.lock().unwrap().interaction(),
            Interaction::Dragging { node, .. } if *node == id
        ));
        app.event_bus.emit(PointerMoveEvent(pos2(160.0, 200.0)));
        app.event_bus.emit(PointerReleaseEvent(pos2(160.0, 200.0)));
        app.handle_events();

        let editor = app.editor.lock().unwrap();
        assert!(editor.interaction().is_idle());
        assert_eq!(editor.map().get(id).unwrap().pos, pos2(140.0, 180.0));
    }

    #[test]
    fn test_unmounted_app_ignores_pointer_events() {
        let mut app = app_with_canvas();
        let id = app.editor.lock().unwrap().add_node(pos2(100.0, 100.0));
        app.unmount();
        assert!(!app.is_mounted());

        app.event_bus.emit(PointerPressEvent(pos2(60.0, 100.0)));
        assert!(app.editor.lock().unwrap().interaction().is_idle());

        // Direct editor access still works
        assert!(app.editor.lock().unwrap().handle(PointerEvent::Press(pos2(60.0, 100.0))));
        assert_eq!(app.editor.lock().unwrap().map().get(id).unwrap().pos, pos2(40.0, 80.0));
    }

    #[test]
    fn test_remount_keeps_single_listener_set() {
        let mut app = app_with_canvas();
        app.remount();
        app.remount();
        assert_eq!(app.event_bus.subscriber_count::<PointerPressEvent>(), 1);
    }

    #[test]
    fn test_pending_seed_waits_for_canvas() {
        let mut app = MindMapApp::default();
        app.pending_seed = 4;
        app.apply_pending_seed();
        assert_eq!(app.editor.lock().unwrap().map().len(), 0);

        app.canvas_rect = Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0)));
        app.apply_pending_seed();
        assert_eq!(app.editor.lock().unwrap().map().len(), 4);
        assert_eq!(app.pending_seed, 0);

        app.apply_pending_seed();
        assert_eq!(app.editor.lock().unwrap().map().len(), 4);
    }

    #[test]
    fn test_settings_sync_to_editor() {
        let mut app = app_with_canvas();
        app.settings.default_node_text = "Topic".to_string();
        app.settings.prevent_cycles = true;
        app.sync_editor_options();
        let editor = app.editor.lock().unwrap();
        assert_eq!(editor.options.default_node_text, "Topic");
        assert!(editor.options.prevent_cycles);
    }
}
