//! Main application loop - eframe::App implementation.
//!
//! Contains the core update() method that runs each frame:
//! - Settings application
//! - UI rendering (menu, status bar, canvas, dialogs)
//! - Input handling
//! - Event processing
//! - State persistence

use eframe::{egui, glow};
use log::trace;

use crate::app::MindMapApp;
use crate::core::event_bus::BoxedEvent;
use crate::dialogs::prefs::prefs_events::{ToggleHelpEvent, ToggleSettingsEvent};
use crate::dialogs::prefs::render_settings_window;
use crate::dialogs::text_edit::render_text_edit_dialog;
use crate::help::render_help_window;
use crate::widgets::mind_map::{self, AddNodeEvent};

impl eframe::App for MindMapApp {
    /// Main frame update - called every frame by eframe.
    ///
    /// Flow:
    /// 1. Apply font and editor settings
    /// 2. Seed `--nodes` once the canvas is known
    /// 3. Render menu bar, status bar, canvas
    /// 4. Render text edit dialog, help, settings
    /// 5. Handle keyboard input
    /// 6. Process queued events
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size from settings
        let mut style = (*ctx.style()).clone();
        for (_, font_id) in style.text_styles.iter_mut() {
            font_id.size = self.settings.font_size;
        }
        ctx.set_style(style);

        self.sync_editor_options();
        self.apply_pending_seed();

        // Events raised by widgets while the editor is locked; emitted after unlock
        let mut deferred: Vec<BoxedEvent> = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Add Node").on_hover_text("N / Ctrl+N").clicked() {
                    deferred.push(Box::new(AddNodeEvent(None)));
                }
                ui.separator();
                if ui.button("Help").on_hover_text("F1").clicked() {
                    deferred.push(Box::new(ToggleHelpEvent));
                }
                if ui.button("Preferences").on_hover_text("F12").clicked() {
                    deferred.push(Box::new(ToggleSettingsEvent));
                }
            });
        });

        {
            let editor = self.editor.lock().unwrap_or_else(|e| e.into_inner());
            self.status_bar.render(ctx, &editor, |e| deferred.push(e));
        }

        let emitter = self.event_bus.emitter();
        let canvas_rect = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(ctx.style().visuals.extreme_bg_color))
            .show(ctx, |ui| mind_map::render(ui, &self.editor, &emitter))
            .inner;
        self.canvas_rect = Some(canvas_rect);

        {
            let mut editor = self.editor.lock().unwrap_or_else(|e| e.into_inner());
            render_text_edit_dialog(ctx, &mut editor, |e| deferred.push(e));
        }

        for event in deferred {
            self.event_bus.emit_boxed(event);
        }

        if self.show_help {
            render_help_window(ctx);
        }

        if self.show_settings {
            render_settings_window(
                ctx,
                &mut self.show_settings,
                &mut self.settings,
                Some(&self.event_bus),
            );
        }

        self.handle_keyboard_input(ctx);
        self.handle_events();

        // Keep the provisional edge tracking the pointer
        if !self.editor.lock().unwrap_or_else(|e| e.into_inner()).interaction().is_idle() {
            ctx.request_repaint();
        }
    }

    /// Save app state to persistent storage.
    ///
    /// `show_help` in settings is the startup preference; the overlay's
    /// current visibility is runtime state and is not written back.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            trace!(
                "App state saved: default_text={:?}, prevent_cycles={}",
                self.settings.default_node_text,
                self.settings.prevent_cycles
            );
        }
    }

    /// Cleanup on application exit.
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.unmount();
        trace!("Canvas listeners released on exit");
    }
}
