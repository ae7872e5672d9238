//! Node label edit dialog.
//!
//! Shown while the editor is in `Editing`. Modal: the backdrop swallows
//! pointer input, and the editor ignores pointer events anyway until the
//! dialog emits a commit or cancel.

use eframe::egui;

use crate::core::event_bus::BoxedEvent;
use crate::widgets::mind_map::{CancelTextEditEvent, CommitTextEditEvent, Editor};

/// Render the edit dialog if an edit is in progress.
///
/// Enter / OK commits, Escape / Cancel / click outside cancels.
pub fn render_text_edit_dialog(
    ctx: &egui::Context,
    editor: &mut Editor,
    mut dispatch: impl FnMut(BoxedEvent),
) {
    let Some(buffer) = editor.edit_buffer_mut() else {
        return;
    };

    let mut commit = false;
    let mut cancel = false;

    let modal = egui::Modal::new(egui::Id::new("node_text_edit")).show(ctx, |ui| {
        ui.set_width(280.0);
        ui.heading("Edit node");
        ui.add_space(8.0);

        let response = ui.add(
            egui::TextEdit::singleline(buffer)
                .hint_text("Node text")
                .desired_width(f32::INFINITY),
        );
        response.request_focus();

        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            commit = true;
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                commit = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
        });
    });

    if commit {
        dispatch(Box::new(CommitTextEditEvent));
    } else if cancel || modal.should_close() {
        dispatch(Box::new(CancelTextEditEvent));
    }
}
