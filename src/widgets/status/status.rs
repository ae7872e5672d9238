use crate::core::event_bus::BoxedEvent;
use crate::dialogs::prefs::prefs_events::ToggleHelpEvent;
use crate::widgets::mind_map::{Editor, Interaction};
use eframe::egui;

/// Status bar component: map stats, gesture mode, pointer, last message.
pub struct StatusBar {
    pub current_message: String,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            current_message: String::new(),
        }
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.current_message = msg.into();
    }

    /// Render status bar at bottom of screen
    pub fn render(
        &self,
        ctx: &egui::Context,
        editor: &Editor,
        mut dispatch: impl FnMut(BoxedEvent),
    ) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(Self::counts_text(editor));

                ui.separator();

                ui.monospace(Self::mode_text(editor.interaction()));

                ui.separator();

                // Pointer position
                match ctx.input(|i| i.pointer.latest_pos()) {
                    Some(p) => ui.monospace(format!("{:>7.1},{:>7.1}", p.x, p.y)),
                    None => ui.monospace("    ---,    ---"),
                };

                ui.separator();

                if ui.small_button("?").on_hover_text("Toggle help (F1)").clicked() {
                    dispatch(Box::new(ToggleHelpEvent));
                }

                // Status message (if any)
                if !self.current_message.is_empty() {
                    ui.separator();
                    ui.monospace(&self.current_message);
                }
            });
        });
    }

    /// "Nodes: N | Edges: M"
    pub fn counts_text(editor: &Editor) -> String {
        format!(
            "Nodes: {} | Edges: {}",
            editor.map().len(),
            editor.map().edge_count()
        )
    }

    /// Gesture mode with its subject, e.g. "Connecting 1f0c3a9b"
    pub fn mode_text(interaction: &Interaction) -> String {
        match interaction.subject() {
            Some(id) => {
                let short: String = id.to_string().chars().take(8).collect();
                format!("{} {}", interaction.mode_name(), short)
            }
            None => interaction.mode_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_counts_text() {
        let mut ed = Editor::default();
        let a = ed.add_node(pos2(0.0, 0.0));
        let b = ed.add_node(pos2(200.0, 0.0));
        ed.connect(a, b);
        assert_eq!(StatusBar::counts_text(&ed), "Nodes: 2 | Edges: 1");
    }

    #[test]
    fn test_mode_text() {
        assert_eq!(StatusBar::mode_text(&Interaction::Idle), "Idle");

        let mut ed = Editor::default();
        let a = ed.add_node(pos2(0.0, 0.0));
        ed.begin_edit(a);
        let text = StatusBar::mode_text(ed.interaction());
        assert!(text.starts_with("Editing "));
        assert_eq!(text.len(), "Editing ".len() + 8);
    }
}
