use eframe::egui;

use super::prefs_events::ResetSettingsEvent;
use crate::core::event_bus::EventBus;
use crate::entities::DEFAULT_NODE_TEXT;
use crate::widgets::mind_map::EditorOptions;
use crate::widgets::mind_map::pick::HANDLE_RADIUS;

/// Settings categories
#[derive(Debug, Clone, Copy, PartialEq)]
enum SettingsCategory {
    General,
    Canvas,
}

impl SettingsCategory {
    const ALL: [SettingsCategory; 2] = [SettingsCategory::General, SettingsCategory::Canvas];

    fn as_str(&self) -> &'static str {
        match self {
            SettingsCategory::General => "General",
            SettingsCategory::Canvas => "Canvas",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "General" => Some(SettingsCategory::General),
            "Canvas" => Some(SettingsCategory::Canvas),
            _ => None,
        }
    }
}

/// Application settings
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct AppSettings {
    // UI
    pub show_help: bool,
    pub font_size: f32,

    // Canvas
    pub default_node_text: String,
    pub handle_radius: f32,
    pub prevent_cycles: bool,

    // Internal
    pub selected_settings_category: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_help: true,
            font_size: 13.0,
            default_node_text: DEFAULT_NODE_TEXT.to_string(),
            handle_radius: HANDLE_RADIUS,
            prevent_cycles: false,
            selected_settings_category: Some("Canvas".to_string()),
        }
    }
}

impl AppSettings {
    /// Editor tunables derived from these settings.
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            default_node_text: self.default_node_text.clone(),
            handle_radius: self.handle_radius.clamp(2.0, 20.0),
            prevent_cycles: self.prevent_cycles,
        }
    }
}

/// Render General settings category
fn render_general_settings(ui: &mut egui::Ui, settings: &mut AppSettings, event_bus: Option<&EventBus>) {
    ui.heading("Appearance");
    ui.add_space(8.0);

    ui.label("Font Size:");
    ui.add(
        egui::Slider::new(&mut settings.font_size, 10.0..=18.0)
            .suffix(" px")
            .step_by(0.5),
    );
    ui.add_space(8.0);

    ui.checkbox(&mut settings.show_help, "Show help on startup");

    ui.add_space(16.0);
    if ui.button("Reset to defaults").clicked()
        && let Some(bus) = event_bus
    {
        bus.emit(ResetSettingsEvent);
    }
}

/// Render Canvas settings category
fn render_canvas_settings(ui: &mut egui::Ui, settings: &mut AppSettings) {
    ui.heading("Nodes");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Default label:");
        ui.text_edit_singleline(&mut settings.default_node_text);
    });
    ui.label("Text given to nodes created with Add Node.");
    ui.add_space(8.0);

    ui.label("Connection Handle Radius:");
    ui.add(
        egui::Slider::new(&mut settings.handle_radius, 2.0..=20.0)
            .suffix(" px")
            .step_by(1.0),
    );

    ui.add_space(16.0);
    ui.heading("Connections");
    ui.add_space(8.0);

    ui.checkbox(&mut settings.prevent_cycles, "Prevent cycles");
    ui.label("Reject a connection when the target is already an ancestor of the source.");
}

pub fn render_settings_window(
    ctx: &egui::Context,
    show_settings: &mut bool,
    settings: &mut AppSettings,
    event_bus: Option<&EventBus>,
) {
    // Get selected category from settings or use default
    let mut selected = settings
        .selected_settings_category
        .as_ref()
        .and_then(|s| SettingsCategory::from_str(s))
        .unwrap_or(SettingsCategory::Canvas);

    egui::Window::new("Settings")
        .id(egui::Id::new("settings_window"))
        .open(show_settings)
        .default_size([520.0, 320.0])
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Left panel: category list
                ui.vertical(|ui| {
                    ui.set_width(120.0);
                    ui.add_space(4.0);
                    for category in SettingsCategory::ALL {
                        if ui
                            .selectable_label(selected == category, category.as_str())
                            .clicked()
                        {
                            selected = category;
                        }
                    }
                });

                ui.separator();

                // Right panel: content for selected category
                ui.vertical(|ui| {
                    ui.add_space(8.0);
                    match selected {
                        SettingsCategory::General => render_general_settings(ui, settings, event_bus),
                        SettingsCategory::Canvas => render_canvas_settings(ui, settings),
                    }
                });
            });
        });

    settings.selected_settings_category = Some(selected.as_str().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_editor_defaults() {
        assert_eq!(AppSettings::default().editor_options(), EditorOptions::default());
    }

    #[test]
    fn test_handle_radius_clamped() {
        let settings = AppSettings {
            handle_radius: 500.0,
            ..AppSettings::default()
        };
        assert_eq!(settings.editor_options().handle_radius, 20.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"prevent_cycles": true, "default_node_text": "Idea"}"#).unwrap();
        assert!(settings.prevent_cycles);
        assert_eq!(settings.default_node_text, "Idea");
        assert_eq!(settings.font_size, AppSettings::default().font_size);
    }

    #[test]
    fn test_category_names_roundtrip() {
        for c in SettingsCategory::ALL {
            assert_eq!(SettingsCategory::from_str(c.as_str()), Some(c));
        }
        assert_eq!(SettingsCategory::from_str("Cache"), None);
    }
}
