//! Help overlay.
//!
//! Widgets implement `HelpProvider` to contribute their own section.
//! Global hotkeys (F-keys, N / Ctrl+N) follow every section.

use eframe::egui;

/// Single help entry (key binding + description)
#[derive(Clone, Debug)]
pub struct HelpEntry {
    pub key: &'static str,
    pub desc: &'static str,
}

impl HelpEntry {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self { key, desc }
    }
}

/// Trait for widgets that provide context-sensitive help
pub trait HelpProvider {
    /// Section title (e.g., "Canvas")
    fn help_title(&self) -> &'static str;

    /// Help entries for this widget
    fn help_entries(&self) -> &'static [HelpEntry];
}

/// Global hotkeys shared across all windows
pub const GLOBAL_HELP: &[HelpEntry] = &[
    HelpEntry::new("F1", "Toggle help"),
    HelpEntry::new("F12", "Toggle Preferences"),
    HelpEntry::new("N / Ctrl+N", "Add Node"),
];

/// Canvas gestures
pub const CANVAS_HELP: &[HelpEntry] = &[
    HelpEntry::new("Drag node", "Move node"),
    HelpEntry::new("Drag handle", "Connect: drop target becomes a child"),
    HelpEntry::new("Drop on empty", "Cancel connection"),
    HelpEntry::new("Double-click", "Edit node text"),
    HelpEntry::new("Enter / Esc", "Accept / cancel text edit"),
];

/// Canvas section provider
pub struct CanvasHelp;

impl HelpProvider for CanvasHelp {
    fn help_title(&self) -> &'static str {
        "Canvas"
    }

    fn help_entries(&self) -> &'static [HelpEntry] {
        CANVAS_HELP
    }
}

/// Two-column key/description grid.
fn help_grid(ui: &mut egui::Ui, id: &str, entries: &[HelpEntry]) {
    let key_color = egui::Color32::from_rgb(255, 200, 100);
    egui::Grid::new(id).num_columns(2).spacing([16.0, 2.0]).show(ui, |ui| {
        for entry in entries {
            ui.label(egui::RichText::new(entry.key).color(key_color));
            ui.label(entry.desc);
            ui.end_row();
        }
    });
}

/// Help panel: the provider's section, then the global hotkeys.
pub fn render_help_overlay(ui: &mut egui::Ui, provider: &dyn HelpProvider) {
    egui::Frame::popup(ui.style()).show(ui, |ui| {
        ui.strong(provider.help_title());
        help_grid(ui, "help_section", provider.help_entries());
        ui.separator();
        ui.strong("Global");
        help_grid(ui, "help_global", GLOBAL_HELP);
    });
}

/// Help as a floating, non-interactive area in the canvas corner.
pub fn render_help_window(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 40.0))
        .interactable(false)
        .show(ctx, |ui| render_help_overlay(ui, &CanvasHelp));
}
