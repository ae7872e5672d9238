//! Application shell: owns the editor, the event bus, and the windows.
//!
//! Only `settings` survive a restart. The mind map itself lives in memory.

mod events;
mod run;

use std::sync::{Arc, Mutex};

use eframe::egui::{Pos2, Rect, pos2, vec2};
use log::{debug, info};

use crate::config::PathConfig;
use crate::core::event_bus::EventBus;
use crate::dialogs::prefs::AppSettings;
use crate::widgets::mind_map::{CanvasListeners, Editor, SharedEditor};
use crate::widgets::status::StatusBar;

pub use events::seed_positions;

/// Canvas center used before the first frame has laid out the canvas.
const FALLBACK_CENTER: Pos2 = pos2(400.0, 300.0);

/// Main application
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct MindMapApp {
    pub settings: AppSettings,
    #[serde(skip)]
    pub editor: SharedEditor,
    #[serde(skip)]
    pub event_bus: EventBus,
    /// Pointer subscriptions for the mounted canvas
    #[serde(skip)]
    listeners: Option<CanvasListeners>,
    #[serde(skip)]
    pub status_bar: StatusBar,
    #[serde(skip)]
    pub show_help: bool,
    #[serde(skip)]
    pub show_settings: bool,
    /// Canvas rect from the last frame
    #[serde(skip)]
    pub canvas_rect: Option<Rect>,
    #[serde(skip)]
    pub path_config: PathConfig,
    /// Nodes to create once the canvas size is known (`--nodes`)
    #[serde(skip)]
    pub pending_seed: usize,
}

impl Default for MindMapApp {
    fn default() -> Self {
        let settings = AppSettings::default();
        let editor = Arc::new(Mutex::new(Editor::new(settings.editor_options())));
        let event_bus = EventBus::new();
        let listeners = CanvasListeners::mount(&event_bus, &editor);

        Self {
            show_help: settings.show_help,
            settings,
            editor,
            event_bus,
            listeners: Some(listeners),
            status_bar: StatusBar::new(),
            show_settings: false,
            canvas_rect: None,
            path_config: PathConfig::default(),
            pending_seed: 0,
        }
    }
}

impl MindMapApp {
    /// Finish setup after deserialization: fresh editor state, listeners
    /// bound to this app's bus, window flags taken from settings.
    pub fn init(&mut self, path_config: PathConfig, seed: usize) {
        self.path_config = path_config;
        self.pending_seed = seed;
        self.show_help = self.settings.show_help;
        self.editor = Arc::new(Mutex::new(Editor::new(self.settings.editor_options())));
        self.remount();
        info!(
            "App initialized (config dir: {:?}, seed: {})",
            self.path_config.config_dir, seed
        );
    }

    /// Drop the current canvas listeners and subscribe a fresh set.
    pub fn remount(&mut self) {
        // Release first so the bus never holds two sets at once
        self.listeners = None;
        self.listeners = Some(CanvasListeners::mount(&self.event_bus, &self.editor));
    }

    /// Release the canvas listeners (window closing).
    pub fn unmount(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.unmount();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    /// Where "Add Node" places new nodes.
    pub fn canvas_center(&self) -> Pos2 {
        self.canvas_rect.map(|r| r.center()).unwrap_or(FALLBACK_CENTER)
    }

    /// Push current settings into the editor if they changed.
    pub fn sync_editor_options(&mut self) {
        let options = self.settings.editor_options();
        let mut editor = self.editor.lock().unwrap_or_else(|e| e.into_inner());
        if editor.options != options {
            debug!("Editor options changed: {:?}", options);
            editor.options = options;
        }
    }

    /// Create the `--nodes` seed once the canvas has been laid out.
    pub fn apply_pending_seed(&mut self) {
        if self.pending_seed == 0 || self.canvas_rect.is_none() {
            return;
        }
        let count = std::mem::take(&mut self.pending_seed);
        let center = self.canvas_center();
        let mut editor = self.editor.lock().unwrap_or_else(|e| e.into_inner());
        for pos in seed_positions(center, count, vec2(40.0, 30.0)) {
            editor.add_node(pos);
        }
        info!("Seeded {} nodes", count);
        drop(editor);
        self.status_bar.set_message(format!("Seeded {} nodes", count));
    }
}
