//! Preferences dialog and persisted application settings.

mod prefs;
pub mod prefs_events;

pub use prefs::{AppSettings, render_settings_window};
