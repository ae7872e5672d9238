//! Dialogs - modal and floating windows over the canvas.

pub mod prefs;
pub mod text_edit;
