//! Status bar widget.

mod status;

pub use status::StatusBar;
