//! Core engine modules - event plumbing shared by widgets and the app shell.
//!
//! Independent of UI: nothing in here touches egui.

pub mod event_bus;

// Re-exports for convenience
pub use event_bus::{EventBus, EventEmitter, Subscription, SubscriptionId};
