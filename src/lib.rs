//! Mind-map editor library
//!
//! Re-exports all modules for use by the binary target.

// Core plumbing (event bus)
pub mod core;

// Domain model
pub mod entities;

// App modules
pub mod app;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod help;
pub mod widgets;

pub use core::event_bus::{BoxedEvent, EventBus, EventEmitter, Subscription, SubscriptionId, downcast_event};
pub use entities::{MindMap, Node, NodeId};
pub use widgets::mind_map::{Editor, EditorOptions, Interaction, PointerEvent};
