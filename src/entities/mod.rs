//! Entities module - the mind map data model.
//!
//! `Node` is a plain record; `MindMap` owns the ordered node collection and
//! the CRUD operations. Interaction state lives with the canvas widget, not
//! here.

pub mod mind_map;
pub mod node;

pub use mind_map::MindMap;
pub use node::{Node, NodeId, DEFAULT_NODE_TEXT};
