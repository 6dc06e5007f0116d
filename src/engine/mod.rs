// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! The boundary to the external diagram engine.
//!
//! The engine owns rendering, layout, and low-level selection/interaction
//! state; the store only sees it through [`DiagramEngine`]. The engine tracks
//! its own mutations internally and is not observable from outside, which is
//! why the store keeps a synthetic refresh stamp (see `store`).

use std::fmt;

use crate::model::{LinkId, Node, NodeId};

#[cfg(test)]
pub(crate) mod fixtures;

/// A selectable diagram entity, by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Node(NodeId),
    Link(LinkId),
}

/// The drag-canvas interaction sub-state, when the engine's state machine is
/// currently in it. Locking the diagram must also flip this flag, since the
/// two lock representations are independently reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragCanvasConfig {
    pub allow_drag: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    MalformedStory { reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedStory { reason } => {
                write!(f, "could not rebuild diagram model from story data: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Narrow facade over the diagram engine.
///
/// Queries return snapshots; mutations apply synchronously. Implementations
/// must keep [`DiagramEngine::load_story`] atomic: on error the previous
/// model stays in place.
pub trait DiagramEngine {
    fn add_node(&mut self, node: Node);

    /// Snapshot of every node currently in the model.
    fn nodes(&self) -> Vec<Node>;

    fn selected_entities(&self) -> Vec<EntityRef>;

    fn clear_selection(&mut self);

    /// No-op when the id is unknown.
    fn set_node_selected(&mut self, node_id: &NodeId, selected: bool);

    fn clear_link_labels(&mut self);

    fn clear_node_features(&mut self);

    fn set_locked(&mut self, locked: bool);

    fn locked(&self) -> bool;

    /// Inspect the state machine's current state for a drag-canvas
    /// sub-state.
    fn drag_canvas_config(&self) -> Option<DragCanvasConfig>;

    /// Mutable access to the drag-canvas sub-state, if the engine's state
    /// machine is currently in a state that exposes one.
    fn drag_canvas_config_mut(&mut self) -> Option<&mut DragCanvasConfig>;

    /// Replace the current model with one rebuilt from persisted story data.
    fn load_story(&mut self, data: &serde_json::Value) -> Result<(), EngineError>;

    /// Serialize the current model for persistence.
    fn serialize_story(&self) -> serde_json::Value;
}
