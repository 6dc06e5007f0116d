// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{DiagramEngine, DragCanvasConfig, EngineError, EntityRef};
use crate::model::{Node, NodeId, NodeTemplate, Position};

#[derive(Debug, Serialize, Deserialize)]
struct StoryPayload {
    nodes: Vec<Node>,
}

/// In-memory engine used by unit tests.
///
/// Mirrors the observable contract of a real canvas engine: a node list, a
/// selection, a lock flag, and an optional drag-canvas sub-state. The
/// clear-label/clear-feature pass-throughs are counted through shared cells
/// so tests keep a handle after the store takes ownership of the engine.
#[derive(Debug, Default)]
pub(crate) struct InMemoryEngine {
    nodes: Vec<Node>,
    selected: Vec<EntityRef>,
    locked: bool,
    drag_canvas: Option<DragCanvasConfig>,
    link_label_clears: Rc<Cell<u32>>,
    node_feature_clears: Rc<Cell<u32>>,
}

impl InMemoryEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_drag_canvas(allow_drag: bool) -> Self {
        Self {
            drag_canvas: Some(DragCanvasConfig { allow_drag }),
            ..Self::default()
        }
    }

    pub(crate) fn place_node(&mut self, serial: u64, name: &str, x: f64, y: f64) -> NodeId {
        let mut node = Node::from_template(serial, &NodeTemplate::new(name, "test"));
        node.set_position(Position::new(x, y));
        let id = node.id().clone();
        self.nodes.push(node);
        id
    }

    pub(crate) fn select_only(&mut self, entity: EntityRef) {
        self.selected = vec![entity];
    }

    pub(crate) fn annotate_node(&mut self, node_id: &NodeId, features: serde_json::Value) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id() == node_id) {
            node.set_features(Some(features));
        }
    }

    /// Counter handle that survives handing the engine to the store.
    pub(crate) fn link_label_clears(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.link_label_clears)
    }

    pub(crate) fn node_feature_clears(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.node_feature_clears)
    }
}

impl DiagramEngine for InMemoryEngine {
    fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn selected_entities(&self) -> Vec<EntityRef> {
        self.selected.clone()
    }

    fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn set_node_selected(&mut self, node_id: &NodeId, selected: bool) {
        if self.nodes.iter().all(|n| n.id() != node_id) {
            return;
        }
        let entity = EntityRef::Node(node_id.clone());
        if selected {
            if !self.selected.contains(&entity) {
                self.selected.push(entity);
            }
        } else {
            self.selected.retain(|e| e != &entity);
        }
    }

    fn clear_link_labels(&mut self) {
        self.link_label_clears.set(self.link_label_clears.get() + 1);
    }

    fn clear_node_features(&mut self) {
        self.node_feature_clears
            .set(self.node_feature_clears.get() + 1);
        for node in &mut self.nodes {
            node.set_features(None);
        }
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    fn locked(&self) -> bool {
        self.locked
    }

    fn drag_canvas_config(&self) -> Option<DragCanvasConfig> {
        self.drag_canvas
    }

    fn drag_canvas_config_mut(&mut self) -> Option<&mut DragCanvasConfig> {
        self.drag_canvas.as_mut()
    }

    fn load_story(&mut self, data: &serde_json::Value) -> Result<(), EngineError> {
        let payload: StoryPayload =
            serde_json::from_value(data.clone()).map_err(|err| EngineError::MalformedStory {
                reason: err.to_string(),
            })?;
        self.nodes = payload.nodes;
        self.selected.clear();
        Ok(())
    }

    fn serialize_story(&self) -> serde_json::Value {
        serde_json::json!({ "nodes": self.nodes })
    }
}
