// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// Canvas coordinates of a node, in diagram-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node-template descriptor offered for insertion.
///
/// Templates carry no identity; the store assigns a serial (and a serial-derived
/// id) when a node is created from one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTemplate {
    name: String,
    category: String,
}

impl NodeTemplate {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A node as the engine reports it: identity, template fields, placement,
/// and (after a run) feature data the inspector can show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    serial: u64,
    name: String,
    category: String,
    position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    features: Option<serde_json::Value>,
}

impl Node {
    pub fn from_template(serial: u64, template: &NodeTemplate) -> Self {
        Self {
            id: NodeId::from_serial(serial),
            serial,
            name: template.name().to_owned(),
            category: template.category().to_owned(),
            position: Position::default(),
            features: None,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn features(&self) -> Option<&serde_json::Value> {
        self.features.as_ref()
    }

    pub fn set_features(&mut self, features: Option<serde_json::Value>) {
        self.features = features;
    }

    /// A node is inspectable once it carries feature data to show.
    pub fn is_inspectable(&self) -> bool {
        self.features.is_some()
    }
}
