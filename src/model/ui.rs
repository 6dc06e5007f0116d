// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// The page the workbench chrome currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Workbench,
    Inspector,
}

/// How the inspector presents a node's feature data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InspectorMode {
    #[default]
    Table,
    Raw,
}

/// Which node the inspector targets, and how it renders it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inspector {
    node_id: Option<NodeId>,
    mode: InspectorMode,
}

impl Inspector {
    pub fn node_id(&self) -> Option<&NodeId> {
        self.node_id.as_ref()
    }

    pub fn set_node_id(&mut self, node_id: Option<NodeId>) {
        self.node_id = node_id;
    }

    pub fn mode(&self) -> InspectorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InspectorMode) {
        self.mode = mode;
    }
}
