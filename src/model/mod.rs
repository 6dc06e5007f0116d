// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! Typed ids, node templates/snapshots, story descriptors, and the UI enums
//! the store's metadata tracks.

pub mod ids;
pub mod node;
pub mod story;
pub mod ui;

pub use ids::{Id, IdError, LinkId, NodeId};
pub use node::{Node, NodeTemplate, Position};
pub use story::StoryDescriptor;
pub use ui::{Inspector, InspectorMode, Page};
