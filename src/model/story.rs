// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// A named, persisted diagram snapshot known to the client.
///
/// Descriptors are what the story picker lists; the payload itself stays in
/// the persistence collaborator until a load is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDescriptor {
    name: String,
}

impl StoryDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
