// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! Story persistence and the load/save/clear coordination flows.
//!
//! [`StoryStorage`] is the key-value collaborator holding serialized stories
//! addressable by name. The flows in this module are the only fallible
//! surface around the store: a failed load reports to the user and the
//! diagnostic log, then aborts without mutating the store.

use std::collections::BTreeMap;
use std::fmt;

use crate::engine::EngineError;
use crate::model::StoryDescriptor;
use crate::notify::{Notification, Severity};
use crate::store::Store;

pub trait StoryStorage {
    fn get(&self, name: &str) -> Option<serde_json::Value>;

    fn put(&mut self, name: &str, data: serde_json::Value);

    /// Story names currently persisted, in stable order.
    fn keys(&self) -> Vec<String>;

    fn clear_all(&mut self);
}

/// In-memory storage. Doubles as the test stand-in for cookie- or
/// file-backed implementations.
#[derive(Debug, Default)]
pub struct MemoryStoryStorage {
    entries: BTreeMap<String, serde_json::Value>,
}

impl MemoryStoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoryStorage for MemoryStoryStorage {
    fn get(&self, name: &str) -> Option<serde_json::Value> {
        self.entries.get(name).cloned()
    }

    fn put(&mut self, name: &str, data: serde_json::Value) {
        self.entries.insert(name.to_owned(), data);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn clear_all(&mut self) {
        self.entries.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    NotFound { name: String },
    NoEngine { name: String },
    Engine { name: String, source: EngineError },
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "story '{name}' not found in storage"),
            Self::NoEngine { name } => {
                write!(f, "no diagram engine attached, cannot load story '{name}'")
            }
            Self::Engine { name, source } => write!(f, "story '{name}': {source}"),
        }
    }
}

impl std::error::Error for StoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn descriptors(storage: &dyn StoryStorage) -> Vec<StoryDescriptor> {
    storage.keys().into_iter().map(StoryDescriptor::new).collect()
}

/// Rebuild the engine's model from the persisted story `name` and make it
/// the active story.
///
/// On failure the user gets an error notification, the diagnostics go to the
/// log, and the store is left unmutated.
pub fn load_story(
    store: &mut Store,
    storage: &dyn StoryStorage,
    name: &str,
) -> Result<(), StoryError> {
    let result = try_load(store, storage, name);
    if let Err(err) = &result {
        log::error!("could not load story '{name}': {err}");
        store.notify(Notification::new(
            format!("Could not load story {name}. Check the diagnostic log."),
            Severity::Error,
        ));
    }
    result
}

fn try_load(store: &mut Store, storage: &dyn StoryStorage, name: &str) -> Result<(), StoryError> {
    let data = storage.get(name).ok_or_else(|| StoryError::NotFound {
        name: name.to_owned(),
    })?;

    let engine = store.engine_mut().ok_or_else(|| StoryError::NoEngine {
        name: name.to_owned(),
    })?;
    engine.load_story(&data).map_err(|source| StoryError::Engine {
        name: name.to_owned(),
        source,
    })?;

    store.set_active_story(name);
    store.refresh_diagram();
    Ok(())
}

/// Serialize the current model under `name`, refresh the known story list,
/// and notify success.
pub fn save_story(
    store: &mut Store,
    storage: &mut dyn StoryStorage,
    name: &str,
) -> Result<(), StoryError> {
    let engine = store.engine_mut().ok_or_else(|| StoryError::NoEngine {
        name: name.to_owned(),
    })?;
    let data = engine.serialize_story();

    storage.put(name, data);
    store.set_stories(descriptors(storage));
    store.set_active_story(name);
    store.notify(Notification::new(
        "Successfully saved story!",
        Severity::Success,
    ));
    Ok(())
}

/// Wipe the persisted stories and reset the store's list from whatever keys
/// remain.
pub fn clear_stories(store: &mut Store, storage: &mut dyn StoryStorage) {
    storage.clear_all();
    store.set_stories(descriptors(storage));
}
