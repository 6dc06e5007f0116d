// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! Storyloom — coordination store for a node-and-link diagram editor.
//!
//! The [`store::Store`] mediates between a diagram engine (behind
//! [`engine::DiagramEngine`]), modal dialogs, and the workbench/inspector
//! pages. Rendering, transport, and persistence backends live outside this
//! crate and plug in through the traits in [`engine`], [`notify`], and
//! [`storage`].

pub mod client;
pub mod engine;
pub mod model;
pub mod nav;
pub mod notify;
pub mod storage;
pub mod store;
