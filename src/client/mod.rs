// SPDX-FileCopyrightText: 2026 Storyloom contributors
// SPDX-License-Identifier: MIT

//! Runtime configuration and the backend client handle.
//!
//! The client is constructed once from process-wide configuration and held by
//! the store's metadata; the store never drives it.

use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Blank means the local default server.
    #[serde(default)]
    pub url: String,
}

/// Process-wide runtime configuration, typically injected by the host shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub app_name: String,
    #[serde(default)]
    pub app_desc: String,
    #[serde(default)]
    pub server: ServerConfig,
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Malformed {
            reason: err.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Malformed { reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { reason } => write!(f, "malformed runtime config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Handle to the backend the diagrams run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    app_name: String,
    app_desc: String,
    server_url: String,
}

impl Client {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let server_url = if config.server.url.is_empty() {
            DEFAULT_SERVER_URL.to_owned()
        } else {
            config.server.url.clone()
        };

        Self {
            app_name: config.app_name.clone(),
            app_desc: config.app_desc.clone(),
            server_url,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_desc(&self) -> &str {
        &self.app_desc
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}
