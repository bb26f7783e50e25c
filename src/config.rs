// channel-term - A terminal chat client with channel, log and input panes
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::app::keys::{Action, InputMode};
use crate::error::AppError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "channel-term";
const CONFIG_FILE: &str = "config.json";

/// Sidebar width in twelfths of the terminal width.
pub const MIN_SIDEBAR_WIDTH: u16 = 1;
pub const MAX_SIDEBAR_WIDTH: u16 = 11;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sidebar_width: u16,
    pub page_step: usize,
    pub bell: bool,
    /// Messages fetched on channel switch; 0 means "as many as the chat pane shows".
    pub history_count: usize,
    pub key_map: HashMap<InputMode, HashMap<String, Action>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_width: MIN_SIDEBAR_WIDTH,
            page_step: crate::app::chat::DEFAULT_PAGE_STEP,
            bell: true,
            history_count: 0,
            key_map: HashMap::new(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
    }

    /// Load from `path`, or the default location when `None`. A missing file yields
    /// the defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            tracing::info!("no config directory available, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| {
            tracing::error!("failed to read config {}: {e}", path.display());
            AppError::ConfigInvalid
        })?;
        let config = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let mut config: Self = serde_json::from_str(content).map_err(|e| {
            tracing::error!("invalid config: {e}");
            AppError::ConfigInvalid
        })?;
        config.sidebar_width = config.sidebar_width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);
        config.page_step = config.page_step.max(1);
        Ok(config)
    }
}
