// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Paths left empty
//! resolve to files next to the configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_NAME: &str = "tagui";

const LIBRARY_FILE: &str = "library.db";
const CACHE_FILE: &str = "songs.json";
const LOG_FILE: &str = "tagui.log";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub library_path: String,
    pub cache_path: String,
    pub log_file: String,
    pub media_dirs: Vec<String>,
    /// View query string restored on the next start.
    pub last_view: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            library_path: String::new(),
            cache_path: String::new(),
            log_file: String::new(),
            media_dirs: vec![],
            last_view: String::new(),
        }
    }
}

impl AppConfig {
    pub fn library_path(&self) -> PathBuf {
        resolve(&self.library_path, LIBRARY_FILE)
    }

    pub fn cache_path(&self) -> PathBuf {
        resolve(&self.cache_path, CACHE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        resolve(&self.log_file, LOG_FILE)
    }
}

fn resolve(configured: &str, default_name: &str) -> PathBuf {
    if !configured.is_empty() {
        return PathBuf::from(configured);
    }

    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|p| p.parent().map(|dir| dir.join(default_name)))
        .unwrap_or_else(|| PathBuf::from(default_name))
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    })
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_paths_win() {
        let cfg = AppConfig {
            library_path: "/srv/music/library.db".to_string(),
            ..AppConfig::default()
        };

        assert_eq!(cfg.library_path(), PathBuf::from("/srv/music/library.db"));
    }

    #[test]
    fn empty_paths_use_default_file_names() {
        let cfg = AppConfig::default();

        assert!(cfg.cache_path().ends_with(CACHE_FILE));
        assert!(cfg.log_path().ends_with(LOG_FILE));
    }
}
