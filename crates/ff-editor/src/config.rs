//! Editor configuration.
//!
//! Every field has a default, so a partial (or missing) TOML file is fine.

use crate::history::DEFAULT_HISTORY_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the canvas holds when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    #[default]
    Empty,
    /// Three stock steps wired in a chain.
    Demo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum stored history entries, including the seed.
    pub history_depth: usize,
    /// Snap a cancelled reposition back to where the drag started.
    pub revert_cancelled_reposition: bool,
    pub seed: SeedKind,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_HISTORY_DEPTH,
            revert_cancelled_reposition: true,
            seed: SeedKind::Empty,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from a TOML file, falling back to defaults on any error.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("config file {} is invalid, using defaults: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
