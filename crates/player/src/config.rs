//! Player configuration
//!
//! Values come from environment variables (after `.env.local` / `.env` have
//! been loaded by the binary). Unset variables fall back to defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::presentation::layout::DocumentLayout;

const DEFAULT_GAME_ID: &str = "local";
const DEFAULT_MISSION_COUNT: u8 = 5;

pub const ENV_LOCAL_PLAYER: &str = "THAVALON_LOCAL_PLAYER";
pub const ENV_GAME_ID: &str = "THAVALON_GAME_ID";
pub const ENV_LEGACY_POPOVER_SEPARATOR: &str = "THAVALON_LEGACY_POPOVER_SEPARATOR";
pub const ENV_PRIOR_VOTES_MOUNT: &str = "THAVALON_PRIOR_VOTES_MOUNT";
pub const ENV_MISSION_COUNT: &str = "THAVALON_MISSION_COUNT";
pub const ENV_LAYOUT: &str = "THAVALON_LAYOUT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Could not read layout file {path}: {source}")]
    LayoutRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse layout file {path}: {source}")]
    LayoutParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rendering choices that are not part of the game rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationConfig {
    /// Keep the trailing ", " after the last card in mission popovers
    pub legacy_popover_separator: bool,
    /// Render prior vote results into this mount point instead of the
    /// proposal content region
    pub prior_votes_mount: Option<String>,
    /// Number of mission indicators on the page
    pub mission_count: u8,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            legacy_popover_separator: false,
            prior_votes_mount: None,
            mission_count: DEFAULT_MISSION_COUNT,
        }
    }
}

/// Everything the player needs at session bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub local_player: Option<String>,
    pub game_id: String,
    pub presentation: PresentationConfig,
    pub layout: DocumentLayout,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            local_player: None,
            game_id: DEFAULT_GAME_ID.to_string(),
            presentation: PresentationConfig::default(),
            layout: DocumentLayout::default(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();
        config.local_player = get(ENV_LOCAL_PLAYER);
        if let Some(game_id) = get(ENV_GAME_ID) {
            config.game_id = game_id;
        }

        if let Some(raw) = get(ENV_LEGACY_POPOVER_SEPARATOR) {
            config.presentation.legacy_popover_separator =
                parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                    var: ENV_LEGACY_POPOVER_SEPARATOR,
                    value: raw.clone(),
                    reason: "expected true/false",
                })?;
        }

        config.presentation.prior_votes_mount = get(ENV_PRIOR_VOTES_MOUNT);

        if let Some(raw) = get(ENV_MISSION_COUNT) {
            config.presentation.mission_count = match raw.parse::<u8>() {
                Ok(count) if count > 0 => count,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_MISSION_COUNT,
                        value: raw,
                        reason: "expected a positive integer below 256",
                    })
                }
            };
        }

        if let Some(path) = get(ENV_LAYOUT) {
            config.layout = load_layout(PathBuf::from(path))?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn load_layout(path: PathBuf) -> Result<DocumentLayout, ConfigError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::LayoutRead {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::LayoutParse { path, source })
}
