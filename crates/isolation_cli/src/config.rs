use std::path::{Path, PathBuf};

use isolation_core::Player;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Deepest search the front end accepts. The tree grows by a factor of a few
/// hundred per ply, so anything past this is impractical interactively.
pub const MAX_DEPTH: u8 = 6;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub play: PlayConfig,
    pub selfplay: SelfPlayConfig,
    pub session: SessionConfig,
}

/// Human vs engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Side the engine plays
    pub ai_player: Player,
    pub depth: u8,
    /// List walkable neighbours before asking for the human's move
    pub show_hints: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            ai_player: Player::Player1,
            depth: 3,
            show_hints: true,
        }
    }
}

/// Engine vs engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub player1_depth: u8,
    pub player2_depth: u8,
    /// Emit one JSON snapshot per turn instead of text
    pub json: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            player1_depth: 2,
            player2_depth: 2,
            json: false,
        }
    }
}

/// Record-based boundary. Callers there are latency sensitive, so the
/// default depth is shallow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub ai_player: Player,
    pub ai_depth: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_player: Player::Player1,
            ai_depth: 2,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let depths = [
            ("play.depth", self.play.depth),
            ("selfplay.player1_depth", self.selfplay.player1_depth),
            ("selfplay.player2_depth", self.selfplay.player2_depth),
            ("session.ai_depth", self.session.ai_depth),
        ];
        for (name, depth) in depths {
            if depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DEPTH}, got {depth}"
                )));
            }
        }
        Ok(())
    }
}
