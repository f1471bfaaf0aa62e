//! Settings read from a json file.
//!
//! Example file, every key is optional:
//! ```json
//! {
//!     "Bot": {
//!         "IsWhiteBot": false,
//!         "IsBlackBot": true,
//!         "WhiteBotLevel": 3,
//!         "BlackBotLevel": 3,
//!         "BotScoringType": "NumberAndPotential",
//!         "Optimization": "O1",
//!         "NoRandom": false
//!     },
//!     "Game": {
//!         "MaxNumTurns": 120
//!     }
//! }
//! ```
//! Sections and keys that are not listed above are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::coretypes::{PlyKind, Side};
use crate::error;
use crate::evaluation::ScoringMode;
use crate::search::Optimization;

/// Default path of the settings file.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Bot players and search configuration.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BotSettings {
    pub is_white_bot: bool,
    pub is_black_bot: bool,
    pub white_bot_level: PlyKind,
    pub black_bot_level: PlyKind,
    pub bot_scoring_type: String,
    pub optimization: String,
    pub no_random: bool,
}

impl BotSettings {
    /// Returns true if `side` is played by the engine.
    pub fn is_bot(&self, side: Side) -> bool {
        match side {
            Side::White => self.is_white_bot,
            Side::Black => self.is_black_bot,
        }
    }

    /// Search depth used for the bot playing `side`.
    pub fn level(&self, side: Side) -> PlyKind {
        match side {
            Side::White => self.white_bot_level,
            Side::Black => self.black_bot_level,
        }
    }

    pub fn scoring(&self) -> ScoringMode {
        ScoringMode::from_setting(&self.bot_scoring_type)
    }

    pub fn optimization(&self) -> Optimization {
        Optimization::from_setting(&self.optimization)
    }
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            is_white_bot: false,
            is_black_bot: true,
            white_bot_level: 3,
            black_bot_level: 3,
            bot_scoring_type: ScoringMode::NumberAndPotential.to_string(),
            optimization: Optimization::Pruning.to_string(),
            no_random: false,
        }
    }
}

/// Game rules configuration.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GameSettings {
    /// Number of completed turns after which the game is a draw.
    pub max_num_turns: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { max_num_turns: 120 }
    }
}

/// All settings, and the file they were read from if any.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "Bot")]
    pub bot: BotSettings,
    #[serde(rename = "Game")]
    pub game: GameSettings,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from a json string. The result is not bound to any file.
    pub fn from_json_str(json: &str) -> error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from the json file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> error::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let mut settings = Self::from_json_str(&contents)?;
        settings.path = Some(path.to_path_buf());
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings from `path`, falling back to defaults if the file cannot be read or parsed.
    /// The fallback stays bound to `path`, so a later `reload` picks up a fixed file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("using default settings, {}: {err}", path.display());
            Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            }
        })
    }

    /// Re-read the file these settings came from. Settings without a file are left unchanged.
    /// On error the current settings are kept.
    pub fn reload(&mut self) -> error::Result<()> {
        if let Some(path) = self.path.take() {
            let loaded = Self::load(&path);
            self.path = Some(path);
            let loaded = loaded?;
            self.bot = loaded.bot;
            self.game = loaded.game;
        }
        Ok(())
    }

    /// Path of the file these settings were read from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
