//! Tool configuration.
//!
//! Stored as JSON next to the executable. Missing keys take their defaults so
//! older configuration files keep loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::track::GameLanguage;

/// Default location of the cached V-Archive track list.
pub const DEFAULT_ALL_TRACK_FILE: &str = "DMRSV3_Data/AllTrackList.json";

/// Default location of the localized title tables.
pub const DEFAULT_APP_DATA_FILE: &str = "DMRSV3_Data/appdata.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_language")]
    pub game_language: GameLanguage,
    pub all_track_file: PathBuf,
    pub app_data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_language: GameLanguage::default(),
            all_track_file: PathBuf::from(DEFAULT_ALL_TRACK_FILE),
            app_data_file: PathBuf::from(DEFAULT_APP_DATA_FILE),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Unknown language names fall back to the default instead of failing the
/// whole file.
fn deserialize_language<'de, D>(deserializer: D) -> std::result::Result<GameLanguage, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(GameLanguage::parse(&value).unwrap_or_else(|_| {
        warn!("Unknown game language {:?}, using {}", value, GameLanguage::default());
        GameLanguage::default()
    }))
}
