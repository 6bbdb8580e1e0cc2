use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Language mode the game (and therefore this tool) is configured to mimic.
///
/// Controls both which title text is shown for a track and how titles are
/// ordered in lists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum GameLanguage {
    #[default]
    #[strum(to_string = "Korean", serialize = "ko")]
    Korean,
    #[strum(to_string = "English", serialize = "en")]
    English,
    #[strum(to_string = "Japanese", serialize = "ja")]
    Japanese,
    #[strum(to_string = "Chinese", serialize = "zh")]
    Chinese,
}

impl GameLanguage {
    /// Parse from an English name (`"japanese"`) or short code (`"ja"`).
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value.trim()).map_err(|_| Error::InvalidLanguage(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn is_korean(&self) -> bool {
        matches!(self, Self::Korean)
    }
}
