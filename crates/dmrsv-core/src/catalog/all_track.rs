use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

use super::strip_bom;

/// One record of `AllTrackList.json`.
///
/// V-Archive stores the numeric track id under `title` and the display title
/// under `name`. Pattern data and other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTrackEntry {
    #[serde(rename = "title")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub composer: String,
    #[serde(default)]
    pub dlc_code: String,
    #[serde(default)]
    pub dlc: String,
}

impl AllTrackEntry {
    /// Load the track list from a file
    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        Self::parse_all(&content)
    }

    /// Parse the track list from a JSON array
    pub fn parse_all(content: &str) -> Result<Vec<Self>> {
        serde_json::from_str(strip_bom(content)).map_err(|e| Error::TrackListParse(e.to_string()))
    }
}
