use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

use super::strip_bom;

/// A DLC category known to the selector, keyed by its V-Archive `dlcCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Known categories and localized navigation titles from `appdata.json`.
///
/// Title map keys are track ids written as JSON strings. Other selector
/// tables (category types, PLI, link discs) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    pub categories: Vec<Category>,
    pub english_titles: HashMap<u32, String>,
    pub japanese_titles: HashMap<u32, String>,
}

impl AppData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(strip_bom(content))?)
    }

    /// Load the file if it exists; a missing file means no localized titles.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("{} not found, using original titles only", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn english_title(&self, id: u32) -> Option<&str> {
        self.english_titles.get(&id).map(String::as_str)
    }

    pub fn japanese_title(&self, id: u32) -> Option<&str> {
        self.japanese_titles.get(&id).map(String::as_str)
    }

    pub fn has_category(&self, code: &str) -> bool {
        self.categories.iter().any(|category| category.id == code)
    }
}
