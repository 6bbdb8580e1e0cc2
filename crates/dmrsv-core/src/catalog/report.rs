use strum::{Display, EnumString};

use std::collections::BTreeMap;

use crate::track::Track;

use super::{AllTrackEntry, AppData, TrackCatalog};

/// Script a title is written in, as far as translation work is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ScriptTag {
    #[strum(serialize = "KO")]
    Korean,
    #[strum(serialize = "JA")]
    Japanese,
    #[strum(serialize = "OTHER")]
    Other,
}

/// Which localized title a report checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TranslationKind {
    English,
    Japanese,
}

impl TranslationKind {
    fn is_covered(&self, track: &Track) -> bool {
        match self {
            Self::English => track.title_en().is_some(),
            Self::Japanese => track.title_ja().is_some(),
        }
    }
}

/// A track whose non-ASCII title has no localized counterpart yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTitle {
    pub id: u32,
    pub title: String,
    pub script: ScriptTag,
}

/// Korean wins over Japanese when a title mixes both.
pub fn detect_script(text: &str) -> ScriptTag {
    let has_korean = text
        .chars()
        .any(|c| matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{3131}'..='\u{3163}'));
    if has_korean {
        return ScriptTag::Korean;
    }
    let has_japanese = text
        .chars()
        .any(|c| matches!(c, '\u{3040}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}'));
    if has_japanese {
        return ScriptTag::Japanese;
    }
    ScriptTag::Other
}

/// List tracks with non-ASCII titles that lack a title of `kind`, by id.
pub fn missing_translations(catalog: &TrackCatalog, kind: TranslationKind) -> Vec<MissingTitle> {
    let mut missing: Vec<MissingTitle> = catalog
        .iter()
        .filter(|track| !track.title().is_ascii() && !kind.is_covered(track))
        .map(|track| MissingTitle {
            id: track.id(),
            title: track.title().to_string(),
            script: detect_script(track.title()),
        })
        .collect();
    missing.sort_by_key(|m| m.id);
    missing
}

/// A DLC code in the track list with no category in `appdata.json` yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub code: String,
    pub name: String,
    pub track_count: usize,
}

/// List DLC codes used by the track list but absent from `app_data`, by code.
///
/// The name is the first `dlc` seen for the code. Records without a code are
/// not counted.
pub fn new_categories(entries: &[AllTrackEntry], app_data: &AppData) -> Vec<NewCategory> {
    let mut found: BTreeMap<&str, NewCategory> = BTreeMap::new();
    for entry in entries.iter().filter(|e| !e.dlc_code.is_empty()) {
        found
            .entry(entry.dlc_code.as_str())
            .or_insert_with(|| NewCategory {
                code: entry.dlc_code.clone(),
                name: entry.dlc.clone(),
                track_count: 0,
            })
            .track_count += 1;
    }

    found
        .into_values()
        .filter(|category| !app_data.has_category(&category.code))
        .collect()
}
