use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::track::Track;

use super::{AllTrackEntry, AppData};

/// All tracks of one catalog load, in source order.
#[derive(Debug, Clone, Default)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
    index: HashMap<u32, usize>,
}

impl TrackCatalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut catalog = Self::default();
        for track in tracks {
            catalog.push(track);
        }
        catalog
    }

    /// Load `AllTrackList.json` and, when given, the localized titles from
    /// `appdata.json`.
    pub fn load<P: AsRef<Path>>(all_track_path: P, app_data_path: Option<&Path>) -> Result<Self> {
        let all_track_path = all_track_path.as_ref();
        let entries = AllTrackEntry::load_all(all_track_path)?;
        info!(
            "Loaded {} track records from {}",
            entries.len(),
            all_track_path.display()
        );

        let app_data = match app_data_path {
            Some(path) => AppData::load_or_default(path)?,
            None => AppData::default(),
        };

        Ok(Self::from_entries(entries, &app_data))
    }

    /// Build tracks from raw records, attaching localized titles.
    ///
    /// Records with an empty name are skipped and duplicate ids keep the first
    /// record.
    pub fn from_entries(entries: Vec<AllTrackEntry>, app_data: &AppData) -> Self {
        let mut catalog = Self::default();

        for entry in entries {
            if entry.name.is_empty() {
                warn!("Skipping track {} with empty title", entry.id);
                continue;
            }
            if catalog.index.contains_key(&entry.id) {
                warn!("Skipping duplicate track id {} ({})", entry.id, entry.name);
                continue;
            }

            let mut track = Track::new(entry.id, entry.name)
                .with_composer(entry.composer)
                .with_category(entry.dlc_code);
            if let Some(title) = app_data.english_title(entry.id) {
                track = track.with_title_en(title);
            }
            if let Some(title) = app_data.japanese_title(entry.id) {
                track = track.with_title_ja(title);
            }
            catalog.push(track);
        }

        for id in app_data
            .english_titles
            .keys()
            .chain(app_data.japanese_titles.keys())
            .filter(|id| !catalog.index.contains_key(*id))
        {
            debug!("Localized title for unknown track id {}", id);
        }

        catalog
    }

    fn push(&mut self, track: Track) {
        if self.index.contains_key(&track.id()) {
            warn!("Skipping duplicate track id {}", track.id());
            return;
        }
        self.index.insert(track.id(), self.tracks.len());
        self.tracks.push(track);
    }

    pub fn get(&self, id: u32) -> Option<&Track> {
        self.index.get(&id).map(|&i| &self.tracks[i])
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl<'a> IntoIterator for &'a TrackCatalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
