//! Sorted display lists.
//!
//! A display list pairs every track with the title resolved for one game
//! language and orders the pairs with the matching collator. Positions in the
//! list are the number of Down presses from the top of the in-game list.

use tracing::debug;

use crate::catalog::TrackCatalog;
use crate::collation::TitleCollator;
use crate::track::{GameLanguage, TitleResolver, Track};

/// One row of a display list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntry<'a> {
    pub track: &'a Track,
    pub title: &'a str,
}

#[derive(Debug, Clone)]
pub struct DisplayList<'a> {
    language: GameLanguage,
    entries: Vec<DisplayEntry<'a>>,
}

impl<'a> DisplayList<'a> {
    /// Resolve and sort `tracks` for `language`.
    ///
    /// Titles that are equal after normalization keep a deterministic order by
    /// track id.
    pub fn build<I>(tracks: I, language: GameLanguage) -> Self
    where
        I: IntoIterator<Item = &'a Track>,
    {
        let collator = TitleCollator::new(language);
        let mut entries: Vec<DisplayEntry<'a>> = tracks
            .into_iter()
            .map(|track| DisplayEntry {
                track,
                title: TitleResolver::resolve(track, language),
            })
            .collect();
        entries.sort_by_cached_key(|entry| (collator.sort_key(entry.title), entry.track.id()));
        debug!("Sorted {} titles for {}", entries.len(), language);

        Self { language, entries }
    }

    pub fn from_catalog(catalog: &'a TrackCatalog, language: GameLanguage) -> Self {
        Self::build(catalog.iter(), language)
    }

    pub fn language(&self) -> GameLanguage {
        self.language
    }

    /// 0-based position of a track, i.e. Down presses from the first entry.
    pub fn position(&self, id: u32) -> Option<usize> {
        self.entries.iter().position(|entry| entry.track.id() == id)
    }

    pub fn entries(&self) -> &[DisplayEntry<'a>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayEntry<'a>> {
        self.entries.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|entry| entry.title)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<Track> {
        vec![
            Track::new(1, "Airwave"),
            Track::new(31, "나비").with_title_en("Butterfly"),
            Track::new(40, "夜明け").with_title_en("Daybreak").with_title_ja("ヨアケ"),
            Track::new(7, "7 Sins"),
            Track::new(9, "원곡"),
        ]
    }

    #[test]
    fn test_korean_list() {
        let tracks = tracks();
        let list = DisplayList::build(&tracks, GameLanguage::Korean);
        let titles: Vec<&str> = list.titles().collect();
        assert_eq!(titles, vec!["나비", "원곡", "夜明け", "7 Sins", "Airwave"]);
    }

    #[test]
    fn test_english_list_resolves_before_sorting() {
        let tracks = tracks();
        let list = DisplayList::build(&tracks, GameLanguage::English);
        let titles: Vec<&str> = list.titles().collect();
        assert_eq!(titles, vec!["7 Sins", "Airwave", "Butterfly", "Daybreak", "원곡"]);
    }

    #[test]
    fn test_japanese_list() {
        let tracks = tracks();
        let list = DisplayList::build(&tracks, GameLanguage::Japanese);
        let titles: Vec<&str> = list.titles().collect();
        assert_eq!(titles, vec!["7 Sins", "Airwave", "Butterfly", "ヨアケ", "원곡"]);
    }

    #[test]
    fn test_position() {
        let tracks = tracks();
        let list = DisplayList::build(&tracks, GameLanguage::English);
        assert_eq!(list.position(7), Some(0));
        assert_eq!(list.position(9), Some(4));
        assert_eq!(list.position(999), None);
    }

    #[test]
    fn test_equal_titles_ordered_by_id() {
        let tracks = vec![Track::new(20, "Ex-Tinction"), Track::new(10, "EXTINCTION")];
        let list = DisplayList::build(&tracks, GameLanguage::Korean);
        let ids: Vec<u32> = list.iter().map(|e| e.track.id()).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_empty() {
        let tracks: Vec<Track> = Vec::new();
        let list = DisplayList::build(&tracks, GameLanguage::Korean);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
