use super::{GameLanguage, Track};

/// Picks the one title that represents a track under a game language.
///
/// The fallback chain takes the first present value:
/// - Korean: original title
/// - English, Chinese: English title, then original
/// - Japanese: Japanese title, then English title, then original
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleResolver;

impl TitleResolver {
    pub fn resolve(track: &Track, language: GameLanguage) -> &str {
        match language {
            GameLanguage::English | GameLanguage::Chinese => {
                track.title_en().unwrap_or(track.title())
            }
            GameLanguage::Japanese => track
                .title_ja()
                .or(track.title_en())
                .unwrap_or(track.title()),
            GameLanguage::Korean => track.title(),
        }
    }
}

impl Track {
    /// Title to display and sort by under `language`.
    pub fn display_title(&self, language: GameLanguage) -> &str {
        TitleResolver::resolve(self, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn localized() -> Track {
        Track::new(1, "원곡")
            .with_title_en("Original Song")
            .with_title_ja("オリジナル")
    }

    #[test]
    fn test_korean_always_uses_original() {
        assert_eq!(TitleResolver::resolve(&localized(), GameLanguage::Korean), "원곡");
    }

    #[test]
    fn test_english_and_chinese_use_english_title() {
        let track = localized();
        assert_eq!(
            TitleResolver::resolve(&track, GameLanguage::English),
            "Original Song"
        );
        assert_eq!(
            TitleResolver::resolve(&track, GameLanguage::Chinese),
            "Original Song"
        );
    }

    #[test]
    fn test_japanese_prefers_japanese_title() {
        assert_eq!(
            TitleResolver::resolve(&localized(), GameLanguage::Japanese),
            "オリジナル"
        );
    }

    #[test]
    fn test_japanese_falls_through_to_english() {
        let track = Track::new(1, "원곡").with_title_en("Original Song");
        assert_eq!(
            TitleResolver::resolve(&track, GameLanguage::Japanese),
            "Original Song"
        );
        assert_eq!(TitleResolver::resolve(&track, GameLanguage::Korean), "원곡");
    }

    #[test]
    fn test_japanese_only_title_is_ignored_outside_japanese() {
        let track = Track::new(1, "원곡").with_title_ja("オリジナル");
        assert_eq!(TitleResolver::resolve(&track, GameLanguage::English), "원곡");
        assert_eq!(TitleResolver::resolve(&track, GameLanguage::Chinese), "원곡");
    }

    #[test]
    fn test_no_localized_titles_uses_original_everywhere() {
        let track = Track::new(2, "Airwave");
        for language in GameLanguage::iter() {
            assert_eq!(track.display_title(language), "Airwave");
        }
    }
}
