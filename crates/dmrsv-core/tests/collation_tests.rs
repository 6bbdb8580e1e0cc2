//! Tests for title resolution and ordering
//!
//! Exercises the public resolver and collator the way the selector uses them:
//! resolve one title per track, then sort with a collator for the same language.

use std::cmp::Ordering;

use dmrsv_core::{GameLanguage, TitleCollator, TitleResolver, Track};

/// Ordering properties over a mixed-script corpus
mod ordering_properties {
    use super::*;

    const CORPUS: &[&str] = &[
        "",
        "  ",
        "\u{3000}Intro",
        "!!!",
        "#Twitter",
        "(Intro)",
        "0",
        "1st Love",
        "7 Sins",
        "A",
        "A Lie",
        "A-Lie",
        "Alie",
        "ALiCE",
        "Ask to Wind",
        "Ask to Wind Live Mix",
        "Beyond the Future",
        "Bullet, Wanted!",
        "Dont Die",
        "Don't Die",
        "Groöve",
        "Groove",
        "Ｆｕｌｌｗｉｄｔｈ",
        "가",
        "가나다",
        "비상 ~Stay With Me~",
        "ㄱㄴㄷ",
        "あ",
        "アリス",
        "夜明け",
        "Ωmega",
        "Жизнь",
        "A가",
        "Aあ",
        "A1",
        "A ",
    ];

    fn all_collators() -> Vec<TitleCollator> {
        [
            GameLanguage::Korean,
            GameLanguage::English,
            GameLanguage::Japanese,
            GameLanguage::Chinese,
        ]
        .into_iter()
        .map(TitleCollator::new)
        .collect()
    }

    #[test]
    fn test_total_order() {
        for collator in all_collators() {
            for x in CORPUS {
                assert_eq!(collator.compare(x, x), Ordering::Equal);
                for y in CORPUS {
                    let xy = collator.compare(x, y);
                    assert_eq!(xy, collator.compare(y, x).reverse());
                    for z in CORPUS {
                        if xy != Ordering::Greater && collator.compare(y, z) != Ordering::Greater {
                            assert_ne!(collator.compare(x, z), Ordering::Greater);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_sorting_is_deterministic() {
        for collator in all_collators() {
            let mut forward: Vec<&str> = CORPUS.to_vec();
            let mut backward: Vec<&str> = CORPUS.iter().rev().copied().collect();
            forward.sort_by(|a, b| collator.compare(a, b));
            backward.sort_by(|a, b| collator.compare(a, b));

            let forward_keys: Vec<_> = forward.iter().map(|t| collator.sort_key(t)).collect();
            let backward_keys: Vec<_> = backward.iter().map(|t| collator.sort_key(t)).collect();
            assert_eq!(forward_keys, backward_keys);
        }
    }
}

/// Concrete orderings from the game's song select screen
mod ordering_examples {
    use super::*;

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let collator = TitleCollator::default();
        assert_eq!(collator.compare("Ex-Tinction", "EXTINCTION"), Ordering::Equal);
        assert_eq!(collator.compare("GRöOVE", "GROOVE"), Ordering::Equal);
        assert_eq!(collator.compare("A-Lie", "alie"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_rule() {
        let collator = TitleCollator::default();
        assert_eq!(collator.compare("PIANO", "PIANO 2"), Ordering::Less);
        assert_eq!(
            collator.compare("Ask to Wind", "Ask to Wind Live Mix"),
            Ordering::Less
        );
    }

    #[test]
    fn test_whitespace_first() {
        let collator = TitleCollator::new(GameLanguage::English);
        assert_eq!(collator.compare(" A", "!A"), Ordering::Less);
        assert_eq!(collator.compare("A Lie", "ALiCE"), Ordering::Less);
    }

    #[test]
    fn test_leading_script_by_language() {
        let korean = TitleCollator::new(GameLanguage::Korean);
        let english = TitleCollator::new(GameLanguage::English);

        assert_eq!(korean.compare("가나다", "ABC"), Ordering::Less);
        assert_eq!(english.compare("가나다", "ABC"), Ordering::Greater);
        assert_eq!(korean.compare("가나다", "アリス"), Ordering::Less);
        assert_eq!(korean.compare("アリス", "#Twitter"), Ordering::Less);
        assert_eq!(english.compare("アリス", "#Twitter"), Ordering::Greater);
    }

    #[test]
    fn test_absent_titles_last() {
        let collator = TitleCollator::new(GameLanguage::Japanese);
        let mut titles = vec![None, Some("Airwave"), None, Some("")];
        titles.sort_by(|a, b| collator.compare_optional(*a, *b));
        assert_eq!(titles, vec![Some(""), Some("Airwave"), None, None]);
    }
}

/// Resolver fallback chain
mod resolver {
    use super::*;

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
    fn test_original_title_without_localizations() {
        let track = Track::new(2, "비상 ~Stay With Me~");
        for language in [
            GameLanguage::Korean,
            GameLanguage::English,
            GameLanguage::Japanese,
            GameLanguage::Chinese,
        ] {
            assert_eq!(TitleResolver::resolve(&track, language), track.title());
        }
    }

    #[test]
    fn test_resolve_then_sort() {
        let tracks = vec![
            Track::new(1, "비상 ~Stay With Me~").with_title_en("Emergency ~Stay With Me~"),
            Track::new(2, "Airwave"),
            Track::new(3, "나비").with_title_en("Butterfly"),
        ];

        for (language, expected) in [
            (GameLanguage::Korean, vec![3, 1, 2]),
            (GameLanguage::English, vec![2, 3, 1]),
        ] {
            let collator = TitleCollator::new(language);
            let mut resolved: Vec<(&Track, &str)> = tracks
                .iter()
                .map(|t| (t, TitleResolver::resolve(t, language)))
                .collect();
            resolved.sort_by(|a, b| collator.compare(a.1, b.1));
            let ids: Vec<u32> = resolved.iter().map(|(t, _)| t.id()).collect();
            assert_eq!(ids, expected);
        }
    }
}
