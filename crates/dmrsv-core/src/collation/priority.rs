use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::track::GameLanguage;

/// Sort tier of one character. Lower tiers sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const WHITESPACE: Self = Self(0);
    /// Leading Hangul in Korean mode.
    pub const LEADING_HANGUL: Self = Self(1);
    /// Leading kana or CJK ideograph in Korean mode.
    pub const LEADING_JAPANESE: Self = Self(2);
    /// Leading letter of any other non-Latin script in Korean mode.
    pub const LEADING_OTHER_SCRIPT: Self = Self(3);
    pub const SYMBOL: Self = Self(3);
    pub const DIGIT: Self = Self(4);
    pub const LATIN: Self = Self(5);
    /// Non-Latin letter anywhere it gets no leading boost.
    pub const NON_LATIN: Self = Self(6);
}

/// Classify `ch` found at character position `idx` of a normalized title.
///
/// | condition                                   | tier |
/// |---------------------------------------------|------|
/// | whitespace                                  | 0    |
/// | leading Hangul, Korean mode                 | 1    |
/// | leading kana / CJK ideograph, Korean mode   | 2    |
/// | leading other non-Latin letter, Korean mode | 3    |
/// | symbol, punctuation, anything unclassified  | 3    |
/// | decimal digit                               | 4    |
/// | Latin letter                                | 5    |
/// | any other non-Latin letter                  | 6    |
///
/// Outside Korean mode a leading non-Latin letter gets no boost and lands in
/// the trailing group after A-Z, as the game shows them.
pub fn classify(ch: char, idx: usize, language: GameLanguage) -> Priority {
    if ch.is_whitespace() {
        return Priority::WHITESPACE;
    }
    if is_letter(ch) {
        if is_latin_letter(ch) {
            return Priority::LATIN;
        }
        if idx == 0 && language.is_korean() {
            return if is_hangul(ch) {
                Priority::LEADING_HANGUL
            } else if is_japanese(ch) {
                Priority::LEADING_JAPANESE
            } else {
                Priority::LEADING_OTHER_SCRIPT
            };
        }
        return Priority::NON_LATIN;
    }
    if is_decimal_digit(ch) {
        return Priority::DIGIT;
    }
    Priority::SYMBOL
}

/// Hangul syllables, jamo and compatibility jamo.
pub fn is_hangul(ch: char) -> bool {
    matches!(ch, '\u{AC00}'..='\u{D7FF}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

/// Hiragana, katakana and CJK unified ideographs (including extension A).
pub fn is_japanese(ch: char) -> bool {
    matches!(ch, '\u{3040}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

/// General category L*. Roman numerals and circled letters are not letters.
pub fn is_letter(ch: char) -> bool {
    ch.general_category_group() == GeneralCategoryGroup::Letter
}

/// Letters of the Latin blocks, including their fullwidth forms.
pub fn is_latin_letter(ch: char) -> bool {
    if !is_letter(ch) {
        return false;
    }
    matches!(
        ch,
        'A'..='Z'
            | 'a'..='z'
            | '\u{00AA}'
            | '\u{00BA}'
            | '\u{00C0}'..='\u{024F}'
            | '\u{0250}'..='\u{02AF}'
            | '\u{1E00}'..='\u{1EFF}'
            | '\u{2C60}'..='\u{2C7F}'
            | '\u{A720}'..='\u{A7FF}'
            | '\u{FF21}'..='\u{FF3A}'
            | '\u{FF41}'..='\u{FF5A}'
    )
}

/// General category Nd, which covers ASCII and fullwidth digits.
pub fn is_decimal_digit(ch: char) -> bool {
    ch.general_category() == GeneralCategory::DecimalNumber
}
