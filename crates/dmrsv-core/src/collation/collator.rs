use std::cmp::Ordering;

use crate::track::GameLanguage;

use super::{Priority, classify, normalize_title};

/// Orders titles the way the game lists them for one game language.
///
/// Build one collator per language setting; it is immutable and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleCollator {
    language: GameLanguage,
}

impl TitleCollator {
    pub fn new(language: GameLanguage) -> Self {
        Self { language }
    }

    pub fn language(&self) -> GameLanguage {
        self.language
    }

    /// Compare two titles.
    ///
    /// Both titles are normalized, then compared at the first differing
    /// character: lower priority tier first, code point on a tie. When one
    /// normalized title is a prefix of the other the shorter one comes first.
    pub fn compare(&self, x: &str, y: &str) -> Ordering {
        if x == y {
            return Ordering::Equal;
        }

        let x = normalize_title(x);
        let y = normalize_title(y);
        let mut xs = x.chars();
        let mut ys = y.chars();
        let mut idx = 0;

        loop {
            match (xs.next(), ys.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) if a == b => idx += 1,
                (Some(a), Some(b)) => return self.compare_at(a, b, idx),
            }
        }
    }

    /// Compare titles that may be absent. Absent titles sort after every
    /// present title; two absent titles are equal.
    pub fn compare_optional(&self, x: Option<&str>, y: Option<&str>) -> Ordering {
        match (x, y) {
            (Some(x), Some(y)) => self.compare(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Precompute an ordering key. Keys compare exactly like `compare`.
    pub fn sort_key(&self, title: &str) -> TitleKey {
        let key = normalize_title(title)
            .chars()
            .enumerate()
            .map(|(idx, ch)| (classify(ch, idx, self.language), ch))
            .collect();
        TitleKey(key)
    }

    /// Sort titles in place.
    pub fn sort<T: AsRef<str>>(&self, titles: &mut [T]) {
        titles.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    fn compare_at(&self, a: char, b: char, idx: usize) -> Ordering {
        let priority_a = classify(a, idx, self.language);
        let priority_b = classify(b, idx, self.language);
        priority_a.cmp(&priority_b).then(a.cmp(&b))
    }
}

/// Ordering key produced by [`TitleCollator::sort_key`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TitleKey(Vec<(Priority, char)>);
