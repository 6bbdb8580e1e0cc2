use std::sync::Arc;

/// One playable song.
///
/// Localized titles are `None` when the original title is already used for
/// every language. They are never empty: the builder methods drop empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: u32,
    title: Arc<str>,
    title_en: Option<Arc<str>>,
    title_ja: Option<Arc<str>>,
    composer: Arc<str>,
    category: Arc<str>,
}

impl Track {
    /// Create a track with only its original title.
    ///
    /// `title` must not be empty; the catalog loader skips such records.
    pub fn new(id: u32, title: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            title: title.into(),
            title_en: None,
            title_ja: None,
            composer: Arc::from(""),
            category: Arc::from(""),
        }
    }

    pub fn with_title_en(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title_en = non_empty(title.into());
        self
    }

    pub fn with_title_ja(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title_ja = non_empty(title.into());
        self
    }

    pub fn with_composer(mut self, composer: impl Into<Arc<str>>) -> Self {
        self.composer = composer.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Arc<str>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Original title as authored.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_en(&self) -> Option<&str> {
        self.title_en.as_deref()
    }

    pub fn title_ja(&self) -> Option<&str> {
        self.title_ja.as_deref()
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Every distinct title variant, original first.
    pub fn title_variants(&self) -> impl Iterator<Item = &str> {
        let title = self.title();
        let en = self.title_en().filter(|t| *t != title);
        let ja = self.title_ja().filter(|t| *t != title && Some(*t) != en);
        std::iter::once(title).chain(en).chain(ja)
    }
}

fn non_empty(text: Arc<str>) -> Option<Arc<str>> {
    if text.is_empty() { None } else { Some(text) }
}
