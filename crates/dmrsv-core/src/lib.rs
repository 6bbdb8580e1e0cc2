//! # dmrsv-core
//!
//! Title resolution and ordering for the DJMAX RESPECT V random selector.
//!
//! This crate provides:
//! - Track records and the game language setting
//! - Per-language display title resolution (`TitleResolver`)
//! - The game's own in-list title ordering (`TitleCollator`)
//! - Track catalog loading from `AllTrackList.json` and `appdata.json`
//! - Sorted display lists and their TSV/JSON export

pub mod catalog;
pub mod collation;
pub mod config;
pub mod error;
pub mod export;
pub mod listing;
pub mod track;

// Re-export from track module
pub use track::{GameLanguage, TitleResolver, Track};

// Re-export from collation module
pub use collation::{Priority, TitleCollator, TitleKey, classify, normalize_title};

// Re-export from catalog module
pub use catalog::{
    AllTrackEntry, AppData, Category, MissingTitle, NewCategory, ScriptTag, TrackCatalog,
    TranslationKind, detect_script, missing_translations, new_categories,
};

// Re-export from config module
pub use config::Config;

// Re-export from error module
pub use error::{Error, Result};

// Re-export from listing module
pub use listing::{DisplayEntry, DisplayList};

// Re-export from export module
pub use export::{ExportFormat, format_json, format_tsv, format_tsv_header, write_listing};
