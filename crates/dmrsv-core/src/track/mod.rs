//! Track records and display title resolution.
//!
//! This module contains:
//! - `GameLanguage` - the language mode the game is configured to display
//! - `Track` - one playable song with its optional localized titles
//! - `TitleResolver` - picks the title shown for a track under a language

mod language;
mod record;
mod resolver;

pub use language::*;
pub use record::*;
pub use resolver::*;
