//! Track catalog loading.
//!
//! The catalog is built from two local files:
//! - `AllTrackList.json` - the V-Archive song list (id, name, composer, DLC)
//! - `appdata.json` - per-track English and Japanese navigation titles
//!
//! The report helpers list tracks whose non-ASCII titles still lack a
//! localized title, and DLC codes that have no category in `appdata.json`.

mod all_track;
mod app_data;
mod report;
mod store;

pub use all_track::*;
pub use app_data::*;
pub use report::*;
pub use store::*;

/// Drop a leading UTF-8 byte order mark.
pub(crate) fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}
