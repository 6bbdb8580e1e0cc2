//! In-game title ordering.
//!
//! DJMAX sorts its song lists case-insensitively, ignoring apostrophes and
//! hyphens, and groups characters into priority tiers that depend on the
//! game language and on whether the character leads the title:
//! - `normalize_title` - the folding applied before comparison
//! - `classify` - the (character, position, language) priority table
//! - `TitleCollator` - the comparison itself, plus a cached sort key

mod collator;
mod normalize;
mod priority;

pub use collator::*;
pub use normalize::*;
pub use priority::*;
