//! CLI command implementations.

pub mod categories;
pub mod compare;
pub mod list;
pub mod locate;
pub mod missing;
