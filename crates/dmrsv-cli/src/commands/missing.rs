//! Missing command - report tracks that still need a localized title.

use anyhow::Result;
use dmrsv_core::{Config, TranslationKind, missing_translations};

use crate::cli_utils;

pub fn run(config: &Config, kind: TranslationKind) -> Result<()> {
    let catalog = cli_utils::load_catalog(config)?;
    let missing = missing_translations(&catalog, kind);

    if missing.is_empty() {
        eprintln!("All non-ASCII tracks have a {} title.", kind);
        return Ok(());
    }

    eprintln!("{} track(s) need a {} title:", missing.len(), kind);
    for entry in &missing {
        println!("[{}]\t{}\t{}", entry.script, entry.id, entry.title);
    }
    Ok(())
}
