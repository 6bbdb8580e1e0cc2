//! Categories command - report DLC codes missing from appdata.json.

use anyhow::{Context, Result};
use dmrsv_core::{AllTrackEntry, AppData, Config, new_categories};

pub fn run(config: &Config) -> Result<()> {
    let entries = AllTrackEntry::load_all(&config.all_track_file)
        .with_context(|| format!("Failed to load track list {:?}", config.all_track_file))?;
    let app_data = AppData::load_or_default(&config.app_data_file)
        .with_context(|| format!("Failed to load appdata {:?}", config.app_data_file))?;

    let found = new_categories(&entries, &app_data);
    if found.is_empty() {
        eprintln!("No new categories.");
        return Ok(());
    }

    eprintln!("{} DLC code(s) without a category:", found.len());
    for category in &found {
        println!(
            "+ {:8}\tname={}\ttracks={}",
            category.code, category.name, category.track_count
        );
    }
    Ok(())
}
