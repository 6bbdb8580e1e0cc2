//! List command - print every track in the game's list order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use dmrsv_core::{Config, DisplayList, ExportFormat, write_listing};
use tracing::info;

use crate::cli_utils;

pub fn run(config: &Config, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let catalog = cli_utils::load_catalog(config)?;
    let list = DisplayList::from_catalog(&catalog, config.game_language);

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_listing(&mut writer, &list, format)?;
            writer.flush()?;
            info!("Wrote {} tracks as {} to {}", list.len(), format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_listing(&mut writer, &list, format)?;
        }
    }
    Ok(())
}
