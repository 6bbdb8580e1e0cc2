//! Common CLI utility functions shared across commands.

use anyhow::{Context, Result};
use dmrsv_core::{Config, TrackCatalog};
use tracing::{info, warn};

use crate::cli::Args;

/// Load the config file and apply command-line overrides.
///
/// A missing or broken config file is not fatal; defaults are used instead.
pub fn resolve_config(args: &Args) -> Config {
    let mut config = match Config::load(&args.config) {
        Ok(config) => {
            info!("Loaded config from {:?}", args.config);
            config
        }
        Err(e) => {
            warn!("Failed to load config {:?}: {}, using defaults", args.config, e);
            Config::default()
        }
    };

    if let Some(language) = args.language {
        config.game_language = language;
    }
    if let Some(path) = &args.tracks {
        config.all_track_file = path.clone();
    }
    if let Some(path) = &args.appdata {
        config.app_data_file = path.clone();
    }
    config
}

/// Load the track catalog named by the config.
pub fn load_catalog(config: &Config) -> Result<TrackCatalog> {
    let catalog = TrackCatalog::load(&config.all_track_file, Some(config.app_data_file.as_path()))
        .with_context(|| format!("Failed to load track list {:?}", config.all_track_file))?;
    info!("Loaded {} tracks", catalog.len());
    Ok(catalog)
}
