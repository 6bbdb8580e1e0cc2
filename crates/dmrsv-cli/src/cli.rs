//! CLI argument definitions for dmrsv.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dmrsv_core::{ExportFormat, GameLanguage, TranslationKind};

#[derive(Parser)]
#[command(name = "dmrsv")]
#[command(about = "DJMAX RESPECT V title ordering tool", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// AllTrackList.json path (overrides config)
    #[arg(long, value_name = "FILE")]
    pub tracks: Option<PathBuf>,

    /// appdata.json path (overrides config)
    #[arg(long, value_name = "FILE")]
    pub appdata: Option<PathBuf>,

    /// Game language: korean, english, japanese, chinese (overrides config)
    #[arg(short, long, env = "DMRSV_GAME_LANGUAGE", value_parser = GameLanguage::parse)]
    pub language: Option<GameLanguage>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print all tracks in the game's list order
    List {
        /// Output format: tsv, json
        #[arg(long, short, default_value = "tsv")]
        format: ExportFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Compare two titles under the current language
    Compare {
        /// First title
        first: String,
        /// Second title
        second: String,
    },
    /// Find a track and show its position in the list
    Locate {
        /// Track title (fuzzy search query)
        query: String,
        /// Maximum number of candidates to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Report non-ASCII titles without a localized title
    Missing {
        /// Which localized title to check: english, japanese
        #[arg(long, default_value = "english")]
        kind: TranslationKind,
    },
    /// Report DLC codes that have no category in appdata.json
    Categories,
}
