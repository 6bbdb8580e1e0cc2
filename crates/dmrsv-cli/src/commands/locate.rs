//! Locate command - find a track and report its position in the list.
//!
//! The position is the number of Down presses from the top of the in-game
//! list under the configured language.

use anyhow::{Result, bail};
use dmrsv_core::{Config, DisplayList, Track, TrackCatalog};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::cli_utils;

pub fn run(config: &Config, query: &str, limit: usize) -> Result<()> {
    let catalog = cli_utils::load_catalog(config)?;
    let list = DisplayList::from_catalog(&catalog, config.game_language);

    let scored = fuzzy_match_tracks(query, &catalog);
    if scored.is_empty() {
        bail!("No tracks matching \"{}\"", query);
    }

    // A clearly better top match is reported on its own
    if scored.len() == 1 || scored[0].0 > scored[1].0 * 2 {
        let (_, track) = scored[0];
        print_position(&list, track);
        return Ok(());
    }

    eprintln!("Matching tracks:");
    for (score, track) in scored.iter().take(limit.max(1)) {
        println!("{}", format_candidate_row(&list, track, *score));
    }
    Ok(())
}

/// One candidate line: 1-based position, id, title, Down presses and score.
fn format_candidate_row(list: &DisplayList<'_>, track: &Track, score: i64) -> String {
    let title = track.display_title(list.language());
    match list.position(track.id()) {
        Some(position) => format!(
            "{}\t{}\t{}\t{} down\t(score={})",
            position + 1,
            track.id(),
            title,
            position,
            score
        ),
        None => format!("-\t{}\t{}\t-\t(score={})", track.id(), title, score),
    }
}

/// Score every track against the query using its best title variant,
/// best match first.
fn fuzzy_match_tracks<'a>(query: &str, catalog: &'a TrackCatalog) -> Vec<(i64, &'a Track)> {
    let matcher = SkimMatcherV2::default();

    let mut scored: Vec<(i64, &Track)> = catalog
        .iter()
        .filter_map(|track| {
            let best = track
                .title_variants()
                .filter_map(|title| matcher.fuzzy_match(title, query))
                .max()?;
            (best > 0).then_some((best, track))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.id().cmp(&b.1.id())));
    scored
}

fn print_position(list: &DisplayList<'_>, track: &Track) {
    let title = track.display_title(list.language());
    match list.position(track.id()) {
        Some(position) => {
            println!("Target: {} (id={})", title, track.id());
            println!(
                "Position: {} of {} ({} Down presses from the top, {})",
                position + 1,
                list.len(),
                position,
                list.language()
            );
        }
        None => println!("Target: {} (id={}) is not in the list", title, track.id()),
    }
}
