//! Compare command - show how two titles order under a game language.

use std::cmp::Ordering;

use anyhow::Result;
use dmrsv_core::{GameLanguage, TitleCollator};

pub fn run(language: GameLanguage, first: &str, second: &str) -> Result<()> {
    let collator = TitleCollator::new(language);
    println!("{}", ordering_symbol(collator.compare(first, second)));
    Ok(())
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
