use std::path::Path;

use colored::Colorize;

use nw_core::{RollEngine, StdRollSource};

pub fn run(dir: &Path, seed: Option<u64>) -> Result<(), String> {
    let settings = super::open_store(dir).load();
    let source = seed.map_or_else(StdRollSource::from_os, StdRollSource::seeded);
    let batch = RollEngine::new(source).roll(&settings);

    for result in batch.results() {
        println!(
            "  Die {}: {} (rolled {})",
            result.position + 1,
            result.display_name.bold(),
            result.value
        );
    }
    println!();
    println!("  Rolled: {batch}");

    Ok(())
}
