use std::path::Path;

use colored::Colorize;

use nw_offline::{DirNetwork, OfflineConfig, OfflineWorker, ServedFrom};

pub fn run(assets: &Path, cache_name: Option<&str>, paths: &[String]) -> Result<(), String> {
    let mut config = OfflineConfig::default();
    if let Some(name) = cache_name {
        config = config.with_cache_name(name);
    }
    let mut worker = OfflineWorker::new(config, DirNetwork::new(assets));

    worker.install().map_err(|e| e.to_string())?;
    println!(
        "  {} {} assets into '{}'",
        "Cached".bold(),
        worker.config().manifest.len(),
        worker.config().cache_name
    );
    for name in worker.activate() {
        println!("  Deleted old cache '{name}'");
    }

    let mut failed = 0;
    for path in paths {
        match worker.fetch(path) {
            Ok(served) => {
                let from = match served.from {
                    ServedFrom::Cache => "cache",
                    ServedFrom::Network => "network",
                };
                println!(
                    "  {path}: {} bytes from {from}",
                    served.response.body.len()
                );
            }
            Err(e) => {
                failed += 1;
                println!("  {path}: {}", e.to_string().yellow());
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {} paths could not be served", paths.len()));
    }
    Ok(())
}
