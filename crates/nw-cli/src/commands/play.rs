use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use nw_core::DirStore;
use nw_session::{DiceSession, SessionConfig};

pub fn run(dir: &Path, seed: Option<u64>, delay_ms: u64) -> Result<(), String> {
    let mut config = SessionConfig::default().with_roll_delay(Duration::from_millis(delay_ms));
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = DiceSession::new(DirStore::new(dir), config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;

    println!("  {} dice session", "Starting".bold());
    println!(
        "  Active dice: {} | History keeps {} rolls",
        session.settings().active_die_count(),
        session.history().limit()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    runtime.block_on(repl(&mut session))
}

async fn repl(session: &mut DiceSession<DirStore>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input).await {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
