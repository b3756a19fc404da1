//! CLI frontend for Namewürfel, dice with named faces.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "nw",
    about = "Namewürfel — roll dice whose faces carry your own names",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the settings file
    #[arg(short, long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the active dice once
    Roll {
        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show or change the die count and face names
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Start an interactive dice session
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Milliseconds the dice spend rolling before results show
        #[arg(long, default_value = "500")]
        delay_ms: u64,
    },

    /// Cache the front-end assets, then serve paths cache-first
    Offline {
        /// Directory the assets are served from
        #[arg(short, long)]
        assets: PathBuf,

        /// Cache version name (default: dice-roller-cache-v1)
        #[arg(long)]
        cache_name: Option<String>,

        /// Paths to request after installation
        paths: Vec<String>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the die count and face names
    Show,

    /// Change the die count and/or face names
    Set {
        /// Number of active dice (1-6)
        #[arg(short, long)]
        count: Option<usize>,

        /// Face name as POS=TEXT (POS 1-6); an empty TEXT restores the default
        #[arg(short, long = "name")]
        names: Vec<String>,
    },

    /// Forget the stored settings
    Reset,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let dir = cli.data_dir;
    let result = match cli.command {
        Commands::Roll { seed } => commands::roll::run(&dir, seed),
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&dir),
            SettingsAction::Set { count, names } => commands::settings::set(&dir, count, &names),
            SettingsAction::Reset => commands::settings::reset(&dir),
        },
        Commands::Play { seed, delay_ms } => commands::play::run(&dir, seed, delay_ms),
        Commands::Offline {
            assets,
            cache_name,
            paths,
        } => commands::offline::run(&assets, cache_name.as_deref(), &paths),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
