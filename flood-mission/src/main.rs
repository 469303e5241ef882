//! Point d'entrée CLI pour flood-mission

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Générer une mission de largage par drone à partir de zones inondées détectées
#[derive(Parser)]
#[command(name = "flood-mission")]
#[command(author, version)]
#[command(about = "Turn detected flood outlines into a QGC waypoint drop mission")]
#[command(long_about = "Clusters flood outlines, picks one drop point per cluster near the reference path, orders the drops from home with a nearest-neighbor heuristic and writes a QGC WPL 110 mission file.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Plan(args) => {
            info!(input = %args.input.display(), "Planning mission");
            cli::cmd_plan(&args)?;
        }
        Commands::Summarize {
            input,
            config,
            geojson,
        } => {
            info!(input = %input.display(), "Summarizing outlines");
            cli::cmd_summarize(&input, config.as_deref(), geojson.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
