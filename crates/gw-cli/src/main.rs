//! CLI frontend for the Grimwild character engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gw_mechanics::Assist;

#[derive(Parser)]
#[command(
    name = "gw",
    about = "Grimwild character sheets and rolls",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where stat labels and translations come from.
#[derive(Args)]
struct Setup {
    /// Stat catalog JSON (default: the built-in Grimwild stats)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Translation JSON used to resolve labels
    #[arg(long)]
    lang: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the derived character sheet
    Show {
        /// Character JSON file
        file: PathBuf,

        #[command(flatten)]
        setup: Setup,

        /// Print the flattened roll data as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Print the level reached at an experience total
    Level {
        /// Experience points
        xp: u32,

        /// Also print the experience track
        #[arg(short, long)]
        pips: bool,
    },

    /// Pad traits, desires, backgrounds and wises to their canonical length
    Normalize {
        /// Character JSON file
        file: PathBuf,

        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Check a character file for errors and warnings
    Validate {
        /// Character JSON file
        file: PathBuf,

        /// Stat catalog JSON (default: the built-in Grimwild stats)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Assemble and roll a stat
    Roll {
        /// Character JSON file
        file: PathBuf,

        /// Stat key (e.g. bra, agi, wit, pre)
        stat: String,

        #[command(flatten)]
        setup: Setup,

        /// Difficulty; each point adds a thorn
        #[arg(
            short,
            long,
            default_value_t = 0,
            value_parser = clap::value_parser!(u32).range(..=i64::from(commands::roll::MAX_DICE_INPUT))
        )]
        difficulty: u32,

        /// Assist as NAME=DICE (repeatable)
        #[arg(short, long, value_parser = commands::roll::parse_assist)]
        assist: Vec<Assist>,

        /// Tick a thorn box (repeatable)
        #[arg(long)]
        thorn: Vec<String>,

        /// Untick a thorn box (repeatable)
        #[arg(long)]
        no_thorn: Vec<String>,

        /// Override the active condition count
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(..=i64::from(commands::roll::MAX_DICE_INPUT))
        )]
        conditions: Option<u32>,

        /// Accept the prompt without asking
        #[arg(short, long)]
        yes: bool,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Print the assembled request as JSON and do not roll
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { file, setup, json } => commands::show::run(&file, &setup.into(), json),
        Commands::Level { xp, pips } => commands::level::run(xp, pips),
        Commands::Normalize { file, write } => commands::normalize::run(&file, write),
        Commands::Validate { file, catalog } => commands::validate::run(&file, catalog.as_deref()),
        Commands::Roll {
            file,
            stat,
            setup,
            difficulty,
            assist,
            thorn,
            no_thorn,
            conditions,
            yes,
            seed,
            json,
        } => {
            let args = commands::roll::RollArgs {
                stat,
                difficulty,
                assists: assist,
                overrides: commands::roll::Overrides {
                    check: thorn,
                    uncheck: no_thorn,
                    conditions,
                },
                interactive: !yes,
                seed,
                json,
            };
            commands::roll::run(&file, &setup.into(), args).await
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<Setup> for commands::SetupPaths {
    fn from(setup: Setup) -> Self {
        Self {
            catalog: setup.catalog,
            lang: setup.lang,
        }
    }
}
