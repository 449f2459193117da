//! Console front-end for The Ballgame of Xibalba.

mod commands;
mod shell;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "xibalba",
    about = "The Ballgame of Xibalba: a text adventure in the Maya underworld",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the story in the terminal
    Play {
        /// Ballgame variant: scored (three rounds) or code (sacred code)
        #[arg(short, long, default_value = "scored")]
        ballgame: String,

        /// RNG seed for the order choices are listed in
        #[arg(short, long)]
        seed: Option<u64>,

        /// List choices in their fixed order
        #[arg(long)]
        no_shuffle: bool,

        /// Let the game play itself along the winning path
        #[arg(long)]
        autoplay: bool,

        /// Print the final session state as JSON on exit
        #[arg(long)]
        json: bool,
    },

    /// List every scene with its choices
    Scenes {
        /// Ballgame variant: scored or code
        #[arg(short, long, default_value = "scored")]
        ballgame: String,
    },

    /// Validate the scene graph
    Check {
        /// Ballgame variant: scored or code
        #[arg(short, long, default_value = "scored")]
        ballgame: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            ballgame,
            seed,
            no_shuffle,
            autoplay,
            json,
        } => commands::play::run(&ballgame, seed, !no_shuffle, autoplay, json),
        Commands::Scenes { ballgame } => commands::scenes::run(&ballgame),
        Commands::Check { ballgame } => commands::check::run(&ballgame),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
