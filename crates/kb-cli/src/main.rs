//! CLI frontend for the Knobelbote dice engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kb",
    about = "Knobelbote — dice rolls for your table, no chat server required",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice notation, e.g. "2d8+3", "(3d6)-1", "2d8, 2d6"
    Roll {
        /// The dice notation to roll
        notation: String,

        /// Display name used in the reply
        #[arg(short, long, default_value = "you")]
        name: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print structured results as JSON instead of the chat reply
        #[arg(long)]
        json: bool,
    },

    /// Roll one or more twenty-sided dice
    D20 {
        /// Number of dice to roll (default 1)
        count: Option<String>,

        /// Display name used in the reply
        #[arg(short, long, default_value = "you")]
        name: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the chat commands the dispatcher understands
    Commands,

    /// Interactive chat session: type !roll, !d20, !commands
    Chat {
        /// Display name used in replies
        #[arg(short, long, default_value = "you")]
        name: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            notation,
            name,
            seed,
            json,
        } => commands::roll::run(&notation, &name, seed, json),
        Commands::D20 { count, name, seed } => commands::d20::run(count.as_deref(), &name, seed),
        Commands::Commands => commands::list::run(),
        Commands::Chat { name, seed } => commands::chat::run(&name, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
