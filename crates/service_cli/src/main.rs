//! randpick - Random pick utilities with Persian numeral display
//!
//! # Commands
//!
//! - `randpick dice --count ۳` - roll dice
//! - `randpick number --min ۱ --max ۱۰۰ --count 5` - draw ranged integers
//! - `randpick letter --alphabet greek --count 2` - draw letters
//! - `randpick name علی سارا نرگس --count 2` - draw from a supplied list
//! - `randpick country --count 3` - draw countries
//! - `randpick region --jurisdiction iran --count 2` - draw regions
//! - `randpick color --pool-size ۱۰ --count 3` - draw colors
//!
//! Numeric arguments accept Persian or ASCII numerals interchangeably;
//! results render in Persian display form. `--format json` emits the raw
//! values plus statistics instead of the table view.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Random pick utilities with Persian numeral display
#[derive(Parser)]
#[command(name = "randpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice
    Dice {
        /// Number of dice
        #[arg(short, long, default_value = "1")]
        count: String,
    },

    /// Draw integers from a range
    Number {
        /// Lower bound, inclusive
        #[arg(long)]
        min: String,

        /// Upper bound, inclusive
        #[arg(long)]
        max: String,

        /// Number of draws
        #[arg(short, long, default_value = "1")]
        count: String,
    },

    /// Draw letters from an alphabet
    Letter {
        /// Alphabet to draw from (persian, english, greek)
        #[arg(short, long, default_value = "persian")]
        alphabet: String,

        /// Number of letters
        #[arg(short, long, default_value = "1")]
        count: String,
    },

    /// Draw names from a supplied list
    Name {
        /// Pool entries
        #[arg(required = true)]
        names: Vec<String>,

        /// Number of names
        #[arg(short, long, default_value = "1")]
        count: String,
    },

    /// Draw countries
    Country {
        /// Number of countries
        #[arg(short, long, default_value = "1")]
        count: String,
    },

    /// Draw first-level administrative regions
    Region {
        /// Jurisdiction to draw from (iran, usa)
        #[arg(short, long, default_value = "iran")]
        jurisdiction: String,

        /// Number of regions
        #[arg(short, long, default_value = "1")]
        count: String,
    },

    /// Draw colors
    Color {
        /// Restrict draws to the first N table entries
        #[arg(short, long)]
        pool_size: Option<String>,

        /// Number of colors
        #[arg(short, long, default_value = "1")]
        count: String,
    },
}

fn main() {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let format = cli.format;
    let outcome = match cli.command {
        Commands::Dice { count } => commands::dice::run(&count, &format),
        Commands::Number { min, max, count } => commands::number::run(&min, &max, &count, &format),
        Commands::Letter { alphabet, count } => commands::letter::run(&alphabet, &count, &format),
        Commands::Name { names, count } => commands::name::run(&names, &count, &format),
        Commands::Country { count } => commands::country::run(&count, &format),
        Commands::Region {
            jurisdiction,
            count,
        } => commands::region::run(&jurisdiction, &count, &format),
        Commands::Color { pool_size, count } => {
            commands::color::run(pool_size.as_deref(), &count, &format)
        }
    };

    if let Err(err) = outcome {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
