//! # Main — CLI Entry Point
//!
//! Routes CLI subcommands to the prime toolkit. Handles the shared concerns:
//! `.env` loading, logging setup, and reading the limits config.
//!
//! ## Subcommands
//!
//! `check`, `factor`, `range`, `sieve`, `first` and `facts` answer one query
//! and exit. `interactive` (also the default with no subcommand) starts the
//! menu session on stdin/stdout.
//!
//! ## Global Options
//!
//! - `--config` / `PRIMEKIT_CONFIG`: TOML file with a `[limits]` table.
//! - `--json`: print results as JSON instead of formatted text.
//!
//! Logs go to stderr. `LOG_FORMAT=json` switches to JSON lines and
//! `RUST_LOG` sets the filter (default `warn`).

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "primekit", about = "Check, factor and enumerate prime numbers")]
struct Cli {
    /// Limits config file (TOML with a [limits] table)
    #[arg(long, global = true, env = "PRIMEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a number is prime
    Check {
        /// Number to test
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Use the reference test that divides by every number below n
        #[arg(long)]
        naive: bool,
    },
    /// Factor a number into primes
    Factor {
        /// Number to factor (must be >= 2)
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Group repeated factors as powers (2^3 × 3^2 × 5)
        #[arg(long)]
        powers: bool,
    },
    /// List the primes in an inclusive range
    Range {
        /// Start of range
        #[arg(long, allow_negative_numbers = true)]
        start: i64,
        /// End of range
        #[arg(long, allow_negative_numbers = true)]
        end: i64,
    },
    /// List all primes up to a limit with the Sieve of Eratosthenes
    Sieve {
        /// Largest number to include
        #[arg(long, allow_negative_numbers = true)]
        limit: i64,
    },
    /// List the first N primes
    First {
        /// How many primes to list
        #[arg(long)]
        count: usize,
    },
    /// Show facts about a number: position, twins, factors, divisors
    Facts {
        /// Number to describe
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Start the interactive menu
    Interactive,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // LOG_FORMAT=json for machine-readable logs, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    let limits = primekit::config::load(cli.config.as_deref())?;

    match &cli.command {
        None | Some(Commands::Interactive) => cli::run_interactive(limits),
        Some(Commands::Check { n, naive }) => cli::run_check(&limits, *n, *naive, cli.json),
        Some(Commands::Factor { n, powers }) => cli::run_factor(*n, *powers, cli.json),
        Some(Commands::Range { start, end }) => cli::run_range(&limits, *start, *end, cli.json),
        Some(Commands::Sieve { limit }) => cli::run_sieve(&limits, *limit, cli.json),
        Some(Commands::First { count }) => cli::run_first(&limits, *count, cli.json),
        Some(Commands::Facts { n }) => cli::run_facts(&limits, *n, cli.json),
    }
}
