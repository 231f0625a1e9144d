//! # Main — CLI Entry Point
//!
//! Parses arguments, times and invokes the prime generator, and prints the
//! results. All computation lives in the library; this file is glue.
//!
//! ## Options
//!
//! - `-c` / `--accelerated`: request the accelerated prime generator. No
//!   accelerated path is built into this crate, so the flag always fails.
//! - `-t` / `--timing`: report elapsed wall-clock seconds around the call.
//! - `-p` / `--print`: print the full list of found primes.
//! - `N` (positional, required): number of primes to find.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;

use hermes_instrument::do_primes;

#[derive(Parser)]
#[command(name = "hermes-instrument", about = "Find the first N prime numbers")]
struct Cli {
    /// Use the accelerated prime generator (not included in this build)
    #[arg(short = 'c', long)]
    accelerated: bool,

    /// Time the prime generator and report elapsed seconds
    #[arg(short = 't', long)]
    timing: bool,

    /// Print all of the prime numbers found
    #[arg(short = 'p', long)]
    print: bool,

    /// Number of primes to find
    #[arg(value_name = "N")]
    n: usize,
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine consumption,
    // human-readable on stderr otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    let pre = Instant::now();
    let primes = do_primes(cli.n, cli.accelerated)?;
    let elapsed = pre.elapsed();

    println!("Found {} prime numbers", primes.len());
    if let Some(largest) = primes.last() {
        println!("Largest prime: {}", largest);
    }

    if cli.timing {
        println!("Running time: {} s", elapsed.as_secs_f64());
    }

    if cli.print {
        println!("Primes: {:?}", primes);
    }

    Ok(())
}
