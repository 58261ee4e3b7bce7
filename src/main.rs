//! Swap Pairing - Binary Entry Point
//!
//! Reads a roster export (or uses built-in demo requests), runs the matcher
//! and prints the matched pairs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swap_pairing::roster::parse_roster;
use swap_pairing::{EngineConfig, SwapMatcher, SwapRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pair up two-way group swap requests")]
struct Args {
    /// Roster export with a header row; runs the demo requests when omitted
    input: Option<PathBuf>,

    /// Field delimiter of the roster
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Match independent group pairs in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let requests = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read roster {}", path.display()))?;
            parse_roster(&text, args.delimiter)
                .with_context(|| format!("parse roster {}", path.display()))?
        }
        None => demo_requests(),
    };
    info!(requests = requests.len(), "loaded swap requests");

    let config = EngineConfig::default().with_parallel(args.parallel);
    let pairing = SwapMatcher::with_config(config)
        .run(&requests)
        .context("pairing failed")?;

    println!("Matched pairs:");
    for pair in &pairing.pairs {
        println!("{pair}");
    }

    let receipt = &pairing.receipt;
    info!(
        pairs = receipt.pairs_formed,
        unmatched = receipt.unmatched_requests(),
        match_rate = %receipt.match_rate().unwrap_or_default(),
        root = %receipt.pairing_root_hex(),
        "pairing receipt"
    );
    if !pairing.unmatched.is_empty() {
        info!(ids = ?pairing.unmatched, "requests left unmatched");
    }

    Ok(())
}

/// Two flexible swappers, a mutually restricted pair, a one-way request and
/// one already in place
fn demo_requests() -> Vec<SwapRequest> {
    vec![
        SwapRequest::flexible(1, "G1", "G2"),
        SwapRequest::flexible(2, "G2", "G1"),
        SwapRequest::restricted(3, "G1", "G2", 4),
        SwapRequest::restricted(4, "G2", "G1", 3),
        SwapRequest::restricted(5, "G1", "G2", 6),
        SwapRequest::flexible(6, "G2", "G3"),
        SwapRequest::flexible(7, "G1", "G1"),
    ]
}
