//! # gspan-miner
//!
//! CLI front end for the `gspan-core` frequent-subgraph miner: reads a
//! line-oriented graph database, mines every frequent connected subgraph
//! pattern, and writes per-worker output files.

mod cli;
mod parser;
mod writer;

use std::io::BufReader;

use clap::Parser;
use gspan_core::MiningConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_logging();

    let cli = cli::Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        eprintln!("gspan-miner: {e}");
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> gspan_core::Result<()> {
    let file = std::fs::File::open(&cli.input)?;
    let graphs = parser::parse_graphs(BufReader::new(file), &cli.mark)?;
    tracing::debug!(graphs = graphs.len(), "parsed input database");

    let config = MiningConfig {
        min_support: cli.support,
        max_pattern_edges: None,
        threads: cli.threads,
        with_parents: cli.parents,
        with_pattern: cli.dfs,
        report_frequent_nodes: cli.nodes,
    };

    let outcome = gspan_core::mine(&graphs, &config)?;
    tracing::debug!(nsupport = outcome.nsupport, "mining complete");

    writer::write_outcome(&cli.output, &outcome, cli.parents, cli.dfs)?;
    Ok(())
}

/// `GSPAN_LOG_FORMAT=json` switches to machine-parseable output; plain text
/// otherwise.
fn init_logging() {
    let log_format = std::env::var("GSPAN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "gspan_core=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer().json()).init();
        }
        _ => {
            tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
        }
    }
}
