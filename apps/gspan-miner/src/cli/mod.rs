//! # gspan-miner CLI
//!
//! A single flat flag surface — this tool does one thing: mine a graph
//! database and optionally write the results. No subcommands.

use std::path::PathBuf;

use clap::Parser;

/// Mine frequent connected subgraphs from a database of labeled graphs.
#[derive(Parser, Debug)]
#[command(name = "gspan-miner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input graph database.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file prefix; empty means no output is written.
    #[arg(short, long, default_value = "")]
    pub output: String,

    /// Minimum fractional support in (0, 1].
    #[arg(short, long, default_value_t = 1.0)]
    pub support: f64,

    /// Field separator used when reading the input file.
    #[arg(short, long, default_value = " ")]
    pub mark: String,

    /// Emit `parent : <id> thread : <n>` lines alongside each pattern.
    #[arg(short, long)]
    pub parents: bool,

    /// Emit full pattern bodies (vertices, edges, posting list).
    #[arg(short, long)]
    pub dfs: bool,

    /// Also emit a `<output>.nodes` file of frequent single vertices.
    #[arg(short, long)]
    pub nodes: bool,

    /// Worker thread count; 0 defers to rayon's default.
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,
}
