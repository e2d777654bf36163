//! # gspan-core
//!
//! A frequent subgraph miner: given a database of labeled graphs and a
//! minimum support threshold, finds every connected subgraph pattern that
//! occurs in at least that many of them, using the gSpan depth-first
//! search over canonical (minimum) DFS codes.
//!
//! The pipeline is [`database`] (raw input → frequency counts → pruned
//! graphs) feeding [`miner::mine`], which drives [`extend`] (rightmost-path
//! extension enumeration) and [`canonical`] (the minimum-DFS-code test)
//! against per-worker [`scratch::WorkerScratch`], emitting results through
//! [`output`].

// =============================================================================
// MODULES
// =============================================================================

pub mod canonical;
pub mod database;
pub mod dfs_code;
pub mod embedding;
pub mod error;
pub mod extend;
pub mod graph;
pub mod history;
pub mod miner;
pub mod output;
pub mod primitives;
pub mod scratch;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use database::{FrequencyTables, InputEdge, InputGraph, InputVertex, construct_graphs, find_frequent_labels};
pub use dfs_code::{DfsCode, DfsCodes, Edge, Label};
pub use error::{Error, Result};
pub use graph::{PrunedGraph, Vertex};
pub use miner::{MiningConfig, MiningOutcome, mine};
pub use output::{Output, ParentRef, PatternRecord};
