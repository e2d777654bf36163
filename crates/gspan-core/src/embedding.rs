//! Embeddings: one occurrence of a pattern inside a specific input graph.
//!
//! A real embedding is a linked list running backward through the pattern:
//! the most recently discovered edge points at the embedding without that
//! edge, down to the root edge whose `prev` is `None`. The chain is shared
//! structure — many embeddings of a longer pattern share the same prefix —
//! so it's represented as an `Arc` chain rather than copied per extension.
//! `Arc` (not a borrowed reference) is what lets embeddings cross the
//! `rayon::scope` task boundary in `miner::mine_subgraph` without threading
//! an explicit lifetime through the whole recursion.
//!
//! The canonicality test (`canonical`) uses a second, *indexed* form
//! instead: the candidate pattern it reconstructs is local to one worker and
//! gets truncated on every rejected tentative code, which a linked list
//! can't do cheaply.

use std::sync::Arc;

use crate::dfs_code::Edge;

/// One embedding node: the edge discovered at this step, and the rest of
/// the embedding (`None` at the root).
#[derive(Debug)]
pub struct EmbeddingNode {
    pub graph_id: usize,
    pub edge: Edge,
    pub prev: Option<Embedding>,
}

/// Shared handle to one embedding.
pub type Embedding = Arc<EmbeddingNode>;

/// The support list of a pattern: embeddings grouped by `graph_id` (two
/// distinct ids never interleave). Support is the number of distinct id
/// runs, see [`count_support`].
pub type Projection = Vec<Embedding>;

/// One entry of the canonicality test's indexed min-projection: an edge in
/// the minimum graph, plus an index back into this same vector (or `None`
/// at the root) standing in for a linked `prev` pointer.
#[derive(Debug, Clone, Copy)]
pub struct MinEmbedding {
    pub edge: Edge,
    pub prev: Option<usize>,
}

pub type MinProjection = Vec<MinEmbedding>;

/// Counts the distinct `graph_id` runs in a projection — the support of the
/// pattern that projection belongs to.
#[must_use]
pub fn count_support(projection: &Projection) -> usize {
    let mut prev_id: Option<usize> = None;
    let mut count = 0;
    for link in projection {
        if prev_id != Some(link.graph_id) {
            prev_id = Some(link.graph_id);
            count += 1;
        }
    }
    count
}
