//! The pruned graph: the in-memory representation every input graph is
//! rebuilt into once infrequent vertex and edge labels are known. This is
//! also the shape the minimum-DFS-code test's "minimum graph" takes (see
//! `canonical::build_min_graph`) — both a pruned input graph and a min-graph
//! are just a `Vec<Vertex>` with mirrored half-edges.

use crate::dfs_code::{Edge, Label};

/// One vertex of a pruned graph: its label and the half-edges incident to
/// it, in stable insertion order (the enumeration depends on this order for
/// determinism).
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    pub id: usize,
    pub label: Label,
    pub edges: Vec<Edge>,
}

/// A graph after the frequency pass has dropped infrequent vertices/edges
/// and renumbered the survivors contiguously from 0. `nedges` counts
/// distinct (undirected) edges, not the mirrored half-edges.
#[derive(Debug, Clone, Default)]
pub struct PrunedGraph {
    pub id: usize,
    pub nedges: usize,
    pub vertices: Vec<Vertex>,
}

impl PrunedGraph {
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self { id, nedges: 0, vertices: Vec::new() }
    }
}
