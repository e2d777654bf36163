//! Per-worker scratch reconstructing which edges and vertices one embedding
//! covers, in O(depth) instead of walking the whole input graph.
//!
//! Sized once per worker at startup to the worst-case pruned graph
//! (`max(nedges)`, `max(|vertices|)`), then reused — `build*` overwrites the
//! buffers in place rather than reallocating.

use crate::dfs_code::Edge;
use crate::embedding::{Embedding, MinProjection};

/// Reconstructs edge/vertex membership of one embedding (real, linked, or
/// the indexed min-projection used by the canonicality test).
#[derive(Debug, Default)]
pub struct History {
    /// Edges of the current embedding, newest-to-oldest (index 0 is the
    /// edge discovered last).
    edges: Vec<Edge>,
    has_edge: Vec<bool>,
    has_vertex: Vec<bool>,
}

impl History {
    /// Allocates scratch sized to the worst-case pruned graph.
    #[must_use]
    pub fn new(max_edges: usize, max_vertices: usize) -> Self {
        Self {
            edges: Vec::with_capacity(max_edges.max(1)),
            has_edge: vec![false; max_edges],
            has_vertex: vec![false; max_vertices],
        }
    }

    /// Rebuilds from a real (linked) embedding.
    pub fn build(&mut self, start: &Embedding, nedges: usize, nvertices: usize) {
        self.has_edge[..nedges].fill(false);
        self.has_vertex[..nvertices].fill(false);
        self.edges.clear();

        let mut cur = Some(start);
        while let Some(node) = cur {
            self.edges.push(node.edge);
            self.has_edge[node.edge.id] = true;
            self.has_vertex[node.edge.from] = true;
            self.has_vertex[node.edge.to] = true;
            cur = node.prev.as_ref();
        }
    }

    /// Rebuilds the edge-membership bitmap from the indexed min-projection,
    /// starting at `start` and following `.prev` indices back to the root.
    /// Leaves the vertex bitmap untouched (the canonicality test's backward
    /// phase never needs it).
    pub fn build_edges_min(&mut self, projection: &MinProjection, nedges: usize, start: Option<usize>) {
        self.has_edge[..nedges].fill(false);
        self.edges.clear();

        let mut cur = start;
        while let Some(i) = cur {
            let entry = projection[i];
            self.edges.push(entry.edge);
            self.has_edge[entry.edge.id] = true;
            cur = entry.prev;
        }
    }

    /// Same as [`Self::build_edges_min`] but tracks the vertex bitmap
    /// instead of the edge bitmap (the canonicality test's forward phase
    /// needs "already visited" on vertices, not edges).
    pub fn build_vertice_min(&mut self, projection: &MinProjection, nvertices: usize, start: Option<usize>) {
        self.has_vertex[..nvertices].fill(false);
        self.edges.clear();

        let mut cur = start;
        while let Some(i) = cur {
            let entry = projection[i];
            self.edges.push(entry.edge);
            self.has_vertex[entry.edge.from] = true;
            self.has_vertex[entry.edge.to] = true;
            cur = entry.prev;
        }
    }

    #[must_use]
    pub fn has_edges(&self, edge_id: usize) -> bool {
        self.has_edge[edge_id]
    }

    #[must_use]
    pub fn has_vertice(&self, vertex_id: usize) -> bool {
        self.has_vertex[vertex_id]
    }

    /// The edge discovered at rightmost-path position `rmp_index`, counting
    /// from the bottom of the pattern: index 0 is the most recent forward
    /// edge (the one discovering the rightmost vertex).
    #[must_use]
    pub fn get_edge(&self, rmp_index: usize) -> Edge {
        self.edges[self.edges.len() - rmp_index - 1]
    }
}
