//! The minimum-DFS-code test: a pattern is only reported once, from the
//! one DFS code sequence that is lexicographically minimal among every
//! traversal order that produces the same pattern. `is_min` decides whether
//! a candidate sequence already is that minimum, rebuilding the minimum
//! greedily one code at a time and bailing out the moment the candidate
//! provably cannot win.
//!
//! The greedy rebuild needs its own graph and its own embedding
//! representation, entirely separate from the real pattern being mined:
//! [`build_min_graph`] turns the candidate's own codes into a tiny graph (no
//! input-database vertex ids involved), and the min-projection
//! (`MinProjection`) is the indexed, truncatable analogue of a real
//! [`crate::embedding::Projection`]. Each position in `min_projection`
//! records which depth (how many codes matched so far) it was reached at,
//! so the recursive walk can find "all leaves reached after depth N" without
//! re-deriving it from chain length.

use crate::dfs_code::{BackwardKey, DfsCode, Edge, ForwardKey, ProjectKey, rightmost_path};
use crate::embedding::MinEmbedding;
use crate::graph::Vertex;
use crate::scratch::WorkerScratch;

/// Rebuilds `scratch.min_graph` from a candidate's own DFS codes: every
/// code names vertex ids local to the pattern itself, so the resulting
/// graph never references the input database.
///
/// Sized from the *last* code alone: every code's `from` is always the
/// rightmost vertex id at the moment it was appended (forward codes extend
/// it, backward codes originate from it), so the vertex id space only ever
/// grows and the last code's endpoints already bound the maximum.
pub fn build_min_graph(scratch: &mut WorkerScratch, dfs_codes: &[DfsCode]) {
    let last = dfs_codes.last().expect("candidate sequence is non-empty");
    let max_vertex = last.from.max(last.to);

    let graph = &mut scratch.min_graph;
    graph.vertices.clear();
    graph.vertices.resize(max_vertex + 1, Vertex::default());
    for (id, vertex) in graph.vertices.iter_mut().enumerate() {
        vertex.id = id;
    }

    for (edge_id, code) in dfs_codes.iter().enumerate() {
        graph.vertices[code.from].label = code.from_label;
        graph.vertices[code.to].label = code.to_label;
        let fwd = Edge { from: code.from, to: code.to, label: code.edge_label, id: edge_id };
        let rev = Edge { from: code.to, to: code.from, label: code.edge_label, id: edge_id };
        graph.vertices[code.from].edges.push(fwd);
        graph.vertices[code.to].edges.push(rev);
    }
    graph.nedges = dfs_codes.len();
    graph.id = 0;
}

/// Is `dfs_codes` the minimum DFS code sequence for the pattern it
/// describes?
///
/// Rebuilds the minimum greedily: the root edge must match `dfs_codes[0]`
/// exactly (any lower-sorting root edge would make `dfs_codes`
/// non-minimal), then each subsequent position tries every backward
/// extension before any forward extension (backward sorts lower in
/// gSpan's extension order), accepting only extensions tied for
/// best-so-far and rejecting the candidate the moment its own code at
/// that position isn't among them.
pub fn is_min(scratch: &mut WorkerScratch, dfs_codes: &[DfsCode]) -> bool {
    if dfs_codes.len() == 1 {
        return true;
    }

    build_min_graph(scratch, dfs_codes);
    scratch.min_projection.clear();

    let root_code = dfs_codes[0];
    for vertex in scratch.min_graph.vertices.clone() {
        for edge in &vertex.edges {
            let to_label = scratch.min_graph.vertices[edge.to].label;
            // Partial pruning: an edge whose lower-labeled endpoint is the
            // `to` side has its mirror already covering this candidate.
            if vertex.label > to_label {
                continue;
            }
            let code = DfsCode { from: 0, to: 1, from_label: vertex.label, edge_label: edge.label, to_label };
            if ProjectKey(code) < ProjectKey(root_code) {
                return false;
            }
            if code == root_code {
                scratch.min_projection.push(MinEmbedding { edge: *edge, prev: None });
            }
        }
    }
    if scratch.min_projection.is_empty() {
        return false;
    }

    let root_leaves: Vec<usize> = (0..scratch.min_projection.len()).collect();
    walk(scratch, dfs_codes, &root_leaves, 1)
}

/// Recursive step: `leaves` are the indices into `scratch.min_projection`
/// of every embedding that matched `dfs_codes[..depth]`; tries to extend
/// each to `depth + 1` and checks the result against `dfs_codes[depth]`.
///
/// Backward extensions are always tried before forward ones, regardless of
/// `dfs_codes[depth]`'s own shape: a backward extension sorts lower than
/// any forward one in gSpan's extension order, so if one exists at all, a
/// forward candidate at this position can never be minimal, and a backward
/// candidate must match it exactly. Only when no backward extension exists
/// anywhere in `leaves` does a forward candidate get to compete at all.
fn walk(scratch: &mut WorkerScratch, dfs_codes: &[DfsCode], leaves: &[usize], depth: usize) -> bool {
    if depth == dfs_codes.len() {
        return true;
    }

    let prefix_rmp = rightmost_path(&dfs_codes[..depth]);
    let candidate = dfs_codes[depth];

    if let Some((best, next_leaves)) = judge_backward(scratch, dfs_codes, &prefix_rmp, leaves) {
        return best == candidate && walk(scratch, dfs_codes, &next_leaves, depth + 1);
    }

    if candidate.is_backward() {
        return false;
    }

    match judge_forward(scratch, dfs_codes, &prefix_rmp, leaves) {
        Some((best, next_leaves)) if best == candidate => walk(scratch, dfs_codes, &next_leaves, depth + 1),
        _ => false,
    }
}

/// Tries every backward extension from each of `leaves`, keeping only
/// those tied for lexicographically smallest. Returns `None` if no
/// backward extension exists anywhere in `leaves`, else the winning code
/// and the min-projection indices of the winning extensions (appended to
/// `scratch.min_projection` as a side effect).
fn judge_backward(
    scratch: &mut WorkerScratch,
    dfs_codes: &[DfsCode],
    rmp: &[usize],
    leaves: &[usize],
) -> Option<(DfsCode, Vec<usize>)> {
    let from_id = dfs_codes[rmp[0]].to;
    let mut best: Option<BackwardKey> = None;
    let mut winners: Vec<(Edge, usize)> = Vec::new();

    for &leaf in leaves {
        scratch.history.build_edges_min(&scratch.min_projection, scratch.min_graph.nedges, Some(leaf));
        let last_node_id = scratch.min_projection[leaf].edge.to;
        let last_node_edges = scratch.min_graph.vertices[last_node_id].edges.clone();
        let last_node_label = scratch.min_graph.vertices[last_node_id].label;

        for i in (1..rmp.len()).rev() {
            let edge = scratch.history.get_edge(i);
            let to_node_label = scratch.min_graph.vertices[edge.from].label;
            let to_id = dfs_codes[rmp[i]].from;

            for ln_edge in &last_node_edges {
                if scratch.history.has_edges(ln_edge.id) || ln_edge.to != edge.from {
                    continue;
                }
                let code = DfsCode {
                    from: from_id,
                    to: to_id,
                    from_label: last_node_label,
                    edge_label: ln_edge.label,
                    to_label: to_node_label,
                };
                record_best(BackwardKey(code), (*ln_edge, leaf), &mut best, &mut winners);
            }
        }
    }

    finish(scratch, best.map(|k| k.0), winners)
}

/// Tries every forward extension from each of `leaves` (first the
/// rightmost-vertex-only extensions, then every other rightmost-path
/// vertex), keeping only those tied for lexicographically smallest.
/// Returns `None` if no forward extension exists anywhere in `leaves`.
fn judge_forward(
    scratch: &mut WorkerScratch,
    dfs_codes: &[DfsCode],
    rmp: &[usize],
    leaves: &[usize],
) -> Option<(DfsCode, Vec<usize>)> {
    let min_label = dfs_codes[0].from_label;
    let to_id = dfs_codes[rmp[0]].to;
    let mut best: Option<ForwardKey> = None;
    let mut winners: Vec<(Edge, usize)> = Vec::new();

    for &leaf in leaves {
        scratch.history.build_vertice_min(&scratch.min_projection, scratch.min_graph.vertices.len(), Some(leaf));

        let last_node_id = scratch.min_projection[leaf].edge.to;
        let last_node_edges = scratch.min_graph.vertices[last_node_id].edges.clone();
        let last_node_label = scratch.min_graph.vertices[last_node_id].label;
        for ln_edge in &last_node_edges {
            let to_label = scratch.min_graph.vertices[ln_edge.to].label;
            if scratch.history.has_vertice(ln_edge.to) || to_label < min_label {
                continue;
            }
            let code = DfsCode { from: to_id, to: to_id + 1, from_label: last_node_label, edge_label: ln_edge.label, to_label };
            record_best(ForwardKey(code), (*ln_edge, leaf), &mut best, &mut winners);
        }

        for i in 0..rmp.len() {
            let edge = scratch.history.get_edge(i);
            let from_id = dfs_codes[rmp[i]].from;
            let cur_node_edges = scratch.min_graph.vertices[edge.from].edges.clone();
            let cur_node_label = scratch.min_graph.vertices[edge.from].label;
            let cur_to_label = scratch.min_graph.vertices[edge.to].label;

            for cn_edge in &cur_node_edges {
                let to_label = scratch.min_graph.vertices[cn_edge.to].label;
                if scratch.history.has_vertice(cn_edge.to) || cn_edge.to == edge.to || to_label < min_label {
                    continue;
                }
                if edge.label < cn_edge.label || (edge.label == cn_edge.label && cur_to_label <= to_label) {
                    let code = DfsCode { from: from_id, to: to_id + 1, from_label: cur_node_label, edge_label: cn_edge.label, to_label };
                    record_best(ForwardKey(code), (*cn_edge, leaf), &mut best, &mut winners);
                }
            }
        }
    }

    finish(scratch, best.map(|k| k.0), winners)
}

fn record_best<K: PartialOrd + Copy>(key: K, entry: (Edge, usize), best: &mut Option<K>, winners: &mut Vec<(Edge, usize)>) {
    match *best {
        None => {
            *best = Some(key);
            winners.clear();
            winners.push(entry);
        }
        Some(b) if key < b => {
            *best = Some(key);
            winners.clear();
            winners.push(entry);
        }
        Some(b) if key == b => winners.push(entry),
        _ => {}
    }
}

fn finish(scratch: &mut WorkerScratch, best: Option<DfsCode>, winners: Vec<(Edge, usize)>) -> Option<(DfsCode, Vec<usize>)> {
    let best = best?;
    let mut next_leaves = Vec::with_capacity(winners.len());
    for (edge, prev) in winners {
        next_leaves.push(scratch.min_projection.len());
        scratch.min_projection.push(MinEmbedding { edge, prev: Some(prev) });
    }
    Some((best, next_leaves))
}
