//! Top-level orchestration: frequency pass, pruning, thread-pool setup, and
//! the depth-first mining recursion itself.
//!
//! Mining fans out at the root: one task per single-edge candidate pattern,
//! scheduled onto a `rayon::scope`. Everything below the root runs
//! sequentially inside that task against one worker's exclusive
//! [`WorkerScratch`] — deeper fan-out would mean sharing a DFS code buffer
//! and history scratch across threads, which the algorithm's backtracking
//! structure doesn't allow for free.

use std::sync::Mutex;

use crate::canonical::{build_min_graph, is_min};
use crate::database::{FrequencyTables, InputGraph, construct_graphs, find_frequent_labels};
use crate::dfs_code::{DfsCode, DfsCodes, rightmost_path};
use crate::embedding::{Projection, count_support};
use crate::error::{Error, Result};
use crate::extend::enumerate;
use crate::output::{Output, ParentRef, format_pattern_body, frequent_nodes_output};
use crate::scratch::WorkerScratch;

/// Caller-supplied knobs for one mining run.
#[derive(Debug, Clone)]
pub struct MiningConfig {
    /// Minimum support as a fraction of the database size, in `(0.0, 1.0]`.
    pub min_support: f64,
    /// Largest pattern (by edge count) to report; `None` mines to
    /// exhaustion.
    pub max_pattern_edges: Option<usize>,
    /// Worker thread count; `0` defers to rayon's default.
    pub threads: usize,
    /// Emit `parent : <id> thread : <n>` lines alongside each pattern.
    pub with_parents: bool,
    /// Emit the full pattern body (vertices, edges, posting list), not just
    /// the `t #` header.
    pub with_pattern: bool,
    /// Also emit a buffer of frequent single vertices and their posting
    /// lists.
    pub report_frequent_nodes: bool,
}

/// Everything a caller needs to write mining results to disk: one output
/// buffer per worker thread (so results from different threads never
/// interleave their sequence numbers), the resolved absolute support
/// threshold, and — if requested — the frequent-nodes buffer.
#[derive(Debug)]
pub struct MiningOutcome {
    pub nsupport: usize,
    pub frequency: FrequencyTables,
    pub per_thread_output: Vec<Output>,
    pub frequent_nodes: Option<Output>,
}

/// Runs the full pipeline: frequency pass, pruning, and depth-first mining
/// of every frequent subgraph at or above `config.min_support`.
#[allow(clippy::float_arithmetic)]
pub fn mine(graphs: &[InputGraph], config: &MiningConfig) -> Result<MiningOutcome> {
    if !(config.min_support > 0.0 && config.min_support <= 1.0) {
        return Err(Error::Parameter(format!(
            "min_support must be in (0.0, 1.0], got {}",
            config.min_support
        )));
    }
    if graphs.is_empty() {
        return Err(Error::Parameter("input database is empty".to_string()));
    }

    // nsupport = floor(|graphs| * support_threshold), never rounded up.
    let nsupport = (config.min_support * graphs.len() as f64).floor() as usize;
    let freq = find_frequent_labels(graphs, nsupport);
    let pruned = construct_graphs(graphs, &freq);

    let max_edges = pruned.iter().map(|g| g.nedges).max().unwrap_or(0).max(1);
    let max_vertices = pruned.iter().map(|g| g.vertices.len()).max().unwrap_or(0).max(1);

    let mut builder = rayon::ThreadPoolBuilder::new();
    if config.threads > 0 {
        builder = builder.num_threads(config.threads);
    }
    let pool = builder
        .build()
        .map_err(|e| Error::Parameter(format!("failed to start worker pool: {e}")))?;
    let num_workers = pool.current_num_threads();

    let scratches: Vec<Mutex<WorkerScratch>> =
        (0..num_workers).map(|_| Mutex::new(WorkerScratch::new(max_edges, max_vertices))).collect();

    let root = project_root(&pruned);

    pool.install(|| {
        rayon::scope(|scope| {
            for (key, projection) in root {
                let scratches = &scratches;
                let pruned = &pruned;
                scope.spawn(move |_| {
                    let idx = rayon::current_thread_index().unwrap_or(0);
                    let mut scratch = scratches[idx].lock().expect("worker scratch mutex poisoned");
                    let mut dfs_codes: DfsCodes = vec![key.0];
                    mine_subgraph(&mut dfs_codes, &projection, &mut scratch, pruned, nsupport, config, None, idx);
                });
            }
        });
    });

    let per_thread_output = scratches.into_iter().map(|m| m.into_inner().expect("worker scratch mutex poisoned").output).collect();
    let frequent_nodes = config.report_frequent_nodes.then(|| frequent_nodes_output(&freq));

    Ok(MiningOutcome { nsupport, frequency: freq, per_thread_output, frequent_nodes })
}

/// Every directed single-edge candidate in the database, grouped by
/// project-order (`from_label, edge_label, to_label`) and keyed the same
/// way the root of the recursion is ordered. Each pruned graph's adjacency
/// already stores both directions of an edge, so no explicit "try both
/// orientations" step is needed here.
fn project_root(pruned: &[crate::graph::PrunedGraph]) -> std::collections::BTreeMap<crate::dfs_code::ProjectKey, Projection> {
    use crate::dfs_code::ProjectKey;
    use crate::embedding::EmbeddingNode;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    let mut by_project_key: BTreeMap<ProjectKey, Projection> = BTreeMap::new();
    for graph in pruned {
        for vertex in &graph.vertices {
            for edge in &vertex.edges {
                let to_label = graph.vertices[edge.to].label;
                // Every edge is mirrored into both endpoints' adjacency, so
                // without this guard an asymmetric-label edge would be
                // projected from both ends as two distinct root patterns.
                if vertex.label > to_label {
                    continue;
                }
                let code = DfsCode { from: 0, to: 1, from_label: vertex.label, edge_label: edge.label, to_label };
                by_project_key.entry(ProjectKey(code)).or_default().push(Arc::new(EmbeddingNode {
                    graph_id: graph.id,
                    edge: *edge,
                    prev: None,
                }));
            }
        }
    }
    by_project_key
}

/// One recursive mining step: check support and minimality, report if both
/// hold, then extend along every rightmost-path candidate.
#[allow(clippy::too_many_arguments)]
fn mine_subgraph(
    dfs_codes: &mut DfsCodes,
    projection: &Projection,
    scratch: &mut WorkerScratch,
    graphs: &[crate::graph::PrunedGraph],
    nsupport: usize,
    config: &MiningConfig,
    parent: Option<ParentRef>,
    thread_id: usize,
) {
    let support = count_support(projection);
    if support < nsupport {
        return;
    }
    if !is_min(scratch, dfs_codes) {
        return;
    }

    let body = if config.with_pattern {
        build_min_graph(scratch, dfs_codes);
        format_pattern_body(&scratch.min_graph, dfs_codes, projection)
    } else {
        String::new()
    };
    let seq = scratch.output.push(support, parent, body);
    let this_ref = ParentRef { id: seq, thread: thread_id };

    if let Some(max_edges) = config.max_pattern_edges {
        if dfs_codes.len() >= max_edges {
            return;
        }
    }

    let rmp = rightmost_path(dfs_codes);
    let (backward, forward) = enumerate(dfs_codes, projection, &rmp, graphs, &mut scratch.history);

    for (key, child_projection) in backward {
        dfs_codes.push(key.0);
        mine_subgraph(dfs_codes, &child_projection, scratch, graphs, nsupport, config, Some(this_ref), thread_id);
        dfs_codes.pop();
    }
    // Forward candidates are keyed so ascending order already puts the
    // largest `from` (the rightmost vertex) first; explored in descending
    // key order here so shallower rightmost-path extensions are tried
    // before the deepest one, per the recursive miner's extension order.
    for (key, child_projection) in forward.into_iter().rev() {
        dfs_codes.push(key.0);
        mine_subgraph(dfs_codes, &child_projection, scratch, graphs, nsupport, config, Some(this_ref), thread_id);
        dfs_codes.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{InputEdge, InputVertex};

    fn triangle(id: usize) -> InputGraph {
        InputGraph {
            id,
            vertices: vec![
                InputVertex { id: 0, label: 0 },
                InputVertex { id: 1, label: 0 },
                InputVertex { id: 2, label: 0 },
            ],
            edges: vec![
                InputEdge { from: 0, to: 1, label: 0 },
                InputEdge { from: 1, to: 2, label: 0 },
                InputEdge { from: 2, to: 0, label: 0 },
            ],
        }
    }

    #[test]
    fn mines_triangle_pattern_from_two_identical_graphs() {
        let graphs = vec![triangle(0), triangle(1)];
        let config = MiningConfig {
            min_support: 1.0,
            max_pattern_edges: None,
            threads: 1,
            with_parents: true,
            with_pattern: true,
            report_frequent_nodes: false,
        };

        let outcome = mine(&graphs, &config).expect("mining should succeed");
        assert_eq!(outcome.nsupport, 2);

        let total_patterns: usize = outcome.per_thread_output.iter().map(Output::len).sum();
        assert!(total_patterns > 0, "expected at least the single-edge pattern to be reported");

        let has_triangle = outcome
            .per_thread_output
            .iter()
            .flat_map(Output::records)
            .any(|r| r.body.lines().filter(|l| l.starts_with('e')).count() == 3);
        assert!(has_triangle, "expected the 3-edge triangle pattern to be reported");
    }

    #[test]
    fn rejects_support_outside_unit_interval() {
        let graphs = vec![triangle(0)];
        let config = MiningConfig {
            min_support: 1.5,
            max_pattern_edges: None,
            threads: 1,
            with_parents: false,
            with_pattern: false,
            report_frequent_nodes: false,
        };
        assert!(mine(&graphs, &config).is_err());
    }
}
