//! Raw input graphs, the frequency pass, and pruning raw graphs down to
//! [`PrunedGraph`]s. This is the "leaves first" end of the pipeline: nothing
//! here depends on DFS codes or embeddings.

use std::collections::BTreeMap;

use crate::dfs_code::{Edge, Label};
use crate::graph::{PrunedGraph, Vertex};

/// One vertex as it appears in the raw, unpruned input.
#[derive(Debug, Clone, Copy)]
pub struct InputVertex {
    pub id: usize,
    pub label: Label,
}

/// One undirected edge as it appears in the raw input. Consumed once per
/// input line; the pruning pass is what mirrors it into two half-edges.
#[derive(Debug, Clone, Copy)]
pub struct InputEdge {
    pub from: usize,
    pub to: usize,
    pub label: Label,
}

/// One graph exactly as the textual format describes it, before pruning.
#[derive(Debug, Clone, Default)]
pub struct InputGraph {
    pub id: usize,
    pub vertices: Vec<InputVertex>,
    pub edges: Vec<InputEdge>,
}

/// Output of the frequency pass: which vertex and edge labels are frequent
/// enough to survive pruning, plus the vertex posting lists `--nodes`
/// reporting needs.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTables {
    /// label -> sorted, deduplicated list of graph ids containing a vertex
    /// with that label.
    pub frequent_vertex_labels: BTreeMap<Label, Vec<usize>>,
    /// label -> number of graphs containing an edge with that label.
    pub frequent_edge_labels: BTreeMap<Label, usize>,
}

/// One linear pass over the raw input: for each graph, collect the *set* of
/// vertex labels and the *set* of edge labels it contains (so a label that
/// appears many times in one graph still counts once), then keep only
/// labels whose document frequency is at least `nsupport`.
#[must_use]
pub fn find_frequent_labels(graphs: &[InputGraph], nsupport: usize) -> FrequencyTables {
    let mut vertex_doc_freq: BTreeMap<Label, Vec<usize>> = BTreeMap::new();
    let mut edge_doc_freq: BTreeMap<Label, usize> = BTreeMap::new();

    for graph in graphs {
        let mut vertex_labels: Vec<Label> = graph.vertices.iter().map(|v| v.label).collect();
        vertex_labels.sort_unstable();
        vertex_labels.dedup();
        for label in vertex_labels {
            vertex_doc_freq.entry(label).or_default().push(graph.id);
        }

        let mut edge_labels: Vec<Label> = graph.edges.iter().map(|e| e.label).collect();
        edge_labels.sort_unstable();
        edge_labels.dedup();
        for label in edge_labels {
            *edge_doc_freq.entry(label).or_insert(0) += 1;
        }
    }

    let frequent_vertex_labels = vertex_doc_freq
        .into_iter()
        .filter(|(_, graph_ids)| graph_ids.len() >= nsupport)
        .collect();
    let frequent_edge_labels = edge_doc_freq
        .into_iter()
        .filter(|(_, count)| *count >= nsupport)
        .collect();

    FrequencyTables { frequent_vertex_labels, frequent_edge_labels }
}

/// Rebuilds every input graph into a [`PrunedGraph`]: vertices whose label
/// isn't frequent are dropped, survivors are renumbered contiguously from 0
/// in input order, and edges with an infrequent label or an endpoint on a
/// dropped vertex are dropped. Each surviving edge is materialized twice
/// (once per endpoint) with a shared `edge_id` assigned in insertion order.
#[must_use]
pub fn construct_graphs(graphs: &[InputGraph], freq: &FrequencyTables) -> Vec<PrunedGraph> {
    graphs.iter().map(|g| construct_graph(g, freq)).collect()
}

fn construct_graph(graph: &InputGraph, freq: &FrequencyTables) -> PrunedGraph {
    let mut id_map: Vec<Option<usize>> = Vec::with_capacity(graph.vertices.len());
    let mut vertices: Vec<Vertex> = Vec::with_capacity(graph.vertices.len());

    for input_vertex in &graph.vertices {
        if freq.frequent_vertex_labels.contains_key(&input_vertex.label) {
            let new_id = vertices.len();
            id_map.push(Some(new_id));
            vertices.push(Vertex { id: new_id, label: input_vertex.label, edges: Vec::new() });
        } else {
            id_map.push(None);
        }
    }

    let mut edge_id = 0usize;
    for input_edge in &graph.edges {
        if !freq.frequent_edge_labels.contains_key(&input_edge.label) {
            continue;
        }
        let (Some(from), Some(to)) = (id_map[input_edge.from], id_map[input_edge.to]) else {
            continue;
        };
        vertices[from].edges.push(Edge { from, to, label: input_edge.label, id: edge_id });
        vertices[to].edges.push(Edge { from: to, to: from, label: input_edge.label, id: edge_id });
        edge_id += 1;
    }

    PrunedGraph { id: graph.id, nedges: edge_id, vertices }
}
