//! The extension engine: given a pattern's projection, enumerates every
//! valid rightmost-path extension, grouped by candidate DFS code.
//!
//! The `<=`/`>=` conditions below are the gSpan rightmost-extension lemma
//! applied to the undirected case — the weakest conditions under which an
//! extension can possibly yield a minimum DFS code. They must not be
//! weakened or strengthened.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dfs_code::{BackwardKey, DfsCode, ForwardKey};
use crate::embedding::{Embedding, EmbeddingNode, Projection};
use crate::graph::PrunedGraph;
use crate::history::History;

pub type BackwardMap = BTreeMap<BackwardKey, Projection>;
pub type ForwardMap = BTreeMap<ForwardKey, Projection>;

/// For every embedding in `projection`, rebuilds the history against its
/// graph and collects all backward and forward extensions.
pub fn enumerate(
    dfs_codes: &[DfsCode],
    projection: &Projection,
    right_most_path: &[usize],
    graphs: &[PrunedGraph],
    history: &mut History,
) -> (BackwardMap, ForwardMap) {
    let mut backward = BackwardMap::new();
    let mut forward = ForwardMap::new();

    for link in projection {
        let graph = &graphs[link.graph_id];
        history.build(link, graph.nedges, graph.vertices.len());

        get_backward(link, history, graph, dfs_codes, right_most_path, &mut backward);
        get_first_forward(link, history, graph, dfs_codes, right_most_path, &mut forward);
        get_other_forward(link, history, graph, dfs_codes, right_most_path, &mut forward);
    }

    (backward, forward)
}

fn get_backward(
    link: &Embedding,
    history: &History,
    graph: &PrunedGraph,
    dfs_codes: &[DfsCode],
    rmp: &[usize],
    out: &mut BackwardMap,
) {
    let last_edge = history.get_edge(rmp[0]);
    let last_node = &graph.vertices[last_edge.to];
    let from_id = dfs_codes[rmp[0]].to;

    for i in (1..rmp.len()).rev() {
        let edge = history.get_edge(rmp[i]);
        let from_node_label = graph.vertices[edge.from].label;
        let to_node_label = graph.vertices[edge.to].label;
        let to_id = dfs_codes[rmp[i]].from;

        for ln_edge in &last_node.edges {
            if history.has_edges(ln_edge.id) {
                continue;
            }
            if ln_edge.to == edge.from
                && (ln_edge.label > edge.label
                    || (ln_edge.label == edge.label && last_node.label >= to_node_label))
            {
                let code = DfsCode {
                    from: from_id,
                    to: to_id,
                    from_label: last_node.label,
                    edge_label: ln_edge.label,
                    to_label: from_node_label,
                };
                out.entry(BackwardKey(code)).or_default().push(Arc::new(EmbeddingNode {
                    graph_id: graph.id,
                    edge: *ln_edge,
                    prev: Some(Arc::clone(link)),
                }));
            }
        }
    }
}

fn get_first_forward(
    link: &Embedding,
    history: &History,
    graph: &PrunedGraph,
    dfs_codes: &[DfsCode],
    rmp: &[usize],
    out: &mut ForwardMap,
) {
    let last_edge = history.get_edge(rmp[0]);
    let last_node = &graph.vertices[last_edge.to];
    let min_label = dfs_codes[0].from_label;
    let to_id = dfs_codes[rmp[0]].to;

    for ln_edge in &last_node.edges {
        let to_node_label = graph.vertices[ln_edge.to].label;
        if history.has_vertice(ln_edge.to) || to_node_label < min_label {
            continue;
        }
        let code = DfsCode {
            from: to_id,
            to: to_id + 1,
            from_label: last_node.label,
            edge_label: ln_edge.label,
            to_label: to_node_label,
        };
        out.entry(ForwardKey(code)).or_default().push(Arc::new(EmbeddingNode {
            graph_id: graph.id,
            edge: *ln_edge,
            prev: Some(Arc::clone(link)),
        }));
    }
}

fn get_other_forward(
    link: &Embedding,
    history: &History,
    graph: &PrunedGraph,
    dfs_codes: &[DfsCode],
    rmp: &[usize],
    out: &mut ForwardMap,
) {
    let min_label = dfs_codes[0].from_label;
    let to_id = dfs_codes[rmp[0]].to;

    for &i in rmp {
        let cur_edge = history.get_edge(i);
        let cur_node = &graph.vertices[cur_edge.from];
        let cur_to = &graph.vertices[cur_edge.to];
        let from_id = dfs_codes[i].from;

        for cn_edge in &cur_node.edges {
            let to_node = &graph.vertices[cn_edge.to];
            if history.has_vertice(to_node.id) || to_node.id == cur_to.id || to_node.label < min_label {
                continue;
            }
            if cur_edge.label < cn_edge.label
                || (cur_edge.label == cn_edge.label && cur_to.label <= to_node.label)
            {
                let code = DfsCode {
                    from: from_id,
                    to: to_id + 1,
                    from_label: cur_node.label,
                    edge_label: cn_edge.label,
                    to_label: to_node.label,
                };
                out.entry(ForwardKey(code)).or_default().push(Arc::new(EmbeddingNode {
                    graph_id: graph.id,
                    edge: *cn_edge,
                    prev: Some(Arc::clone(link)),
                }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    fn triangle() -> PrunedGraph {
        // 0:A(0) -1:A(0) -2:A(0), edges labeled 0, forming a triangle.
        let e = |from, to, id| crate::dfs_code::Edge { from, to, label: 0, id };
        PrunedGraph {
            id: 0,
            nedges: 3,
            vertices: vec![
                Vertex { id: 0, label: 0, edges: vec![e(0, 1, 0), e(0, 2, 2)] },
                Vertex { id: 1, label: 0, edges: vec![e(1, 0, 0), e(1, 2, 1)] },
                Vertex { id: 2, label: 0, edges: vec![e(2, 1, 1), e(2, 0, 2)] },
            ],
        }
    }

    #[test]
    fn enumerate_root_edge_finds_backward_and_forward_candidates() {
        let graph = triangle();
        let root_code = DfsCode { from: 0, to: 1, from_label: 0, edge_label: 0, to_label: 0 };
        let link: Embedding = Arc::new(EmbeddingNode { graph_id: 0, edge: graph.vertices[0].edges[0], prev: None });
        let projection = vec![link];
        let dfs_codes = vec![root_code];
        let rmp = crate::dfs_code::rightmost_path(&dfs_codes);

        let mut history = History::new(3, 3);
        let (backward, forward) = enumerate(&dfs_codes, &projection, &rmp, &[graph], &mut history);

        // No backward extension possible yet (rightmost path has only one entry).
        assert!(backward.is_empty());
        // Forward: vertex 1 can extend to vertex 2.
        assert_eq!(forward.len(), 1);
    }
}
