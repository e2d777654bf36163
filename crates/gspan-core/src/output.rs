//! The output sink: a per-worker append-only buffer of formatted pattern
//! records. Writing the buffer to a file is an external collaborator's job
//! (`gspan-miner`'s writer) — this module only formats and buffers.

use crate::database::FrequencyTables;
use crate::dfs_code::DfsCode;
use crate::embedding::Projection;
use crate::graph::PrunedGraph;

/// A reported pattern's parent, for `-p`/`--parents`: the sequence number
/// of the parent record and which worker's buffer it lives in. Root
/// patterns have no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRef {
    pub id: usize,
    pub thread: usize,
}

/// One reported pattern, already formatted. `body` is empty unless
/// `--dfs` pattern bodies were requested.
#[derive(Debug, Clone)]
pub struct PatternRecord {
    pub seq: usize,
    pub support: usize,
    pub parent: Option<ParentRef>,
    pub body: String,
}

/// One worker's append-only output buffer.
#[derive(Debug, Clone, Default)]
pub struct Output {
    records: Vec<PatternRecord>,
}

impl Output {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[PatternRecord] {
        &self.records
    }

    /// Appends a record, returning the sequence number assigned to it (used
    /// as the `parent` reference of whatever gets reported next).
    pub fn push(&mut self, support: usize, parent: Option<ParentRef>, body: String) -> usize {
        let seq = self.records.len();
        self.records.push(PatternRecord { seq, support, parent, body });
        seq
    }

    /// Renders every record in this buffer to the on-disk text format:
    /// `t # <seq> * <support>`, an optional `parent : ...` line, and an
    /// optional pattern body.
    #[must_use]
    pub fn render(&self, emit_parent: bool, emit_pattern: bool) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&format!("t # {} * {}\n", record.seq, record.support));
            if emit_parent {
                match record.parent {
                    None => out.push_str("parent : -1\n"),
                    Some(p) => out.push_str(&format!("parent : {} thread : {}\n", p.id, p.thread)),
                }
            }
            if emit_pattern {
                out.push_str(&record.body);
            }
        }
        out
    }
}

/// Formats the body of one pattern record (vertex lines, edge lines, and
/// the `x:` posting list) from the already-built minimum graph, the DFS
/// code sequence, and the pattern's projection.
#[must_use]
pub fn format_pattern_body(min_graph: &PrunedGraph, dfs_codes: &[DfsCode], projection: &Projection) -> String {
    let mut body = String::new();
    for vertex in &min_graph.vertices {
        body.push_str(&format!("v {} {}\n", vertex.id, vertex.label));
    }
    for code in dfs_codes {
        body.push_str(&format!("e {} {} {}\n", code.from, code.to, code.edge_label));
    }
    body.push_str("x: ");
    let mut prev_id: Option<usize> = None;
    for link in projection {
        if prev_id != Some(link.graph_id) {
            prev_id = Some(link.graph_id);
            body.push_str(&format!("{} ", link.graph_id));
        }
    }
    body.push('\n');
    body
}

/// Builds the `--output-frequent-nodes` buffer: each frequent vertex label
/// as a degenerate one-vertex pattern with its posting list on the `x:`
/// line. Independent of mining proper — built straight from the frequency
/// pass.
#[must_use]
pub fn frequent_nodes_output(freq: &FrequencyTables) -> Output {
    let mut output = Output::default();
    for (label, graph_ids) in &freq.frequent_vertex_labels {
        let mut body = format!("v 0 {label}\nx: ");
        for gid in graph_ids {
            body.push_str(&format!("{gid} "));
        }
        body.push('\n');
        output.push(graph_ids.len(), None, body);
    }
    output
}
