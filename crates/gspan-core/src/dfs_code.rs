//! DFS codes: the canonical per-edge description used throughout mining, plus
//! the three total orders the engine sorts candidate extensions by.
//!
//! A [`DfsCode`] is a five-tuple `(from, to, from_label, edge_label, to_label)`.
//! `from < to` is a forward edge (discovers a new vertex); `from > to` is a
//! backward edge (closes a cycle back to an earlier vertex on the rightmost
//! path). `from == to` never occurs.

use std::cmp::Ordering;

/// Vertex and edge labels are small non-negative integers in the input format.
pub type Label = i32;

/// One half-edge of a pruned graph or the minimum graph: `from`/`to` are
/// vertex indices, `label` is the edge's label, `id` is the shared identity
/// of the undirected edge (the same `id` appears on both mirrored halves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub label: Label,
    pub id: usize,
}

/// One step of a DFS traversal of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DfsCode {
    pub from: usize,
    pub to: usize,
    pub from_label: Label,
    pub edge_label: Label,
    pub to_label: Label,
}

impl DfsCode {
    /// `from < to`: this code introduces a new vertex.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.from < self.to
    }

    /// `from > to`: this code closes a cycle onto an earlier vertex.
    #[must_use]
    pub fn is_backward(&self) -> bool {
        self.from > self.to
    }
}

/// A DFS code sequence. Value-copied (not referenced) across task
/// boundaries so that sibling recursive branches never alias each other's
/// mutations — see `miner::mine_child`.
pub type DfsCodes = Vec<DfsCode>;

/// Recomputes the rightmost path of a DFS code sequence (or a prefix of
/// one): the indices of the codes whose union of edges forms the path from
/// vertex 0 to the largest-numbered vertex, stored in reverse order of
/// discovery (the code that discovered the rightmost vertex comes first).
///
/// Every appended code's `from` endpoint is always the current rightmost
/// vertex at the time it was appended (forward codes extend it, backward
/// codes originate from it), so a single backward scan recovers the path
/// without needing the whole tree.
#[must_use]
pub fn rightmost_path(codes: &[DfsCode]) -> Vec<usize> {
    let mut path = Vec::new();
    let mut expected_to: Option<usize> = None;
    for i in (0..codes.len()).rev() {
        let code = codes[i];
        if code.is_forward() && (path.is_empty() || expected_to == Some(code.to)) {
            path.push(i);
            expected_to = Some(code.from);
        }
    }
    path
}

/// Key wrapper ordering DFS codes the way a freshly-rooted one-edge pattern
/// is ordered: lexicographically on `(from_label, edge_label, to_label)`.
///
/// `Eq`/`Ord` here deliberately ignore `from`/`to`/id-like fields the way the
/// comparator-keyed map in the reference design does: at a fixed position in
/// a pattern, every embedding's candidate code shares the same `from`/`to`
/// (they're DFS-tree positions, not per-embedding data), so two codes this
/// order calls equal really do describe the same extension.
#[derive(Debug, Clone, Copy)]
pub struct ProjectKey(pub DfsCode);

impl ProjectKey {
    fn tuple(&self) -> (Label, Label, Label) {
        (self.0.from_label, self.0.edge_label, self.0.to_label)
    }
}

impl PartialEq for ProjectKey {
    fn eq(&self, other: &Self) -> bool {
        self.tuple() == other.tuple()
    }
}
impl Eq for ProjectKey {}

impl PartialOrd for ProjectKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for ProjectKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tuple().cmp(&other.tuple())
    }
}

/// Key wrapper for backward-extension candidates: lexicographic on `(to,
/// edge_label)`.
#[derive(Debug, Clone, Copy)]
pub struct BackwardKey(pub DfsCode);

impl BackwardKey {
    fn tuple(&self) -> (usize, Label) {
        (self.0.to, self.0.edge_label)
    }
}

impl PartialEq for BackwardKey {
    fn eq(&self, other: &Self) -> bool {
        self.tuple() == other.tuple()
    }
}
impl Eq for BackwardKey {}

impl PartialOrd for BackwardKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BackwardKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tuple().cmp(&other.tuple())
    }
}

/// Key wrapper for forward-extension candidates: `from` **descending**,
/// then `edge_label` and `to_label` ascending. Larger-`from` keys sort
/// first so that `BTreeMap` ascending iteration already matches the
/// original's "largest `from` first" ordering without a manual reverse —
/// the miner still reverses it (see `miner::mine_subgraph`) because the
/// deepest extension must be explored first.
#[derive(Debug, Clone, Copy)]
pub struct ForwardKey(pub DfsCode);

impl ForwardKey {
    fn tuple(&self) -> (Label, Label) {
        (self.0.edge_label, self.0.to_label)
    }
}

impl PartialEq for ForwardKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.from == other.0.from && self.tuple() == other.tuple()
    }
}
impl Eq for ForwardKey {}

impl PartialOrd for ForwardKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for ForwardKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.from.cmp(&self.0.from).then_with(|| self.tuple().cmp(&other.tuple()))
    }
}
