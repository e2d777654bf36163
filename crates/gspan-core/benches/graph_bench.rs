//! # Mining Hot-Path Benchmarks
//!
//! Performance benchmarks for gspan-core's hottest recursive steps.
//!
//! Run with: `cargo bench -p gspan-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gspan_core::canonical::is_min;
use gspan_core::dfs_code::DfsCode;
use gspan_core::scratch::WorkerScratch;
use gspan_core::{InputEdge, InputGraph, InputVertex, MiningConfig, mine};
use std::hint::black_box;

// =============================================================================
// HELPERS
// =============================================================================

/// An `size`-vertex cycle, all vertex and edge labels fixed at 1 — the
/// worst case for the minimum-DFS-code test since every rotation of the
/// cycle is a distinct DFS traversal of the same pattern.
fn cycle_graph(id: usize, size: usize) -> InputGraph {
    let vertices = (0..size).map(|v| InputVertex { id: v, label: 1 }).collect();
    let edges = (0..size)
        .map(|v| InputEdge { from: v, to: (v + 1) % size, label: 0 })
        .collect();
    InputGraph { id, vertices, edges }
}

/// The DFS code sequence of a cycle traversed in discovery order, forward
/// edges followed by the closing backward edge.
fn cycle_codes(size: usize) -> Vec<DfsCode> {
    let mut codes: Vec<DfsCode> = (0..size - 1)
        .map(|v| DfsCode { from: v, to: v + 1, from_label: 1, edge_label: 0, to_label: 1 })
        .collect();
    codes.push(DfsCode { from: size - 1, to: 0, from_label: 1, edge_label: 0, to_label: 1 });
    codes
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_is_min_on_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_min_cycle");

    for size in [4usize, 6, 8, 10].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let codes = cycle_codes(size);
            b.iter(|| {
                let mut scratch = WorkerScratch::new(size, size);
                black_box(is_min(&mut scratch, &codes))
            });
        });
    }

    group.finish();
}

fn bench_mine_cycle_database(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine_cycle_database");

    for size in [4usize, 6, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let graphs: Vec<InputGraph> = (0..4).map(|i| cycle_graph(i, size)).collect();
            let config = MiningConfig {
                min_support: 1.0,
                max_pattern_edges: None,
                threads: 1,
                with_parents: false,
                with_pattern: false,
                report_frequent_nodes: false,
            };
            b.iter(|| black_box(mine(&graphs, &config).expect("mining should succeed")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_is_min_on_cycles, bench_mine_cycle_database);
criterion_main!(benches);
