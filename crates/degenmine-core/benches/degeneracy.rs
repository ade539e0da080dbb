//! Benchmarks for degeneracy ordering and the refinement driver over a
//! synthetic scale-free graph.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use degenmine_core::graph::build_from_directed_edge_pairs;
use degenmine_core::{degen_ordering, prepare_degeneracy, refine_kplex, CsrGraph};

/// Barabasi-Albert-style preferential attachment graph: deterministic given
/// a fixed seed sequence, no external RNG crate needed for a benchmark
/// fixture.
fn scale_free_graph(n: i32, attach: i32) -> CsrGraph {
    let mut degree = vec![0i64; n as usize];
    let mut edges: Vec<(i32, i32)> = Vec::new();
    let mut targets: Vec<i32> = Vec::new();
    let mut state: u64 = 0x9e3779b97f4a7c15;

    let mut next_rand = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    for new_v in 0..n {
        if new_v == 0 {
            continue;
        }
        let links = attach.min(new_v);
        let mut chosen = std::collections::HashSet::new();
        for _ in 0..links {
            let target = if targets.is_empty() {
                new_v - 1
            } else {
                targets[(next_rand() as usize) % targets.len()]
            };
            if chosen.insert(target) {
                edges.push((new_v, target));
                edges.push((target, new_v));
                degree[new_v as usize] += 1;
                degree[target as usize] += 1;
                targets.push(new_v);
                targets.push(target);
            }
        }
    }

    edges.sort_unstable();
    edges.dedup();
    build_from_directed_edge_pairs(n, edges)
}

fn bench_degen_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("degen_ordering");
    for &n in &[1_000, 5_000, 20_000] {
        let g = scale_free_graph(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| black_box(degen_ordering(g)));
        });
    }
    group.finish();
}

fn bench_kplex_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine_kplex");
    for &n in &[500, 2_000] {
        let mut g = scale_free_graph(n, 4);
        let rank = prepare_degeneracy(&mut g);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(&g, &rank), |b, (g, rank)| {
            b.iter(|| black_box(refine_kplex(g, rank, 2, false)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_degen_ordering, bench_kplex_driver);
criterion_main!(benches);
