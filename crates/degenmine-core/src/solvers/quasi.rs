//! γ-quasi-clique: greedy solver over degeneracy peeling.
//!
//! Ported from `gm::quasiCliqueNaive` (`graph/quasiclique.cpp`).

use crate::graph::{CsrGraph, VertexId};
use crate::heap::LinearBucketHeap;

#[derive(Debug, Clone, Default)]
pub struct QuasiCliqueResult {
    pub vertices: Vec<VertexId>,
}

impl QuasiCliqueResult {
    pub fn size(&self) -> usize {
        self.vertices.len()
    }
}

/// `threshold(s) = ceil(alpha * (s - 1))`, the minimum in-set degree a
/// size-`s` γ-quasi-clique must meet.
pub fn quasi_threshold(alpha: f64, s: i64) -> i64 {
    ((alpha * (s - 1) as f64).ceil()) as i64
}

/// Degeneracy-peeling quasi-clique solver (spec.md §4.4): pop the
/// smallest-current-degree vertex; once its degree meets the quasi-clique
/// bar for the remaining set's size, the whole remaining set is valid.
pub fn naive_quasi_clique(g: &CsrGraph, alpha: f64) -> QuasiCliqueResult {
    let n = g.size();
    let degrees: Vec<i32> = (0..n).map(|u| g.degree(u) as i32).collect();
    let mut heap = LinearBucketHeap::new(n, &degrees);
    let mut removed = vec![false; n as usize];
    let mut result = QuasiCliqueResult::default();

    for i in 0..n as i64 {
        let (v, d) = heap.pop_min();
        let d = d as i64;
        let remaining = n as i64 - i;

        if d >= quasi_threshold(alpha, remaining) && remaining > result.size() as i64 {
            result.vertices = (0..n).filter(|&j| !removed[j as usize]).collect();
            break;
        }

        for &w in g.neighbours_of(v) {
            if !removed[w as usize] {
                heap.decrement(w, 1);
            }
        }
        removed[v as usize] = true;
    }

    result
}

/// Checks that every vertex in `s` has in-set degree at least
/// `ceil(alpha * (|s| - 1))` (spec.md §8).
pub fn is_valid_quasi_clique(g: &CsrGraph, s: &[VertexId], alpha: f64) -> bool {
    let n = g.size();
    let mut in_s = vec![false; n as usize];
    for &u in s {
        in_s[u as usize] = true;
    }
    let threshold = quasi_threshold(alpha, s.len() as i64);
    for &u in s {
        let degree = g
            .neighbours_of(u)
            .iter()
            .filter(|&&v| in_s[v as usize])
            .count() as i64;
        if degree < threshold {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_from_directed_edge_pairs;

    fn path6() -> CsrGraph {
        let mut edges = Vec::new();
        for i in 0..5 {
            edges.push((i, i + 1));
            edges.push((i + 1, i));
        }
        edges.sort_unstable();
        build_from_directed_edge_pairs(6, edges)
    }

    #[test]
    fn scenario_5_path_six_alpha_half_finds_at_least_three() {
        let g = path6();
        let result = naive_quasi_clique(&g, 0.5);
        assert!(result.size() >= 3);
        assert!(is_valid_quasi_clique(&g, &result.vertices, 0.5));
    }
}
