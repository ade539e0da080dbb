//! γ-pseudo-clique: a one-shot greedy solver over reverse degeneracy order.
//!
//! Ported from `gm::pseudoCliqueNaive` (`graph/pseudoclique.cpp`). Density is
//! a whole-set property (edges over all possible pairs), not a per-vertex
//! one, so — like k-defective clique — this walks the precomputed ordering
//! back to front rather than peeling with a live heap.

use crate::degeneracy::degen_ordering;
use crate::graph::{CsrGraph, VertexId};

#[derive(Debug, Clone, Default)]
pub struct PseudoCliqueResult {
    pub vertices: Vec<VertexId>,
}

impl PseudoCliqueResult {
    pub fn size(&self) -> usize {
        self.vertices.len()
    }
}

/// `threshold(s) = ceil(0.5 * alpha * s * (s - 1))`, the minimum edge count
/// a size-`s` γ-pseudo-clique must contain.
pub fn pseudo_threshold(alpha: f64, s: i64) -> i64 {
    (0.5 * alpha * (s * (s - 1)) as f64).ceil() as i64
}

fn edge_count(g: &CsrGraph, in_s: &[bool], s: &[VertexId]) -> i64 {
    let mut edges = 0i64;
    for &u in s {
        for &v in g.neighbours_of(u) {
            if u < v && in_s[v as usize] {
                edges += 1;
            }
        }
    }
    edges
}

/// Greedy-over-degeneracy pseudo-clique solver (spec.md §4.4). Iterates the
/// degeneracy ordering from last-peeled to first-peeled, tentatively adding
/// each vertex; stops and backs off at first infeasibility.
pub fn naive_pseudo_clique(g: &CsrGraph, alpha: f64) -> PseudoCliqueResult {
    let ordering = degen_ordering(g);
    let n = g.size();
    let mut in_s = vec![false; n as usize];
    let mut solution = Vec::new();

    for idx in (0..ordering.len()).rev() {
        let v = ordering[idx];
        solution.push(v);
        in_s[v as usize] = true;
        let edges = edge_count(g, &in_s, &solution);
        let threshold = pseudo_threshold(alpha, solution.len() as i64);
        if edges < threshold {
            solution.pop();
            in_s[v as usize] = false;
            break;
        }
    }

    PseudoCliqueResult { vertices: solution }
}

/// Checks that `s` contains at least `ceil(0.5 * alpha * |s| * (|s|-1))`
/// edges (spec.md §8).
pub fn is_valid_pseudo_clique(g: &CsrGraph, s: &[VertexId], alpha: f64) -> bool {
    let n = g.size();
    let mut in_s = vec![false; n as usize];
    for &u in s {
        in_s[u as usize] = true;
    }
    let edges = edge_count(g, &in_s, s);
    edges >= pseudo_threshold(alpha, s.len() as i64)
}
