//! k-defective clique: a one-shot greedy solver over reverse degeneracy
//! order.
//!
//! Ported from `gm::kDefNaive` (`graph/kdefective.cpp`). Unlike the k-plex
//! solver this does not peel with a heap — it walks the precomputed
//! degeneracy ordering back to front and stops at first infeasibility.
//! Per spec.md §9's Open Question, this is deliberately kept as one-shot
//! greedy rather than upgraded to a peeling variant.

use crate::degeneracy::degen_ordering;
use crate::graph::{CsrGraph, VertexId};

#[derive(Debug, Clone, Default)]
pub struct KDefResult {
    pub vertices: Vec<VertexId>,
}

impl KDefResult {
    pub fn size(&self) -> usize {
        self.vertices.len()
    }
}

/// Feasibility predicate: `S` is a valid k-defective clique iff the number
/// of missing edges (`|S|*(|S|-1)/2 - edges(S)`) is at most `k`.
pub fn is_valid_kdef(g: &CsrGraph, s: &[VertexId], k: i64) -> bool {
    let n = g.size();
    let mut in_s = vec![false; n as usize];
    for &u in s {
        in_s[u as usize] = true;
    }
    let target = (s.len() as i64) * (s.len() as i64 - 1) / 2;
    let mut edges = 0i64;
    for &u in s {
        for &v in g.neighbours_of(u) {
            if u < v && in_s[v as usize] {
                edges += 1;
            }
        }
    }
    target - edges <= k
}

/// Greedy-over-degeneracy k-defective clique solver (spec.md §4.4).
/// Iterates the degeneracy ordering from last-peeled to first-peeled,
/// tentatively adding each vertex; stops and backs off at first
/// infeasibility.
pub fn naive_kdef(g: &CsrGraph, k: i64) -> KDefResult {
    let ordering = degen_ordering(g);
    naive_kdef_with_ordering(g, k, &ordering)
}

pub(crate) fn naive_kdef_with_ordering(g: &CsrGraph, k: i64, ordering: &[VertexId]) -> KDefResult {
    let mut solution = Vec::new();
    for idx in (0..ordering.len()).rev() {
        solution.push(ordering[idx]);
        if !is_valid_kdef(g, &solution, k) {
            solution.pop();
            break;
        }
    }
    KDefResult { vertices: solution }
}
