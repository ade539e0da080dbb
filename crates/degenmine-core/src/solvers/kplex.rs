//! Greedy k-plex solver over degeneracy peeling, with a live upper bound.
//!
//! Ported from `gm::kPlexDegen` (`graph/kplex.cpp`, "Algorithm 2: kPlex-Degen").

use crate::graph::{CsrGraph, VertexId};
use crate::heap::LinearBucketHeap;

/// A k-plex answer together with the upper bound the peeling argument
/// produced along the way (spec.md §4.4's "live upper bound").
#[derive(Debug, Clone, Default)]
pub struct KPlexResult {
    pub vertices: Vec<VertexId>,
    pub ub: i64,
}

impl KPlexResult {
    pub fn size(&self) -> usize {
        self.vertices.len()
    }
}

/// Degeneracy-peeling k-plex solver (spec.md §4.4, "k-plex-Degen").
///
/// Repeatedly pops the remaining vertex of smallest current degree `d`. If
/// `d + k >= n - i` (the remaining vertex set's minimum degree already meets
/// the k-plex bar for its own size), every still-present vertex forms a
/// valid k-plex; the first such `i` wins (earlier == larger remaining set,
/// and ties are not replaced — spec.md's tie-break note). Otherwise tracks
/// `ub = max(ub, min(d + k, n - i))`, a bound on any k-plex this peeling
/// order could ever surface.
pub fn naive_kplex_degen(g: &CsrGraph, k: i64) -> KPlexResult {
    let n = g.size();
    let degrees: Vec<i32> = (0..n).map(|u| g.degree(u) as i32).collect();
    let mut heap = LinearBucketHeap::new(n, &degrees);
    let mut removed = vec![false; n as usize];
    let mut result = KPlexResult::default();

    for i in 0..n as i64 {
        let (v, d) = heap.pop_min();
        let d = d as i64;
        let remaining = n as i64 - i;

        let ub = (d + k).min(remaining);
        if ub > result.ub {
            result.ub = ub;
        }

        if d + k >= remaining && remaining > result.size() as i64 {
            result.vertices = (0..n).filter(|&j| !removed[j as usize]).collect();
            break;
        }

        for &w in g.neighbours_of(v) {
            if !removed[w as usize] {
                let ok = heap.decrement(w, 1);
                debug_assert!(ok, "neighbour of a not-yet-popped vertex must still be in heap");
            }
        }
        removed[v as usize] = true;
    }

    result
}

/// Checks that every vertex in `s` has at least `|s| - k` neighbours inside
/// `s` (spec.md §8, k-plex validity).
pub fn is_valid_kplex(g: &CsrGraph, s: &[VertexId], k: i64) -> bool {
    let n = g.size();
    let mut in_s = vec![false; n as usize];
    for &u in s {
        in_s[u as usize] = true;
    }
    let threshold = s.len() as i64 - k;
    for &u in s {
        let connections = g
            .neighbours_of(u)
            .iter()
            .filter(|&&v| in_s[v as usize])
            .count() as i64;
        if connections < threshold {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_from_directed_edge_pairs;

    fn k5() -> CsrGraph {
        let mut edges = Vec::new();
        for u in 0..5 {
            for v in 0..5 {
                if u != v {
                    edges.push((u, v));
                }
            }
        }
        build_from_directed_edge_pairs(5, edges)
    }

    fn two_triangles() -> CsrGraph {
        let mut edges = Vec::new();
        for &(a, b) in &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
            edges.push((a, b));
            edges.push((b, a));
        }
        edges.sort_unstable();
        build_from_directed_edge_pairs(6, edges)
    }

    #[test]
    fn scenario_1_k5_k1_finds_whole_clique() {
        let g = k5();
        let result = naive_kplex_degen(&g, 1);
        assert_eq!(result.size(), 5);
        assert_eq!(result.ub, 5);
        assert!(is_valid_kplex(&g, &result.vertices, 1));
    }

    #[test]
    fn scenario_2_two_triangles_k1_finds_one_triangle() {
        let g = two_triangles();
        let result = naive_kplex_degen(&g, 1);
        assert_eq!(result.size(), 3);
        assert!(is_valid_kplex(&g, &result.vertices, 1));
    }
}
