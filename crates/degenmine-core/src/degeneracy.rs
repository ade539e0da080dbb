//! Degeneracy ordering, rank, and the reverse-rank neighbour sort that lets
//! [`crate::graph::CsrGraph::subgraph_degen`] and the refinement driver
//! truncate neighbour scans early.
//!
//! Ported from `gm::v2::degenOrdering` (`graph/graphv2.cpp`).

use crate::graph::{CsrGraph, VertexId};
use crate::heap::LinearBucketHeap;

/// Computes a degeneracy ordering of `g`: repeatedly remove a vertex of
/// smallest *current* degree, append it to the ordering. `O(n + m)` via
/// [`LinearBucketHeap`].
///
/// Tie-break among equal-degree vertices is the heap's LIFO bucket-head
/// policy — deterministic, but not meaningful beyond that (spec.md §4.3).
pub fn degen_ordering(g: &CsrGraph) -> Vec<VertexId> {
    let span = tracing::debug_span!("degen_ordering", n = g.size(), m = g.n_edges());
    let _enter = span.enter();

    let n = g.size();
    let degrees: Vec<i32> = (0..n).map(|u| g.degree(u) as i32).collect();
    let mut heap = LinearBucketHeap::new(n, &degrees);

    let mut ordering = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let (u, _) = heap.pop_min();
        for &w in g.neighbours_of(u) {
            heap.decrement(w, 1);
        }
        ordering.push(u);
    }
    tracing::debug!(peeled = ordering.len(), "degeneracy ordering complete");
    ordering
}

/// Inverts a permutation: `rank[ordering[i]] == i`.
pub fn degen_rank(ordering: &[VertexId]) -> Vec<i32> {
    let mut rank = vec![0i32; ordering.len()];
    for (i, &v) in ordering.iter().enumerate() {
        rank[v as usize] = i as i32;
    }
    rank
}

/// Sorts every vertex's neighbour list by *descending* `degen_rank`, in
/// place. After this, a vertex `u`'s "degeneracy-forward" neighbours (those
/// with `degen_rank[v] >= degen_rank[u]`) are exactly the prefix of its
/// adjacency up to (but not including) the first entry with a smaller rank —
/// the early-exit trick spec.md §4.3/§4.5 both depend on.
pub fn sort_neighbours_by_reverse_rank(g: &mut CsrGraph, rank: &[i32]) {
    for u in 0..g.size() {
        g.neighbours_of_mut(u)
            .sort_unstable_by_key(|&v| std::cmp::Reverse(rank[v as usize]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_from_directed_edge_pairs;
    use proptest::prelude::*;

    fn star(n: i32) -> CsrGraph {
        // vertex 0 connected to every other vertex; degeneracy of a star is 1.
        let mut edges = Vec::new();
        for v in 1..n {
            edges.push((0, v));
            edges.push((v, 0));
        }
        edges.sort_unstable();
        build_from_directed_edge_pairs(n, edges)
    }

    #[test]
    fn star_graph_has_degeneracy_one() {
        let g = star(6);
        let ordering = degen_ordering(&g);
        // The hub (id 0) must be peeled last: every leaf has degree 1 when
        // peeled (the minimum over the whole process), and the hub's degree
        // at time of peeling is the remaining leaf count, which only equals 1
        // once a single leaf is left. The degeneracy (max over i of that
        // minimum) is 1.
        assert_eq!(ordering[ordering.len() - 1], 0);
    }

    fn induced_min_degree(g: &CsrGraph, remaining: &[VertexId]) -> i32 {
        let present: std::collections::HashSet<VertexId> = remaining.iter().copied().collect();
        remaining
            .iter()
            .map(|&u| {
                g.neighbours_of(u)
                    .iter()
                    .filter(|v| present.contains(v))
                    .count() as i32
            })
            .min()
            .unwrap_or(0)
    }

    proptest! {
        #[test]
        fn ordering_prefix_degree_matches_minimum_induced_degree(
            n in 4i32..12,
            extra_edges in prop::collection::vec((0usize..12, 0usize..12), 0..30),
        ) {
            let n_u = n as usize;
            let mut seen = std::collections::HashSet::new();
            let mut edges = Vec::new();
            for (a, b) in extra_edges {
                let (a, b) = (a % n_u, b % n_u);
                if a == b { continue; }
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    edges.push((key.0 as i32, key.1 as i32));
                    edges.push((key.1 as i32, key.0 as i32));
                }
            }
            edges.sort_unstable();
            let g = build_from_directed_edge_pairs(n, edges);

            let ordering = degen_ordering(&g);
            for i in 0..ordering.len() {
                let suffix = &ordering[i..];
                let min_deg_in_suffix = induced_min_degree(&g, suffix);
                // ordering[i] was picked as *a* minimum-degree vertex among
                // the suffix at the time, so its degree within the suffix
                // subgraph equals that suffix's minimum induced degree.
                let deg_of_picked = g.neighbours_of(ordering[i])
                    .iter()
                    .filter(|v| suffix.contains(v))
                    .count() as i32;
                prop_assert_eq!(deg_of_picked, min_deg_in_suffix);
            }
        }
    }

    #[test]
    fn reverse_rank_sort_orders_descending() {
        let g = star(5);
        let ordering = degen_ordering(&g);
        let rank = degen_rank(&ordering);
        let mut g2 = g.clone();
        sort_neighbours_by_reverse_rank(&mut g2, &rank);
        for u in 0..g2.size() {
            let ranks: Vec<i32> = g2.neighbours_of(u).iter().map(|&v| rank[v as usize]).collect();
            let mut sorted = ranks.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(ranks, sorted);
        }
    }
}
