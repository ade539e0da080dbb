//! Compressed-sparse-row graph representation.
//!
//! Ported from `gm::v2::GraphV2` (`graph/graphv2.cpp`/`.hpp`). `off`/`e` are
//! owned, contiguous `Vec`s rather than raw pointers into a shared arena —
//! the reference implementation hands out `v_int*` slices into the same
//! buffers from both the full graph and its subgraphs; here every
//! `CsrGraph` is sole owner of its own buffers and a subgraph is a fresh,
//! independent graph.

pub type VertexId = i32;

/// Immutable-topology compressed-sparse-row graph.
///
/// `off[0..=n]` are edge-array offsets (`off[n] == 2*m`); `e[0..2m]` is the
/// concatenated, per-vertex neighbour lists. See spec.md §3 for the full
/// invariant list (no self-loops, no duplicate neighbours, symmetric
/// adjacency).
#[derive(Debug, Clone)]
pub struct CsrGraph {
    n: VertexId,
    m: i64,
    off: Vec<i64>,
    e: Vec<VertexId>,
}

impl std::fmt::Display for CsrGraph {
    /// Matches `operator<<(ostream&, const GraphV2&)`'s
    /// `Graph{size=...,edges=...}` shape.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Graph{{size={},edges={}}}", self.n, self.m)
    }
}

impl CsrGraph {
    /// Builds a `CsrGraph` directly from already-normalised CSR arrays.
    ///
    /// Callers (loaders, `subgraph`/`subgraph_degen`) are responsible for the
    /// invariants in spec.md §3; this constructor only checks shape.
    pub fn from_csr(n: VertexId, off: Vec<i64>, e: Vec<VertexId>) -> Self {
        debug_assert_eq!(off.len(), n as usize + 1);
        let m = off[n as usize] / 2;
        debug_assert_eq!(e.len(), (2 * m) as usize);
        CsrGraph { n, m, off, e }
    }

    /// Vertex count.
    pub fn size(&self) -> VertexId {
        self.n
    }

    /// Undirected edge count.
    pub fn n_edges(&self) -> i64 {
        self.m
    }

    /// Degree of `u`.
    pub fn degree(&self, u: VertexId) -> i64 {
        self.off[u as usize + 1] - self.off[u as usize]
    }

    /// Neighbour ids of `u`, in whatever order the graph currently holds
    /// them (ascending on load; degeneracy-reverse-rank after
    /// [`crate::degeneracy::sort_neighbours_by_reverse_rank`]).
    pub fn neighbours_of(&self, u: VertexId) -> &[VertexId] {
        let start = self.off[u as usize] as usize;
        let end = self.off[u as usize + 1] as usize;
        &self.e[start..end]
    }

    /// Mutable access to `u`'s neighbour slice, used only by the degeneracy
    /// core to re-sort lists in place.
    pub(crate) fn neighbours_of_mut(&mut self, u: VertexId) -> &mut [VertexId] {
        let start = self.off[u as usize] as usize;
        let end = self.off[u as usize + 1] as usize;
        &mut self.e[start..end]
    }

    /// Builds the induced subgraph on `vertices`, renumbered `0..vertices.len()`
    /// in the order given. Duplicates in `vertices` are a caller bug
    /// (debug-asserted).
    ///
    /// `O(|V'| + sum of deg(v) for v in V') + |E'| log|E'|` — edges are
    /// collected unsorted then sorted once, unlike [`Self::subgraph_degen`]
    /// which avoids the sort by exploiting degeneracy-rank order.
    pub fn subgraph(&self, vertices: &[VertexId]) -> CsrGraph {
        let mut v_map = vec![-1i32; self.n as usize];
        for (new_id, &old_id) in vertices.iter().enumerate() {
            debug_assert_eq!(v_map[old_id as usize], -1, "duplicate vertex in subgraph()");
            v_map[old_id as usize] = new_id as i32;
        }

        let mut edges: Vec<(i32, i32)> = Vec::new();
        for &u in vertices {
            let new_u = v_map[u as usize];
            for &v in self.neighbours_of(u) {
                let new_v = v_map[v as usize];
                if new_v >= 0 {
                    edges.push((new_u, new_v));
                }
            }
        }
        edges.sort_unstable();

        build_from_directed_edge_pairs(vertices.len() as i32, edges)
    }

    /// Builds the induced subgraph on `vertices`, keeping only the edges
    /// `(x, y)` discovered while `degen_rank[x] < degen_rank[y]` on a forward
    /// sweep of each kept vertex's (reverse-rank-sorted) neighbour list, then
    /// emitting both directions. `O(|V'| + |E'|)` — no sort, because each
    /// vertex's neighbour list is already in descending-degen-rank order
    /// (see [`crate::degeneracy`]), so the scan can break the instant it
    /// crosses below `degen_rank[x]`.
    ///
    /// Ported from `gm::v2::subgraphDegen`. The renumbering is the identity
    /// on `vertices`' *position*: new id `i` is `vertices[i]`.
    pub fn subgraph_degen(&self, vertices: &[VertexId], degen_rank: &[i32]) -> CsrGraph {
        let mut v_map = vec![-1i32; self.n as usize];
        for (new_id, &old_id) in vertices.iter().enumerate() {
            debug_assert_eq!(v_map[old_id as usize], -1, "duplicate vertex in subgraph_degen()");
            v_map[old_id as usize] = new_id as i32;
        }

        // Two passes over the (unordered) set: first count each new vertex's
        // forward-kept degree to prefix-sum offsets, then fill. This avoids
        // materialising an edge list at all.
        let new_n = vertices.len() as i32;
        let mut deg = vec![0i64; new_n as usize];
        for (new_u, &u) in vertices.iter().enumerate() {
            let rank_u = degen_rank[u as usize];
            for &v in self.neighbours_of(u) {
                if degen_rank[v as usize] < rank_u {
                    break;
                }
                let new_v = v_map[v as usize];
                if new_v >= 0 {
                    deg[new_u] += 1;
                    deg[new_v as usize] += 1;
                }
            }
        }

        let mut off = vec![0i64; new_n as usize + 1];
        for i in 0..new_n as usize {
            off[i + 1] = off[i] + deg[i];
        }
        let total = off[new_n as usize];
        let mut e = vec![0i32; total as usize];
        let mut cursor = off.clone();

        for (new_u, &u) in vertices.iter().enumerate() {
            let rank_u = degen_rank[u as usize];
            for &v in self.neighbours_of(u) {
                if degen_rank[v as usize] < rank_u {
                    break;
                }
                let new_v = v_map[v as usize];
                if new_v >= 0 {
                    let new_v = new_v as usize;
                    e[cursor[new_u] as usize] = new_v as i32;
                    cursor[new_u] += 1;
                    e[cursor[new_v] as usize] = new_u as i32;
                    cursor[new_v] += 1;
                }
            }
        }

        CsrGraph::from_csr(new_n, off, e)
    }
}

/// Shared two-pass offset fill used by [`CsrGraph::subgraph`] and the text
/// loader: given `n` vertices and a sorted list of directed `(u, v)` pairs
/// (each undirected edge appearing once per direction), builds `off`/`e`.
pub fn build_from_directed_edge_pairs(n: VertexId, edges: Vec<(i32, i32)>) -> CsrGraph {
    let mut off = vec![0i64; n as usize + 1];
    for &(u, _) in &edges {
        off[u as usize + 1] += 1;
    }
    for i in 0..n as usize {
        off[i + 1] += off[i];
    }
    let mut e = vec![0i32; edges.len()];
    let mut cursor = off.clone();
    for (u, v) in edges {
        e[cursor[u as usize] as usize] = v;
        cursor[u as usize] += 1;
    }
    CsrGraph::from_csr(n, off, e)
}
