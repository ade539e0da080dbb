//! Degeneracy-ordered ego-network refinement for cohesive subgraph mining.
//!
//! Four relaxed-clique definitions share one engine: a CSR graph, a
//! linear-bucket peeling heap, a degeneracy ordering/rank, a one-shot
//! ("naive") solver per problem, and a [`driver::refine`] loop that reruns
//! the naive solver on degeneracy-forward ego-subgraphs of every vertex.

pub mod degeneracy;
pub mod driver;
pub mod graph;
pub mod heap;
pub mod solvers;

pub use graph::{CsrGraph, VertexId};
pub use heap::LinearBucketHeap;

pub use degeneracy::{degen_ordering, degen_rank, sort_neighbours_by_reverse_rank};

pub use solvers::kdef::{is_valid_kdef, naive_kdef, KDefResult};
pub use solvers::kplex::{is_valid_kplex, naive_kplex_degen, KPlexResult};
pub use solvers::pseudo::{is_valid_pseudo_clique, naive_pseudo_clique, PseudoCliqueResult};
pub use solvers::quasi::{is_valid_quasi_clique, naive_quasi_clique, QuasiCliqueResult};

pub use driver::kdef::refine_kdef;
pub use driver::kplex::refine_kplex;
pub use driver::pseudo::refine_pseudo;
pub use driver::quasi::refine_quasi;

/// Builds the degeneracy ordering, rank, and reverse-rank-sorted adjacency
/// that every driver entry point requires as a precondition. Call this once
/// per loaded graph before invoking any `refine_*` function.
pub fn prepare_degeneracy(g: &mut CsrGraph) -> Vec<i32> {
    let ordering = degen_ordering(g);
    let rank = degen_rank(&ordering);
    sort_neighbours_by_reverse_rank(g, &rank);
    rank
}
