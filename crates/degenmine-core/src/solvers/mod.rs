//! One-shot ("naive") solvers for each relaxed-clique definition, each
//! grounded directly in its `graph/<name>.cpp` counterpart. These are also
//! the base case the [`crate::driver`] refinement loop calls on every
//! extracted ego-subgraph.

pub mod kdef;
pub mod kplex;
pub mod pseudo;
pub mod quasi;
