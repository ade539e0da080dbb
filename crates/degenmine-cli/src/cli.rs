//! Argument surface, per spec.md §6: one binary, `-p`/`-g`/`-a`/`-k`/
//! `--alpha`/`-h`, plus the converter exposed as a subcommand rather than a
//! separate executable (SPEC_FULL.md §5.2).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "degenmine", version, about = "Degeneracy-ordered ego-network refinement for cohesive subgraph mining")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mine a cohesive subgraph from an input graph.
    Mine(MineArgs),
    /// Convert a graph file into the adjacency-list text format.
    Convert(ConvertArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Program {
    Kplex,
    Kdef,
    Quasi,
    Pseudo,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Program::Kplex => "kplex",
            Program::Kdef => "kdef",
            Program::Quasi => "quasi",
            Program::Pseudo => "pseudo",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algo {
    /// Naive/seed-only: run the problem's greedy solver once, no refinement.
    V1,
    /// Refinement driver with 1-hop ego-subgraph construction.
    V2,
    /// Refinement driver with 2-hop ego-subgraph construction.
    #[value(alias = "v3")]
    Twohop,
    /// Alias for `v1`, kept for parity with the original's independently
    /// callable naive solvers (kdef/quasi/pseudo only).
    Naive,
}

#[derive(Debug, Args)]
pub struct MineArgs {
    /// Problem to mine.
    #[arg(short = 'p', long = "program", value_enum)]
    pub program: Program,

    /// Path to the input graph: a text edge-list file, or a directory
    /// holding `b_degree.bin`/`b_adj.bin`.
    #[arg(short = 'g', long = "graph")]
    pub graph: PathBuf,

    /// Algorithm variant.
    #[arg(short = 'a', long = "algo", value_enum, default_value = "v2")]
    pub algo: Algo,

    /// k, for kplex / kdef.
    #[arg(short = 'k', long = "k")]
    pub k: Option<i64>,

    /// alpha in (0, 1), for quasi / pseudo.
    #[arg(long = "alpha")]
    pub alpha: Option<f64>,

    /// Emit debug/trace diagnostics on stderr via `tracing`.
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Path to the input graph: a text edge-list file, or a directory
    /// holding `b_degree.bin`/`b_adj.bin`.
    #[arg(short = 'g', long = "graph")]
    pub graph: PathBuf,

    /// Path to write the adjacency-list text output to.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}
