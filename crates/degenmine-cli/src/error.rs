//! CLI-level fatal errors (spec.md §7): misconfiguration and validator
//! rejection both exit 1 with an `ERROR:`-prefixed stderr line.

use thiserror::Error;

use crate::cli::Program;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] degenmine_io::LoadError),

    #[error("--alpha must be in (0, 1), got {0}")]
    AlphaOutOfRange(f64),

    #[error("-p {program} requires --alpha")]
    MissingAlpha { program: Program },

    #[error("-k must be a non-negative integer, got {0}")]
    NegativeK(i64),

    #[error("-p {program} requires -k")]
    MissingK { program: Program },

    #[error("-a naive is only meaningful for kdef/quasi/pseudo, not kplex")]
    NaiveNotSupportedForKplex,

    #[error("returned solution failed validation for -p {program}")]
    InvalidSolution { program: Program },

    #[error("could not write output to {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
