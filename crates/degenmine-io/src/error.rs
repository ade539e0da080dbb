//! Load-time errors: everything that crosses the file-system boundary is a
//! typed, recoverable `Result` — unlike `degenmine-core`, which only
//! `debug_assert!`s its invariants (spec.md §7's fatal/recovered split).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: expected header line with two integers `n m`, got {line:?}")]
    MalformedHeader { path: PathBuf, line: String },

    #[error("{path}:{line_no}: expected an edge `u v`, got {line:?}")]
    MalformedEdgeLine {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("{path}: unexpected end of file, expected {expected} more edge lines")]
    UnexpectedEof { path: PathBuf, expected: usize },

    #[error("{path}: vertex id {id} out of range for n={n}")]
    VertexOutOfRange { path: PathBuf, id: i64, n: i32 },

    #[error("{path}: b_degree.bin header field `tt` was {found}, expected 4")]
    BadVertexWidth { path: PathBuf, found: i32 },

    #[error("{path}: b_degree.bin declares n={declared_n} vertices but file has room for {actual_n}")]
    DegreeCountMismatch { path: PathBuf, declared_n: i32, actual_n: i32 },

    #[error("{path}: b_adj.bin has {actual} entries, but b_degree.bin's offsets require {expected}")]
    AdjacencyCountMismatch {
        path: PathBuf,
        expected: i64,
        actual: i64,
    },

    #[error("{path} is neither a text graph file nor a binary graph directory (missing b_degree.bin/b_adj.bin)")]
    UnrecognisedFormat { path: PathBuf },
}

impl LoadError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
