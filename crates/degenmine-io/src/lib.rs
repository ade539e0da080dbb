//! Graph file loaders and the adjacency-list converter.
//!
//! Two input formats converge on the same normalised [`CsrGraph`]: a text
//! edge-list file, and a directory holding a paired binary degree/adjacency
//! listing (spec.md §6). Both loaders drop self-loops and duplicate edges
//! and symmetrise the adjacency, matching the normalisation contract that
//! the in-memory engine (`degenmine-core`) assumes on every graph it is
//! handed.

mod binary;
mod convert;
pub mod error;
mod text;

use std::path::Path;

pub use convert::write_edge_list;
pub use error::LoadError;

use degenmine_core::graph::CsrGraph;

/// Loads a graph from `path`. A directory input is read as the binary
/// `b_degree.bin`/`b_adj.bin` pair; anything else is read as a text
/// edge-list file.
pub fn read_from_file(path: impl AsRef<Path>) -> Result<CsrGraph, LoadError> {
    let path = path.as_ref();
    if path.is_dir() {
        binary::load_binary_graph(path)
    } else if path.is_file() {
        text::load_text_graph(path)
    } else {
        Err(LoadError::UnrecognisedFormat {
            path: path.to_path_buf(),
        })
    }
}
