//! Adjacency-list text converter.
//!
//! Ported from `gm::convertGraph` (`graph/convert.hpp`): reads a graph in
//! either supported format and writes a per-vertex adjacency listing, one
//! line per vertex, CRLF-terminated, matching the original byte-for-byte in
//! shape.

use std::io::{self, Write};

use degenmine_core::graph::CsrGraph;

/// Writes `n m_undirected` on the first line, then for each vertex `u` a
/// line `u v1 v2 ...` terminated `\r\n`.
pub fn write_edge_list(graph: &CsrGraph, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} {}\r\n", graph.size(), graph.n_edges())?;
    for u in 0..graph.size() {
        write!(out, "{}", u)?;
        for &v in graph.neighbours_of(u) {
            write!(out, " {}", v)?;
        }
        write!(out, "\r\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use degenmine_core::graph::build_from_directed_edge_pairs;

    #[test]
    fn writes_header_then_one_line_per_vertex() {
        let edges = vec![(0, 1), (1, 0), (1, 2), (2, 1)];
        let g = build_from_directed_edge_pairs(3, edges);
        let mut buf = Vec::new();
        write_edge_list(&g, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.split("\r\n");
        assert_eq!(lines.next(), Some("3 2"));
        assert_eq!(lines.next(), Some("0 1"));
        assert_eq!(lines.next(), Some("1 0 2"));
        assert_eq!(lines.next(), Some("2 1"));
    }
}
