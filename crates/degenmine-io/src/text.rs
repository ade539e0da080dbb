//! Text edge-list loader.
//!
//! Ported from `gm::v2::GraphV2::readFromFile` (`graph/graphv2.cpp`): a
//! header line `n m`, then `m` lines of `u v`. The source trusts the file to
//! list each undirected edge once and pushes both directions before sorting;
//! here we additionally dedupe and drop self-loops per spec.md §6, since
//! "duplicates and self-loops are silently removed during normalisation" is
//! part of the contract, not an assumption about well-formed input.

use std::collections::HashSet;
use std::path::Path;

use degenmine_core::graph::{build_from_directed_edge_pairs, CsrGraph};

use crate::error::LoadError;

pub fn load_text_graph(path: &Path) -> Result<CsrGraph, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let mut lines = content.lines();

    let header = lines
        .next()
        .ok_or_else(|| LoadError::MalformedHeader {
            path: path.to_path_buf(),
            line: String::new(),
        })?;
    let mut header_fields = header.split_whitespace();
    let n: i64 = header_fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| LoadError::MalformedHeader {
            path: path.to_path_buf(),
            line: header.to_string(),
        })?;
    let m: i64 = header_fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| LoadError::MalformedHeader {
            path: path.to_path_buf(),
            line: header.to_string(),
        })?;

    if !(0..=i32::MAX as i64).contains(&n) {
        return Err(LoadError::VertexOutOfRange {
            path: path.to_path_buf(),
            id: n,
            n: i32::MAX,
        });
    }
    let n = n as i32;

    let mut seen: HashSet<(i32, i32)> = HashSet::new();
    let mut edges: Vec<(i32, i32)> = Vec::with_capacity((2 * m.max(0)) as usize);

    let mut consumed = 0i64;
    for (idx, line) in lines.enumerate() {
        if consumed >= m {
            break;
        }
        let line_no = idx + 2; // header is line 1
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let u: i64 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| LoadError::MalformedEdgeLine {
                path: path.to_path_buf(),
                line_no,
                line: line.to_string(),
            })?;
        let v: i64 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| LoadError::MalformedEdgeLine {
                path: path.to_path_buf(),
                line_no,
                line: line.to_string(),
            })?;
        for &id in &[u, v] {
            if !(0..n as i64).contains(&id) {
                return Err(LoadError::VertexOutOfRange {
                    path: path.to_path_buf(),
                    id,
                    n,
                });
            }
        }
        consumed += 1;

        let (u, v) = (u as i32, v as i32);
        if u == v {
            continue; // self-loop, silently dropped
        }
        let key = (u.min(v), u.max(v));
        if seen.insert(key) {
            edges.push((u, v));
            edges.push((v, u));
        }
    }

    if consumed < m {
        return Err(LoadError::UnexpectedEof {
            path: path.to_path_buf(),
            expected: (m - consumed) as usize,
        });
    }

    edges.sort_unstable();
    tracing::debug!(path = %path.display(), n, m = edges.len() / 2, "loaded text graph");
    Ok(build_from_directed_edge_pairs(n, edges))
}
