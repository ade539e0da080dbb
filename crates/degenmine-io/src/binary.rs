//! Binary degree/adjacency directory loader (`b_degree.bin` + `b_adj.bin`),
//! the paired-file format produced by the standard degeneracy-benchmark
//! tooling this lineage targets (spec.md §6). The text loader and this one
//! converge on the same normalised `CsrGraph`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{ReadBytesExt, LE};
use degenmine_core::graph::{build_from_directed_edge_pairs, CsrGraph};

use crate::error::LoadError;

pub fn load_binary_graph(dir: &Path) -> Result<CsrGraph, LoadError> {
    let degree_path = dir.join("b_degree.bin");
    let adj_path = dir.join("b_adj.bin");

    if !degree_path.is_file() || !adj_path.is_file() {
        return Err(LoadError::UnrecognisedFormat {
            path: dir.to_path_buf(),
        });
    }

    let mut degree_file = BufReader::new(File::open(&degree_path).map_err(|e| LoadError::io(&degree_path, e))?);

    let tt = degree_file
        .read_i32::<LE>()
        .map_err(|e| LoadError::io(&degree_path, e))?;
    if tt != 4 {
        return Err(LoadError::BadVertexWidth {
            path: degree_path.clone(),
            found: tt,
        });
    }
    let n = degree_file
        .read_i32::<LE>()
        .map_err(|e| LoadError::io(&degree_path, e))?;
    let declared_m = degree_file
        .read_i32::<LE>()
        .map_err(|e| LoadError::io(&degree_path, e))?;

    let mut degrees = vec![0i32; n as usize];
    for d in degrees.iter_mut() {
        *d = degree_file
            .read_i32::<LE>()
            .map_err(|e| LoadError::io(&degree_path, e))?;
    }

    let total_directed: i64 = degrees.iter().map(|&d| d as i64).sum();
    if total_directed != declared_m as i64 {
        return Err(LoadError::DegreeCountMismatch {
            path: degree_path,
            declared_n: declared_m,
            actual_n: total_directed as i32,
        });
    }

    let mut adj_file = BufReader::new(File::open(&adj_path).map_err(|e| LoadError::io(&adj_path, e))?);
    let mut raw = vec![0i32; total_directed as usize];
    for x in raw.iter_mut() {
        *x = adj_file
            .read_i32::<LE>()
            .map_err(|e| LoadError::io(&adj_path, e))?;
    }
    // Any bytes left over indicate the degree header under-declared the
    // adjacency file's true length.
    let mut trailing = [0u8; 1];
    if adj_file.read(&mut trailing).map_err(|e| LoadError::io(&adj_path, e))? != 0 {
        return Err(LoadError::AdjacencyCountMismatch {
            path: adj_path,
            expected: total_directed,
            actual: total_directed + 1, // at least one more byte exists
        });
    }

    // Re-derive offsets from the declared per-vertex degrees to slice `raw`,
    // then normalise: drop self-loops, symmetrise, and dedupe, exactly as
    // the text loader does, rather than trusting the file's own claim of
    // symmetry (spec.md §6's "the loader is free to interpret it and
    // normalise").
    let mut off0 = vec![0i64; n as usize + 1];
    for u in 0..n as usize {
        off0[u + 1] = off0[u] + degrees[u] as i64;
    }

    let mut seen: std::collections::HashSet<(i32, i32)> = std::collections::HashSet::new();
    let mut edges: Vec<(i32, i32)> = Vec::with_capacity(raw.len());
    for u in 0..n as usize {
        let start = off0[u] as usize;
        let end = off0[u + 1] as usize;
        for &v in &raw[start..end] {
            if v < 0 || v >= n {
                return Err(LoadError::VertexOutOfRange {
                    path: adj_path.clone(),
                    id: v as i64,
                    n,
                });
            }
            if v as usize == u {
                continue;
            }
            let key = (u.min(v as usize) as i32, u.max(v as usize) as i32);
            if seen.insert(key) {
                edges.push((key.0, key.1));
                edges.push((key.1, key.0));
            }
        }
    }
    edges.sort_unstable();

    tracing::debug!(dir = %dir.display(), n, m = edges.len() / 2, "loaded binary graph");
    Ok(build_from_directed_edge_pairs(n, edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Write;

    fn write_binary_graph(dir: &Path, n: i32, per_vertex: &[Vec<i32>]) {
        let degrees: Vec<i32> = per_vertex.iter().map(|l| l.len() as i32).collect();
        let m: i32 = degrees.iter().sum();

        let mut degree_file = File::create(dir.join("b_degree.bin")).unwrap();
        degree_file.write_i32::<LE>(4).unwrap();
        degree_file.write_i32::<LE>(n).unwrap();
        degree_file.write_i32::<LE>(m).unwrap();
        for &d in &degrees {
            degree_file.write_i32::<LE>(d).unwrap();
        }

        let mut adj_file = File::create(dir.join("b_adj.bin")).unwrap();
        for list in per_vertex {
            for &v in list {
                adj_file.write_i32::<LE>(v).unwrap();
            }
        }
    }

    #[test]
    fn loads_a_symmetric_triangle() {
        let dir = tempfile::tempdir().unwrap();
        write_binary_graph(dir.path(), 3, &[vec![1, 2], vec![0, 2], vec![0, 1]]);
        let g = load_binary_graph(dir.path()).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.n_edges(), 3);
    }

    #[test]
    fn symmetrises_a_one_directional_listing() {
        // Only vertex 0 lists the edge to 1; the loader must still produce
        // a symmetric CSR graph.
        let dir = tempfile::tempdir().unwrap();
        write_binary_graph(dir.path(), 2, &[vec![1], vec![]]);
        let g = load_binary_graph(dir.path()).unwrap();
        assert_eq!(g.n_edges(), 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);
    }

    #[test]
    fn rejects_bad_vertex_width() {
        let dir = tempfile::tempdir().unwrap();
        let mut degree_file = File::create(dir.path().join("b_degree.bin")).unwrap();
        degree_file.write_i32::<LE>(8).unwrap();
        File::create(dir.path().join("b_adj.bin")).unwrap();
        let err = load_binary_graph(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::BadVertexWidth { found: 8, .. }));
    }
}
