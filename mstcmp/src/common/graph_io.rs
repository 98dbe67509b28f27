// ============================================================================
// This code is part of mstcmp.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;

use crate::verbose_println;
use crate::DefInt;
use super::error::{MstError, Result};
use super::io::{read_file_to_vec, write_slice_to_file_seq};
use super::graph::*;

pub const WGH_EDGE_ARRAY_HEADER: &str = "WeightedEdgeArray";

/// Reads a `u v w` edge list. Without `n`, the vertex count is one past the
/// largest endpoint.
pub fn read_wgh_edge_array_from_file<P: AsRef<Path>>(
    fname: P,
    n: Option<usize>,
) -> Result<WghEdgeArray> {
    verbose_println!("reading file...");
    let es: Vec<WghEdge> = read_file_to_vec(fname, Some(WGH_EDGE_ARRAY_HEADER))?;

    verbose_println!("finding_max...");
    let max = es
        .par_iter()
        .map(|e| e.u.max(e.v) as usize + 1)
        .max()
        .unwrap_or(0);

    let n = match n {
        Some(n) if n < max => {
            return Err(MstError::InvalidVertexIndex {
                vertex: (max - 1) as DefInt,
                n,
            });
        }
        Some(n) => n,
        None => max,
    };

    verbose_println!("extracted graph n={} m={}", n, es.len());
    Ok(WghEdgeArray::new(es, n))
}

pub fn read_wgh_graph_from_file<P: AsRef<Path>>(
    fname: P,
    n: Option<usize>,
) -> Result<WghGraph> {
    WghGraph::from_edge_array(&read_wgh_edge_array_from_file(fname, n)?)
}

pub fn write_wgh_edges_to_file<P: AsRef<Path>>(es: &[WghEdge], of: P) -> Result<()> {
    write_slice_to_file_seq(es, of)
}

pub const PRIM_COLOR: &str = "red";
pub const KRUSKAL_COLOR: &str = "blue";

fn edge_key(e: &WghEdge) -> (DefInt, DefInt, u64) {
    let e = e.normalized();
    (e.u, e.v, e.w.to_bits())
}

/// Writes `g` as an undirected Graphviz graph with weight labels. Edges of
/// `prim` are drawn red, edges of `kruskal` blue, and edges in both get
/// both colors.
pub fn write_wgh_graph_dot<P: AsRef<Path>>(
    g: &WghGraph,
    prim: &[WghEdge],
    kruskal: &[WghEdge],
    of: P,
) -> Result<()> {
    let in_prim: HashSet<_> = prim.iter().map(edge_key).collect();
    let in_kruskal: HashSet<_> = kruskal.iter().map(edge_key).collect();

    let mut lines = vec![
        "graph mst {".to_string(),
        "  node [shape=circle];".to_string(),
    ];
    lines.extend((0..g.num_vertices()).map(|v| format!("  {};", v)));

    for e in g.edges() {
        let k = edge_key(e);
        let color = match (in_prim.contains(&k), in_kruskal.contains(&k)) {
            (true, true) => Some(format!("{}:{}", PRIM_COLOR, KRUSKAL_COLOR)),
            (true, false) => Some(PRIM_COLOR.to_string()),
            (false, true) => Some(KRUSKAL_COLOR.to_string()),
            (false, false) => None,
        };
        lines.push(match color {
            Some(c) => format!(
                "  {} -- {} [label=\"{}\", color=\"{}\", penwidth=3];", e.u, e.v, e.w, c),
            None => format!("  {} -- {} [label=\"{}\"];", e.u, e.v, e.w),
        });
    }
    lines.push("}".to_string());

    verbose_println!("writing dot graph with {} edges...", g.num_edges());
    write_slice_to_file_seq(&lines, of)
}
