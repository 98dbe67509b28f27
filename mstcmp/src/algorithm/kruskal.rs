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

use std::cmp::Ordering;

use crate::common::graph::{WghEdge, WghGraph};
use crate::union_find::UnionFind;

#[inline(always)]
fn cmp_wgh_edge(a: &WghEdge, b: &WghEdge) -> Ordering {
    a.w.total_cmp(&b.w)
}

fn union_find_loop(es: &[WghEdge], uf: &mut UnionFind, msf: &mut Vec<WghEdge>) {
    let max_edges = uf.len().saturating_sub(1);
    for e in es {
        if msf.len() == max_edges { break; }
        if uf.unite(e.u, e.v) { msf.push(*e); }
    }
}

/// Kruskal's minimum spanning forest. Edges come back in the order they
/// were accepted; a disconnected graph yields fewer than `n - 1` of them.
pub fn kruskal_mst(g: &WghGraph) -> Vec<WghEdge> {
    let mut es = g.edges().to_vec();
    es.sort_by(cmp_wgh_edge);

    let mut uf = UnionFind::new(g.num_vertices());
    let mut msf = Vec::with_capacity(g.num_vertices().saturating_sub(1));
    union_find_loop(&es, &mut uf, &mut msf);
    msf
}
