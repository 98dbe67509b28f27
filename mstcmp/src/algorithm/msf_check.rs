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

use crate::DefFloat;
use crate::common::error::ForestError;
use crate::common::graph::{total_weight, WghEdge, WghGraph};
use crate::kruskal::kruskal_mst;
use crate::union_find::UnionFind;

const WEIGHT_EPS: DefFloat = 1e-9;

/// Checks that `es` is an acyclic subset of the edges of `g`.
pub fn check_forest(g: &WghGraph, es: &[WghEdge]) -> Result<(), ForestError> {
    let n = g.num_vertices();
    if es.len() > n.saturating_sub(1) {
        return Err(ForestError::TooManyEdges { found: es.len(), n });
    }

    let mut uf = UnionFind::new(n);
    for e in es {
        if !g.has_edge(e.u, e.v, e.w) {
            return Err(ForestError::UnknownEdge { u: e.u, v: e.v, w: e.w });
        }
        if !uf.unite(e.u, e.v) {
            return Err(ForestError::Cycle { u: e.u, v: e.v });
        }
    }
    Ok(())
}

/// Checks that `es` is a minimum spanning forest of `g`: a forest with one
/// tree per component, weighing the same as a serial Kruskal run.
pub fn check_msf(g: &WghGraph, es: &[WghEdge]) -> Result<(), ForestError> {
    check_forest(g, es)?;

    let serial_msf = kruskal_mst(g);
    if es.len() != serial_msf.len() {
        return Err(ForestError::EdgeCountMismatch {
            found: es.len(),
            expected: serial_msf.len(),
        });
    }

    let (found, expected) = (total_weight(es), total_weight(&serial_msf));
    if !weights_agree(found, expected) {
        return Err(ForestError::WeightMismatch { found, expected });
    }
    Ok(())
}

pub fn weights_agree(a: DefFloat, b: DefFloat) -> bool {
    a == b || (a - b).abs() <= WEIGHT_EPS * a.abs().max(b.abs()).max(1.0)
}
