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

use std::fmt;

use crate::{DefInt, DefFloat};
use crate::common::graph::{total_weight, WghEdge, WghGraph};
use crate::kruskal::kruskal_mst;
use crate::msf_check::weights_agree;
use crate::prim::{prim_mst, PrimForest};

/// Prim and Kruskal run side by side on one graph.
pub struct Comparison {
    pub prim: PrimForest,
    pub kruskal: Vec<WghEdge>,
    pub prim_weight: DefFloat,
    pub kruskal_weight: DefFloat,
    pub num_vertices: usize,
}

impl Comparison {
    pub fn prim_edges(&self) -> Vec<WghEdge> { self.prim.edges() }

    /// Number of trees in the forest, i.e. of connected components.
    pub fn num_components(&self) -> usize {
        self.num_vertices - self.kruskal.len()
    }

    pub fn weights_agree(&self) -> bool {
        weights_agree(self.prim_weight, self.kruskal_weight)
    }

    pub fn is_consistent(&self) -> bool {
        self.weights_agree() && self.prim_edges().len() == self.kruskal.len()
    }

    pub fn unreachable_from_root(&self) -> Vec<DefInt> {
        self.prim.unreachable()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "vertices:  {}", self.num_vertices)?;
        writeln!(f, "components:  {}", self.num_components())?;
        writeln!(f, "prim:  {} edges, weight {}",
            self.prim_edges().len(), self.prim_weight)?;
        writeln!(f, "kruskal:  {} edges, weight {}",
            self.kruskal.len(), self.kruskal_weight)?;
        write!(f, "agree:  {}", self.is_consistent())
    }
}

pub fn compare(g: &WghGraph) -> Comparison {
    let prim = prim_mst(g);
    let kruskal = kruskal_mst(g);
    Comparison {
        prim_weight: prim.total_weight(),
        kruskal_weight: total_weight(&kruskal),
        prim,
        kruskal,
        num_vertices: g.num_vertices(),
    }
}
