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

use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{DefInt, DefFloat};
use super::error::{MstError, Result};

// **************************************************************
//    WEIGHTED EDGE
// **************************************************************

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WghEdge {
    pub u: DefInt,
    pub v: DefInt,
    pub w: DefFloat,
}

impl WghEdge {
    pub fn new(u: DefInt, v: DefInt, w: DefFloat) -> Self
    { Self { u, v, w } }

    /// Same edge with endpoints ordered so that `u <= v`.
    pub fn normalized(self) -> Self {
        if self.u <= self.v { self }
        else { Self::new(self.v, self.u, self.w) }
    }
}

#[derive(Debug, Error)]
#[error("can not parse as weighted edge")]
pub struct ParseEdgeError;

impl FromStr for WghEdge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s: Vec<&str> = s.split_whitespace().collect();
        if s.len() != 3 { return Err(ParseEdgeError); }
        match (s[0].parse(), s[1].parse(), s[2].parse()) {
            (Ok(u), Ok(v), Ok(w)) => Ok(Self::new(u, v, w)),
            _ => Err(ParseEdgeError),
        }
    }
}

impl fmt::Display for WghEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.u, self.v, self.w)
    }
}

/// Sum of the weights of `es`.
pub fn total_weight(es: &[WghEdge]) -> DefFloat {
    es.iter().map(|e| e.w).sum()
}

/// Two-line `edges:`/`weight:` report printed by the drivers.
pub fn summary(es: &[WghEdge]) -> String {
    format!("edges:  {}\nweight:  {}", es.len(), total_weight(es))
}

// **************************************************************
//    WEIGHTED EDGE ARRAY
// **************************************************************

#[derive(Clone, Debug)]
pub struct WghEdgeArray {
    pub es: Vec<WghEdge>,
    pub n: usize,
    pub m: usize,
}

impl WghEdgeArray {
    pub fn new(es: Vec<WghEdge>, n: usize) -> Self {
        let es_len = es.len();
        Self { es, n, m: es_len }
    }
}

// **************************************************************
//    WEIGHTED ADJACENCY LIST REPRESENTATION
// **************************************************************

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub v: DefInt,
    pub w: DefFloat,
}

/// An undirected weighted graph over the vertices `[0, n)`.
///
/// Every edge is stored once in `edges` and once in the adjacency list
/// of each endpoint, both in insertion order.
#[derive(Clone, Debug, Default)]
pub struct WghGraph {
    n: usize,
    adjacency: Vec<Vec<Neighbor>>,
    edges: Vec<WghEdge>,
}

impl WghGraph {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adjacency: vec![vec![]; n],
            edges: vec![],
        }
    }

    pub fn from_edge_array(wea: &WghEdgeArray) -> Result<Self> {
        let mut g = Self::new(wea.n);
        g.edges.reserve(wea.m);
        for e in &wea.es {
            g.add_edge(e.u, e.v, e.w)?;
        }
        Ok(g)
    }

    pub fn to_edge_array(&self) -> WghEdgeArray {
        WghEdgeArray::new(self.edges.clone(), self.n)
    }

    #[inline(always)]
    pub const fn num_vertices(&self) -> usize
    { self.n }

    #[inline(always)]
    pub fn num_edges(&self) -> usize
    { self.edges.len() }

    pub fn edges(&self) -> &[WghEdge]
    { &self.edges }

    /// Neighbours of `v` in edge-insertion order.
    ///
    /// # Panics
    /// If `v >= n`.
    #[inline(always)]
    pub fn neighbors(&self, v: DefInt) -> &[Neighbor] {
        &self.adjacency[v as usize]
    }

    pub fn check_vertex(&self, v: DefInt) -> Result<()> {
        if (v as usize) < self.n { Ok(()) }
        else { Err(MstError::InvalidVertexIndex { vertex: v, n: self.n }) }
    }

    pub fn add_edge(&mut self, u: DefInt, v: DefInt, w: DefFloat) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if w.is_nan() { return Err(MstError::InvalidWeight { u, v }); }

        self.adjacency[u as usize].push(Neighbor { v, w });
        self.adjacency[v as usize].push(Neighbor { v: u, w });
        self.edges.push(WghEdge::new(u, v, w));
        Ok(())
    }

    /// Whether the graph has an edge `{u, v}` of weight `w`.
    pub fn has_edge(&self, u: DefInt, v: DefInt, w: DefFloat) -> bool {
        (u as usize) < self.n && (v as usize) < self.n &&
            self.adjacency[u as usize]
                .iter()
                .any(|nb| nb.v == v && nb.w == w)
    }
}
