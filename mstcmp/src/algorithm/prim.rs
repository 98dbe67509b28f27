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

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::{DefInt, DefFloat};
use crate::common::error::Result;
use crate::common::graph::{WghEdge, WghGraph};

/// How a vertex joined the forest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Attach {
    /// The vertex started a tree.
    Root,
    /// The vertex joined through the tree edge `(u, v, w)`.
    Parent { u: DefInt, w: DefFloat },
    /// No tree reached the vertex.
    Unreachable,
}

#[derive(Clone, Debug)]
pub struct PrimForest {
    attach: Vec<Attach>,
    tree: Vec<Option<DefInt>>,
    roots: Vec<DefInt>,
}

impl PrimForest {
    pub fn attach(&self) -> &[Attach] { &self.attach }

    /// Roots in the order their trees were grown.
    pub fn roots(&self) -> &[DefInt] { &self.roots }

    /// Root of the tree holding `v`; `None` when no tree reached it or
    /// `v` is not a vertex.
    pub fn tree_of(&self, v: DefInt) -> Option<DefInt> {
        self.tree.get(v as usize).copied().flatten()
    }

    /// One `(parent, child, w)` per attached vertex, in vertex order.
    pub fn edges(&self) -> Vec<WghEdge> {
        self.attach
            .iter()
            .enumerate()
            .filter_map(|(v, a)| match *a {
                Attach::Parent { u, w } => Some(WghEdge::new(u, v as DefInt, w)),
                _ => None,
            })
            .collect()
    }

    pub fn total_weight(&self) -> DefFloat {
        self.attach
            .iter()
            .map(|a| match *a { Attach::Parent { w, .. } => w, _ => 0.0 })
            .sum()
    }

    /// Vertices outside the tree grown from the first root.
    pub fn unreachable(&self) -> Vec<DefInt> {
        let first = self.roots.first().copied();
        (0..self.attach.len())
            .filter(|&v| self.tree[v] != first)
            .map(|v| v as DefInt)
            .collect()
    }

    /// Whether a single tree covers every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.roots.len() <= 1 &&
            !self.attach.iter().any(|a| *a == Attach::Unreachable)
    }
}

#[derive(Clone, Copy)]
struct Key { w: DefFloat, v: DefInt }

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.w.total_cmp(&other.w).then(self.v.cmp(&other.v))
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Grower {
    key: Vec<DefFloat>,
    parent: Vec<Option<DefInt>>,
    tree: Vec<Option<DefInt>>,
    heap: BinaryHeap<Reverse<Key>>,
}

impl Grower {
    fn new(n: usize) -> Self {
        Self {
            key: vec![DefFloat::INFINITY; n],
            parent: vec![None; n],
            tree: vec![None; n],
            heap: BinaryHeap::new(),
        }
    }

    #[inline(always)]
    fn in_tree(&self, v: usize) -> bool { self.tree[v].is_some() }

    // Grows one tree from `root`. Stale heap entries are skipped on pop.
    fn grow(&mut self, g: &WghGraph, root: DefInt) {
        self.key[root as usize] = 0.0;
        self.heap.push(Reverse(Key { w: 0.0, v: root }));

        while let Some(Reverse(Key { v: u, .. })) = self.heap.pop() {
            if self.in_tree(u as usize) { continue; }
            self.tree[u as usize] = Some(root);

            for nb in g.neighbors(u) {
                let v = nb.v as usize;
                if self.in_tree(v) { continue; }
                // an unset parent stands for an infinite key
                if self.parent[v].is_none() || nb.w < self.key[v] {
                    self.key[v] = nb.w;
                    self.parent[v] = Some(u);
                    self.heap.push(Reverse(Key { w: nb.w, v: nb.v }));
                }
            }
        }
    }

    fn into_forest(self, roots: Vec<DefInt>) -> PrimForest {
        let attach = self.parent
            .iter()
            .zip(self.tree.iter())
            .enumerate()
            .map(|(v, (p, t))| match (p, t) {
                (Some(u), Some(_)) => Attach::Parent { u: *u, w: self.key[v] },
                (None, Some(_)) => Attach::Root,
                (_, None) => Attach::Unreachable,
            })
            .collect();
        PrimForest { attach, tree: self.tree, roots }
    }
}

/// Prim's algorithm grown from `root` only. Vertices in other components
/// are reported as `Attach::Unreachable`.
pub fn prim_tree(g: &WghGraph, root: DefInt) -> Result<PrimForest> {
    g.check_vertex(root)?;
    let mut gr = Grower::new(g.num_vertices());
    gr.grow(g, root);
    Ok(gr.into_forest(vec![root]))
}

/// Prim's minimum spanning forest rooted at vertex 0. When a tree can grow
/// no further, the next one starts at the lowest unvisited vertex.
pub fn prim_mst(g: &WghGraph) -> PrimForest {
    let n = g.num_vertices();
    let mut gr = Grower::new(n);
    let mut roots = vec![];

    for r in 0..n {
        if gr.in_tree(r) { continue; }
        roots.push(r as DefInt);
        gr.grow(g, r as DefInt);
    }
    gr.into_forest(roots)
}
