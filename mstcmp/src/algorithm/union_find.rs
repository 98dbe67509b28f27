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

use crate::DefInt;

/// Union-find over `[0, n)` with full path compression and union by rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnionFind {
    parents: Vec<DefInt>,
    ranks: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n as DefInt).collect(),
            ranks: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize { self.parents.len() }

    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Number of disjoint sets left.
    pub fn num_sets(&self) -> usize { self.sets }

    #[inline(always)]
    fn is_root(&self, u: DefInt) -> bool {
        self.parents[u as usize] == u
    }

    pub fn find(&mut self, u: DefInt) -> DefInt {
        let mut root = u;
        while !self.is_root(root) { root = self.parents[root as usize]; }

        let mut u = u;
        while u != root {
            let p = self.parents[u as usize];
            self.parents[u as usize] = root;
            u = p;
        }
        root
    }

    pub fn same(&mut self, u: DefInt, v: DefInt) -> bool {
        self.find(u) == self.find(v)
    }

    /// Links the roots `u` and `v`; the lower rank root goes under the other.
    pub fn union_roots(&mut self, u: DefInt, v: DefInt) -> DefInt {
        debug_assert!(self.is_root(u) && self.is_root(v) && u != v);
        let (ru, rv) = (self.ranks[u as usize], self.ranks[v as usize]);
        let (child, root) = match ru.cmp(&rv) {
            Ordering::Less => (u, v),
            Ordering::Greater => (v, u),
            Ordering::Equal => {
                self.ranks[u as usize] += 1;
                (v, u)
            }
        };
        self.parents[child as usize] = root;
        self.sets -= 1;
        root
    }

    /// Merges the sets of `u` and `v`. Returns `false` and leaves the
    /// forest untouched when they already share a set.
    pub fn unite(&mut self, u: DefInt, v: DefInt) -> bool {
        let (u, v) = (self.find(u), self.find(v));
        if u == v { return false; }
        self.union_roots(u, v);
        true
    }
}
