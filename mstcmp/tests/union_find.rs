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

use mstcmp::union_find::UnionFind;


mod find {
    use super::*;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 { assert_eq!(uf.find(i), i); }
        assert_eq!(uf.num_sets(), 5);
    }

    #[test]
    fn idempotent() {
        let mut uf = UnionFind::new(8);
        uf.unite(0, 1);
        uf.unite(2, 3);
        uf.unite(1, 3);
        let r = uf.find(3);
        assert_eq!(uf.find(r), r);
        assert_eq!(uf.find(3), r);
        for i in 0..4 { assert_eq!(uf.find(i), r); }
    }

    #[test]
    fn long_chain_compresses() {
        let n = 100_000;
        let mut uf = UnionFind::new(n);
        for i in 1..n as u32 { uf.unite(i - 1, i); }
        let r = uf.find(0);
        for i in 0..n as u32 { assert_eq!(uf.find(i), r); }
        assert_eq!(uf.num_sets(), 1);
    }

    #[test]
    fn empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.num_sets(), 0);
    }
}


mod unite {
    use super::*;

    #[test]
    fn merges() {
        let mut uf = UnionFind::new(4);
        assert!(uf.unite(0, 1));
        assert_eq!(uf.find(0), uf.find(1));
        assert!(uf.same(1, 0));
        assert!(!uf.same(0, 2));
        assert_eq!(uf.num_sets(), 3);
    }

    #[test]
    fn rejects_same_set_without_change() {
        let mut uf = UnionFind::new(6);
        uf.unite(0, 1);
        uf.unite(2, 3);
        uf.unite(0, 3);
        uf.find(0); uf.find(1); uf.find(2); uf.find(3);

        let before = uf.clone();
        assert!(!uf.unite(1, 2));
        assert!(!uf.unite(3, 3));
        assert_eq!(uf, before);
    }

    #[test]
    fn never_splits() {
        let mut uf = UnionFind::new(10);
        let pairs = [(0, 1), (2, 3), (4, 5), (1, 3), (6, 7), (5, 7), (8, 9)];
        let mut merged: Vec<(u32, u32)> = vec![];
        for &(a, b) in &pairs {
            uf.unite(a, b);
            merged.push((a, b));
            for &(x, y) in &merged { assert!(uf.same(x, y)); }
        }
        assert_eq!(uf.num_sets(), 3);
    }

    #[test]
    fn union_by_rank_keeps_higher_root() {
        let mut uf = UnionFind::new(4);
        uf.unite(0, 1);
        let big = uf.find(0);
        // a rank 0 singleton goes under the rank 1 root
        uf.unite(2, 0);
        assert_eq!(uf.find(2), big);
        uf.unite(big, 3);
        assert_eq!(uf.find(3), big);
    }
}
