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

use rand::{rngs::StdRng, SeedableRng};

use mstcmp::common::error::MstError;
use mstcmp::common::generator::{random_connected_graph, random_graph};
use mstcmp::common::graph::{total_weight, WghEdge, WghGraph};
use mstcmp::kruskal::kruskal_mst;
use mstcmp::msf_check::{check_forest, check_msf, weights_agree};
use mstcmp::prim::{prim_mst, prim_tree, Attach};

fn graph(n: usize, es: &[(u32, u32, f64)]) -> WghGraph {
    let mut g = WghGraph::new(n);
    for &(u, v, w) in es { g.add_edge(u, v, w).unwrap(); }
    g
}

fn edge_set(es: &[WghEdge]) -> Vec<(u32, u32, u64)> {
    let mut s: Vec<_> = es
        .iter()
        .map(|e| e.normalized())
        .map(|e| (e.u, e.v, e.w.to_bits()))
        .collect();
    s.sort_unstable();
    s
}

fn square() -> WghGraph {
    graph(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (0, 3, 4.0), (0, 2, 5.0)])
}


mod boundary {
    use super::*;

    #[test]
    fn no_vertices() {
        let g = WghGraph::new(0);
        assert!(prim_mst(&g).edges().is_empty());
        assert!(prim_mst(&g).unreachable().is_empty());
        assert!(kruskal_mst(&g).is_empty());
    }

    #[test]
    fn one_vertex() {
        let g = WghGraph::new(1);
        let p = prim_mst(&g);
        assert!(p.edges().is_empty());
        assert_eq!(p.attach(), &[Attach::Root]);
        assert!(p.is_spanning_tree());
        assert!(kruskal_mst(&g).is_empty());
    }

    #[test]
    fn self_loop_never_chosen() {
        let g = graph(2, &[(0, 0, 0.0), (1, 1, 0.5), (0, 1, 7.0)]);
        assert_eq!(edge_set(&prim_mst(&g).edges()), vec![(0, 1, 7f64.to_bits())]);
        assert_eq!(edge_set(&kruskal_mst(&g)), vec![(0, 1, 7f64.to_bits())]);
    }

    #[test]
    fn prim_tree_rejects_bad_root() {
        let g = square();
        assert!(matches!(
            prim_tree(&g, 4),
            Err(MstError::InvalidVertexIndex { vertex: 4, n: 4 })
        ));
    }
}


mod scenarios {
    use super::*;

    #[test]
    fn square_with_diagonal() {
        let g = square();
        let expected = edge_set(&[
            WghEdge::new(0, 1, 1.0),
            WghEdge::new(1, 2, 2.0),
            WghEdge::new(2, 3, 3.0),
        ]);

        let p = prim_mst(&g);
        assert_eq!(p.total_weight(), 6.0);
        assert_eq!(edge_set(&p.edges()), expected);
        assert!(p.is_spanning_tree());

        let k = kruskal_mst(&g);
        assert_eq!(total_weight(&k), 6.0);
        assert_eq!(edge_set(&k), expected);
    }

    #[test]
    fn prim_emits_in_vertex_order() {
        let p = prim_mst(&square());
        assert_eq!(p.edges(), vec![
            WghEdge::new(0, 1, 1.0),
            WghEdge::new(1, 2, 2.0),
            WghEdge::new(2, 3, 3.0),
        ]);
    }

    #[test]
    fn kruskal_emits_in_acceptance_order() {
        let g = graph(4, &[(2, 3, 3.0), (0, 2, 5.0), (0, 1, 1.0), (1, 2, 2.0)]);
        assert_eq!(kruskal_mst(&g), vec![
            WghEdge::new(0, 1, 1.0),
            WghEdge::new(1, 2, 2.0),
            WghEdge::new(2, 3, 3.0),
        ]);
    }

    #[test]
    fn signed_zero_weights() {
        // -0.0 and 0.0 are distinct keys for the heap
        let g = graph(3, &[(0, 1, -0.0), (1, 2, 0.0), (0, 2, 0.0)]);
        let p = prim_mst(&g);
        assert!(p.is_spanning_tree());
        assert_eq!(p.attach()[1], Attach::Parent { u: 0, w: -0.0 });
        assert_eq!(p.edges().len(), 2);
        assert_eq!(check_forest(&g, &p.edges()), Ok(()));
        assert_eq!(check_forest(&g, &kruskal_mst(&g)), Ok(()));
    }

    #[test]
    fn prim_picks_cheaper_later_edge() {
        // vertex 2 is first reached with weight 9, then relaxed to 1
        let g = graph(3, &[(0, 2, 9.0), (0, 1, 2.0), (1, 2, 1.0)]);
        let p = prim_mst(&g);
        assert_eq!(p.attach()[2], Attach::Parent { u: 1, w: 1.0 });
        assert_eq!(p.total_weight(), 3.0);
    }
}


mod disconnected {
    use super::*;

    fn two_pairs() -> WghGraph {
        graph(4, &[(0, 1, 1.0), (2, 3, 1.0)])
    }

    #[test]
    fn both_return_forest() {
        let g = two_pairs();
        let p = prim_mst(&g);
        let k = kruskal_mst(&g);
        assert_eq!(p.edges().len(), 2);
        assert_eq!(k.len(), 2);
        assert_eq!(edge_set(&p.edges()), edge_set(&k));
        assert_eq!(p.roots(), &[0, 2]);
        assert!(!p.is_spanning_tree());
    }

    #[test]
    fn unreachable_is_flagged() {
        let g = two_pairs();
        let p = prim_mst(&g);
        assert_eq!(p.unreachable(), vec![2, 3]);
        assert_eq!(p.tree_of(3), Some(2));
        assert_eq!(p.tree_of(4), None);
        assert_eq!(p.tree_of(99), None);

        let t = prim_tree(&g, 0).unwrap();
        assert_eq!(t.edges(), vec![WghEdge::new(0, 1, 1.0)]);
        assert_eq!(t.attach()[2], Attach::Unreachable);
        assert_eq!(t.attach()[3], Attach::Unreachable);
        assert_eq!(t.unreachable(), vec![2, 3]);
        assert!(t.edges().iter().all(|e| e.w.is_finite()));
    }

    #[test]
    fn isolated_vertices() {
        let g = graph(5, &[(1, 3, 2.0)]);
        let p = prim_mst(&g);
        assert_eq!(p.edges(), vec![WghEdge::new(1, 3, 2.0)]);
        assert_eq!(p.roots(), &[0, 1, 2, 4]);
        assert_eq!(kruskal_mst(&g).len(), 1);
    }
}


mod properties {
    use super::*;

    #[test]
    fn equal_weight_on_connected_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..40 {
            let g = random_connected_graph(n, 0.3, 1..=5, &mut rng).unwrap();
            let p = prim_mst(&g);
            let k = kruskal_mst(&g);
            assert!(p.is_spanning_tree());
            assert_eq!(p.edges().len(), n - 1);
            assert_eq!(k.len(), n - 1);
            assert!(weights_agree(p.total_weight(), total_weight(&k)));
            assert_eq!(check_msf(&g, &p.edges()), Ok(()));
            assert_eq!(check_msf(&g, &k), Ok(()));
        }
    }

    #[test]
    fn forests_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let g = random_graph(25, 0.08, 1..=10, &mut rng).unwrap();
            let p = prim_mst(&g).edges();
            let k = kruskal_mst(&g);
            assert_eq!(check_forest(&g, &p), Ok(()));
            assert_eq!(check_forest(&g, &k), Ok(()));
            assert_eq!(p.len(), k.len());
            assert!(weights_agree(total_weight(&p), total_weight(&k)));
        }
    }

    #[test]
    fn distinct_weights_give_same_tree() {
        let mut rng = StdRng::seed_from_u64(3);
        let g0 = random_connected_graph(30, 0.4, 1..=1, &mut rng).unwrap();
        // rebuild with a unique weight per edge
        let mut g = WghGraph::new(g0.num_vertices());
        for (i, e) in g0.edges().iter().enumerate() {
            let w = ((i * 7919) % 10_007) as f64 + 0.5;
            g.add_edge(e.u, e.v, w).unwrap();
        }
        assert_eq!(edge_set(&prim_mst(&g).edges()), edge_set(&kruskal_mst(&g)));
    }

    #[test]
    fn ties_keep_total_weight() {
        // every spanning tree of the complete graph weighs n - 1
        let mut g = WghGraph::new(6);
        for i in 0..6 { for j in i + 1..6 { g.add_edge(i, j, 1.0).unwrap(); } }
        assert_eq!(prim_mst(&g).total_weight(), 5.0);
        assert_eq!(total_weight(&kruskal_mst(&g)), 5.0);
    }

    #[test]
    fn graph_is_left_untouched() {
        let g = square();
        let before = g.edges().to_vec();
        kruskal_mst(&g);
        prim_mst(&g);
        assert_eq!(g.edges(), &before[..]);
    }
}
