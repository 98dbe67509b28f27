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

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{DefInt, DefFloat};
use super::error::{MstError, Result};
use super::graph::{WghEdge, WghGraph};

fn edge_probability(p: f64) -> Result<f64> {
    if p.is_finite() { Ok(p.clamp(0.0, 1.0)) }
    else { Err(MstError::InvalidProbability { p }) }
}

/// Random graph over `n` vertices: each pair `i < j` is joined with
/// probability `p` by an edge whose integral weight is drawn from `weights`.
///
/// `p` is clamped to `[0, 1]`; a non-finite `p` is an
/// `MstError::InvalidProbability`.
///
/// # Panics
/// If `weights` is empty.
pub fn random_graph<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    weights: RangeInclusive<u32>,
    rng: &mut R,
) -> Result<WghGraph> {
    let p = edge_probability(p)?;
    let mut g = WghGraph::new(n);
    for i in 0..n as DefInt {
        for j in i + 1..n as DefInt {
            if rng.gen_bool(p) {
                let w = rng.gen_range(weights.clone()) as DefFloat;
                g.add_edge(i, j, w)?;
            }
        }
    }
    Ok(g)
}

/// Random graph that is connected: a random spanning path through all the
/// vertices is added first, then each remaining pair with probability `p`.
/// `p` is checked as in [`random_graph`].
pub fn random_connected_graph<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    weights: RangeInclusive<u32>,
    rng: &mut R,
) -> Result<WghGraph> {
    let p = edge_probability(p)?;
    let mut order: Vec<DefInt> = (0..n as DefInt).collect();
    order.shuffle(rng);

    let mut es: Vec<WghEdge> = order
        .windows(2)
        .map(|w| WghEdge::new(w[0], w[1], 0.0).normalized())
        .collect();
    let mut linked: Vec<(DefInt, DefInt)> = es.iter().map(|e| (e.u, e.v)).collect();
    linked.sort_unstable();

    for i in 0..n as DefInt {
        for j in i + 1..n as DefInt {
            if linked.binary_search(&(i, j)).is_err() && rng.gen_bool(p) {
                es.push(WghEdge::new(i, j, 0.0));
            }
        }
    }

    let mut g = WghGraph::new(n);
    for e in es {
        let w = rng.gen_range(weights.clone()) as DefFloat;
        g.add_edge(e.u, e.v, w)?;
    }
    Ok(g)
}
