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

use std::time::Duration;

use mstcmp::{define_algs, define_args, finalize, or_exit, verbose_println};
use mstcmp::common::graph::{WghEdge, WghGraph};
use mstcmp::common::graph_io::{read_wgh_graph_from_file, write_wgh_edges_to_file};
use mstcmp::common::time_loop::time_loop;
use mstcmp::kruskal::kruskal_mst;
use mstcmp::prim::prim_mst;

define_args!(
    Algs::KRUSKAL,
    (vertices, usize, 0)
);

define_algs!(
    (PRIM, "prim"),
    (KRUSKAL, "kruskal")
);

pub fn run(alg: Algs, rounds: usize, g: &WghGraph) -> (Vec<WghEdge>, Duration) {
    let mst: fn(&WghGraph) -> Vec<WghEdge> = match alg {
        Algs::PRIM      =>  |g| prim_mst(g).edges(),
        Algs::KRUSKAL   =>  kruskal_mst,
    };

    let mut r = vec![];

    let mean = time_loop(
        "mst",
        rounds,
        Duration::new(1, 0),
        || {},
        || { r = mst(g); },
        || {}
    );
    (r, mean)
}

fn main() {
    let args = Args::parse();
    // 0 infers the vertex count from the largest endpoint
    let n = if args.vertices == 0 { None } else { Some(args.vertices) };
    let g = or_exit!(read_wgh_graph_from_file(&args.ifname, n));
    verbose_println!("running {} on n={} m={}",
        args.algorithm, g.num_vertices(), g.num_edges());

    let (r, d) = run(args.algorithm, args.rounds, &g);

    finalize!(
        args,
        r,
        d,
        or_exit!(write_wgh_edges_to_file(&r, &args.ofname))
    );
}
