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

use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use mstcmp::{or_exit, verbose_println};
use mstcmp::common::generator::random_graph;
use mstcmp::common::graph_io::{
    read_wgh_graph_from_file, write_wgh_edges_to_file, write_wgh_graph_dot,
};
use mstcmp::compare::compare;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the input graph's filename; a random graph is generated when absent
    #[clap(value_parser, required=false)]
    ifname: Option<String>,

    /// number of vertices of the generated graph
    #[clap(short, long, value_parser, default_value_t=6)]
    vertices: usize,

    /// probability that a pair of vertices is joined
    #[clap(short, long, value_parser, default_value_t=0.5)]
    density: f64,

    /// largest weight of a generated edge
    #[clap(long, value_parser, default_value_t=10)]
    max_weight: u32,

    /// seed of the generator; taken from the clock when absent
    #[clap(short, long, value_parser)]
    seed: Option<u64>,

    /// directory that receives edges.txt, prim_mst.txt, kruskal_mst.txt and mst.dot
    #[clap(long, value_parser, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    let args = Args::parse();

    let g = match &args.ifname {
        Some(f) => or_exit!(read_wgh_graph_from_file(f, None)),
        None => {
            let mut rng = match args.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            verbose_println!("generating graph (n={}, p={})...", args.vertices, args.density);
            or_exit!(random_graph(args.vertices, args.density, 1..=args.max_weight.max(1), &mut rng))
        }
    };

    let c = compare(&g);
    println!("{}", c);
    let unreachable = c.unreachable_from_root();
    if !unreachable.is_empty() {
        println!("unreachable from 0:  {:?}", unreachable);
    }

    or_exit!(write_wgh_edges_to_file(g.edges(), args.out_dir.join("edges.txt")));
    or_exit!(write_wgh_edges_to_file(&c.prim_edges(), args.out_dir.join("prim_mst.txt")));
    or_exit!(write_wgh_edges_to_file(&c.kruskal, args.out_dir.join("kruskal_mst.txt")));
    or_exit!(write_wgh_graph_dot(&g, &c.prim_edges(), &c.kruskal, args.out_dir.join("mst.dot")));
    println!("graph and MSTs saved in {}", args.out_dir.display());

    if !c.is_consistent() { std::process::exit(1); }
}
