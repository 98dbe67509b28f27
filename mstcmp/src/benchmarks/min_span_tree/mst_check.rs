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

use clap::Parser;

use mstcmp::or_exit;
use mstcmp::common::graph::WghGraph;
use mstcmp::common::graph_io::{read_wgh_edge_array_from_file, read_wgh_graph_from_file};
use mstcmp::msf_check::check_msf;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// mst results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,
}

pub fn check(g: &WghGraph, rfname: &str) -> bool {
    let r = or_exit!(read_wgh_edge_array_from_file(rfname, Some(g.num_vertices())));
    match check_msf(g, &r.es) {
        Ok(()) => true,
        Err(e) => { println!("{}", e); false }
    }
}

fn main() {
    let args = Args::parse();
    let g = or_exit!(read_wgh_graph_from_file(&args.ifname, None));
    if check(&g, &args.rfname) { println!("OK"); }
    else { println!("ERR"); std::process::exit(1); }
}
