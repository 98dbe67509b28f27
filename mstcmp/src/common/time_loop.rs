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

use std::time::{Duration, Instant};

/// Runs `f` at least `rounds` times and for at least `min_time`, calling
/// `init` before and `end` after every round. Returns the mean time of `f`.
pub fn time_loop<I, F, E>(
    name: &str,
    rounds: usize,
    min_time: Duration,
    mut init: I,
    mut f: F,
    mut end: E,
) -> Duration where
    I: FnMut(),
    F: FnMut(),
    E: FnMut(),
{
    let mut total = Duration::ZERO;
    let mut done = 0u32;
    let started = Instant::now();

    while (done as usize) < rounds.max(1) || started.elapsed() < min_time {
        init();
        let t = Instant::now();
        f();
        let d = t.elapsed();
        end();

        total += d;
        done += 1;
        crate::verbose_println!("{}:\tround {}:\t{:.6}", name, done, d.as_secs_f64());
    }

    let mean = total / done;
    println!("{}:\t{:.6}", name, mean.as_secs_f64());
    mean
}
