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

use std::{fs, path::Path};
use rayon::prelude::*;

use super::error::{MstError, Result};

fn io_err<P: AsRef<Path>>(fname: P) -> impl FnOnce(std::io::Error) -> MstError {
    move |source| MstError::Io { source, path: fname.as_ref().to_path_buf() }
}

pub fn write_slice_to_file_seq<T, P>(s: &[T], of: P) -> Result<()>
where
    T: std::string::ToString,
    P: AsRef<Path>,
{
    let mut out: String = s
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    if !out.is_empty() { out.push('\n'); }
    fs::write(&of, out).map_err(io_err(&of))
}

/// Parses every non-blank line of `fname` as a `T`, in parallel. Lines
/// equal to `header` are skipped. A line that fails to parse is reported
/// with its 1-based line number.
pub fn read_file_to_vec<T, P>(fname: P, header: Option<&str>) -> Result<Vec<T>>
where
    T: std::str::FromStr + Send,
    P: AsRef<Path>,
{
    let s = fs::read_to_string(&fname).map_err(io_err(&fname))?;
    let w: Vec<&str> = s.par_split('\n').collect();
    w
        .into_par_iter()
        .enumerate()
        .map(|(i, l)| (i, l.trim()))
        .filter(|(_, l)| !l.is_empty() && Some(*l) != header)
        .map(|(i, l)| l.parse::<T>().map_err(|_| MstError::Parse {
            line: i + 1,
            content: l.to_string(),
        }))
        .collect()
}
