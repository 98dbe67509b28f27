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
use thiserror::Error;

use crate::{DefInt, DefFloat};

#[derive(Debug, Error)]
pub enum MstError {
    #[error("invalid vertex index {vertex} (graph has {n} vertices)")]
    InvalidVertexIndex { vertex: DefInt, n: usize },

    #[error("edge ({u}, {v}) has a NaN weight")]
    InvalidWeight { u: DefInt, v: DefInt },

    #[error("edge probability {p} is not a finite number")]
    InvalidProbability { p: f64 },

    #[error("line {line}: can not parse `{content}` as a weighted edge")]
    Parse { line: usize, content: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, MstError>;

/// Reasons a set of edges is not a minimum spanning forest of a graph.
#[derive(Debug, Error, PartialEq)]
pub enum ForestError {
    #[error("edge ({u}, {v}, {w}) is not in the graph")]
    UnknownEdge { u: DefInt, v: DefInt, w: DefFloat },

    #[error("edge ({u}, {v}) closes a cycle")]
    Cycle { u: DefInt, v: DefInt },

    #[error("{found} edges can not be a forest over {n} vertices")]
    TooManyEdges { found: usize, n: usize },

    #[error("forest has {found} edges, a spanning forest needs {expected}")]
    EdgeCountMismatch { found: usize, expected: usize },

    #[error("forest weighs {found}, the minimum is {expected}")]
    WeightMismatch { found: DefFloat, expected: DefFloat },
}
