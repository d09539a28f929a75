// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Marline Sequence Algorithms
//!
//! In-place algorithm families over the index-addressable sequences of
//! `marline-core`: positional mutation, rearrangement, six sorting
//! algorithms (each in a plain and a paired-key form), binary and
//! interpolation search, and subsequence matching.
//!
//! ## Modules
//!
//! - `position`: get/set/insert/remove/take/replace at an index or a
//!   symbolic bound (`Edge::First` / `Edge::Last`), plus their range forms
//!   including the asymmetric `replace_range` splice.
//! - `rearrange`: single-element move, pairwise swap, disjoint range swaps
//!   (equal and unequal length), and reversal.
//! - `sort`: bubble, selection, insertion, merge, quick and heap; every
//!   algorithm sortable over a sub-range and in a paired-key form that
//!   permutes a value sequence in lock-step with its key sequence.
//! - `search`: binary search with first/last/any tie-breaking,
//!   interpolation search driven by a caller-supplied weight function, and
//!   binary-search-guided sorted insertion.
//! - `matching`: forward/backward subsequence find with partial boundary
//!   matches, three-way sequence comparison with a configurable
//!   empty-order policy, and sequence equality.
//! - `error`: the crate-level [`Error`](error::Error) type separating
//!   boundary range violations from mid-execution operation failures.
//!
//! ## Contract
//!
//! Every public function validates its index/count arguments through the
//! range contract of `marline-core` before running; the private cores
//! assume validated ranges. All operations are synchronous, run on the
//! caller's thread, hold no state across calls, and require exclusive
//! access to their sequences for the duration of the call.

pub mod error;
pub mod matching;
pub mod position;
pub mod rearrange;
pub mod search;
pub mod sort;
