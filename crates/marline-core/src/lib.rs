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

//! # Marline Core
//!
//! Foundational building blocks for the marline sequence-algorithm crates:
//! the index-addressable sequence abstraction, the range contract, and the
//! scratch buffer used by block rotation and merge sort.
//!
//! ## Modules
//!
//! - `seq`: `Sequence`, `SequenceMut`, and `SequenceList` traits with
//!   implementations for slices, `Vec`, and `VecDeque`. All algorithm
//!   crates are generic over these traits.
//! - `range`: validated `(start, length)` windows (`SeqRange`), typed range
//!   errors that name the offending parameter (`RangeError`), and the
//!   validation functions every public algorithm wrapper calls before
//!   touching a sequence.
//! - `scratch`: `Scratch<T>`, a transient clone-out buffer acquired with an
//!   exact capacity and released on drop.
//!
//! ## Purpose
//!
//! Algorithm cores in the sibling crates assume their ranges are already
//! validated and never re-check them; this crate is where that validation
//! lives, so the boundary between "bad caller input" and "algorithm logic"
//! stays in one place.

pub mod range;
pub mod scratch;
pub mod seq;
