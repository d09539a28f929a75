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

//! # The Range Contract
//!
//! Every public algorithm wrapper in the marline crates validates its
//! index/count arguments here before handing a [`SeqRange`] to the private
//! algorithm core. Cores assume their ranges are valid and never re-check
//! them, so all "is this a legal window into this sequence" logic lives in
//! this module and nowhere else.
//!
//! A failed validation produces a [`RangeError`] that names the offending
//! parameter via [`RangeParam`], distinguishing (say) an out-of-bounds
//! `index` from a `count` that exceeds the remaining capacity.
//!
//! ## Usage
//!
//! ```rust
//! use marline_core::range::{RangeParam, validate_range};
//!
//! let range = validate_range(10, 2, 5).unwrap();
//! assert_eq!(range.start(), 2);
//! assert_eq!(range.len(), 5);
//! assert_eq!(range.end(), 7);
//!
//! let err = validate_range(10, 2, 9).unwrap_err();
//! assert_eq!(err.param(), RangeParam::Count);
//! ```

use std::fmt;

/// Names the parameter that violated a range precondition.
///
/// Carried inside [`RangeError`] so diagnostics can point at the exact
/// argument rather than a generic "out of bounds".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeParam {
    /// A start index into a sequence.
    Index,
    /// An element count measured from a start index.
    Count,
    /// The start index of a source range in a two-range operation.
    SourceIndex,
    /// The destination index in a move operation.
    DestinationIndex,
    /// The start index of the second range in a two-range operation.
    TargetIndex,
    /// A length that must match another sequence's length.
    Length,
}

impl RangeParam {
    /// The parameter name as it appears in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Count => "count",
            Self::SourceIndex => "source index",
            Self::DestinationIndex => "destination index",
            Self::TargetIndex => "target index",
            Self::Length => "length",
        }
    }
}

impl fmt::Display for RangeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A range precondition violation, detected before any algorithm runs.
///
/// `value` is the offending argument, `limit` the largest value that would
/// have been accepted in its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    param: RangeParam,
    value: usize,
    limit: usize,
}

impl RangeError {
    /// Creates a new `RangeError`.
    #[inline]
    pub const fn new(param: RangeParam, value: usize, limit: usize) -> Self {
        Self {
            param,
            value,
            limit,
        }
    }

    /// The parameter that violated its precondition.
    #[inline]
    pub const fn param(&self) -> RangeParam {
        self.param
    }

    /// The offending value.
    #[inline]
    pub const fn value(&self) -> usize {
        self.value
    }

    /// The largest value that would have been accepted.
    #[inline]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is out of range (limit {})",
            self.param, self.value, self.limit
        )
    }
}

impl std::error::Error for RangeError {}

/// A validated `(start, length)` window into a sequence.
///
/// Instances are produced by the validators in this module (or by
/// [`SeqRange::full`], which is valid by construction); algorithm cores
/// treat the invariant `start + len <= sequence.len()` as established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeqRange {
    start: usize,
    len: usize,
}

impl SeqRange {
    /// Creates a range without validating it against a sequence length.
    ///
    /// Callers inside the algorithm crates use this only for windows they
    /// have already proven valid (sub-ranges of a validated range).
    #[inline]
    pub const fn new_unchecked(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// The full extent of a sequence of length `len`.
    #[inline]
    pub const fn full(len: usize) -> Self {
        Self { start: 0, len }
    }

    /// The inclusive start index.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The number of elements in the window.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// The exclusive end index (`start + len`).
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns `true` if the window is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `index` falls inside the window.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end()
    }
}

/// Validates an `(index, count)` pair against a sequence of length `len`.
///
/// `index` may equal `len` only when `count` is zero (the empty window at
/// the end is legal, matching slice semantics).
#[inline]
pub fn validate_range(len: usize, index: usize, count: usize) -> Result<SeqRange, RangeError> {
    validate_range_named(len, index, count, RangeParam::Index, RangeParam::Count)
}

/// Like [`validate_range`], but reports violations under caller-chosen
/// parameter names. Two-range operations use this to tell their ranges
/// apart in diagnostics.
#[inline]
pub fn validate_range_named(
    len: usize,
    index: usize,
    count: usize,
    index_param: RangeParam,
    count_param: RangeParam,
) -> Result<SeqRange, RangeError> {
    if index > len {
        return Err(RangeError::new(index_param, index, len));
    }
    if count > len - index {
        return Err(RangeError::new(count_param, count, len - index));
    }
    Ok(SeqRange::new_unchecked(index, count))
}

/// Validates a single element index (`index < len`).
#[inline]
pub fn validate_index(len: usize, index: usize, param: RangeParam) -> Result<usize, RangeError> {
    if index >= len {
        return Err(RangeError::new(param, index, len.saturating_sub(1)));
    }
    Ok(index)
}

/// Validates an insertion index (`index <= len`).
#[inline]
pub fn validate_insert_index(len: usize, index: usize) -> Result<usize, RangeError> {
    if index > len {
        return Err(RangeError::new(RangeParam::Index, index, len));
    }
    Ok(index)
}

/// Validates that two paired sequences have equal lengths.
///
/// Paired-key sorting requires `keys.len() == values.len()` for the whole
/// call; a mismatch is reported against [`RangeParam::Length`].
#[inline]
pub fn validate_lengths_match(keys_len: usize, values_len: usize) -> Result<usize, RangeError> {
    if keys_len != values_len {
        return Err(RangeError::new(RangeParam::Length, values_len, keys_len));
    }
    Ok(keys_len)
}

/// Validates the gap precondition of an equal-length range swap:
/// `count < |y - x|`.
///
/// The strict inequality also rejects runs that are disjoint but exactly
/// adjacent; callers that want adjacent exchanges go through the
/// unequal-length swap, which only requires disjointness.
#[inline]
pub fn validate_swap_gap(x: usize, y: usize, count: usize) -> Result<(), RangeError> {
    let gap = x.abs_diff(y);
    if count >= gap {
        return Err(RangeError::new(
            RangeParam::Count,
            count,
            gap.saturating_sub(1),
        ));
    }
    Ok(())
}
