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

//! Error types for the sequence algorithms.
//!
//! Two kinds of failure exist:
//!
//! - **Range violations** ([`Error::Range`]) are detected at the boundary,
//!   before any algorithm runs, and identify the offending parameter by
//!   name. The sequence is guaranteed untouched.
//! - **Operation failures** ([`Error::Interpolation`],
//!   [`Error::DuplicateKey`]) are contract violations detected during
//!   execution. They are fatal to the current call; no retry or partial
//!   result is attempted.

use marline_core::range::RangeError;
use std::fmt;

/// The error type for all fallible sequence operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An index/count argument violated the range contract.
    Range(RangeError),
    /// An interpolation function returned a weight outside `[0, 1]`.
    Interpolation(InterpolationError),
    /// A sorted insert with uniqueness requested found an equal element.
    DuplicateKey(DuplicateKeyError),
}

/// Details of an unsound interpolation weight.
///
/// A weight outside the unit interval means the caller's interpolation
/// function is inconsistent with the data being searched; it is not a bad
/// user index, which is why it is reported separately from [`RangeError`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationError {
    /// The weight the interpolation function returned.
    pub weight: f64,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "interpolation function returned weight {} outside the unit interval [0, 1]",
            self.weight
        )
    }
}

impl std::error::Error for InterpolationError {}

/// Details of a rejected duplicate in a unique sorted insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateKeyError {
    /// Index of an existing element equal to the one being inserted.
    pub index: usize,
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an equal element already exists at index {}", self.index)
    }
}

impl std::error::Error for DuplicateKeyError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(e) => write!(f, "range violation: {e}"),
            Self::Interpolation(e) => write!(f, "operation failure: {e}"),
            Self::DuplicateKey(e) => write!(f, "operation failure: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(e) => Some(e),
            Self::Interpolation(e) => Some(e),
            Self::DuplicateKey(e) => Some(e),
        }
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

impl From<InterpolationError> for Error {
    fn from(e: InterpolationError) -> Self {
        Self::Interpolation(e)
    }
}

impl From<DuplicateKeyError> for Error {
    fn from(e: DuplicateKeyError) -> Self {
        Self::DuplicateKey(e)
    }
}
