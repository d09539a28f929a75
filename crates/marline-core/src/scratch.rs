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

//! # Scratch Buffers
//!
//! [`Scratch<T>`] is the transient sequence used by block rotation
//! (`move_range`, `swap_ranges`) and merge sort: acquired with an exact
//! required length, filled by cloning a window of a source sequence, read
//! back through [`Sequence`], and released when it goes out of scope.
//!
//! Release on every exit path, including early returns and propagated
//! errors, is the drop glue; no explicit release call exists. Small windows stay inline
//! (no heap allocation) via `smallvec`.

use crate::range::SeqRange;
use crate::seq::Sequence;
use smallvec::SmallVec;

/// Number of elements a scratch buffer holds without touching the heap.
const INLINE_LEN: usize = 16;

/// A transient, exact-capacity buffer of cloned elements.
///
/// # Examples
///
/// ```rust
/// use marline_core::range::SeqRange;
/// use marline_core::scratch::Scratch;
/// use marline_core::seq::Sequence;
///
/// let v = vec![10, 20, 30, 40];
/// let scratch = Scratch::from_seq(&v, SeqRange::new_unchecked(1, 2));
/// assert_eq!(scratch.len(), 2);
/// assert_eq!(*scratch.get(0), 20);
/// assert_eq!(*scratch.get(1), 30);
/// ```
#[derive(Debug, Clone)]
pub struct Scratch<T> {
    buf: SmallVec<[T; INLINE_LEN]>,
}

impl<T> Scratch<T> {
    /// Acquires an empty scratch buffer with capacity for exactly `len`
    /// elements.
    #[inline]
    pub fn with_capacity(len: usize) -> Self {
        Self {
            buf: SmallVec::with_capacity(len),
        }
    }

    /// Appends a value.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.buf.push(value);
    }

    /// The buffered elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }
}

impl<T: Clone> Scratch<T> {
    /// Acquires a scratch buffer holding a clone of `seq[range]`.
    ///
    /// The buffer's capacity is exactly `range.len()`; callers size their
    /// scratch to the minimum the algorithm needs (the length difference
    /// for unequal-range swaps, the merged span for merge sort).
    pub fn from_seq<S>(seq: &S, range: SeqRange) -> Self
    where
        S: Sequence<T> + ?Sized,
    {
        debug_assert!(
            range.end() <= seq.len(),
            "called `Scratch::from_seq` with an unvalidated range"
        );
        let mut buf = SmallVec::with_capacity(range.len());
        for i in range.start()..range.end() {
            buf.push(seq.get(i).clone());
        }
        Self { buf }
    }
}

impl<T> Sequence<T> for Scratch<T> {
    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self.buf[index]
    }
}
