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

//! # Index-Addressable Sequences
//!
//! The container abstraction every marline algorithm is generic over.
//! Three flavors, each a superset of the previous:
//!
//! - [`Sequence`]: read-only random access with a known length.
//! - [`SequenceMut`]: O(1) write access (`get_mut`, `set`, `replace`,
//!   `swap`). Sorting and rearrangement need nothing more.
//! - [`SequenceList`]: structural mutation (`insert`, `remove`,
//!   `reserve`). Positional insertion/removal and sorted insert need this.
//!
//! Implementations are provided for `[T]` (read + write), `Vec<T>`, and
//! `VecDeque<T>` (all three flavors). Algorithm entry points take
//! `S: Sequence<T> + ?Sized` style bounds so plain slices work directly.
//!
//! The traits imply no ownership of the elements beyond the container's
//! own lifetime: algorithms only rearrange values already present and
//! never allocate or free elements themselves.
//!
//! ## Usage
//!
//! ```rust
//! use marline_core::seq::{Sequence, SequenceMut, SequenceList};
//!
//! let mut v = vec![10, 20, 30];
//! assert_eq!(v.len(), 3);
//! assert_eq!(*Sequence::get(&v, 1), 20);
//!
//! SequenceMut::swap(&mut v, 0, 2);
//! assert_eq!(v, [30, 20, 10]);
//!
//! let old = SequenceMut::replace(&mut v, 1, 99);
//! assert_eq!(old, 20);
//!
//! SequenceList::insert(&mut v, 0, 7);
//! assert_eq!(v, [7, 30, 99, 10]);
//! ```

use std::collections::VecDeque;

/// Read-only random access over an ordered container with a known length.
///
/// Reads are expected to be O(1) at any valid index. Out-of-bounds access
/// panics, exactly as indexing the underlying container would; callers in
/// the algorithm crates go through the range contract first, so a panic
/// here indicates a logic error rather than bad user input.
pub trait Sequence<T> {
    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> &T;

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable random access: the fixed-length write surface.
///
/// Everything here preserves the sequence's length. This is all the
/// rearrangement and sorting algorithms require.
pub trait SequenceMut<T>: Sequence<T> {
    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get_mut(&mut self, index: usize) -> &mut T;

    /// Overwrites the element at `index`, dropping the previous value.
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        *self.get_mut(index) = value;
    }

    /// Overwrites the element at `index` and returns the previous value.
    #[inline]
    fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(self.get_mut(index), value)
    }

    /// Exchanges the elements at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn swap(&mut self, i: usize, j: usize);
}

/// Structural mutation: insertion, removal, and capacity reservation.
///
/// `reserve` exists so batched range insertion can grow the backing store
/// once instead of per element; containers without amortized growth may
/// implement it as a no-op.
pub trait SequenceList<T>: SequenceMut<T> {
    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    fn insert(&mut self, index: usize, value: T);

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn remove(&mut self, index: usize) -> T;

    /// Reserves capacity for at least `additional` more elements.
    fn reserve(&mut self, additional: usize);
}

impl<T> Sequence<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> SequenceMut<T> for [T] {
    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> SequenceMut<T> for Vec<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<T> SequenceList<T> for Vec<T> {
    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> SequenceMut<T> for VecDeque<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

impl<T> SequenceList<T> for VecDeque<T> {
    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> T {
        VecDeque::remove(self, index)
            .expect("called `SequenceList::remove` with an out-of-bounds index")
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }
}
