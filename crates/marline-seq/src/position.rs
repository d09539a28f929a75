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

//! Positional primitives.
//!
//! Scalar element access and surgery at an absolute index or a symbolic
//! bound ([`Edge::First`] / [`Edge::Last`]), plus the contiguous range
//! forms. All bounds checking is delegated to the range contract; nothing
//! in this module re-checks a validated index.
//!
//! [`replace_range`] is the one variable-length splice primitive: a source
//! shorter than the target range removes the excess target elements, a
//! longer source inserts the excess after the target range.

use crate::error::Error;
use marline_core::range::{
    RangeError, RangeParam, validate_index, validate_insert_index, validate_range,
};
use marline_core::seq::{Sequence, SequenceList, SequenceMut};

/// A symbolic position: the first or last element of a sequence.
///
/// For element access `Last` resolves to `len - 1`; for insertion it
/// resolves to `len` (append).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The element at index 0.
    First,
    /// The element at index `len - 1` (or the append position `len` when
    /// inserting).
    Last,
}

impl Edge {
    /// Resolves to an element index, failing on an empty sequence.
    fn resolve(self, len: usize) -> Result<usize, Error> {
        if len == 0 {
            return Err(RangeError::new(RangeParam::Index, 0, 0).into());
        }
        Ok(match self {
            Self::First => 0,
            Self::Last => len - 1,
        })
    }

    /// Resolves to an insertion index. Always valid.
    fn resolve_insert(self, len: usize) -> usize {
        match self {
            Self::First => 0,
            Self::Last => len,
        }
    }
}

/// Returns a reference to the element at `index`.
pub fn get<T, S>(seq: &S, index: usize) -> Result<&T, Error>
where
    S: Sequence<T> + ?Sized,
{
    let index = validate_index(seq.len(), index, RangeParam::Index)?;
    Ok(seq.get(index))
}

/// Returns a reference to the first or last element.
pub fn get_edge<T, S>(seq: &S, edge: Edge) -> Result<&T, Error>
where
    S: Sequence<T> + ?Sized,
{
    let index = edge.resolve(seq.len())?;
    Ok(seq.get(index))
}

/// Overwrites the element at `index`, dropping the previous value.
pub fn set<T, S>(seq: &mut S, index: usize, value: T) -> Result<(), Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let index = validate_index(seq.len(), index, RangeParam::Index)?;
    seq.set(index, value);
    Ok(())
}

/// Overwrites the first or last element.
pub fn set_edge<T, S>(seq: &mut S, edge: Edge, value: T) -> Result<(), Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let index = edge.resolve(seq.len())?;
    seq.set(index, value);
    Ok(())
}

/// Overwrites the element at `index` and returns the previous value.
pub fn replace<T, S>(seq: &mut S, index: usize, value: T) -> Result<T, Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let index = validate_index(seq.len(), index, RangeParam::Index)?;
    Ok(seq.replace(index, value))
}

/// Overwrites the first or last element and returns the previous value.
pub fn replace_edge<T, S>(seq: &mut S, edge: Edge, value: T) -> Result<T, Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let index = edge.resolve(seq.len())?;
    Ok(seq.replace(index, value))
}

/// Inserts `value` at `index`, shifting later elements right.
pub fn insert<T, S>(seq: &mut S, index: usize, value: T) -> Result<(), Error>
where
    S: SequenceList<T> + ?Sized,
{
    let index = validate_insert_index(seq.len(), index)?;
    seq.insert(index, value);
    Ok(())
}

/// Inserts `value` at the front (`Edge::First`) or appends it
/// (`Edge::Last`).
pub fn insert_edge<T, S>(seq: &mut S, edge: Edge, value: T) -> Result<(), Error>
where
    S: SequenceList<T> + ?Sized,
{
    let index = edge.resolve_insert(seq.len());
    seq.insert(index, value);
    Ok(())
}

/// Removes the element at `index`, discarding it.
pub fn remove<T, S>(seq: &mut S, index: usize) -> Result<(), Error>
where
    S: SequenceList<T> + ?Sized,
{
    take(seq, index).map(drop)
}

/// Removes the first or last element, discarding it.
pub fn remove_edge<T, S>(seq: &mut S, edge: Edge) -> Result<(), Error>
where
    S: SequenceList<T> + ?Sized,
{
    take_edge(seq, edge).map(drop)
}

/// Removes and returns the element at `index` (get + remove).
pub fn take<T, S>(seq: &mut S, index: usize) -> Result<T, Error>
where
    S: SequenceList<T> + ?Sized,
{
    let index = validate_index(seq.len(), index, RangeParam::Index)?;
    Ok(seq.remove(index))
}

/// Removes and returns the first or last element.
pub fn take_edge<T, S>(seq: &mut S, edge: Edge) -> Result<T, Error>
where
    S: SequenceList<T> + ?Sized,
{
    let index = edge.resolve(seq.len())?;
    Ok(seq.remove(index))
}

/// Clones the elements of `seq[index .. index + count]` into a `Vec`.
pub fn get_range<T, S>(seq: &S, index: usize, count: usize) -> Result<Vec<T>, Error>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    let range = validate_range(seq.len(), index, count)?;
    let mut out = Vec::with_capacity(range.len());
    for i in range.start()..range.end() {
        out.push(seq.get(i).clone());
    }
    Ok(out)
}

/// Overwrites `src.len()` elements starting at `index` with clones of
/// `src`'s elements.
pub fn set_range<T, S, P>(seq: &mut S, index: usize, src: &P) -> Result<(), Error>
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
    P: Sequence<T> + ?Sized,
{
    let range = validate_range(seq.len(), index, src.len())?;
    for k in 0..range.len() {
        seq.set(range.start() + k, src.get(k).clone());
    }
    Ok(())
}

/// Inserts clones of `src`'s elements at `index`, reserving capacity for
/// the whole batch up front.
pub fn insert_range<T, S, P>(seq: &mut S, index: usize, src: &P) -> Result<(), Error>
where
    T: Clone,
    S: SequenceList<T> + ?Sized,
    P: Sequence<T> + ?Sized,
{
    let index = validate_insert_index(seq.len(), index)?;
    seq.reserve(src.len());
    for k in 0..src.len() {
        seq.insert(index + k, src.get(k).clone());
    }
    Ok(())
}

/// Removes `count` elements starting at `index`, discarding them.
pub fn remove_range<T, S>(seq: &mut S, index: usize, count: usize) -> Result<(), Error>
where
    S: SequenceList<T> + ?Sized,
{
    let range = validate_range(seq.len(), index, count)?;
    for _ in 0..range.len() {
        seq.remove(range.start());
    }
    Ok(())
}

/// Removes `count` elements starting at `index` and returns them in order.
pub fn take_range<T, S>(seq: &mut S, index: usize, count: usize) -> Result<Vec<T>, Error>
where
    S: SequenceList<T> + ?Sized,
{
    let range = validate_range(seq.len(), index, count)?;
    let mut out = Vec::with_capacity(range.len());
    for _ in 0..range.len() {
        out.push(seq.remove(range.start()));
    }
    Ok(out)
}

/// Replaces the `count` elements starting at `index` with clones of `src`.
///
/// The common prefix is overwritten in place. A source shorter than the
/// target range removes the excess target elements; a longer source
/// inserts the excess after the target range.
///
/// # Examples
///
/// ```rust
/// use marline_seq::position::replace_range;
///
/// let mut v = vec!['a', 'b', 'c', 'd', 'e'];
/// replace_range(&mut v, 2, 2, &['x'][..]).unwrap();
/// assert_eq!(v, ['a', 'b', 'x', 'e']);
///
/// let mut v = vec!['a', 'b', 'c', 'd', 'e'];
/// replace_range(&mut v, 2, 2, &['x', 'y', 'z'][..]).unwrap();
/// assert_eq!(v, ['a', 'b', 'x', 'y', 'z', 'e']);
/// ```
pub fn replace_range<T, S, P>(seq: &mut S, index: usize, count: usize, src: &P) -> Result<(), Error>
where
    T: Clone,
    S: SequenceList<T> + ?Sized,
    P: Sequence<T> + ?Sized,
{
    let range = validate_range(seq.len(), index, count)?;
    let target = range.len();
    let source = src.len();
    let common = target.min(source);

    for k in 0..common {
        seq.set(range.start() + k, src.get(k).clone());
    }
    if source < target {
        for _ in source..target {
            seq.remove(range.start() + source);
        }
    } else if source > target {
        seq.reserve(source - target);
        for k in target..source {
            seq.insert(range.start() + k, src.get(k).clone());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marline_core::range::RangeParam;

    fn range_param(err: Error) -> RangeParam {
        match err {
            Error::Range(e) => e.param(),
            other => panic!("expected a range violation, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_get_set_replace() {
        let mut v = vec![1, 2, 3];
        assert_eq!(*get(&v, 1).unwrap(), 2);
        set(&mut v, 1, 9).unwrap();
        assert_eq!(v, [1, 9, 3]);
        assert_eq!(replace(&mut v, 1, 2).unwrap(), 9);
        assert_eq!(v, [1, 2, 3]);

        assert_eq!(range_param(get(&v, 3).unwrap_err()), RangeParam::Index);
    }

    #[test]
    fn test_edges_resolve() {
        let mut v = vec![1, 2, 3];
        assert_eq!(*get_edge(&v, Edge::First).unwrap(), 1);
        assert_eq!(*get_edge(&v, Edge::Last).unwrap(), 3);

        set_edge(&mut v, Edge::Last, 9).unwrap();
        assert_eq!(v, [1, 2, 9]);
        assert_eq!(replace_edge(&mut v, Edge::First, 0).unwrap(), 1);
        assert_eq!(v, [0, 2, 9]);

        let empty: Vec<i32> = Vec::new();
        assert!(get_edge(&empty, Edge::First).is_err());
        assert!(get_edge(&empty, Edge::Last).is_err());
    }

    #[test]
    fn test_insert_remove_take() {
        let mut v = vec![1, 3];
        insert(&mut v, 1, 2).unwrap();
        assert_eq!(v, [1, 2, 3]);
        // Insertion at len is an append.
        insert(&mut v, 3, 4).unwrap();
        assert_eq!(v, [1, 2, 3, 4]);
        assert!(insert(&mut v, 6, 9).is_err());

        assert_eq!(take(&mut v, 0).unwrap(), 1);
        remove(&mut v, 2).unwrap();
        assert_eq!(v, [2, 3]);
        assert!(take(&mut v, 2).is_err());
    }

    #[test]
    fn test_edge_insert_take() {
        let mut v = vec![2];
        insert_edge(&mut v, Edge::First, 1).unwrap();
        insert_edge(&mut v, Edge::Last, 3).unwrap();
        assert_eq!(v, [1, 2, 3]);

        assert_eq!(take_edge(&mut v, Edge::Last).unwrap(), 3);
        remove_edge(&mut v, Edge::First).unwrap();
        assert_eq!(v, [2]);
    }

    #[test]
    fn test_get_range() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(get_range(&v, 1, 2).unwrap(), [2, 3]);
        assert_eq!(get_range(&v, 4, 0).unwrap(), Vec::<i32>::new());
        assert_eq!(range_param(get_range(&v, 1, 4).unwrap_err()), RangeParam::Count);
    }

    #[test]
    fn test_set_range() {
        let mut v = vec![1, 2, 3, 4];
        set_range(&mut v, 1, &[8, 9][..]).unwrap();
        assert_eq!(v, [1, 8, 9, 4]);
        // Source longer than the remaining window is a count violation.
        assert!(set_range(&mut v, 3, &[7, 7][..]).is_err());
    }

    #[test]
    fn test_insert_remove_take_range() {
        let mut v = vec![1, 5];
        insert_range(&mut v, 1, &[2, 3, 4][..]).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 5]);

        let taken = take_range(&mut v, 1, 2).unwrap();
        assert_eq!(taken, [2, 3]);
        assert_eq!(v, [1, 4, 5]);

        remove_range(&mut v, 0, 2).unwrap();
        assert_eq!(v, [5]);

        remove_range(&mut v, 1, 0).unwrap();
        assert_eq!(v, [5]);
    }

    #[test]
    fn test_replace_range_shorter_source_removes_excess() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        replace_range(&mut v, 2, 2, &['x'][..]).unwrap();
        assert_eq!(v, ['a', 'b', 'x', 'e']);
    }

    #[test]
    fn test_replace_range_longer_source_inserts_excess() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        replace_range(&mut v, 2, 2, &['x', 'y', 'z'][..]).unwrap();
        assert_eq!(v, ['a', 'b', 'x', 'y', 'z', 'e']);
    }

    #[test]
    fn test_replace_range_equal_lengths_is_a_set() {
        let mut v = vec![1, 2, 3];
        replace_range(&mut v, 0, 3, &[4, 5, 6][..]).unwrap();
        assert_eq!(v, [4, 5, 6]);
    }

    #[test]
    fn test_replace_range_empty_source_is_a_removal() {
        let mut v = vec![1, 2, 3];
        let empty: &[i32] = &[];
        replace_range(&mut v, 1, 2, empty).unwrap();
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_replace_range_empty_target_is_an_insertion() {
        let mut v = vec![1, 4];
        replace_range(&mut v, 1, 0, &[2, 3][..]).unwrap();
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn test_works_on_vecdeque() {
        use std::collections::VecDeque;
        let mut d: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
        insert(&mut d, 1, 9).unwrap();
        assert_eq!(take(&mut d, 1).unwrap(), 9);
        assert_eq!(d, [1, 2, 3]);
    }
}
