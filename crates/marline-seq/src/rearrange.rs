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

//! Rearrangement primitives.
//!
//! Single-element moves, pairwise and range swaps, block rotation, and
//! reversal: everything that permutes a sequence without changing its
//! length.
//!
//! [`swap_ranges`] is the hardest primitive here: it exchanges two
//! disjoint, possibly unequal-length runs while preserving every other
//! element's position, in O(n) time with a scratch buffer bounded by the
//! *length difference* of the two runs, never the full range.

use crate::error::Error;
use marline_core::range::{
    RangeError, RangeParam, SeqRange, validate_index, validate_range, validate_range_named,
    validate_swap_gap,
};
use marline_core::scratch::Scratch;
use marline_core::seq::{Sequence, SequenceMut};

/// Moves the element at `from` to position `to`, shifting the run between
/// the two indices by one slot to close the gap.
///
/// This is a single-element rotate, not a swap: every element between
/// `from` and `to` keeps its relative order.
///
/// # Examples
///
/// ```rust
/// use marline_seq::rearrange::move_item;
///
/// let mut v = vec![1, 2, 3, 4, 5];
/// move_item(&mut v, 0, 3).unwrap();
/// assert_eq!(v, [2, 3, 4, 1, 5]);
///
/// move_item(&mut v, 3, 0).unwrap();
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn move_item<T, S>(seq: &mut S, from: usize, to: usize) -> Result<(), Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let from = validate_index(seq.len(), from, RangeParam::SourceIndex)?;
    let to = validate_index(seq.len(), to, RangeParam::DestinationIndex)?;
    if from < to {
        for i in from..to {
            seq.swap(i, i + 1);
        }
    } else {
        for i in (to..from).rev() {
            seq.swap(i, i + 1);
        }
    }
    Ok(())
}

/// Moves the `count`-length block starting at `from` so it begins at `to`,
/// shifting the intervening elements to fill the gap.
///
/// The block is staged in a scratch buffer of exactly `count` elements;
/// `to` addresses the block's final position.
pub fn move_range<T, S>(seq: &mut S, from: usize, to: usize, count: usize) -> Result<(), Error>
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
{
    let len = seq.len();
    validate_range_named(len, from, count, RangeParam::SourceIndex, RangeParam::Count)?;
    validate_range_named(
        len,
        to,
        count,
        RangeParam::DestinationIndex,
        RangeParam::Count,
    )?;
    if from == to || count == 0 {
        return Ok(());
    }

    let block = Scratch::from_seq(seq, SeqRange::new_unchecked(from, count));
    if from < to {
        for i in from..to {
            let v = seq.get(i + count).clone();
            seq.set(i, v);
        }
    } else {
        for i in (to..from).rev() {
            let v = seq.get(i).clone();
            seq.set(i + count, v);
        }
    }
    for (k, v) in block.as_slice().iter().enumerate() {
        seq.set(to + k, v.clone());
    }
    Ok(())
}

/// Exchanges the elements at `i` and `j`. No-op when `i == j`.
pub fn swap<T, S>(seq: &mut S, i: usize, j: usize) -> Result<(), Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let i = validate_index(seq.len(), i, RangeParam::Index)?;
    let j = validate_index(seq.len(), j, RangeParam::TargetIndex)?;
    if i != j {
        seq.swap(i, j);
    }
    Ok(())
}

/// Exchanges two disjoint equal-length runs element by element.
///
/// Requires `count < |y - x|`: the runs must not overlap, and the strict
/// inequality also rejects exactly-adjacent runs. Use [`swap_ranges`] to
/// exchange adjacent runs.
pub fn swap_range<T, S>(seq: &mut S, x: usize, y: usize, count: usize) -> Result<(), Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let len = seq.len();
    validate_range_named(len, x, count, RangeParam::SourceIndex, RangeParam::Count)?;
    validate_range_named(len, y, count, RangeParam::TargetIndex, RangeParam::Count)?;
    validate_swap_gap(x, y, count)?;
    for k in 0..count {
        seq.swap(x + k, y + k);
    }
    Ok(())
}

/// Exchanges two disjoint, possibly unequal-length runs while preserving
/// every other element's position.
///
/// The overlapping prefix of length `min(x_count, y_count)` is swapped
/// pairwise; the excess tail of the longer run is staged in a scratch
/// buffer of exactly `|x_count - y_count|` elements, the elements between
/// the runs slide to close the gap, and the scratch is written back flush
/// after the relocated shorter run. O(n) time, scratch bounded by the
/// length difference.
///
/// # Examples
///
/// ```rust
/// use marline_seq::rearrange::swap_ranges;
///
/// let mut v = vec![1, 2, 3, 4, 5, 6, 7];
/// // Exchange [1, 2] and [5, 6, 7].
/// swap_ranges(&mut v, 0, 2, 4, 3).unwrap();
/// assert_eq!(v, [5, 6, 7, 3, 4, 1, 2]);
/// ```
pub fn swap_ranges<T, S>(
    seq: &mut S,
    x: usize,
    x_count: usize,
    y: usize,
    y_count: usize,
) -> Result<(), Error>
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
{
    let len = seq.len();
    validate_range_named(len, x, x_count, RangeParam::SourceIndex, RangeParam::Count)?;
    validate_range_named(len, y, y_count, RangeParam::TargetIndex, RangeParam::Count)?;

    let (lo, lo_count, hi, hi_count) = if x <= y {
        (x, x_count, y, y_count)
    } else {
        (y, y_count, x, x_count)
    };
    if lo + lo_count > hi {
        return Err(RangeError::new(RangeParam::Count, lo_count, hi - lo).into());
    }

    let common = lo_count.min(hi_count);
    for k in 0..common {
        seq.swap(lo + k, hi + k);
    }
    if lo_count == hi_count {
        return Ok(());
    }

    let diff = lo_count.abs_diff(hi_count);
    if lo_count > hi_count {
        // Lower run is longer: stage its excess tail, slide everything up
        // to the end of the upper run left, put the tail back at the end.
        let tail = Scratch::from_seq(seq, SeqRange::new_unchecked(lo + hi_count, diff));
        for i in (lo + lo_count)..(hi + hi_count) {
            let v = seq.get(i).clone();
            seq.set(i - diff, v);
        }
        for (k, v) in tail.as_slice().iter().enumerate() {
            seq.set(hi + hi_count - diff + k, v.clone());
        }
    } else {
        // Upper run is longer: stage its excess tail, slide everything
        // from the end of the lower run right, put the tail back flush
        // after the relocated lower block.
        let tail = Scratch::from_seq(seq, SeqRange::new_unchecked(hi + lo_count, diff));
        for i in ((lo + lo_count)..(hi + lo_count)).rev() {
            let v = seq.get(i).clone();
            seq.set(i + diff, v);
        }
        for (k, v) in tail.as_slice().iter().enumerate() {
            seq.set(lo + lo_count + k, v.clone());
        }
    }
    Ok(())
}

/// Reverses `seq[index .. index + count]` with symmetric pairwise swaps.
pub fn reverse<T, S>(seq: &mut S, index: usize, count: usize) -> Result<(), Error>
where
    S: SequenceMut<T> + ?Sized,
{
    let range = validate_range(seq.len(), index, count)?;
    reverse_core(seq, range);
    Ok(())
}

/// Reverses the whole sequence.
pub fn reverse_all<T, S>(seq: &mut S)
where
    S: SequenceMut<T> + ?Sized,
{
    reverse_core(seq, SeqRange::full(seq.len()));
}

fn reverse_core<T, S>(seq: &mut S, range: SeqRange)
where
    S: SequenceMut<T> + ?Sized,
{
    let mut i = range.start();
    let mut j = range.end();
    while j.saturating_sub(i) > 1 {
        j -= 1;
        seq.swap(i, j);
        i += 1;
    }
}
