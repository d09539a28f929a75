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

//! Searching over ordered sequences.
//!
//! Binary search and interpolation search share one contract: the
//! searched range is already ordered consistently with the supplied
//! one-argument comparator (`FnMut(&T) -> Ordering`, comparing a
//! candidate against the implicit target), duplicates are resolved by a
//! [`SearchBias`], and a miss reports the insertion point through
//! [`SearchOutcome::InsertAt`]. Interpolation search replaces the
//! midpoint probe with a caller-supplied weight function over the
//! current bracket.
//!
//! [`insert_sorted`] builds on binary search to keep a
//! [`SequenceList`] ordered under insertion, optionally rejecting
//! duplicates.

use crate::error::{DuplicateKeyError, Error, InterpolationError};
use marline_core::range::{SeqRange, validate_range};
use marline_core::seq::{Sequence, SequenceList};
use num_traits::ToPrimitive;
use std::cmp::Ordering;

/// Tie-break policy when a search target matches multiple equal
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBias {
    /// Return any matching index. Cheapest: the search stops at the
    /// first probe that hits.
    #[default]
    Any,
    /// Return the first (lowest) matching index.
    First,
    /// Return the last (highest) matching index.
    Last,
}

/// The result of a search over an ordered range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The target was found at this index.
    Found(usize),
    /// The target is absent; inserting it at this index keeps the
    /// range ordered.
    InsertAt(usize),
}

impl SearchOutcome {
    /// Whether the target was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found index, or `None` on a miss.
    #[inline]
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(i) => Some(i),
            Self::InsertAt(_) => None,
        }
    }

    /// Collapses to the classic signed encoding: a found index maps to
    /// itself, a miss to the bitwise complement of the insertion point.
    ///
    /// # Example
    ///
    /// ```
    /// use marline_seq::search::SearchOutcome;
    ///
    /// assert_eq!(SearchOutcome::Found(2).encoded(), 2);
    /// assert_eq!(SearchOutcome::InsertAt(4).encoded(), !4);
    /// ```
    #[inline]
    pub fn encoded(self) -> isize {
        match self {
            Self::Found(i) => i as isize,
            Self::InsertAt(i) => !(i as isize),
        }
    }

    /// Rebuilds an outcome from the classic signed encoding.
    #[inline]
    pub fn from_encoded(raw: isize) -> Self {
        if raw >= 0 {
            Self::Found(raw as usize)
        } else {
            Self::InsertAt(!raw as usize)
        }
    }
}

fn binary_core<T, S, F>(seq: &S, range: SeqRange, bias: SearchBias, f: &mut F) -> SearchOutcome
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> Ordering,
{
    let mut lo = range.start();
    let mut hi = range.end();
    let mut hit = None;
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        match f(seq.get(mid)) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => match bias {
                SearchBias::Any => return SearchOutcome::Found(mid),
                SearchBias::First => {
                    hit = Some(mid);
                    hi = mid;
                }
                SearchBias::Last => {
                    hit = Some(mid);
                    lo = mid + 1;
                }
            },
        }
    }
    match hit {
        Some(i) => SearchOutcome::Found(i),
        None => SearchOutcome::InsertAt(lo),
    }
}

fn interpolation_core<T, S, F, W>(
    seq: &S,
    range: SeqRange,
    bias: SearchBias,
    f: &mut F,
    interp: &mut W,
) -> Result<SearchOutcome, Error>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> Ordering,
    W: FnMut(&T, &T) -> f64,
{
    let mut lo = range.start();
    let mut hi = range.end();
    let mut hit = None;
    while lo < hi {
        let span = hi - lo - 1;
        let probe = if span == 0 {
            lo
        } else {
            let weight = interp(seq.get(lo), seq.get(hi - 1));
            if !(0.0..=1.0).contains(&weight) {
                return Err(InterpolationError { weight }.into());
            }
            lo + (span as f64 * weight).floor() as usize
        };
        match f(seq.get(probe)) {
            Ordering::Less => lo = probe + 1,
            Ordering::Greater => hi = probe,
            Ordering::Equal => match bias {
                SearchBias::Any => return Ok(SearchOutcome::Found(probe)),
                SearchBias::First => {
                    hit = Some(probe);
                    hi = probe;
                }
                SearchBias::Last => {
                    hit = Some(probe);
                    lo = probe + 1;
                }
            },
        }
    }
    Ok(match hit {
        Some(i) => SearchOutcome::Found(i),
        None => SearchOutcome::InsertAt(lo),
    })
}

/// Binary search for `target` over the whole sequence using the natural
/// ordering of `T`.
///
/// The sequence must already be ordered by that ordering.
///
/// # Example
///
/// ```
/// use marline_seq::search::{SearchBias, SearchOutcome, binary_search};
///
/// let v = vec![1, 3, 3, 3, 5];
/// assert_eq!(binary_search(&v, &3, SearchBias::First), SearchOutcome::Found(1));
/// assert_eq!(binary_search(&v, &3, SearchBias::Last), SearchOutcome::Found(3));
/// assert_eq!(binary_search(&v, &4, SearchBias::Any), SearchOutcome::InsertAt(4));
/// ```
pub fn binary_search<T, S>(seq: &S, target: &T, bias: SearchBias) -> SearchOutcome
where
    T: Ord,
    S: Sequence<T> + ?Sized,
{
    binary_core(seq, SeqRange::full(seq.len()), bias, &mut |probe: &T| {
        probe.cmp(target)
    })
}

/// Binary search over the whole sequence with a one-argument comparator
/// that orders a candidate against the implicit target.
pub fn binary_search_by<T, S, F>(seq: &S, bias: SearchBias, mut f: F) -> SearchOutcome
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> Ordering,
{
    binary_core(seq, SeqRange::full(seq.len()), bias, &mut f)
}

/// Binary search over `seq[index .. index + count]`.
///
/// A miss reports the insertion point in whole-sequence coordinates,
/// bounded by the searched window.
pub fn binary_search_range_by<T, S, F>(
    seq: &S,
    index: usize,
    count: usize,
    bias: SearchBias,
    mut f: F,
) -> Result<SearchOutcome, Error>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> Ordering,
{
    let range = validate_range(seq.len(), index, count)?;
    Ok(binary_core(seq, range, bias, &mut f))
}

/// Interpolation search over the whole sequence.
///
/// Instead of probing the midpoint, each step probes
/// `lower + floor(span * weight)` where
/// `weight = interp(&seq[lower], &seq[upper])` over the current
/// bracket. A weight outside `[0, 1]` means `interp` is unsound for
/// the data and fails the call with [`Error::Interpolation`].
pub fn interpolation_search_by<T, S, F, W>(
    seq: &S,
    bias: SearchBias,
    mut f: F,
    mut interp: W,
) -> Result<SearchOutcome, Error>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> Ordering,
    W: FnMut(&T, &T) -> f64,
{
    interpolation_core(seq, SeqRange::full(seq.len()), bias, &mut f, &mut interp)
}

/// Interpolation search over `seq[index .. index + count]`.
pub fn interpolation_search_range_by<T, S, F, W>(
    seq: &S,
    index: usize,
    count: usize,
    bias: SearchBias,
    mut f: F,
    mut interp: W,
) -> Result<SearchOutcome, Error>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> Ordering,
    W: FnMut(&T, &T) -> f64,
{
    let range = validate_range(seq.len(), index, count)?;
    interpolation_core(seq, range, bias, &mut f, &mut interp)
}

/// Linear interpolation weight for numeric keys, for use with the
/// interpolation searches.
///
/// Estimates where `target` sits between the bracket endpoints,
/// clamped to the unit interval. Falls back to the midpoint when an
/// endpoint or the target cannot be represented as `f64`, or when the
/// bracket has no width.
pub fn linear_weight<T>(target: T) -> impl FnMut(&T, &T) -> f64
where
    T: ToPrimitive + Copy,
{
    move |low, high| match (low.to_f64(), high.to_f64(), target.to_f64()) {
        (Some(lo), Some(hi), Some(t)) if hi > lo => ((t - lo) / (hi - lo)).clamp(0.0, 1.0),
        _ => 0.5,
    }
}

/// Duplicate policy for [`insert_sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnDuplicate {
    /// Insert next to existing equal elements.
    #[default]
    Allow,
    /// Fail with [`Error::DuplicateKey`] if an equal element exists,
    /// leaving the sequence untouched.
    Reject,
}

/// Inserts `value` into an ordered sequence, keeping it ordered, and
/// returns the index it landed at.
///
/// With [`OnDuplicate::Allow`] the value is inserted after any existing
/// run of equal elements.
pub fn insert_sorted<T, S>(seq: &mut S, value: T, on_duplicate: OnDuplicate) -> Result<usize, Error>
where
    T: Ord,
    S: SequenceList<T> + ?Sized,
{
    insert_sorted_by(seq, value, on_duplicate, T::cmp)
}

/// Inserts `value` into a sequence ordered by `cmp`, keeping it
/// ordered, and returns the index it landed at.
pub fn insert_sorted_by<T, S, F>(
    seq: &mut S,
    value: T,
    on_duplicate: OnDuplicate,
    mut cmp: F,
) -> Result<usize, Error>
where
    S: SequenceList<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let range = SeqRange::full(seq.len());
    let bias = match on_duplicate {
        OnDuplicate::Allow => SearchBias::Last,
        OnDuplicate::Reject => SearchBias::Any,
    };
    let outcome = binary_core(seq, range, bias, &mut |probe: &T| cmp(probe, &value));
    let at = match (outcome, on_duplicate) {
        (SearchOutcome::Found(i), OnDuplicate::Reject) => {
            return Err(DuplicateKeyError { index: i }.into());
        }
        (SearchOutcome::Found(i), OnDuplicate::Allow) => i + 1,
        (SearchOutcome::InsertAt(i), _) => i,
    };
    seq.insert(at, value);
    Ok(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marline_core::range::RangeParam;

    #[test]
    fn test_binary_search_tie_breaks() {
        let v = vec![1, 3, 3, 3, 5];
        assert_eq!(binary_search(&v, &3, SearchBias::First), SearchOutcome::Found(1));
        assert_eq!(binary_search(&v, &3, SearchBias::Last), SearchOutcome::Found(3));
        match binary_search(&v, &3, SearchBias::Any) {
            SearchOutcome::Found(i) => assert!((1..=3).contains(&i)),
            miss => panic!("expected a hit, got {miss:?}"),
        }
    }

    #[test]
    fn test_binary_search_miss_reports_insertion_point() {
        let v = vec![1, 3, 3, 3, 5];
        let miss = binary_search(&v, &4, SearchBias::Any);
        assert_eq!(miss, SearchOutcome::InsertAt(4));
        assert_eq!(miss.encoded(), !4);

        assert_eq!(binary_search(&v, &0, SearchBias::Any), SearchOutcome::InsertAt(0));
        assert_eq!(binary_search(&v, &9, SearchBias::Any), SearchOutcome::InsertAt(5));
    }

    #[test]
    fn test_binary_search_empty_sequence() {
        let v: Vec<i32> = vec![];
        assert_eq!(binary_search(&v, &1, SearchBias::Any), SearchOutcome::InsertAt(0));
    }

    #[test]
    fn test_encoded_round_trip() {
        for outcome in [SearchOutcome::Found(0), SearchOutcome::Found(7), SearchOutcome::InsertAt(0), SearchOutcome::InsertAt(12)] {
            assert_eq!(SearchOutcome::from_encoded(outcome.encoded()), outcome);
        }
    }

    #[test]
    fn test_binary_search_by_comparator() {
        let v = vec![(1, 'a'), (2, 'b'), (3, 'c')];
        let hit = binary_search_by(&v, SearchBias::Any, |probe| probe.0.cmp(&2));
        assert_eq!(hit, SearchOutcome::Found(1));
    }

    #[test]
    fn test_binary_search_range_by_stays_in_window() {
        let v = vec![9, 1, 2, 3, 9];
        let hit = binary_search_range_by(&v, 1, 3, SearchBias::Any, |p| p.cmp(&2)).unwrap();
        assert_eq!(hit, SearchOutcome::Found(2));

        // Insertion points land inside the window, in whole-sequence
        // coordinates.
        let miss = binary_search_range_by(&v, 1, 3, SearchBias::Any, |p| p.cmp(&4)).unwrap();
        assert_eq!(miss, SearchOutcome::InsertAt(4));
    }

    #[test]
    fn test_binary_search_range_by_rejects_bad_window() {
        let v = vec![1, 2, 3];
        let err = binary_search_range_by(&v, 2, 4, SearchBias::Any, |p| p.cmp(&1)).unwrap_err();
        match err {
            Error::Range(inner) => assert_eq!(inner.param(), RangeParam::Count),
            other => panic!("expected a range violation, got {other:?}"),
        }
    }

    #[test]
    fn test_interpolation_search_linear_keys() {
        let v: Vec<u64> = (0..100).map(|i| i * 10).collect();
        for target in [0u64, 130, 500, 990] {
            let hit = interpolation_search_by(
                &v,
                SearchBias::Any,
                |p| p.cmp(&target),
                linear_weight(target),
            )
            .unwrap();
            assert_eq!(hit, SearchOutcome::Found((target / 10) as usize));
        }

        let miss = interpolation_search_by(
            &v,
            SearchBias::Any,
            |p| p.cmp(&15),
            linear_weight(15u64),
        )
        .unwrap();
        assert_eq!(miss, SearchOutcome::InsertAt(2));
    }

    #[test]
    fn test_interpolation_search_tie_breaks() {
        let v = vec![1u32, 3, 3, 3, 5];
        let first = interpolation_search_by(&v, SearchBias::First, |p| p.cmp(&3), linear_weight(3u32)).unwrap();
        assert_eq!(first, SearchOutcome::Found(1));
        let last = interpolation_search_by(&v, SearchBias::Last, |p| p.cmp(&3), linear_weight(3u32)).unwrap();
        assert_eq!(last, SearchOutcome::Found(3));
    }

    #[test]
    fn test_interpolation_search_rejects_unsound_weight() {
        let v = vec![1, 2, 3, 4];
        let err = interpolation_search_by(&v, SearchBias::Any, |p| p.cmp(&3), |_, _| 1.5).unwrap_err();
        match err {
            Error::Interpolation(inner) => assert_eq!(inner.weight, 1.5),
            other => panic!("expected an operation failure, got {other:?}"),
        }

        let err = interpolation_search_by(&v, SearchBias::Any, |p| p.cmp(&3), |_, _| -0.1).unwrap_err();
        assert!(matches!(err, Error::Interpolation(_)));
    }

    #[test]
    fn test_linear_weight_degenerate_bracket() {
        let mut w = linear_weight(5u32);
        // Equal endpoints give no slope to interpolate on.
        assert_eq!(w(&5, &5), 0.5);
        // Out-of-bracket targets clamp instead of escaping the window.
        assert_eq!(w(&10, &20), 0.0);
        assert_eq!(w(&0, &2), 1.0);
    }

    #[test]
    fn test_insert_sorted_allow() {
        let mut v = vec![1, 3, 5];
        assert_eq!(insert_sorted(&mut v, 4, OnDuplicate::Allow).unwrap(), 2);
        assert_eq!(v, vec![1, 3, 4, 5]);

        // Duplicates land after the existing run of equal elements.
        assert_eq!(insert_sorted(&mut v, 3, OnDuplicate::Allow).unwrap(), 2);
        assert_eq!(v, vec![1, 3, 3, 4, 5]);
    }

    #[test]
    fn test_insert_sorted_reject_leaves_sequence_untouched() {
        let mut v = vec![1, 3, 5];
        let err = insert_sorted(&mut v, 3, OnDuplicate::Reject).unwrap_err();
        match err {
            Error::DuplicateKey(inner) => assert_eq!(inner.index, 1),
            other => panic!("expected a duplicate rejection, got {other:?}"),
        }
        assert_eq!(v, vec![1, 3, 5]);

        assert_eq!(insert_sorted(&mut v, 4, OnDuplicate::Reject).unwrap(), 2);
        assert_eq!(v, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_insert_sorted_by_descending() {
        let mut v = vec![9, 7, 5];
        let at = insert_sorted_by(&mut v, 8, OnDuplicate::Allow, |a, b| b.cmp(a)).unwrap();
        assert_eq!(at, 1);
        assert_eq!(v, vec![9, 8, 7, 5]);
    }

    #[test]
    fn test_insert_sorted_into_empty() {
        let mut v: Vec<i32> = vec![];
        assert_eq!(insert_sorted(&mut v, 1, OnDuplicate::Reject).unwrap(), 0);
        assert_eq!(v, vec![1]);
    }
}
