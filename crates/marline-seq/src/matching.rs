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

//! Subsequence matching and whole-sequence comparison.
//!
//! The find family locates a pattern inside a haystack window by
//! per-element equality (`FnMut(&T, &P) -> bool`, so the pattern may be
//! a different element type or a sequence of predicates), forward or
//! from the end. Partial mode additionally reports a pattern fragment
//! matching flush against the window boundary: a pattern *prefix* at
//! the window end for forward searches, a pattern *suffix* at the
//! window start for backward ones. Callers that stream data through a
//! fixed window use the partial length to resume scanning.
//!
//! [`compare_seqs`] and [`seqs_equal`] round out the module with
//! three-way comparison under a configurable [`EmptyOrder`] and a
//! length-fast-path equality test.

use crate::error::Error;
use marline_core::range::{SeqRange, validate_range};
use marline_core::seq::Sequence;
use std::cmp::Ordering;

/// The result of a subsequence search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// The whole pattern matched starting at this haystack index.
    Found(usize),
    /// No full match; this many pattern elements matched flush against
    /// the window boundary. `Partial(0)` means no match at all.
    Partial(usize),
}

impl FindOutcome {
    /// Whether the whole pattern was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The full-match index, or `None`.
    #[inline]
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(i) => Some(i),
            Self::Partial(_) => None,
        }
    }

    /// Collapses to the classic signed encoding: a found index maps to
    /// itself, a partial match of length `k` to `-k - 1` (so "no match
    /// at all" is `-1`).
    #[inline]
    pub fn encoded(self) -> isize {
        match self {
            Self::Found(i) => i as isize,
            Self::Partial(k) => -(k as isize) - 1,
        }
    }

    /// Rebuilds an outcome from the classic signed encoding.
    #[inline]
    pub fn from_encoded(raw: isize) -> Self {
        if raw >= 0 {
            Self::Found(raw as usize)
        } else {
            Self::Partial((-raw - 1) as usize)
        }
    }
}

fn find_core<T, P, H, N, F>(
    hay: &H,
    range: SeqRange,
    needle: &N,
    partial: bool,
    eq: &mut F,
) -> FindOutcome
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    let m = needle.len();
    let (start, end) = (range.start(), range.end());
    if m == 0 {
        return FindOutcome::Found(start);
    }
    if m <= range.len() {
        for i in start..=end - m {
            if (0..m).all(|j| eq(hay.get(i + j), needle.get(j))) {
                return FindOutcome::Found(i);
            }
        }
    }
    if partial {
        // A pattern prefix running off the window end. The leftmost
        // surviving position gives the longest partial.
        let first = if m <= range.len() { end - m + 1 } else { start };
        for i in first..end {
            let k = end - i;
            if (0..k).all(|j| eq(hay.get(i + j), needle.get(j))) {
                return FindOutcome::Partial(k);
            }
        }
    }
    FindOutcome::Partial(0)
}

fn find_last_core<T, P, H, N, F>(
    hay: &H,
    range: SeqRange,
    needle: &N,
    partial: bool,
    eq: &mut F,
) -> FindOutcome
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    let m = needle.len();
    let (start, end) = (range.start(), range.end());
    if m == 0 {
        return FindOutcome::Found(end);
    }
    if m <= range.len() {
        for i in (start..=end - m).rev() {
            if (0..m).all(|j| eq(hay.get(i + j), needle.get(j))) {
                return FindOutcome::Found(i);
            }
        }
    }
    if partial {
        // A pattern suffix running off the window start, longest first.
        let upper = (m - 1).min(range.len());
        for k in (1..=upper).rev() {
            if (0..k).all(|j| eq(hay.get(start + j), needle.get(m - k + j))) {
                return FindOutcome::Partial(k);
            }
        }
    }
    FindOutcome::Partial(0)
}

/// Finds the first occurrence of `needle` in `hay` by natural equality.
///
/// # Example
///
/// ```
/// use marline_seq::matching::{FindOutcome, find_seq};
///
/// let hay = vec![5, 1, 2, 3, 1, 2];
/// assert_eq!(find_seq(&hay, &[1, 2][..]), FindOutcome::Found(1));
/// assert_eq!(find_seq(&hay, &[7][..]), FindOutcome::Partial(0));
/// ```
pub fn find_seq<T, H, N>(hay: &H, needle: &N) -> FindOutcome
where
    T: PartialEq,
    H: Sequence<T> + ?Sized,
    N: Sequence<T> + ?Sized,
{
    find_core(hay, SeqRange::full(hay.len()), needle, false, &mut |a: &T,
                                                                   b: &T| {
        a == b
    })
}

/// Finds the first occurrence of `needle` in `hay` under `eq`.
pub fn find_seq_by<T, P, H, N, F>(hay: &H, needle: &N, mut eq: F) -> FindOutcome
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    find_core(hay, SeqRange::full(hay.len()), needle, false, &mut eq)
}

/// Like [`find_seq_by`], but a pattern prefix matching flush against
/// the end of `hay` is reported as [`FindOutcome::Partial`].
pub fn find_seq_partial_by<T, P, H, N, F>(hay: &H, needle: &N, mut eq: F) -> FindOutcome
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    find_core(hay, SeqRange::full(hay.len()), needle, true, &mut eq)
}

/// Forward subsequence search restricted to `hay[index .. index + count]`.
pub fn find_seq_range_by<T, P, H, N, F>(
    hay: &H,
    index: usize,
    count: usize,
    needle: &N,
    partial: bool,
    mut eq: F,
) -> Result<FindOutcome, Error>
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    let range = validate_range(hay.len(), index, count)?;
    Ok(find_core(hay, range, needle, partial, &mut eq))
}

/// Finds the last occurrence of `needle` in `hay` by natural equality.
pub fn find_seq_last<T, H, N>(hay: &H, needle: &N) -> FindOutcome
where
    T: PartialEq,
    H: Sequence<T> + ?Sized,
    N: Sequence<T> + ?Sized,
{
    find_last_core(hay, SeqRange::full(hay.len()), needle, false, &mut |a: &T,
                                                                        b: &T| {
        a == b
    })
}

/// Finds the last occurrence of `needle` in `hay` under `eq`.
pub fn find_seq_last_by<T, P, H, N, F>(hay: &H, needle: &N, mut eq: F) -> FindOutcome
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    find_last_core(hay, SeqRange::full(hay.len()), needle, false, &mut eq)
}

/// Like [`find_seq_last_by`], but a pattern suffix matching flush
/// against the start of `hay` is reported as [`FindOutcome::Partial`].
pub fn find_seq_last_partial_by<T, P, H, N, F>(hay: &H, needle: &N, mut eq: F) -> FindOutcome
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    find_last_core(hay, SeqRange::full(hay.len()), needle, true, &mut eq)
}

/// Backward subsequence search restricted to `hay[index .. index + count]`.
pub fn find_seq_last_range_by<T, P, H, N, F>(
    hay: &H,
    index: usize,
    count: usize,
    needle: &N,
    partial: bool,
    mut eq: F,
) -> Result<FindOutcome, Error>
where
    H: Sequence<T> + ?Sized,
    N: Sequence<P> + ?Sized,
    F: FnMut(&T, &P) -> bool,
{
    let range = validate_range(hay.len(), index, count)?;
    Ok(find_last_core(hay, range, needle, partial, &mut eq))
}

/// Ordering policy when one sequence is a strict prefix of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyOrder {
    /// The shorter sequence orders lower. This is the common
    /// lexicographic convention.
    #[default]
    Lesser,
    /// The shorter sequence orders higher.
    Greater,
}

/// Three-way comparison of two sequences by natural element ordering.
///
/// Elements are compared pairwise until a mismatch or either sequence
/// ends; a strict prefix is ordered by `empty_order`.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use marline_seq::matching::{EmptyOrder, compare_seqs};
///
/// let a = vec![1, 2];
/// let b = vec![1, 2, 3];
/// assert_eq!(compare_seqs(&a, &b, EmptyOrder::Lesser), Ordering::Less);
/// assert_eq!(compare_seqs(&a, &b, EmptyOrder::Greater), Ordering::Greater);
/// ```
pub fn compare_seqs<T, A, B>(a: &A, b: &B, empty_order: EmptyOrder) -> Ordering
where
    T: Ord,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    compare_seqs_by(a, b, empty_order, T::cmp)
}

/// Three-way comparison of two sequences under `cmp`.
pub fn compare_seqs_by<T, U, A, B, F>(a: &A, b: &B, empty_order: EmptyOrder, mut cmp: F) -> Ordering
where
    A: Sequence<T> + ?Sized,
    B: Sequence<U> + ?Sized,
    F: FnMut(&T, &U) -> Ordering,
{
    let common = a.len().min(b.len());
    for i in 0..common {
        match cmp(a.get(i), b.get(i)) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    let by_length = a.len().cmp(&b.len());
    match empty_order {
        EmptyOrder::Lesser => by_length,
        EmptyOrder::Greater => by_length.reverse(),
    }
}

/// Whether two sequences are equal by natural element equality.
///
/// Unequal lengths reject without touching any element.
pub fn seqs_equal<T, U, A, B>(a: &A, b: &B) -> bool
where
    T: PartialEq<U>,
    A: Sequence<T> + ?Sized,
    B: Sequence<U> + ?Sized,
{
    seqs_equal_by(a, b, |x: &T, y: &U| x == y)
}

/// Whether two sequences are equal under `eq`.
pub fn seqs_equal_by<T, U, A, B, F>(a: &A, b: &B, mut eq: F) -> bool
where
    A: Sequence<T> + ?Sized,
    B: Sequence<U> + ?Sized,
    F: FnMut(&T, &U) -> bool,
{
    if a.len() != b.len() {
        return false;
    }
    (0..a.len()).all(|i| eq(a.get(i), b.get(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marline_core::range::RangeParam;

    #[test]
    fn test_find_seq_first_occurrence() {
        let hay = vec![5, 1, 2, 3, 1, 2];
        assert_eq!(find_seq(&hay, &[1, 2][..]), FindOutcome::Found(1));
        assert_eq!(find_seq(&hay, &[3, 1][..]), FindOutcome::Found(3));
        assert_eq!(find_seq(&hay, &[9][..]), FindOutcome::Partial(0));
    }

    #[test]
    fn test_find_seq_last_occurrence() {
        let hay = vec![5, 1, 2, 3, 1, 2];
        assert_eq!(find_seq_last(&hay, &[1, 2][..]), FindOutcome::Found(4));
        assert_eq!(find_seq_last(&hay, &[5][..]), FindOutcome::Found(0));
    }

    #[test]
    fn test_find_seq_empty_pattern() {
        let hay = vec![1, 2, 3];
        assert_eq!(find_seq(&hay, &[][..]), FindOutcome::Found(0));
        assert_eq!(find_seq_last(&hay, &[][..]), FindOutcome::Found(3));
    }

    #[test]
    fn test_find_seq_partial_at_end() {
        // The pattern begins at index 4 but runs off the haystack.
        let hay = vec![0, 0, 0, 0, 7, 8];
        let outcome = find_seq_partial_by(&hay, &[7, 8, 9][..], |a, b| a == b);
        assert_eq!(outcome, FindOutcome::Partial(2));
        assert_eq!(outcome.encoded(), -3);

        // Without partial mode the same search is a plain miss.
        let outcome = find_seq_by(&hay, &[7, 8, 9][..], |a, b| a == b);
        assert_eq!(outcome, FindOutcome::Partial(0));
        assert_eq!(outcome.encoded(), -1);
    }

    #[test]
    fn test_find_seq_partial_prefers_full_match() {
        let hay = vec![7, 8, 9, 7, 8];
        let outcome = find_seq_partial_by(&hay, &[7, 8, 9][..], |a, b| a == b);
        assert_eq!(outcome, FindOutcome::Found(0));
    }

    #[test]
    fn test_find_seq_last_partial_at_start() {
        // The tail of the pattern hangs over the haystack start.
        let hay = vec![8, 9, 0, 0, 0];
        let outcome = find_seq_last_partial_by(&hay, &[7, 8, 9][..], |a, b| a == b);
        assert_eq!(outcome, FindOutcome::Partial(2));
    }

    #[test]
    fn test_find_seq_pattern_longer_than_haystack() {
        let hay = vec![1, 2];
        assert_eq!(find_seq(&hay, &[1, 2, 3][..]), FindOutcome::Partial(0));
        let outcome = find_seq_partial_by(&hay, &[1, 2, 3][..], |a, b| a == b);
        assert_eq!(outcome, FindOutcome::Partial(2));
    }

    #[test]
    fn test_find_seq_range_by_windows() {
        let hay = vec![1, 2, 1, 2, 1, 2];
        let hit = find_seq_range_by(&hay, 2, 4, &[1, 2][..], false, |a, b| a == b).unwrap();
        assert_eq!(hit, FindOutcome::Found(2));

        // Partial mode stops the pattern at the window edge, not the
        // sequence edge.
        let partial = find_seq_range_by(&hay, 0, 3, &[2, 1, 9][..], true, |a, b| a == b).unwrap();
        assert_eq!(partial, FindOutcome::Partial(2));

        let err = find_seq_range_by(&hay, 4, 5, &[1][..], false, |a: &i32, b: &i32| a == b)
            .unwrap_err();
        match err {
            Error::Range(inner) => assert_eq!(inner.param(), RangeParam::Count),
            other => panic!("expected a range violation, got {other:?}"),
        }
    }

    #[test]
    fn test_find_seq_last_range_by() {
        let hay = vec![1, 2, 1, 2, 1, 2];
        let hit = find_seq_last_range_by(&hay, 0, 4, &[1, 2][..], false, |a, b| a == b).unwrap();
        assert_eq!(hit, FindOutcome::Found(2));
    }

    #[test]
    fn test_find_seq_by_predicate_pattern() {
        // The pattern can be a sequence of predicates.
        let hay = vec![1, 4, 6, 3];
        let pattern: Vec<fn(&i32) -> bool> = vec![|x| x % 2 == 0, |x| x % 2 == 0];
        let outcome = find_seq_by(&hay, &pattern, |elem, pred| pred(elem));
        assert_eq!(outcome, FindOutcome::Found(1));
    }

    #[test]
    fn test_find_outcome_encoding_round_trip() {
        for outcome in [
            FindOutcome::Found(0),
            FindOutcome::Found(9),
            FindOutcome::Partial(0),
            FindOutcome::Partial(3),
        ] {
            assert_eq!(FindOutcome::from_encoded(outcome.encoded()), outcome);
        }
    }

    #[test]
    fn test_compare_seqs_prefix_policies() {
        let a = vec![1, 2];
        let b = vec![1, 2, 3];
        assert_eq!(compare_seqs(&a, &b, EmptyOrder::Lesser), Ordering::Less);
        assert_eq!(compare_seqs(&a, &b, EmptyOrder::Greater), Ordering::Greater);
        assert_eq!(compare_seqs(&b, &a, EmptyOrder::Lesser), Ordering::Greater);
    }

    #[test]
    fn test_compare_seqs_mismatch_wins_over_length() {
        let a = vec![1, 9];
        let b = vec![1, 2, 3];
        assert_eq!(compare_seqs(&a, &b, EmptyOrder::Lesser), Ordering::Greater);
        assert_eq!(compare_seqs(&a, &b, EmptyOrder::Greater), Ordering::Greater);
    }

    #[test]
    fn test_compare_seqs_equal() {
        let a = vec![1, 2, 3];
        assert_eq!(compare_seqs(&a, &a, EmptyOrder::Lesser), Ordering::Equal);
        let empty: Vec<i32> = vec![];
        assert_eq!(compare_seqs(&empty, &empty, EmptyOrder::Greater), Ordering::Equal);
    }

    #[test]
    fn test_compare_seqs_by_custom_ordering() {
        let a = vec!["bb", "a"];
        let b = vec!["cc", "a"];
        let by_len = compare_seqs_by(&a, &b, EmptyOrder::Lesser, |x: &&str, y: &&str| {
            x.len().cmp(&y.len())
        });
        assert_eq!(by_len, Ordering::Equal);
    }

    #[test]
    fn test_seqs_equal_fast_path_and_elements() {
        let a = vec![1, 2, 3];
        let b = vec![1, 2, 3];
        assert!(seqs_equal(&a, &b));
        assert!(!seqs_equal(&a, &vec![1, 2]));
        assert!(!seqs_equal(&a, &vec![1, 2, 4]));

        let empty: Vec<i32> = vec![];
        assert!(seqs_equal(&empty, &empty));
    }

    #[test]
    fn test_seqs_equal_by_case_insensitive() {
        let a = vec!["Ab", "CD"];
        let b = vec!["ab", "cd"];
        assert!(seqs_equal_by(&a, &b, |x: &&str, y: &&str| {
            x.eq_ignore_ascii_case(y)
        }));
    }
}
