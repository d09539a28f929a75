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

//! Merge sort.
//!
//! Bottom-up: merges sorted runs of doubling width until one run covers
//! the whole range. Each merge copies its span into a [`Scratch`] buffer
//! and writes the merged result back, so elements must be `Clone` and the
//! sort takes O(n) auxiliary space for O(n log n) comparisons on every
//! input. Stable; ties are taken from the left run.

use crate::error::Error;
use crate::sort::{sort_family, validated_pair_full, validated_pair_range, validated_range};
use marline_core::range::SeqRange;
use marline_core::scratch::Scratch;
use marline_core::seq::{Sequence, SequenceMut};
use std::cmp::Ordering;

fn sort_core<T, S, F>(seq: &mut S, range: SeqRange, cmp: &mut F)
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = range.len();
    let base = range.start();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let mid = lo + width;
            let hi = usize::min(lo + 2 * width, n);
            merge_span(seq, base + lo, base + mid, base + hi, cmp);
            lo += 2 * width;
        }
        width *= 2;
    }
}

/// Merges the sorted runs `[lo, mid)` and `[mid, hi)` in place.
fn merge_span<T, S, F>(seq: &mut S, lo: usize, mid: usize, hi: usize, cmp: &mut F)
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let scratch = Scratch::from_seq(seq, SeqRange::new_unchecked(lo, hi - lo));
    let left_len = mid - lo;
    let total = hi - lo;
    let (mut i, mut j, mut k) = (0, left_len, lo);
    while i < left_len && j < total {
        // Take from the left run on ties to keep the sort stable.
        if cmp(scratch.get(j), scratch.get(i)) == Ordering::Less {
            seq.set(k, scratch.get(j).clone());
            j += 1;
        } else {
            seq.set(k, scratch.get(i).clone());
            i += 1;
        }
        k += 1;
    }
    while i < left_len {
        seq.set(k, scratch.get(i).clone());
        i += 1;
        k += 1;
    }
    while j < total {
        seq.set(k, scratch.get(j).clone());
        j += 1;
        k += 1;
    }
}

fn pairs_core<K, V, SK, SV, F>(keys: &mut SK, values: &mut SV, range: SeqRange, cmp: &mut F)
where
    K: Clone,
    V: Clone,
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    let n = range.len();
    let base = range.start();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let mid = lo + width;
            let hi = usize::min(lo + 2 * width, n);
            merge_pair_span(keys, values, base + lo, base + mid, base + hi, cmp);
            lo += 2 * width;
        }
        width *= 2;
    }
}

fn merge_pair_span<K, V, SK, SV, F>(
    keys: &mut SK,
    values: &mut SV,
    lo: usize,
    mid: usize,
    hi: usize,
    cmp: &mut F,
) where
    K: Clone,
    V: Clone,
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    let span = SeqRange::new_unchecked(lo, hi - lo);
    let key_scratch = Scratch::from_seq(keys, span);
    let value_scratch = Scratch::from_seq(values, span);
    let left_len = mid - lo;
    let total = hi - lo;
    let (mut i, mut j, mut k) = (0, left_len, lo);
    while i < left_len && j < total {
        let take = if cmp(key_scratch.get(j), key_scratch.get(i)) == Ordering::Less {
            let t = j;
            j += 1;
            t
        } else {
            let t = i;
            i += 1;
            t
        };
        keys.set(k, key_scratch.get(take).clone());
        values.set(k, value_scratch.get(take).clone());
        k += 1;
    }
    for rest in [(i, left_len), (j, total)] {
        for t in rest.0..rest.1 {
            keys.set(k, key_scratch.get(t).clone());
            values.set(k, value_scratch.get(t).clone());
            k += 1;
        }
    }
}

sort_family! {
    algorithm: "merge",
    sort: merge_sort,
    sort_by: merge_sort_by,
    sort_range: merge_sort_range,
    sort_range_by: merge_sort_range_by,
    sort_pairs: merge_sort_pairs,
    sort_pairs_by: merge_sort_pairs_by,
    sort_pairs_range: merge_sort_pairs_range,
    sort_pairs_range_by: merge_sort_pairs_range_by,
    key_bounds: [Clone],
    value_bounds: [Clone],
}
