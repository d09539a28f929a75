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

//! Quick sort.
//!
//! Hoare partitioning around a cloned median-of-three pivot value, which
//! keeps the pivot stable while elements move underneath it and avoids
//! the quadratic blowup on sorted and reversed input. Recursion always
//! descends into the smaller partition and loops on the larger, bounding
//! the stack at O(log n). O(n log n) expected comparisons; not stable.

use crate::error::Error;
use crate::sort::{sort_family, validated_pair_full, validated_pair_range, validated_range};
use marline_core::range::SeqRange;
use marline_core::seq::{Sequence, SequenceMut};
use std::cmp::Ordering;

fn sort_core<T, S, F>(seq: &mut S, range: SeqRange, cmp: &mut F)
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    if range.len() < 2 {
        return;
    }
    recurse(seq, range.start(), range.end() - 1, cmp);
}

fn recurse<T, S, F>(seq: &mut S, mut lo: usize, mut hi: usize, cmp: &mut F)
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    while lo < hi {
        let split = partition(seq, lo, hi, cmp);
        // Recurse into the smaller side, loop on the larger.
        if split - lo < hi - split {
            recurse(seq, lo, split, cmp);
            lo = split + 1;
        } else {
            recurse(seq, split + 1, hi, cmp);
            hi = split;
        }
    }
}

/// Partitions `[lo, hi]` (inclusive) and returns `j` such that
/// `[lo, j]` holds elements `<=` the pivot and `[j + 1, hi]` elements
/// `>=` it, with `lo <= j < hi`.
fn partition<T, S, F>(seq: &mut S, lo: usize, hi: usize, cmp: &mut F) -> usize
where
    T: Clone,
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let mid = lo + ((hi - lo) >> 1);
    let pivot = seq.get(median_of_three(seq, lo, mid, hi, cmp)).clone();
    let (mut i, mut j) = (lo, hi);
    loop {
        while cmp(seq.get(i), &pivot) == Ordering::Less {
            i += 1;
        }
        while cmp(seq.get(j), &pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        seq.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Index of the median element among `a`, `b` and `c`.
fn median_of_three<T, S, F>(seq: &S, a: usize, b: usize, c: usize, cmp: &mut F) -> usize
where
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let ab = cmp(seq.get(a), seq.get(b)) != Ordering::Greater;
    let ac = cmp(seq.get(a), seq.get(c)) != Ordering::Greater;
    let bc = cmp(seq.get(b), seq.get(c)) != Ordering::Greater;
    if ab {
        if bc { b } else if ac { c } else { a }
    } else if ac {
        a
    } else if bc {
        c
    } else {
        b
    }
}

fn pairs_core<K, V, SK, SV, F>(keys: &mut SK, values: &mut SV, range: SeqRange, cmp: &mut F)
where
    K: Clone,
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    if range.len() < 2 {
        return;
    }
    recurse_pairs(keys, values, range.start(), range.end() - 1, cmp);
}

fn recurse_pairs<K, V, SK, SV, F>(
    keys: &mut SK,
    values: &mut SV,
    mut lo: usize,
    mut hi: usize,
    cmp: &mut F,
) where
    K: Clone,
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    while lo < hi {
        let split = partition_pairs(keys, values, lo, hi, cmp);
        if split - lo < hi - split {
            recurse_pairs(keys, values, lo, split, cmp);
            lo = split + 1;
        } else {
            recurse_pairs(keys, values, split + 1, hi, cmp);
            hi = split;
        }
    }
}

fn partition_pairs<K, V, SK, SV, F>(
    keys: &mut SK,
    values: &mut SV,
    lo: usize,
    hi: usize,
    cmp: &mut F,
) -> usize
where
    K: Clone,
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    let mid = lo + ((hi - lo) >> 1);
    let pivot = keys.get(median_of_three(keys, lo, mid, hi, cmp)).clone();
    let (mut i, mut j) = (lo, hi);
    loop {
        while cmp(keys.get(i), &pivot) == Ordering::Less {
            i += 1;
        }
        while cmp(keys.get(j), &pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        keys.swap(i, j);
        values.swap(i, j);
        i += 1;
        j -= 1;
    }
}

sort_family! {
    algorithm: "quick",
    sort: quick_sort,
    sort_by: quick_sort_by,
    sort_range: quick_sort_range,
    sort_range_by: quick_sort_range_by,
    sort_pairs: quick_sort_pairs,
    sort_pairs_by: quick_sort_pairs_by,
    sort_pairs_range: quick_sort_pairs_range,
    sort_pairs_range_by: quick_sort_pairs_range_by,
    key_bounds: [Clone],
    value_bounds: [],
}
