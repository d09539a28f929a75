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

//! Insertion sort.
//!
//! Grows a sorted prefix one element at a time, sinking each new element
//! into place with adjacent exchanges. Stable, O(n²) worst case, O(n) on
//! already sorted input, and the usual choice for short or nearly sorted
//! sequences.

use crate::error::Error;
use crate::sort::{sort_family, validated_pair_full, validated_pair_range, validated_range};
use marline_core::range::SeqRange;
use marline_core::seq::{Sequence, SequenceMut};
use std::cmp::Ordering;

fn sort_core<T, S, F>(seq: &mut S, range: SeqRange, cmp: &mut F)
where
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    if range.len() < 2 {
        return;
    }
    for i in range.start() + 1..range.end() {
        let mut j = i;
        while j > range.start() && cmp(seq.get(j - 1), seq.get(j)) == Ordering::Greater {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn pairs_core<K, V, SK, SV, F>(keys: &mut SK, values: &mut SV, range: SeqRange, cmp: &mut F)
where
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    if range.len() < 2 {
        return;
    }
    for i in range.start() + 1..range.end() {
        let mut j = i;
        while j > range.start() && cmp(keys.get(j - 1), keys.get(j)) == Ordering::Greater {
            keys.swap(j - 1, j);
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

sort_family! {
    algorithm: "insertion",
    sort: insertion_sort,
    sort_by: insertion_sort_by,
    sort_range: insertion_sort_range,
    sort_range_by: insertion_sort_range_by,
    sort_pairs: insertion_sort_pairs,
    sort_pairs_by: insertion_sort_pairs_by,
    sort_pairs_range: insertion_sort_pairs_range,
    sort_pairs_range_by: insertion_sort_pairs_range_by,
    key_bounds: [],
    value_bounds: [],
}
