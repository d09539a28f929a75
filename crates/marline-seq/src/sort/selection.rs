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

//! Selection sort.
//!
//! Scans the unsorted suffix for its minimum and swaps it into place,
//! performing at most one exchange per position. O(n²) comparisons on
//! every input, but the fewest writes of the family. Not stable.

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
    for i in range.start()..range.end() - 1 {
        let mut min = i;
        for j in i + 1..range.end() {
            if cmp(seq.get(j), seq.get(min)) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            seq.swap(i, min);
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
    for i in range.start()..range.end() - 1 {
        let mut min = i;
        for j in i + 1..range.end() {
            if cmp(keys.get(j), keys.get(min)) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            keys.swap(i, min);
            values.swap(i, min);
        }
    }
}

sort_family! {
    algorithm: "selection",
    sort: selection_sort,
    sort_by: selection_sort_by,
    sort_range: selection_sort_range,
    sort_range_by: selection_sort_range_by,
    sort_pairs: selection_sort_pairs,
    sort_pairs_by: selection_sort_pairs_by,
    sort_pairs_range: selection_sort_pairs_range,
    sort_pairs_range_by: selection_sort_pairs_range_by,
    key_bounds: [],
    value_bounds: [],
}
