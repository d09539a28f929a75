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

//! Bubble sort.
//!
//! Repeated adjacent-exchange passes; each pass bubbles the largest
//! remaining element to the end of the unsorted prefix, and a pass with
//! no exchanges terminates the sort early. Stable, O(n²) comparisons in
//! the worst case, O(n) on already sorted input.

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
    let start = range.start();
    let mut upper = range.end();
    loop {
        let mut swapped = false;
        for i in start..upper - 1 {
            if cmp(seq.get(i), seq.get(i + 1)) == Ordering::Greater {
                seq.swap(i, i + 1);
                swapped = true;
            }
        }
        upper -= 1;
        if !swapped || upper - start < 2 {
            return;
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
    let start = range.start();
    let mut upper = range.end();
    loop {
        let mut swapped = false;
        for i in start..upper - 1 {
            if cmp(keys.get(i), keys.get(i + 1)) == Ordering::Greater {
                keys.swap(i, i + 1);
                values.swap(i, i + 1);
                swapped = true;
            }
        }
        upper -= 1;
        if !swapped || upper - start < 2 {
            return;
        }
    }
}

sort_family! {
    algorithm: "bubble",
    sort: bubble_sort,
    sort_by: bubble_sort_by,
    sort_range: bubble_sort_range,
    sort_range_by: bubble_sort_range_by,
    sort_pairs: bubble_sort_pairs,
    sort_pairs_by: bubble_sort_pairs_by,
    sort_pairs_range: bubble_sort_pairs_range,
    sort_pairs_range_by: bubble_sort_pairs_range_by,
    key_bounds: [],
    value_bounds: [],
}
