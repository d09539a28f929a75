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

//! Heap sort.
//!
//! Builds a max-heap over the range (the heap lives at a base offset, so
//! sub-range sorts need no copying), then repeatedly swaps the root with
//! the last unsorted element and sifts the new root down. O(n log n)
//! comparisons on every input, O(1) auxiliary space; not stable.

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
    let n = range.len();
    if n < 2 {
        return;
    }
    let base = range.start();
    for root in (0..n / 2).rev() {
        sift_down(seq, base, root, n, cmp);
    }
    for end in (1..n).rev() {
        seq.swap(base, base + end);
        sift_down(seq, base, 0, end, cmp);
    }
}

/// Restores the max-heap property for the subtree rooted at `root`
/// within the first `len` heap slots. Heap slot `i` lives at sequence
/// index `base + i`.
fn sift_down<T, S, F>(seq: &mut S, base: usize, mut root: usize, len: usize, cmp: &mut F)
where
    S: SequenceMut<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let mut largest = root;
        if cmp(seq.get(base + left), seq.get(base + largest)) == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < len && cmp(seq.get(base + right), seq.get(base + largest)) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        seq.swap(base + root, base + largest);
        root = largest;
    }
}

fn pairs_core<K, V, SK, SV, F>(keys: &mut SK, values: &mut SV, range: SeqRange, cmp: &mut F)
where
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    let n = range.len();
    if n < 2 {
        return;
    }
    let base = range.start();
    for root in (0..n / 2).rev() {
        sift_down_pairs(keys, values, base, root, n, cmp);
    }
    for end in (1..n).rev() {
        keys.swap(base, base + end);
        values.swap(base, base + end);
        sift_down_pairs(keys, values, base, 0, end, cmp);
    }
}

fn sift_down_pairs<K, V, SK, SV, F>(
    keys: &mut SK,
    values: &mut SV,
    base: usize,
    mut root: usize,
    len: usize,
    cmp: &mut F,
) where
    SK: SequenceMut<K> + ?Sized,
    SV: SequenceMut<V> + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let mut largest = root;
        if cmp(keys.get(base + left), keys.get(base + largest)) == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < len && cmp(keys.get(base + right), keys.get(base + largest)) == Ordering::Greater
        {
            largest = right;
        }
        if largest == root {
            return;
        }
        keys.swap(base + root, base + largest);
        values.swap(base + root, base + largest);
        root = largest;
    }
}

sort_family! {
    algorithm: "heap",
    sort: heap_sort,
    sort_by: heap_sort_by,
    sort_range: heap_sort_range,
    sort_range_by: heap_sort_range_by,
    sort_pairs: heap_sort_pairs,
    sort_pairs_by: heap_sort_pairs_by,
    sort_pairs_range: heap_sort_pairs_range,
    sort_pairs_range_by: heap_sort_pairs_range_by,
    key_bounds: [],
    value_bounds: [],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_sort_natural() {
        let mut v = vec![12, 11, 13, 5, 6, 7];
        heap_sort(&mut v);
        assert_eq!(v, vec![5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn test_heap_sort_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        heap_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        heap_sort(&mut one);
        assert_eq!(one, vec![1]);
    }

    #[test]
    fn test_heap_sort_with_duplicates() {
        let mut v = vec![5, 1, 5, 0, 5, 1];
        heap_sort(&mut v);
        assert_eq!(v, vec![0, 1, 1, 5, 5, 5]);
    }

    #[test]
    fn test_heap_sort_by_descending() {
        let mut v = vec![4, 10, 3, 5, 1];
        heap_sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, vec![10, 5, 4, 3, 1]);
    }

    #[test]
    fn test_heap_sort_range_uses_base_offset() {
        // The heap indices are relative to the range start, not index 0.
        let mut v = vec![0, 9, 4, 8, 5, 7, 0];
        heap_sort_range(&mut v, 1, 5).unwrap();
        assert_eq!(v, vec![0, 4, 5, 7, 8, 9, 0]);
    }

    #[test]
    fn test_heap_sort_pairs() {
        let mut keys = vec![3, 1, 4, 1, 5];
        let mut values = vec![30, 10, 40, 11, 50];
        heap_sort_pairs(&mut keys, &mut values).unwrap();
        assert_eq!(keys, vec![1, 1, 3, 4, 5]);
        // Values follow their keys; the order among the two key-1 values
        // is unspecified.
        assert_eq!(values[2..], [30, 40, 50]);
        let mut ones = vec![values[0], values[1]];
        ones.sort_unstable();
        assert_eq!(ones, vec![10, 11]);
    }

    #[test]
    fn test_heap_sort_pairs_range_by() {
        let mut keys = vec![9, 2, 3, 1, 9];
        let mut values = vec!['x', 'b', 'c', 'a', 'y'];
        heap_sort_pairs_range_by(&mut keys, &mut values, 1, 3, |a, b| a.cmp(b)).unwrap();
        assert_eq!(keys, vec![9, 1, 2, 3, 9]);
        assert_eq!(values, vec!['x', 'a', 'b', 'c', 'y']);
    }
}
