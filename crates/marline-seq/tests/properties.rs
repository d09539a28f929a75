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

//! Randomized cross-checks of the algorithm families against the
//! standard library, on seeded inputs so failures reproduce.

use marline_seq::matching::{EmptyOrder, FindOutcome, compare_seqs, find_seq, find_seq_last};
use marline_seq::position::replace_range;
use marline_seq::rearrange::{reverse_all, swap_ranges};
use marline_seq::search::{OnDuplicate, SearchBias, SearchOutcome, binary_search, insert_sorted};
use marline_seq::sort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, merge_sort_pairs, quick_sort,
    quick_sort_pairs, selection_sort,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(rng: &mut StdRng, len: usize, max: u32) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(0..max)).collect()
}

#[test]
fn test_all_sorts_agree_with_std() {
    let mut rng = StdRng::seed_from_u64(42);
    let sorts: [(&str, fn(&mut Vec<u32>)); 6] = [
        ("bubble", |v| bubble_sort(v)),
        ("selection", |v| selection_sort(v)),
        ("insertion", |v| insertion_sort(v)),
        ("merge", |v| merge_sort(v)),
        ("quick", |v| quick_sort(v)),
        ("heap", |v| heap_sort(v)),
    ];
    for len in [0usize, 1, 2, 3, 17, 100, 257] {
        // A small key space forces plenty of duplicates.
        let input = random_vec(&mut rng, len, 50);
        let mut expected = input.clone();
        expected.sort_unstable();
        for (name, sort) in sorts {
            let mut v = input.clone();
            sort(&mut v);
            assert_eq!(v, expected, "{name} sort diverged on length {len}");
        }
    }
}

#[test]
fn test_paired_sorts_preserve_pairs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let len = rng.random_range(0..120);
        let keys: Vec<u32> = random_vec(&mut rng, len, 30);
        // Each value remembers the key it was born next to.
        let values: Vec<(usize, u32)> = keys.iter().copied().enumerate().collect();

        for paired in [
            merge_sort_pairs::<u32, (usize, u32), Vec<u32>, Vec<(usize, u32)>>,
            quick_sort_pairs::<u32, (usize, u32), Vec<u32>, Vec<(usize, u32)>>,
        ] {
            let mut k = keys.clone();
            let mut v = values.clone();
            paired(&mut k, &mut v).unwrap();

            let mut expected = keys.clone();
            expected.sort_unstable();
            assert_eq!(k, expected);
            for (key, value) in k.iter().zip(&v) {
                assert_eq!(*key, value.1, "value drifted away from its key");
            }
        }
    }
}

#[test]
fn test_reverse_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let len = rng.random_range(0..64);
        let original = random_vec(&mut rng, len, 1000);
        let mut v = original.clone();
        reverse_all(&mut v);
        assert_eq!(v.first(), original.last());
        reverse_all(&mut v);
        assert_eq!(v, original);
    }
}

#[test]
fn test_swap_ranges_is_self_inverse() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let len = rng.random_range(4..64);
        let original = random_vec(&mut rng, len, 1000);

        // Pick two disjoint blocks with the first strictly left of the
        // second.
        let x = rng.random_range(0..len - 3);
        let x_count = rng.random_range(0..(len - x) / 2).max(1);
        let y = rng.random_range(x + x_count..len);
        let y_count = rng.random_range(1..=len - y);

        let mut v = original.clone();
        if swap_ranges(&mut v, x, x_count, y, y_count).is_err() {
            continue;
        }
        // Undo: the second block now starts where the length difference
        // moved it.
        let y2 = y + y_count - x_count;
        swap_ranges(&mut v, x, y_count, y2, x_count).unwrap();
        assert_eq!(v, original);
    }
}

#[test]
fn test_binary_search_agrees_with_std() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..20 {
        let len = rng.random_range(0..200);
        let mut v = random_vec(&mut rng, len, 100);
        v.sort_unstable();
        for _ in 0..20 {
            let target = rng.random_range(0..110);
            match binary_search(&v, &target, SearchBias::Any) {
                SearchOutcome::Found(i) => assert_eq!(v[i], target),
                SearchOutcome::InsertAt(i) => {
                    assert_eq!(i, v.partition_point(|x| *x < target));
                    assert!(!v.contains(&target));
                }
            }
            if let SearchOutcome::Found(i) = binary_search(&v, &target, SearchBias::First) {
                assert!(i == 0 || v[i - 1] < target);
            }
            if let SearchOutcome::Found(i) = binary_search(&v, &target, SearchBias::Last) {
                assert!(i == v.len() - 1 || v[i + 1] > target);
            }
        }
    }
}

#[test]
fn test_insert_sorted_builds_a_sorted_sequence() {
    let mut rng = StdRng::seed_from_u64(19);
    let mut v: Vec<u32> = Vec::new();
    for _ in 0..200 {
        let value = rng.random_range(0..50);
        insert_sorted(&mut v, value, OnDuplicate::Allow).unwrap();
    }
    assert_eq!(v.len(), 200);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));

    // Rejecting duplicates turns the same stream into a sorted set.
    let mut unique: Vec<u32> = Vec::new();
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..200 {
        let value = rng.random_range(0..50);
        let _ = insert_sorted(&mut unique, value, OnDuplicate::Reject);
    }
    assert!(unique.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_compare_seqs_agrees_with_std_on_prefixes() {
    use std::cmp::Ordering;

    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..50 {
        let a_len = rng.random_range(0..10);
        let a = random_vec(&mut rng, a_len, 3);
        let b_len = rng.random_range(0..10);
        let b = random_vec(&mut rng, b_len, 3);

        // Under the shorter-is-lower policy the comparison is exactly
        // lexicographic.
        assert_eq!(compare_seqs(&a, &b, EmptyOrder::Lesser), a.cmp(&b));

        // The policies only disagree when one sequence is a strict
        // prefix of the other.
        let flipped = compare_seqs(&a, &b, EmptyOrder::Greater);
        let strict_prefix = a.len() != b.len() && (a.starts_with(&b) || b.starts_with(&a));
        if strict_prefix {
            assert_eq!(flipped, a.cmp(&b).reverse());
        } else if a == b {
            assert_eq!(flipped, Ordering::Equal);
        } else {
            assert_eq!(flipped, a.cmp(&b));
        }
    }
}

#[test]
fn test_replace_range_agrees_with_vec_splice() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..50 {
        let len = rng.random_range(0..20);
        let original = random_vec(&mut rng, len, 100);
        let index = rng.random_range(0..=len);
        let count = rng.random_range(0..=len - index);
        let src_len = rng.random_range(0..6);
        let src = random_vec(&mut rng, src_len, 100);

        let mut v = original.clone();
        replace_range(&mut v, index, count, &src).unwrap();

        let mut expected = original.clone();
        expected.splice(index..index + count, src.iter().copied());
        assert_eq!(v, expected);
    }
}

#[test]
fn test_find_seq_agrees_with_naive_scan() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let hay_len = rng.random_range(0..40);
        let hay = random_vec(&mut rng, hay_len, 4);
        let needle_len = rng.random_range(1..5);
        let needle = random_vec(&mut rng, needle_len, 4);

        let naive_first = (0..hay.len().saturating_sub(needle.len() - 1))
            .find(|&i| hay[i..i + needle.len()] == needle[..]);
        match find_seq(&hay, &needle) {
            FindOutcome::Found(i) => assert_eq!(Some(i), naive_first),
            FindOutcome::Partial(_) => assert_eq!(naive_first, None),
        }

        let naive_last = (0..hay.len().saturating_sub(needle.len() - 1))
            .filter(|&i| hay[i..i + needle.len()] == needle[..])
            .next_back();
        match find_seq_last(&hay, &needle) {
            FindOutcome::Found(i) => assert_eq!(Some(i), naive_last),
            FindOutcome::Partial(_) => assert_eq!(naive_last, None),
        }
    }
}
