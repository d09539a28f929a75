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

//! The sorting family.
//!
//! Six in-place algorithms (bubble, selection, insertion, merge, quick
//! and heap), each built around exactly two private cores:
//!
//! - `sort_core(seq, range, cmp)` permutes one sequence;
//! - `pairs_core(keys, values, range, cmp)` permutes a key sequence and a
//!   value sequence in lock-step, using the keys as the ordering source,
//!   so that `values[i]` follows `keys[i]` through every exchange.
//!
//! All public call shapes are thin wrappers over those two cores,
//! generated by [`sort_family!`]:
//!
//! | shape                      | ordering source        | extent      |
//! |----------------------------|------------------------|-------------|
//! | `X_sort`                   | natural (`T: Ord`)     | full        |
//! | `X_sort_by`                | `FnMut(&T, &T)`        | full        |
//! | `X_sort_range[_by]`        | as above               | `(index, count)` |
//! | `X_sort_pairs[_by]`        | keys                   | full        |
//! | `X_sort_pairs_range[_by]`  | keys                   | `(index, count)` |
//!
//! Range shapes sort only the validated slice and leave the rest of the
//! sequence untouched. A comparer object is just another `FnMut`, so it
//! goes through the `_by` shapes.

use crate::error::Error;
use marline_core::range::{SeqRange, validate_lengths_match, validate_range};

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::*;
pub use heap::*;
pub use insertion::*;
pub use merge::*;
pub use quick::*;
pub use selection::*;

/// Validates an `(index, count)` sort window.
pub(crate) fn validated_range(len: usize, index: usize, count: usize) -> Result<SeqRange, Error> {
    Ok(validate_range(len, index, count)?)
}

/// Validates the key/value length pairing, then the sort window.
pub(crate) fn validated_pair_range(
    keys_len: usize,
    values_len: usize,
    index: usize,
    count: usize,
) -> Result<SeqRange, Error> {
    let len = validate_lengths_match(keys_len, values_len)?;
    Ok(validate_range(len, index, count)?)
}

/// Validates the key/value length pairing and returns the full extent.
pub(crate) fn validated_pair_full(keys_len: usize, values_len: usize) -> Result<SeqRange, Error> {
    let len = validate_lengths_match(keys_len, values_len)?;
    Ok(SeqRange::full(len))
}

/// Generates the eight public call shapes of one sorting algorithm from
/// its two private cores (`sort_core` / `pairs_core` in the invoking
/// module).
///
/// `key_bounds` / `value_bounds` carry the extra trait bounds an
/// algorithm's cores need (merge clones into scratch, quick clones its
/// pivot); most algorithms pass empty lists.
macro_rules! sort_family {
    (
        algorithm: $alg:literal,
        sort: $sort:ident,
        sort_by: $sort_by:ident,
        sort_range: $sort_range:ident,
        sort_range_by: $sort_range_by:ident,
        sort_pairs: $sort_pairs:ident,
        sort_pairs_by: $sort_pairs_by:ident,
        sort_pairs_range: $sort_pairs_range:ident,
        sort_pairs_range_by: $sort_pairs_range_by:ident,
        key_bounds: [$($kb:path),*],
        value_bounds: [$($vb:path),*],
    ) => {
        #[doc = concat!("Sorts the whole sequence with ", $alg, " sort using the natural ordering of `T`.")]
        pub fn $sort<T, S>(seq: &mut S)
        where
            T: Ord $(+ $kb)*,
            S: SequenceMut<T> + ?Sized,
        {
            let range = SeqRange::full(seq.len());
            sort_core(seq, range, &mut T::cmp);
        }

        #[doc = concat!("Sorts the whole sequence with ", $alg, " sort using the supplied ordering function.")]
        pub fn $sort_by<T, S, F>(seq: &mut S, mut cmp: F)
        where
            $(T: $kb,)*
            S: SequenceMut<T> + ?Sized,
            F: FnMut(&T, &T) -> Ordering,
        {
            let range = SeqRange::full(seq.len());
            sort_core(seq, range, &mut cmp);
        }

        #[doc = concat!("Sorts `seq[index .. index + count]` with ", $alg, " sort using the natural ordering of `T`; the rest of the sequence is untouched.")]
        pub fn $sort_range<T, S>(seq: &mut S, index: usize, count: usize) -> Result<(), Error>
        where
            T: Ord $(+ $kb)*,
            S: SequenceMut<T> + ?Sized,
        {
            let range = validated_range(seq.len(), index, count)?;
            sort_core(seq, range, &mut T::cmp);
            Ok(())
        }

        #[doc = concat!("Sorts `seq[index .. index + count]` with ", $alg, " sort using the supplied ordering function; the rest of the sequence is untouched.")]
        pub fn $sort_range_by<T, S, F>(
            seq: &mut S,
            index: usize,
            count: usize,
            mut cmp: F,
        ) -> Result<(), Error>
        where
            $(T: $kb,)*
            S: SequenceMut<T> + ?Sized,
            F: FnMut(&T, &T) -> Ordering,
        {
            let range = validated_range(seq.len(), index, count)?;
            sort_core(seq, range, &mut cmp);
            Ok(())
        }

        #[doc = concat!("Sorts `values` by `keys` with ", $alg, " sort (natural key ordering), keeping `values[i]` paired with `keys[i]` through every exchange. The sequences must have equal lengths.")]
        pub fn $sort_pairs<K, V, SK, SV>(keys: &mut SK, values: &mut SV) -> Result<(), Error>
        where
            K: Ord $(+ $kb)*,
            $(V: $vb,)*
            SK: SequenceMut<K> + ?Sized,
            SV: SequenceMut<V> + ?Sized,
        {
            let range = validated_pair_full(keys.len(), values.len())?;
            pairs_core(keys, values, range, &mut K::cmp);
            Ok(())
        }

        #[doc = concat!("Sorts `values` by `keys` with ", $alg, " sort using the supplied key ordering function.")]
        pub fn $sort_pairs_by<K, V, SK, SV, F>(
            keys: &mut SK,
            values: &mut SV,
            mut cmp: F,
        ) -> Result<(), Error>
        where
            $(K: $kb,)*
            $(V: $vb,)*
            SK: SequenceMut<K> + ?Sized,
            SV: SequenceMut<V> + ?Sized,
            F: FnMut(&K, &K) -> Ordering,
        {
            let range = validated_pair_full(keys.len(), values.len())?;
            pairs_core(keys, values, range, &mut cmp);
            Ok(())
        }

        #[doc = concat!("Sorts the `(index, count)` window of `values` by `keys` with ", $alg, " sort (natural key ordering).")]
        pub fn $sort_pairs_range<K, V, SK, SV>(
            keys: &mut SK,
            values: &mut SV,
            index: usize,
            count: usize,
        ) -> Result<(), Error>
        where
            K: Ord $(+ $kb)*,
            $(V: $vb,)*
            SK: SequenceMut<K> + ?Sized,
            SV: SequenceMut<V> + ?Sized,
        {
            let range = validated_pair_range(keys.len(), values.len(), index, count)?;
            pairs_core(keys, values, range, &mut K::cmp);
            Ok(())
        }

        #[doc = concat!("Sorts the `(index, count)` window of `values` by `keys` with ", $alg, " sort using the supplied key ordering function.")]
        pub fn $sort_pairs_range_by<K, V, SK, SV, F>(
            keys: &mut SK,
            values: &mut SV,
            index: usize,
            count: usize,
            mut cmp: F,
        ) -> Result<(), Error>
        where
            $(K: $kb,)*
            $(V: $vb,)*
            SK: SequenceMut<K> + ?Sized,
            SV: SequenceMut<V> + ?Sized,
            F: FnMut(&K, &K) -> Ordering,
        {
            let range = validated_pair_range(keys.len(), values.len(), index, count)?;
            pairs_core(keys, values, range, &mut cmp);
            Ok(())
        }
    };
}

pub(crate) use sort_family;
