//! Ordered sequences and the structural operations over them.
//!
//! A [`Sequence`] is anything that can lend a contiguous slice, or report
//! that it is absent. Absence is modelled with `Option`: `None` (or any
//! `Option<S>` holding `None`) is the "null" sequence, and every operation
//! that requires a present sequence reports [`Error::NullInput`] for it.
//!
//! # Operations
//!
//! - [`concat_any`]: ordered concatenation of any number of sequences.
//! - [`insert_into`]: bounds-checked positional insertion into a `Vec`.
//! - [`is_null_or_empty`]: absence/emptiness test.
//! - [`add_all`] / [`subtract_all`]: checked integer folds.

use crate::error::{Error, Result};

/// A borrowed view of an ordered collection that may be absent.
///
/// # Examples
/// ```
/// use seqstat::sequence::Sequence;
///
/// let v = vec![1, 2, 3];
/// assert_eq!(v.as_seq(), Some(&[1, 2, 3][..]));
///
/// let missing: Option<Vec<i32>> = None;
/// assert_eq!(missing.as_seq(), None);
/// ```
pub trait Sequence<T> {
    /// Returns the elements, or `None` if the sequence is absent.
    fn as_seq(&self) -> Option<&[T]>;
}

impl<T> Sequence<T> for [T] {
    #[inline]
    fn as_seq(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    #[inline]
    fn as_seq(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn as_seq(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T, S: Sequence<T> + ?Sized> Sequence<T> for &S {
    #[inline]
    fn as_seq(&self) -> Option<&[T]> {
        (**self).as_seq()
    }
}

impl<T, S: Sequence<T>> Sequence<T> for Option<S> {
    #[inline]
    fn as_seq(&self) -> Option<&[T]> {
        self.as_ref().and_then(Sequence::as_seq)
    }
}

/// Resolves a sequence to its slice or fails with [`Error::NullInput`].
#[inline]
pub(crate) fn require<T, S: Sequence<T> + ?Sized>(seq: &S) -> Result<&[T]> {
    seq.as_seq().ok_or(Error::NullInput)
}

/// Concatenates `sequences` in the order given.
///
/// Element order is preserved within and across inputs. Inputs may differ
/// in length; zero inputs produce an empty vector.
///
/// # Errors
/// [`Error::NullInput`] if any input is absent. All inputs are checked
/// before anything is copied.
///
/// # Complexity
/// Time: O(total length), Space: O(total length)
///
/// # Examples
/// ```
/// use seqstat::sequence::concat_any;
///
/// let joined = concat_any(&[vec![1, 2], vec![3, 4, 5], vec![6]]).unwrap();
/// assert_eq!(joined, vec![1, 2, 3, 4, 5, 6]);
///
/// let none: [Vec<u8>; 0] = [];
/// assert!(concat_any(&none).unwrap().is_empty());
/// ```
pub fn concat_any<T, S>(sequences: &[S]) -> Result<Vec<T>>
where
    T: Clone,
    S: Sequence<T>,
{
    let slices = sequences
        .iter()
        .map(|s| require(s))
        .collect::<Result<Vec<&[T]>>>()?;
    let total = slices.iter().map(|s| s.len()).sum();
    let mut out = Vec::with_capacity(total);
    for s in slices {
        out.extend_from_slice(s);
    }
    Ok(out)
}

/// Inserts `insert_count` elements into `src` at `start_index`.
///
/// Elements at and after `start_index` shift right by `insert_count`. The
/// gap is filled with `values` when it holds exactly `insert_count`
/// elements, or with `T::default()` when `values` is empty.
///
/// Returns the elements that now occupy the gap.
///
/// # Errors
/// - [`Error::InvalidIndex`] if `start_index >= src.len()` (so an empty
///   `src` never accepts an insertion).
/// - [`Error::LengthMismatch`] if `values` is non-empty and its length
///   differs from `insert_count`.
///
/// `src` is left untouched on error.
///
/// # Examples
/// ```
/// use seqstat::sequence::insert_into;
///
/// let mut v = vec![2, 3, 4, 5];
/// let inserted = insert_into(&mut v, 1, 2, &[99, 100]).unwrap();
/// assert_eq!(v, vec![2, 99, 100, 3, 4, 5]);
/// assert_eq!(inserted, vec![99, 100]);
///
/// let mut w = vec![2, 3, 4];
/// insert_into(&mut w, 1, 3, &[]).unwrap();
/// assert_eq!(w, vec![2, 0, 0, 0, 3, 4]);
/// ```
pub fn insert_into<T>(
    src: &mut Vec<T>,
    start_index: usize,
    insert_count: usize,
    values: &[T],
) -> Result<Vec<T>>
where
    T: Clone + Default,
{
    let len = src.len();
    if start_index >= len {
        return Err(Error::InvalidIndex {
            index: start_index,
            len,
        });
    }
    if !values.is_empty() && values.len() != insert_count {
        return Err(Error::LengthMismatch {
            expected: insert_count,
            actual: values.len(),
        });
    }

    let fill: Vec<T> = if values.is_empty() {
        vec![T::default(); insert_count]
    } else {
        values.to_vec()
    };
    let tail = src.split_off(start_index);
    src.reserve(insert_count + tail.len());
    src.extend_from_slice(&fill);
    src.extend(tail);
    tracing::trace!(start_index, insert_count, new_len = src.len(), "inserted into sequence");
    Ok(fill)
}

/// Returns `true` if `seq` is absent or has no elements.
///
/// # Examples
/// ```
/// use seqstat::sequence::is_null_or_empty;
///
/// assert!(is_null_or_empty(&None::<Vec<i32>>));
/// assert!(is_null_or_empty(&Vec::<i32>::new()));
/// assert!(!is_null_or_empty(&[1]));
/// ```
pub fn is_null_or_empty<T, S: Sequence<T> + ?Sized>(seq: &S) -> bool {
    seq.as_seq().map_or(true, <[T]>::is_empty)
}

/// Sums all elements with overflow checking.
///
/// # Errors
/// - [`Error::NullInput`] if `seq` is absent.
/// - [`Error::EmptySequence`] if `seq` has no elements.
/// - [`Error::Overflow`] if the sum leaves the `i32` range.
///
/// # Examples
/// ```
/// use seqstat::sequence::add_all;
/// assert_eq!(add_all(&[1, 2, 3, 4]).unwrap(), 10);
/// ```
pub fn add_all<S: Sequence<i32> + ?Sized>(seq: &S) -> Result<i32> {
    checked_fold(require(seq)?.iter().copied(), i32::checked_add)
}

/// Projects every item through `selector` and sums the results.
///
/// Same errors as [`add_all`].
pub fn add_all_by<T, S, F>(seq: &S, selector: F) -> Result<i32>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> i32,
{
    checked_fold(require(seq)?.iter().map(selector), i32::checked_add)
}

/// Subtracts every following element from the first one, left to right.
///
/// A single-element sequence yields that element.
///
/// # Errors
/// - [`Error::NullInput`] if `seq` is absent.
/// - [`Error::EmptySequence`] if `seq` has no elements.
/// - [`Error::Overflow`] if an intermediate difference leaves the `i32` range.
///
/// # Examples
/// ```
/// use seqstat::sequence::subtract_all;
/// assert_eq!(subtract_all(&[10, 3, 2]).unwrap(), 5);
/// assert_eq!(subtract_all(&[7]).unwrap(), 7);
/// ```
pub fn subtract_all<S: Sequence<i32> + ?Sized>(seq: &S) -> Result<i32> {
    checked_fold(require(seq)?.iter().copied(), i32::checked_sub)
}

/// Projects every item through `selector` and folds the results with
/// [`subtract_all`] semantics.
pub fn subtract_all_by<T, S, F>(seq: &S, selector: F) -> Result<i32>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T) -> i32,
{
    checked_fold(require(seq)?.iter().map(selector), i32::checked_sub)
}

fn checked_fold<I, F>(mut items: I, op: F) -> Result<i32>
where
    I: Iterator<Item = i32>,
    F: Fn(i32, i32) -> Option<i32>,
{
    let first = items.next().ok_or(Error::EmptySequence)?;
    items.try_fold(first, |acc, x| op(acc, x).ok_or(Error::Overflow))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn concat_preserves_length_and_order(
            parts in proptest::collection::vec(
                proptest::collection::vec(any::<i16>(), 0..10),
                0..8,
            ),
        ) {
            let joined = concat_any(&parts).unwrap();
            let expected: Vec<i16> = parts.iter().flatten().copied().collect();
            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn insert_places_values_and_shifts_tail(
            src in proptest::collection::vec(any::<i32>(), 1..30),
            idx in 0_usize..30,
            values in proptest::collection::vec(any::<i32>(), 0..10),
        ) {
            prop_assume!(idx < src.len());
            let mut buf = src.clone();
            let inserted = insert_into(&mut buf, idx, values.len(), &values).unwrap();

            prop_assert_eq!(buf.len(), src.len() + values.len());
            prop_assert_eq!(&buf[..idx], &src[..idx]);
            prop_assert_eq!(&buf[idx..idx + values.len()], &values[..]);
            prop_assert_eq!(&buf[idx + values.len()..], &src[idx..]);
            prop_assert_eq!(inserted, values);
        }

        #[test]
        fn insert_failure_has_no_side_effect(
            src in proptest::collection::vec(any::<u8>(), 0..20),
            idx in 0_usize..40,
            count in 0_usize..5,
            values in proptest::collection::vec(any::<u8>(), 1..5),
        ) {
            prop_assume!(idx >= src.len() || values.len() != count);
            let mut buf = src.clone();
            prop_assert!(insert_into(&mut buf, idx, count, &values).is_err());
            prop_assert_eq!(buf, src);
        }
    }
}
