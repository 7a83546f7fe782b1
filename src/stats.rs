//! Descriptive statistics over primitive numeric sequences.
//!
//! Every function is generic over [`Numeric`] and monomorphized per element
//! width. Results are always `f64`. Inputs are widened element by element
//! before any arithmetic, so integer sums and midpoints never overflow.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Median**: sort a private copy, then take the middle element (odd n) or
//!   the midpoint of the two middle elements (even n).

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use crate::sequence::{require, Sequence};

/// Computes the arithmetic mean of a numeric sequence.
///
/// Elements are widened to `f64` and accumulated with [`compensated_sum`].
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - [`Error::NullInput`] if `seq` is absent.
/// - [`Error::EmptySequence`] if `seq` has no elements.
///
/// # Examples
/// ```
/// use seqstat::stats::mean;
/// assert_eq!(mean(&[1_u8, 2, 3, 4, 5]).unwrap(), 3.0);
/// assert!((mean(&[0.1_f32, 0.2]).unwrap() - 0.15).abs() < 1e-7);
/// ```
pub fn mean<T, S>(seq: &S) -> Result<f64>
where
    T: Numeric,
    S: Sequence<T> + ?Sized,
{
    let data = require(seq)?;
    if data.is_empty() {
        return Err(Error::EmptySequence);
    }
    Ok(compensated_sum(data.iter().map(|x| x.to_f64())) / data.len() as f64)
}

/// Computes the median of a numeric sequence without mutating it.
///
/// A single element is returned as is. Otherwise a copy is sorted and the
/// middle element (odd length) or the mean of the two middle elements (even
/// length) is returned.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// - [`Error::NullInput`] if `seq` is absent.
/// - [`Error::EmptySequence`] if `seq` has no elements.
///
/// # Examples
/// ```
/// use seqstat::stats::median;
/// assert_eq!(median(&[5_i32]).unwrap(), 5.0);
/// assert_eq!(median(&[1_i32, 3, 2]).unwrap(), 2.0);
/// assert_eq!(median(&[1_u64, 2, 3, 4]).unwrap(), 2.5);
/// ```
pub fn median<T, S>(seq: &S) -> Result<f64>
where
    T: Numeric,
    S: Sequence<T> + ?Sized,
{
    let data = require(seq)?;
    match data.len() {
        0 => return Err(Error::EmptySequence),
        1 => return Ok(data[0].to_f64()),
        _ => {}
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(Numeric::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2].to_f64())
    } else {
        Ok((sorted[n / 2 - 1].to_f64() + sorted[n / 2].to_f64()) / 2.0)
    }
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use seqstat::stats::compensated_sum;
/// let s = compensated_sum([1e16, 1.0, -1e16]);
/// assert_eq!(s, 1.0);
/// ```
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in values {
        let t = sum + x;
        if !t.is_finite() {
            // inf - inf in the compensation term would turn an overflow into NaN
            sum = t;
            continue;
        }
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for finite f64 vectors of reasonable magnitude.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(
            prop::num::f64::NORMAL.prop_filter("finite", |x| x.is_finite() && x.abs() < 1e12),
            min_len..=max_len,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- Integer mean is exact: sum fits i64, divide once ---
        #[test]
        fn mean_matches_exact_integer_sum(
            data in proptest::collection::vec(any::<i32>(), 1..200),
        ) {
            let exact: i64 = data.iter().map(|&x| x as i64).sum();
            let expected = exact as f64 / data.len() as f64;
            let m = mean(&data).unwrap();
            prop_assert!(
                (m - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                "mean={} expected={}", m, expected
            );
        }

        // --- Mean lies between min and max ---
        #[test]
        fn mean_is_bounded(data in finite_vec(1, 100)) {
            let m = mean(&data).unwrap();
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let tol = 1e-9 * lo.abs().max(hi.abs()).max(1.0);
            prop_assert!(m >= lo - tol && m <= hi + tol, "mean {} outside [{}, {}]", m, lo, hi);
        }

        // --- Median matches the sorted middle ---
        #[test]
        fn median_matches_sorted_middle(
            data in proptest::collection::vec(any::<i16>(), 1..100),
        ) {
            let mut sorted = data.clone();
            sorted.sort();
            let n = sorted.len();
            let expected = if n % 2 == 1 {
                sorted[n / 2] as f64
            } else {
                (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
            };
            prop_assert_eq!(median(&data).unwrap(), expected);
        }

        // --- Median leaves the caller's order intact ---
        #[test]
        fn median_is_read_only(data in finite_vec(1, 100)) {
            let before = data.clone();
            let _ = median(&data).unwrap();
            prop_assert_eq!(data, before);
        }

        // --- Median is invariant under permutation ---
        #[test]
        fn median_ignores_order(
            data in proptest::collection::vec(any::<u32>(), 1..50).prop_shuffle(),
        ) {
            let mut reversed = data.clone();
            reversed.reverse();
            prop_assert_eq!(median(&data).unwrap(), median(&reversed).unwrap());
        }
    }
}
