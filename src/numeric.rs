//! Closed set of primitive element types accepted by [`crate::stats`].
//!
//! Each width keeps its own ordering and widening rule. Integers order
//! naturally, floats use IEEE-754 `totalOrder` and `char` orders by scalar
//! value. Every type widens to `f64`, which is the result type of all
//! statistics in this crate.
//!
//! The trait is sealed: the supported set is fixed at
//! `{i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, char}`.

use std::cmp::Ordering;

mod sealed {
    pub trait Sealed {}
}

/// A primitive element that can be widened to `f64` and totally ordered.
pub trait Numeric: Copy + sealed::Sealed {
    /// Widens the value to double precision.
    ///
    /// Lossless for every width up to 32 bits. 64-bit integers beyond
    /// 2^53 round to the nearest representable double.
    fn to_f64(self) -> f64;

    /// Total ascending order used when sorting for the median.
    ///
    /// Floats follow IEEE-754 `totalOrder`: `-0.0` sorts before `0.0`,
    /// positive NaN sorts after `+inf` and negative NaN before `-inf`.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, u8, i16, u16, i32, u32, i64, u64);
impl_numeric_float!(f32, f64);

impl sealed::Sealed for char {}

impl Numeric for char {
    #[inline]
    fn to_f64(self) -> f64 {
        u32::from(self) as f64
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
