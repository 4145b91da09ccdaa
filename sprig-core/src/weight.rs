//! Edge weight abstraction.
//!
//! Kruskal only needs a consistent total order over weights and a way to sum
//! the accepted ones without overflow. [`Weight`] captures both: integers
//! accumulate into 128-bit totals and floats into `f64`, ordering by IEEE
//! total order.

use std::cmp::Ordering;
use std::fmt;

/// Numeric type usable as an edge weight.
///
/// Implemented for every primitive integer type and for `f32`/`f64`.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use sprig_core::Weight;
///
/// assert_eq!(3_u32.total_cmp(&5), Ordering::Less);
/// assert_eq!(u32::accumulate(u128::MAX, 1), None);
/// assert!(!f64::NAN.is_admissible());
/// ```
pub trait Weight: Copy + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static {
    /// Wide accumulator used for the total weight of a forest.
    type Total: Copy + Default + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static;

    /// Compares two weights under a total order.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns `false` for weights that cannot take part in the ordering.
    fn is_admissible(&self) -> bool {
        true
    }

    /// Adds `weight` to `total`, returning `None` when the sum leaves the
    /// accumulator's range.
    fn accumulate(total: Self::Total, weight: Self) -> Option<Self::Total>;
}

macro_rules! impl_integer_weight {
    ($total:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                type Total = $total;

                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn accumulate(total: Self::Total, weight: Self) -> Option<Self::Total> {
                    total.checked_add(<$total>::try_from(weight).ok()?)
                }
            }
        )+
    };
}

impl_integer_weight!(i128 => i8, i16, i32, i64, i128, isize);
impl_integer_weight!(u128 => u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                type Total = f64;

                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }

                fn is_admissible(&self) -> bool {
                    self.is_finite()
                }

                fn accumulate(total: Self::Total, weight: Self) -> Option<Self::Total> {
                    let sum = total + f64::from(weight);
                    sum.is_finite().then_some(sum)
                }
            }
        )+
    };
}

impl_float_weight!(f32, f64);
