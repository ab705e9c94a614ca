//! Element types a `NumberStream` can carry.

use std::fmt::{Debug, Display};

/// Numeric element of a [`NumberStream`](crate::NumberStream).
///
/// Integers add with overflow checks and average through an `i128`
/// accumulator. Floats follow IEEE arithmetic, so a sum may reach infinity
/// but never fails.
pub trait Number: Copy + PartialOrd + Debug + Display + 'static {
    const ZERO: Self;

    /// `None` when the result does not fit `Self`.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Arithmetic mean, `None` for an empty input.
    fn mean<I: Iterator<Item = Self>>(values: I) -> Option<f64>;
}

macro_rules! integer_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn mean<I: Iterator<Item = Self>>(values: I) -> Option<f64> {
                    let (count, total) = values
                        .fold((0u64, 0i128), |(count, total), n| (count + 1, total + i128::from(n)));
                    (count > 0).then(|| total as f64 / count as f64)
                }
            }
        )*
    };
}

macro_rules! float_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn mean<I: Iterator<Item = Self>>(values: I) -> Option<f64> {
                    let (count, total) = values
                        .fold((0u64, 0f64), |(count, total), n| (count + 1, total + f64::from(n)));
                    (count > 0).then(|| total / count as f64)
                }
            }
        )*
    };
}

integer_numbers!(i8, i16, i32, i64, u8, u16, u32, u64);
float_numbers!(f32, f64);
