use core::cmp::Ordering;
use core::fmt;
use core::ops::Neg;

use num_bigint::BigInt;
use num_traits::{CheckedAdd, One, Zero};

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for i128 {}
    impl Sealed for isize {}
    impl Sealed for num_bigint::BigInt {}
}

/// Trait for numeric domains a [`NumericRange`](crate::NumericRange) can enumerate.
///
/// This trait is sealed. Three kinds of domain implement it:
///
/// | Domain       | Types                                      | NaN / infinity |
/// |--------------|--------------------------------------------|----------------|
/// | Floating     | `f32`, `f64`                               | native         |
/// | Fixed-width  | `i8`, `i16`, `i32`, `i64`, `i128`, `isize` | none           |
/// | Arbitrary    | `num_bigint::BigInt`                       | none           |
///
/// Start, end and step of one range always share the same domain type, so
/// mixing domains is a compile error. Unbounded ranges over domains without an
/// infinity sentinel use [`Limit::Infinity`] / [`Limit::NegInfinity`] as end.
///
/// Unsigned integers are not supported: a descending range needs `-1` as its
/// default step.
pub trait RangeValue: private::Sealed + Clone + PartialOrd + Zero + One + Neg<Output = Self> {
    /// Position of the next term. Floats count terms, integers carry the
    /// term itself.
    type Cursor: Clone + fmt::Debug;

    /// Returns `true` for the domain's not-a-number sentinel.
    #[inline]
    fn is_nan(&self) -> bool {
        false
    }

    /// Returns `true` for either of the domain's infinity sentinels.
    #[inline]
    fn is_infinite(&self) -> bool {
        false
    }

    /// Cursor of the first term, `start` itself.
    fn first(start: &Self) -> Self::Cursor;

    /// Computes the term at `cursor`, or `None` if it is not representable in
    /// the domain.
    fn term(start: &Self, step: &Self, cursor: &Self::Cursor) -> Option<Self>;

    /// Moves `cursor` one term forward, or returns `None` if that term is not
    /// representable.
    fn successor(step: &Self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
}

/// Floats yield `start + step * n` with the counter `n` kept in `f64`.
macro_rules! impl_range_value_for_float {
    ($t:ty) => {
        impl RangeValue for $t {
            type Cursor = f64;

            #[inline]
            fn is_nan(&self) -> bool {
                <$t>::is_nan(*self)
            }

            #[inline]
            fn is_infinite(&self) -> bool {
                <$t>::is_infinite(*self)
            }

            #[inline]
            fn first(_start: &Self) -> f64 {
                0.0
            }

            #[inline]
            fn term(start: &Self, step: &Self, cursor: &f64) -> Option<Self> {
                Some((f64::from(*start) + f64::from(*step) * *cursor) as $t)
            }

            #[inline]
            fn successor(_step: &Self, cursor: &f64) -> Option<f64> {
                Some(*cursor + 1.0)
            }
        }
    };
}

/// Integers are exact, so `start + step * n` is reached by repeated checked
/// addition and ends only when a term itself overflows.
macro_rules! impl_range_value_for_checked {
    ($t:ty) => {
        impl RangeValue for $t {
            type Cursor = $t;

            #[inline]
            fn first(start: &Self) -> Self {
                start.clone()
            }

            #[inline]
            fn term(_start: &Self, _step: &Self, cursor: &Self) -> Option<Self> {
                Some(cursor.clone())
            }

            #[inline]
            fn successor(step: &Self, cursor: &Self) -> Option<Self> {
                CheckedAdd::checked_add(cursor, step)
            }
        }
    };
}

impl_range_value_for_float!(f32);
impl_range_value_for_float!(f64);

impl_range_value_for_checked!(i8);
impl_range_value_for_checked!(i16);
impl_range_value_for_checked!(i32);
impl_range_value_for_checked!(i64);
impl_range_value_for_checked!(i128);
impl_range_value_for_checked!(isize);
impl_range_value_for_checked!(BigInt);

/// The end of a range: a domain value or an infinity.
///
/// Any `T` converts into `Limit::Finite`, so `range(0, 10)` reads naturally.
/// The infinite variants exist for domains that have no infinity of their own;
/// for floats, `Limit::Finite(f64::INFINITY)` behaves exactly like
/// `Limit::Infinity`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use numeric_range::{range, Limit};
///
/// let firsts: Vec<BigInt> = range(BigInt::from(7), Limit::Infinity)
///     .take(3)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(firsts, [BigInt::from(7), BigInt::from(8), BigInt::from(9)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit<T> {
    /// A finite end value.
    Finite(T),
    /// Positive infinity: greater than every domain value.
    Infinity,
    /// Negative infinity: less than every domain value.
    NegInfinity,
}

impl<T: RangeValue> Limit<T> {
    /// Returns `true` for the infinite variants and for a finite value that is
    /// itself an infinity sentinel.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        match self {
            Limit::Finite(value) => value.is_infinite(),
            Limit::Infinity | Limit::NegInfinity => true,
        }
    }

    #[inline]
    pub(crate) fn is_nan(&self) -> bool {
        matches!(self, Limit::Finite(value) if value.is_nan())
    }

    /// Orders the limit relative to `value`; `None` only when NaN is involved.
    #[inline]
    pub(crate) fn compare(&self, value: &T) -> Option<Ordering> {
        match self {
            Limit::Finite(limit) => limit.partial_cmp(value),
            Limit::Infinity => Some(Ordering::Greater),
            Limit::NegInfinity => Some(Ordering::Less),
        }
    }
}

impl<T: RangeValue> From<T> for Limit<T> {
    #[inline]
    fn from(value: T) -> Self {
        Limit::Finite(value)
    }
}
