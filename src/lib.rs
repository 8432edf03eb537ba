#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use numeric_range::{range, range_with, RangeOptions};
//!
//! // Exclusive end, step inferred from the direction
//! let up: Vec<i64> = range(0_i64, 5).collect::<Result<_, _>>().unwrap();
//! assert_eq!(up, [0, 1, 2, 3, 4]);
//!
//! // Bare step, or structured options
//! let odd: Vec<f64> = range_with(1.0, 8.0, 2.0).collect::<Result<_, _>>().unwrap();
//! assert_eq!(odd, [1.0, 3.0, 5.0, 7.0]);
//!
//! let countdown: Vec<i32> = range_with(3_i32, 0, RangeOptions::new().inclusive(true))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(countdown, [3, 2, 1, 0]);
//! ```
//!
//! # Unbounded Ranges
//!
//! An infinite end never terminates the sequence; stop pulling to stop it.
//!
//! ```rust
//! use num_bigint::BigInt;
//! use numeric_range::{range, range_with, Limit};
//!
//! let naturals: Vec<f64> = range(0.0, f64::INFINITY)
//!     .take(4)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(naturals, [0.0, 1.0, 2.0, 3.0]);
//!
//! // `BigInt` has no infinity of its own, so the end is a `Limit`
//! let huge = BigInt::from(10).pow(40);
//! let mut powers = range_with(huge.clone(), Limit::NegInfinity, -huge.clone());
//! assert_eq!(powers.next(), Some(Ok(huge)));
//! assert_eq!(powers.next(), Some(Ok(BigInt::from(0))));
//! ```
//!
//! # Errors
//!
//! Invalid arguments are reported by the first `next()`, never by the
//! constructor:
//!
//! ```rust
//! use numeric_range::{range_with, RangeError};
//!
//! let mut zero_step = range_with(0_i32, 1, 0);
//! assert_eq!(zero_step.next(), Some(Err(RangeError::InvalidRange)));
//! assert_eq!(zero_step.next(), None);
//!
//! let mut infinite_step = range_with(0.0, 1.0, f64::INFINITY);
//! assert_eq!(infinite_step.next(), Some(Err(RangeError::InvalidStep)));
//! ```

mod error;
mod numeric_range;
mod options;
mod value;

pub use error::RangeError;
pub use numeric_range::{range, range_with, NumericRange, RangeIter};
pub use options::RangeOptions;
pub use value::{Limit, RangeValue};

/// Everything needed to call [`range`] and [`range_with`] unqualified.
pub mod prelude {
    pub use crate::{range, range_with, Limit, RangeError, RangeOptions};
}

#[cfg(test)]
#[path = "tests/numeric_range_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/value_tests.rs"]
mod value_tests;
