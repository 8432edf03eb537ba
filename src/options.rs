use crate::RangeValue;

/// Per-range configuration: an optional step and whether the end is included.
///
/// A bare step value converts into options through `From`, so
/// `range_with(0, 10, 2)` and `range_with(0, 10, RangeOptions::new().step(2))`
/// describe the same range.
///
/// # Examples
///
/// ```
/// use numeric_range::{range_with, RangeOptions};
///
/// let options = RangeOptions::new().step(5_i32).inclusive(true);
/// let values: Vec<i32> = range_with(0_i32, 10, options)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(values, [0, 5, 10]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeOptions<T> {
    /// Distance between consecutive terms. `None` means `1` for ascending
    /// ranges and `-1` for descending ones.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub step: Option<T>,

    /// Whether a term equal to the end is produced.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inclusive: bool,
}

impl<T> RangeOptions<T> {
    /// Options with the default step and an exclusive end.
    #[inline]
    pub const fn new() -> Self {
        Self {
            step: None,
            inclusive: false,
        }
    }

    /// Sets an explicit step.
    #[inline]
    pub fn step(mut self, step: T) -> Self {
        self.step = Some(step);
        self
    }

    /// Sets whether the end is included.
    #[inline]
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }
}

impl<T> Default for RangeOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RangeValue> From<T> for RangeOptions<T> {
    #[inline]
    fn from(step: T) -> Self {
        Self::new().step(step)
    }
}
