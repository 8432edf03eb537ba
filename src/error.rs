use thiserror::Error;

/// Reasons a range rejects its arguments.
///
/// Every variant is a caller contract violation. It is reported by the first
/// call to [`Iterator::next`] on a [`RangeIter`](crate::RangeIter), before any
/// term is produced, and the iterator is exhausted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RangeError {
    /// Start, end or step is NaN, or the step is zero while start and end differ.
    #[error("invalid range")]
    InvalidRange,

    /// Start is positive or negative infinity.
    #[error("start range must be less than infinity")]
    InvalidStart,

    /// Step is positive or negative infinity.
    #[error("step range must be less than infinity")]
    InvalidStep,
}
