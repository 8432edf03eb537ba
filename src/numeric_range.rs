use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::mem;

use crate::{Limit, RangeError, RangeOptions, RangeValue};

/// The arguments of an arithmetic progression, ready to be enumerated.
///
/// A `NumericRange` is a plain value: nothing is validated when it is built.
/// Every call to [`iter`](Self::iter) starts a fresh, independent
/// [`RangeIter`] at the first term, so the same range can be walked any
/// number of times.
///
/// # Examples
///
/// ```
/// use numeric_range::{NumericRange, RangeOptions};
///
/// let evens = NumericRange::with_options(0_i64, 10, RangeOptions::new().step(2_i64));
///
/// let first: Vec<i64> = evens.iter().collect::<Result<_, _>>().unwrap();
/// let second: Vec<i64> = evens.iter().collect::<Result<_, _>>().unwrap();
/// assert_eq!(first, [0, 2, 4, 6, 8]);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericRange<T> {
    start: T,
    end: Limit<T>,
    options: RangeOptions<T>,
}

impl<T: RangeValue> NumericRange<T> {
    /// Creates a range from `start` towards `end` with default options.
    #[inline]
    pub fn new(start: T, end: impl Into<Limit<T>>) -> Self {
        Self::with_options(start, end, RangeOptions::new())
    }

    /// Creates a range with explicit options, or a bare step.
    #[inline]
    pub fn with_options(
        start: T,
        end: impl Into<Limit<T>>,
        options: impl Into<RangeOptions<T>>,
    ) -> Self {
        Self {
            start,
            end: end.into(),
            options: options.into(),
        }
    }

    /// Returns the first candidate term.
    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Returns the end of the range.
    #[inline]
    pub fn end(&self) -> &Limit<T> {
        &self.end
    }

    /// Returns the step and inclusiveness as given, before defaulting.
    #[inline]
    pub fn options(&self) -> &RangeOptions<T> {
        &self.options
    }

    /// Returns a new iterator over the terms of this range.
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter::new(self.clone())
    }

    fn resolve(self) -> Result<Option<Progression<T>>, RangeError> {
        let NumericRange {
            start,
            end,
            options,
        } = self;

        if start.is_nan() || end.is_nan() {
            return Err(RangeError::InvalidRange);
        }
        if start.is_infinite() {
            return Err(RangeError::InvalidStart);
        }

        let placement = end.compare(&start);
        let increasing = placement == Some(Ordering::Greater);
        let inclusive_end = options.inclusive;
        let step = options
            .step
            .unwrap_or_else(|| if increasing { T::one() } else { -T::one() });

        if step.is_infinite() {
            return Err(RangeError::InvalidStep);
        }
        if step.is_nan() || (step.is_zero() && placement != Some(Ordering::Equal)) {
            return Err(RangeError::InvalidRange);
        }

        let step_increasing = step > T::zero();
        if increasing != step_increasing {
            tracing::trace!(increasing, step_increasing, "step points away from end");
            return Ok(None);
        }

        tracing::trace!(
            increasing,
            inclusive_end,
            unbounded = end.is_infinite(),
            "range resolved"
        );
        let cursor = Some(T::first(&start));
        Ok(Some(Progression {
            start,
            end,
            step,
            increasing,
            inclusive_end,
            cursor,
        }))
    }
}

impl<T: RangeValue> IntoIterator for NumericRange<T> {
    type Item = Result<T, RangeError>;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RangeIter::new(self)
    }
}

impl<T: RangeValue> IntoIterator for &NumericRange<T> {
    type Item = Result<T, RangeError>;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolved configuration and cursor of a range being produced.
#[derive(Debug, Clone)]
struct Progression<T: RangeValue> {
    start: T,
    end: Limit<T>,
    step: T,
    increasing: bool,
    inclusive_end: bool,
    /// `None` once the next term is known to be unreachable.
    cursor: Option<T::Cursor>,
}

impl<T: RangeValue> Progression<T> {
    fn advance(&mut self) -> Option<T> {
        let cursor = self.cursor.take()?;
        let value = T::term(&self.start, &self.step, &cursor)?;

        // Ordering of the end relative to the candidate term.
        let placement = self.end.compare(&value)?;
        let finished = match (self.increasing, self.inclusive_end) {
            (true, true) => placement == Ordering::Less,
            (true, false) => placement != Ordering::Greater,
            (false, true) => placement == Ordering::Greater,
            (false, false) => placement != Ordering::Less,
        };
        if finished {
            return None;
        }

        // A zero step only survives validation when start == end; it yields once.
        if !self.step.is_zero() {
            self.cursor = T::successor(&self.step, &cursor);
        }
        Some(value)
    }
}

#[derive(Debug, Clone)]
enum State<T: RangeValue> {
    Pending(NumericRange<T>),
    Producing(Progression<T>),
    Exhausted,
}

/// A lazy iterator over the terms of a [`NumericRange`].
///
/// Creating the iterator never fails. The arguments are validated on the
/// first call to [`next`](Iterator::next): an invalid range yields exactly one
/// `Err` and then ends. A valid range yields `Ok` terms until the end is
/// reached, which may be never for an infinite end.
///
/// Dropping the iterator at any point is the way to stop an unbounded range.
///
/// # Examples
///
/// ```
/// use numeric_range::{range, RangeError};
///
/// let mut naturals = range(0.0, f64::INFINITY);
/// assert_eq!(naturals.next(), Some(Ok(0.0)));
/// assert_eq!(naturals.next(), Some(Ok(1.0)));
///
/// let mut broken = range(f64::NAN, 1.0);
/// assert_eq!(broken.next(), Some(Err(RangeError::InvalidRange)));
/// assert_eq!(broken.next(), None);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RangeIter<T: RangeValue> {
    state: State<T>,
}

impl<T: RangeValue> RangeIter<T> {
    #[inline]
    fn new(range: NumericRange<T>) -> Self {
        Self {
            state: State::Pending(range),
        }
    }
}

impl<T: RangeValue> Iterator for RangeIter<T> {
    type Item = Result<T, RangeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Pending(_)) {
            self.state = match mem::replace(&mut self.state, State::Exhausted) {
                State::Pending(range) => match range.resolve() {
                    Ok(Some(progression)) => State::Producing(progression),
                    Ok(None) => State::Exhausted,
                    Err(err) => {
                        tracing::debug!(%err, "rejected range arguments");
                        return Some(Err(err));
                    }
                },
                other => other,
            };
        }

        let State::Producing(progression) = &mut self.state else {
            return None;
        };
        match progression.advance() {
            Some(value) => Some(Ok(value)),
            None => {
                self.state = State::Exhausted;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Exhausted => (0, Some(0)),
            State::Pending(_) | State::Producing(_) => (0, None),
        }
    }
}

impl<T: RangeValue> FusedIterator for RangeIter<T> {}

/// Lazily enumerates `start, start ± 1, …` up to, but excluding, `end`.
///
/// The direction follows from `end > start`. See [`range_with`] for an
/// explicit step or an inclusive end.
///
/// # Examples
///
/// ```
/// use numeric_range::range;
///
/// let up: Vec<i32> = range(0_i32, 5).collect::<Result<_, _>>().unwrap();
/// let down: Vec<i32> = range(5_i32, -1).collect::<Result<_, _>>().unwrap();
/// assert_eq!(up, [0, 1, 2, 3, 4]);
/// assert_eq!(down, [5, 4, 3, 2, 1, 0]);
/// ```
#[inline]
pub fn range<T: RangeValue>(start: T, end: impl Into<Limit<T>>) -> RangeIter<T> {
    NumericRange::new(start, end).into_iter()
}

/// Lazily enumerates a range with a bare step or [`RangeOptions`].
///
/// A step whose sign disagrees with the direction from `start` to `end`
/// produces an empty sequence rather than an error.
///
/// # Examples
///
/// ```
/// use numeric_range::{range_with, RangeOptions};
///
/// let by_step: Vec<i32> = range_with(0_i32, 10, 2).collect::<Result<_, _>>().unwrap();
/// let inclusive: Vec<i32> = range_with(0_i32, 5, RangeOptions::new().inclusive(true))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(by_step, [0, 2, 4, 6, 8]);
/// assert_eq!(inclusive, [0, 1, 2, 3, 4, 5]);
///
/// assert_eq!(range_with(0_i32, 5, -1).count(), 0);
/// ```
#[inline]
pub fn range_with<T: RangeValue>(
    start: T,
    end: impl Into<Limit<T>>,
    options: impl Into<RangeOptions<T>>,
) -> RangeIter<T> {
    NumericRange::with_options(start, end, options).into_iter()
}
