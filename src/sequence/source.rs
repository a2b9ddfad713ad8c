//! Source generators: sequences that are not built from another sequence.
//!
//! - [`range`] / [`range_with`]: arithmetic progressions below an end bound
//! - [`iterate`]: repeated application of a function to a seed

use std::iter::FusedIterator;

use super::numeric::Step;

/// Options for [`range_with`].
///
/// Defaults to `start = 0`, `step = 1`.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::RangeOptions;
///
/// let options = RangeOptions::default().start(10).step(5);
/// assert_eq!(options, RangeOptions { start: 10, step: 5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOptions<T> {
    /// The first value produced.
    pub start: T,
    /// The amount added between consecutive values.
    pub step: T,
}

impl<T: Step> Default for RangeOptions<T> {
    fn default() -> Self {
        Self {
            start: T::ZERO,
            step: T::ONE,
        }
    }
}

impl<T> RangeOptions<T> {
    /// Sets the first value produced.
    #[must_use]
    pub fn start(self, start: T) -> Self {
        Self { start, ..self }
    }

    /// Sets the amount added between consecutive values.
    #[must_use]
    pub fn step(self, step: T) -> Self {
        Self { step, ..self }
    }
}

/// The sequence returned by [`range`] and [`range_with`].
#[derive(Debug, Clone)]
pub struct Range<T> {
    current: Option<T>,
    end: T,
    step: T,
}

impl<T: Step> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.filter(|value| *value < self.end)?;
        self.current = current.checked_advance(self.step);
        if self.current.is_none() {
            crate::sequence_event!(trace, "range reached the bound of its numeric type");
        }
        Some(current)
    }
}

impl<T: Step> FusedIterator for Range<T> {}

/// Produces `0, 1, 2, ...` while the value is strictly less than `end`.
///
/// Equivalent to `range_with(end, RangeOptions::default())`. Empty when
/// `end <= 0`.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::range;
///
/// assert_eq!(range(4).collect::<Vec<i32>>(), vec![0, 1, 2, 3]);
/// assert_eq!(range(0).count(), 0_usize);
/// ```
#[inline]
pub fn range<T: Step>(end: T) -> Range<T> {
    range_with(end, RangeOptions::default())
}

/// Produces `start, start + step, ...` while the value is strictly less than `end`.
///
/// Finite for a positive `step`, and empty if `start >= end`. With a
/// negative or zero `step` the value never reaches `end`, so the sequence
/// is infinite; bound it with `take` or `take_while`. An integer range
/// whose next value would overflow its type ends after the last
/// representable value.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{RangeOptions, range_with};
///
/// let odds: Vec<u32> = range_with(10, RangeOptions::default().start(1).step(2)).collect();
/// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
///
/// let tenths: Vec<f64> = range_with(0.35, RangeOptions { start: 0.0, step: 0.1 }).collect();
/// assert_eq!(tenths.len(), 4);
/// ```
#[inline]
pub const fn range_with<T: Step>(end: T, options: RangeOptions<T>) -> Range<T> {
    Range {
        current: Some(options.start),
        end,
        step: options.step,
    }
}

/// The sequence returned by the function built by [`iterate`].
#[derive(Debug, Clone)]
pub struct Iterate<T, F> {
    state: T,
    function: F,
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = (self.function)(&self.state);
        self.state = next.clone();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone, F: FnMut(&T) -> T> FusedIterator for Iterate<T, F> {}

/// Returns a function that, given a seed, produces `f(seed), f(f(seed)), ...`.
///
/// The seed itself is not produced. The sequence is infinite, and nothing is
/// memoized: restarting means calling the returned function again with the
/// same seed.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{iterate, take};
///
/// let doublings = iterate(|value: &u64| value * 2);
/// let first_four: Vec<u64> = take(4)(doublings(1)).collect();
///
/// assert_eq!(first_four, vec![2, 4, 8, 16]);
/// ```
#[inline]
pub fn iterate<T, F>(function: F) -> impl Fn(T) -> Iterate<T, F> + Clone
where
    T: Clone,
    F: FnMut(&T) -> T + Clone,
{
    move |seed| Iterate {
        state: seed,
        function: function.clone(),
    }
}
