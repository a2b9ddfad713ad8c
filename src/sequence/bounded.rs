//! Combinators that bound or trim a sequence.
//!
//! - [`take`] / [`take_while`]: keep a prefix
//! - [`skip`] / [`skip_while`]: drop a prefix
//!
//! `take` and `take_while` are the intended way to consume infinite
//! sequences such as [`iterate`](super::iterate).

use std::iter::FusedIterator;

/// The sequence returned by the function built by [`take`].
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S: Iterator> Iterator for Take<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let Some(element) = self.source.next() else {
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        (
            lower.min(self.remaining),
            Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))),
        )
    }
}

impl<S: Iterator> FusedIterator for Take<S> {}

/// Returns a function that yields at most `count` elements of a sequence.
///
/// Stops early if the source runs out first; `take(0)` yields nothing. The
/// source is never pulled more than `count` times, so `take` safely bounds
/// an infinite sequence.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{range, take};
///
/// assert_eq!(take(3)(range(1000)).collect::<Vec<i32>>(), vec![0, 1, 2]);
/// assert_eq!(take(10)(vec![1, 2]).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[inline]
pub fn take<I: IntoIterator>(count: usize) -> impl Fn(I) -> Take<I::IntoIter> + Clone {
    move |sequence| Take {
        source: sequence.into_iter(),
        remaining: count,
    }
}

/// The sequence returned by the function built by [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> Iterator for TakeWhile<S, P>
where
    S: Iterator,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next() {
            Some(element) if (self.predicate)(&element) => Some(element),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<S, P> FusedIterator for TakeWhile<S, P>
where
    S: Iterator,
    P: Fn(&S::Item) -> bool,
{
}

/// Returns a function that yields elements while `predicate` holds.
///
/// The first failing element is consumed and discarded, and nothing after
/// it is ever yielded, even if the predicate would hold again.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::take_while;
///
/// let small = take_while(|value: &i32| *value < 3);
/// assert_eq!(small(vec![1, 2, 3, 1, 2]).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[inline]
pub fn take_while<I, P>(predicate: P) -> impl Fn(I) -> TakeWhile<I::IntoIter, P> + Clone
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| TakeWhile {
        source: sequence.into_iter(),
        predicate: predicate.clone(),
        done: false,
    }
}

/// The sequence returned by the function built by [`skip_while`].
#[derive(Debug, Clone)]
pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
    skipping: bool,
}

impl<S, P> Iterator for SkipWhile<S, P>
where
    S: Iterator,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.skipping {
            return self.source.next();
        }
        loop {
            let element = self.source.next()?;
            if !(self.predicate)(&element) {
                self.skipping = false;
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.skipping { (0, upper) } else { (lower, upper) }
    }
}

impl<S, P> FusedIterator for SkipWhile<S, P>
where
    S: FusedIterator,
    P: Fn(&S::Item) -> bool,
{
}

/// Returns a function that drops the leading run of elements for which `predicate` holds.
///
/// The first element failing the predicate is yielded, followed by every
/// remaining element unconditionally; the predicate is not consulted again.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::skip_while;
///
/// let from_three = skip_while(|value: &i32| *value < 3);
/// assert_eq!(from_three(vec![1, 2, 3, 4, 1, 2]).collect::<Vec<_>>(), vec![3, 4, 1, 2]);
/// ```
#[inline]
pub fn skip_while<I, P>(predicate: P) -> impl Fn(I) -> SkipWhile<I::IntoIter, P> + Clone
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| SkipWhile {
        source: sequence.into_iter(),
        predicate: predicate.clone(),
        skipping: true,
    }
}

/// The sequence returned by the function built by [`skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    pending: usize,
}

impl<S: Iterator> Iterator for Skip<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pending > 0 {
            let requested = std::mem::take(&mut self.pending);
            // `nth(n - 1)` discards exactly `n` elements; random-access
            // iterators (slices, `Vec`, ranges) do it without pulling.
            if self.source.nth(requested - 1).is_none() {
                crate::sequence_event!(trace, requested, "skip exhausted its source");
                return None;
            }
        }
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}

impl<S: FusedIterator> FusedIterator for Skip<S> {}

/// Returns a function that discards the first `count` elements and yields the rest.
///
/// If the source is shorter than `count`, the result is empty. The
/// discarding happens on the first pull, through [`Iterator::nth`], which
/// random-access iterators answer in constant time; every other iterator is
/// pulled `count` times. Both paths yield the same elements.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::skip;
///
/// let after_two = skip(2);
/// assert_eq!(after_two(vec![1, 2, 3, 4]).collect::<Vec<_>>(), vec![3, 4]);
/// assert_eq!(after_two(vec![1]).count(), 0);
/// ```
#[inline]
pub fn skip<I: IntoIterator>(count: usize) -> impl Fn(I) -> Skip<I::IntoIter> + Clone {
    move |sequence| Skip {
        source: sequence.into_iter(),
        pending: count,
    }
}
