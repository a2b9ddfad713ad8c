//! Combinators that pair elements with their neighbours or positions.

use std::iter::FusedIterator;

/// The sequence returned by [`aperture`].
#[derive(Debug, Clone)]
pub struct Aperture<S: Iterator> {
    source: S,
    previous: Option<S::Item>,
    started: bool,
}

impl<S> Iterator for Aperture<S>
where
    S: Iterator,
    S::Item: Clone,
{
    type Item = (S::Item, S::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.previous = self.source.next();
        }
        let previous = self.previous.take()?;
        let current = self.source.next()?;
        self.previous = Some(current.clone());
        Some((previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.started {
            // One element of lookahead is buffered in `previous`.
            match self.previous {
                Some(_) => (lower, upper),
                None => (0, Some(0)),
            }
        } else {
            (lower.saturating_sub(1), upper.map(|upper| upper.saturating_sub(1)))
        }
    }
}

impl<S> FusedIterator for Aperture<S>
where
    S: Iterator,
    S::Item: Clone,
{
}

/// Yields consecutive overlapping pairs `(x[i], x[i + 1])`.
///
/// A sequence of `n` elements yields `n - 1` pairs; empty and single-element
/// sequences yield none. Exactly one element is held back between pulls.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::aperture;
///
/// assert_eq!(aperture(vec![1, 2, 3, 4]).collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 4)]);
/// assert_eq!(aperture(vec![5]).count(), 0);
/// ```
#[inline]
pub fn aperture<I>(sequence: I) -> Aperture<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Aperture {
        source: sequence.into_iter(),
        previous: None,
        started: false,
    }
}

/// The sequence returned by [`zip_with_index`].
#[derive(Debug, Clone)]
pub struct ZipWithIndex<S> {
    source: S,
    index: usize,
}

impl<S: Iterator> Iterator for ZipWithIndex<S> {
    type Item = (S::Item, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.source.next()?;
        let index = self.index;
        self.index += 1;
        Some((element, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S: FusedIterator> FusedIterator for ZipWithIndex<S> {}

/// Pairs each element with its zero-based position.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::zip_with_index;
///
/// assert_eq!(zip_with_index(vec!["a", "b"]).collect::<Vec<_>>(), vec![("a", 0), ("b", 1)]);
/// ```
#[inline]
pub fn zip_with_index<I: IntoIterator>(sequence: I) -> ZipWithIndex<I::IntoIter> {
    ZipWithIndex {
        source: sequence.into_iter(),
        index: 0,
    }
}

/// The sequence returned by [`combinations2`].
#[derive(Debug, Clone)]
pub struct Combinations2<'a, T> {
    elements: &'a [T],
    first: usize,
    second: usize,
}

impl<T: Clone> Iterator for Combinations2<'_, T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.second >= self.elements.len() {
            self.first += 1;
            self.second = self.first + 1;
        }
        let pair = (
            self.elements.get(self.first)?.clone(),
            self.elements.get(self.second)?.clone(),
        );
        self.second += 1;
        Some(pair)
    }
}

impl<T: Clone> FusedIterator for Combinations2<'_, T> {}

/// Yields every unordered pair `(x[i], x[j])` with `i < j`, in index order.
///
/// A slice of `n` elements yields `n * (n - 1) / 2` pairs.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::combinations2;
///
/// let pairs: Vec<_> = combinations2(&['a', 'b', 'c']).collect();
/// assert_eq!(pairs, vec![('a', 'b'), ('a', 'c'), ('b', 'c')]);
/// ```
#[inline]
pub const fn combinations2<T: Clone>(elements: &[T]) -> Combinations2<'_, T> {
    Combinations2 {
        elements,
        first: 0,
        second: 1,
    }
}
