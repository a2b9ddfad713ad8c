//! Element-wise transforms.
//!
//! - [`map`]: transform each element
//! - [`filter`]: keep the elements matching a predicate
//! - [`flatten`]: concatenate a sequence of sequences
//! - [`flat_map`]: `map` then `flatten`
//!
//! Every adapter pulls from its source only when it is itself pulled, and
//! calls the user function exactly once per element it pulls.

use std::iter::FusedIterator;

/// The sequence returned by the function built by [`map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    function: F,
}

impl<S, F, U> Iterator for Map<S, F>
where
    S: Iterator,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next().map(&mut self.function)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, F, U> FusedIterator for Map<S, F>
where
    S: FusedIterator,
    F: FnMut(S::Item) -> U,
{
}

/// Returns a function that transforms every element of a sequence with `function`.
///
/// Length and order are preserved. `function` runs once per element, when
/// that element is pulled.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::map;
///
/// let double = map(|value: i32| value * 2);
/// assert_eq!(double(vec![1, 2, 3]).collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
#[inline]
pub fn map<I, F, U>(function: F) -> impl Fn(I) -> Map<I::IntoIter, F> + Clone
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U + Clone,
{
    move |sequence| Map {
        source: sequence.into_iter(),
        function: function.clone(),
    }
}

/// The sequence returned by the function built by [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Iterator for Filter<S, P>
where
    S: Iterator,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = self.source.next()?;
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<S, P> FusedIterator for Filter<S, P>
where
    S: FusedIterator,
    P: Fn(&S::Item) -> bool,
{
}

/// Returns a function that keeps only the elements for which `predicate` holds.
///
/// Order is preserved and the predicate is evaluated only as elements are
/// pulled.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::filter;
///
/// let evens = filter(|value: &i32| value % 2 == 0);
/// assert_eq!(evens(1..=6).collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
#[inline]
pub fn filter<I, P>(predicate: P) -> impl Fn(I) -> Filter<I::IntoIter, P> + Clone
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| Filter {
        source: sequence.into_iter(),
        predicate: predicate.clone(),
    }
}

/// The sequence returned by [`flatten`].
#[derive(Debug, Clone)]
pub struct Flatten<S, N> {
    outer: S,
    inner: Option<N>,
}

impl<S, N> Iterator for Flatten<S, N>
where
    S: Iterator,
    S::Item: IntoIterator<IntoIter = N, Item = N::Item>,
    N: Iterator,
{
    type Item = N::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                match inner.next() {
                    Some(element) => return Some(element),
                    None => self.inner = None,
                }
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }
}

impl<S, N> FusedIterator for Flatten<S, N>
where
    S: FusedIterator,
    S::Item: IntoIterator<IntoIter = N, Item = N::Item>,
    N: Iterator,
{
}

/// Concatenates a sequence of sequences into one flat sequence.
///
/// Each inner sequence is drained before the next one is pulled from the
/// outer sequence; the relative order of both levels is preserved.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::flatten;
///
/// let groups = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(flatten(groups).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[inline]
pub fn flatten<I>(sequence: I) -> Flatten<I::IntoIter, <I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Flatten {
        outer: sequence.into_iter(),
        inner: None,
    }
}

/// The sequence returned by the function built by [`flat_map`].
pub type FlatMap<S, F, U> = Flatten<Map<S, F>, <U as IntoIterator>::IntoIter>;

/// Returns a function equivalent to mapping with `function` and then flattening.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::flat_map;
///
/// let repeat_each = flat_map(|value: usize| vec![value; value]);
/// assert_eq!(repeat_each(1..4).collect::<Vec<_>>(), vec![1, 2, 2, 3, 3, 3]);
/// ```
#[inline]
pub fn flat_map<I, F, U>(function: F) -> impl Fn(I) -> FlatMap<I::IntoIter, F, U> + Clone
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U + Clone,
    U: IntoIterator,
{
    let map_each = map(function);
    move |sequence| flatten(map_each(sequence))
}
