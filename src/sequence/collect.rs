//! Materialization: turning sequences into containers, and mappings into
//! sequences.

use std::hash::Hash;
use std::iter::FusedIterator;

#[cfg(feature = "fxhash")]
type SeenSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(not(feature = "fxhash"))]
type SeenSet<T> = std::collections::HashSet<T>;

/// Drains a sequence into a `Vec`, in pull order.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{collect_to_array, range};
///
/// assert_eq!(collect_to_array(range(3)), vec![0, 1, 2]);
/// ```
#[inline]
pub fn collect_to_array<I: IntoIterator>(sequence: I) -> Vec<I::Item> {
    sequence.into_iter().collect()
}

/// Drains a sequence into any container implementing [`FromIterator`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use seqpipe::sequence::collect;
///
/// let letters: BTreeSet<char> = collect("banana".chars());
/// assert_eq!(letters.into_iter().collect::<String>(), "abn");
///
/// let word: String = collect(vec!['o', 'k']);
/// assert_eq!(word, "ok");
/// ```
#[inline]
pub fn collect<C, I>(sequence: I) -> C
where
    I: IntoIterator,
    C: FromIterator<I::Item>,
{
    sequence.into_iter().collect()
}

/// The sequence returned by [`entries`].
#[derive(Debug, Clone)]
pub struct Entries<S> {
    source: S,
}

impl<S: Iterator> Iterator for Entries<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S: FusedIterator> FusedIterator for Entries<S> {}

/// Yields the `(key, value)` pairs of a mapping, in the mapping's own iteration order.
///
/// Works with any mapping whose shared reference iterates over `(&K, &V)`:
/// `BTreeMap` (sorted by key), `HashMap` (unspecified order), and
/// insertion-ordered maps (insertion order).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use seqpipe::sequence::entries;
///
/// let ages = BTreeMap::from([("bob", 31), ("alice", 27)]);
/// let pairs: Vec<_> = entries(&ages).collect();
/// assert_eq!(pairs, vec![(&"alice", &27), (&"bob", &31)]);
/// ```
#[inline]
pub fn entries<'a, M, K, V>(mapping: &'a M) -> Entries<<&'a M as IntoIterator>::IntoIter>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    Entries {
        source: mapping.into_iter(),
    }
}

/// Folds a sequence of `(key, value)` pairs into a mapping.
///
/// A later pair with an already-present key overwrites the earlier value in
/// place.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use seqpipe::sequence::from_entries;
///
/// let scores: HashMap<&str, i32> = from_entries(vec![("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(scores.len(), 2);
/// assert_eq!(scores["a"], 3);
/// ```
#[inline]
pub fn from_entries<M, I, K, V>(sequence: I) -> M
where
    I: IntoIterator<Item = (K, V)>,
    M: Default + Extend<(K, V)>,
{
    let mut mapping = M::default();
    mapping.extend(sequence);
    mapping
}

/// Returns the distinct elements of a sequence, in order of first occurrence.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::remove_duplicates;
///
/// assert_eq!(remove_duplicates("abcabd".chars()), vec!['a', 'b', 'c', 'd']);
/// ```
pub fn remove_duplicates<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = SeenSet::default();
    sequence
        .into_iter()
        .filter(|element| seen.insert(element.clone()))
        .collect()
}

/// Returns a copy of `elements` without the element at `index`.
///
/// An out-of-range `index` returns an unchanged copy.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::remove;
///
/// assert_eq!(remove(1, &[10, 20, 30]), vec![10, 30]);
/// assert_eq!(remove(5, &[10, 20, 30]), vec![10, 20, 30]);
/// ```
pub fn remove<T: Clone>(index: usize, elements: &[T]) -> Vec<T> {
    elements
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, element)| element.clone())
        .collect()
}
