//! Aggregations: combinators that drain a sequence into a single value.
//!
//! # Failure policy
//!
//! - Seeded folds ([`reduce_with`], [`sum`], [`product`]) are total.
//! - Unseeded folds ([`reduce`], [`min`], [`max`]) return
//!   `Err(EmptySequenceError)` on an empty sequence.
//! - Lookups ([`first`], [`last`]) return `None` on an empty sequence.
//!
//! # Non-termination
//!
//! Every aggregation except the short-circuiting ones ([`any`], [`all`],
//! [`contains`], [`first`]) drains its input. Applied to an infinite
//! sequence they never return; bound the sequence with
//! [`take`](super::take) or [`take_while`](super::take_while) first.

use std::ops::{Add, Mul};

use super::error::EmptySequenceError;
use super::numeric::MultiplicativeIdentity;
use crate::compose::not;

/// Left fold seeded with the first element, shared by `reduce`, `min` and `max`.
fn fold_first<I, F>(
    operation: &'static str,
    sequence: I,
    function: &F,
) -> Result<I::Item, EmptySequenceError>
where
    I: IntoIterator,
    F: Fn(I::Item, I::Item) -> I::Item,
{
    let mut iterator = sequence.into_iter();
    let seed = iterator
        .next()
        .ok_or_else(|| EmptySequenceError::new(operation))?;
    Ok(iterator.fold(seed, function))
}

/// Returns a function that left-folds a sequence, seeding the accumulator with its first element.
///
/// Folding starts from the second element. An empty sequence has no seed,
/// so the result is an [`EmptySequenceError`].
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{EmptySequenceError, reduce};
///
/// let concatenate = reduce(|accumulator: String, word: String| accumulator + &word);
///
/// let words = vec!["lazy".to_string(), "seq".to_string()];
/// assert_eq!(concatenate(words), Ok("lazyseq".to_string()));
/// assert_eq!(concatenate(Vec::new()), Err(EmptySequenceError { operation: "reduce" }));
/// ```
#[inline]
pub fn reduce<I, F>(function: F) -> impl Fn(I) -> Result<I::Item, EmptySequenceError> + Clone
where
    I: IntoIterator,
    F: Fn(I::Item, I::Item) -> I::Item + Clone,
{
    move |sequence| fold_first("reduce", sequence, &function)
}

/// Returns a function that left-folds a sequence starting from `initial`.
///
/// `initial` is cloned for every application, so the returned function can
/// be reused.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::reduce_with;
///
/// let total = reduce_with(|accumulator: i32, value: i32| accumulator + value, 0);
/// assert_eq!(total(vec![1, 2, 3, 4]), 10);
/// assert_eq!(total(Vec::new()), 0);
/// ```
#[inline]
pub fn reduce_with<I, U, F>(function: F, initial: U) -> impl Fn(I) -> U + Clone
where
    I: IntoIterator,
    U: Clone,
    F: Fn(U, I::Item) -> U + Clone,
{
    move |sequence| sequence.into_iter().fold(initial.clone(), &function)
}

/// Adds up the elements of a sequence, starting from `Default::default()` (`0`).
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::sum;
///
/// assert_eq!(sum(vec![1, 2, 3, 4]), 10);
/// assert_eq!(sum(Vec::<i32>::new()), 0);
/// ```
#[inline]
pub fn sum<I>(sequence: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Add<Output = I::Item> + Default + Clone,
{
    reduce_with(|accumulator, value| accumulator + value, I::Item::default())(sequence)
}

/// Multiplies the elements of a sequence, starting from `1`.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::product;
///
/// assert_eq!(product(vec![2, 3, 4]), 24);
/// assert_eq!(product(Vec::<u64>::new()), 1);
/// ```
#[inline]
pub fn product<I>(sequence: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Mul<Output = I::Item> + MultiplicativeIdentity + Clone,
{
    reduce_with(|accumulator, value| accumulator * value, I::Item::one())(sequence)
}

/// Returns a function that finds the element with the smallest `key`.
///
/// The element itself is returned, not its key. On ties the earliest
/// element wins. Keys that do not compare (such as NaN) never replace the
/// current minimum.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::min;
///
/// let shortest = min(|word: &&str| word.len());
/// assert_eq!(shortest(vec!["three", "one", "two"]), Ok("one"));
/// ```
#[inline]
pub fn min<I, F, K>(key: F) -> impl Fn(I) -> Result<I::Item, EmptySequenceError> + Clone
where
    I: IntoIterator,
    F: Fn(&I::Item) -> K + Clone,
    K: PartialOrd,
{
    move |sequence| {
        fold_first("min", sequence, &|current: I::Item, candidate: I::Item| {
            if key(&candidate) < key(&current) {
                candidate
            } else {
                current
            }
        })
    }
}

/// Returns a function that finds the element with the largest `key`.
///
/// The element itself is returned, not its key. On ties the earliest
/// element wins. Keys that do not compare (such as NaN) never replace the
/// current maximum.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::max;
///
/// let longest = max(|word: &&str| word.len());
/// assert_eq!(longest(vec!["one", "three", "seven"]), Ok("three"));
/// ```
#[inline]
pub fn max<I, F, K>(key: F) -> impl Fn(I) -> Result<I::Item, EmptySequenceError> + Clone
where
    I: IntoIterator,
    F: Fn(&I::Item) -> K + Clone,
    K: PartialOrd,
{
    move |sequence| {
        fold_first("max", sequence, &|current: I::Item, candidate: I::Item| {
            if key(&candidate) > key(&current) {
                candidate
            } else {
                current
            }
        })
    }
}

/// Returns a function that checks whether any element satisfies `predicate`.
///
/// Stops pulling at the first element that satisfies it. Pass
/// [`truthy`](super::truthy) for the default truthiness test.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{any, range};
///
/// let has_multiple_of_seven = any(|value: &u32| value % 7 == 0 && *value > 0);
/// assert!(has_multiple_of_seven(range(10_u32)));
/// assert!(!has_multiple_of_seven(range(7_u32)));
/// ```
#[inline]
pub fn any<I, P>(predicate: P) -> impl Fn(I) -> bool + Clone
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    move |sequence| {
        for element in sequence {
            if predicate(&element) {
                return true;
            }
        }
        false
    }
}

/// Returns a function that checks whether every element satisfies `predicate`.
///
/// Defined by De Morgan's law as "no element fails the predicate":
/// `all(p) == !any(not(p))`. It stops pulling at the first failing element.
/// An empty sequence satisfies every predicate.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::all;
///
/// let all_positive = all(|value: &i32| *value > 0);
/// assert!(all_positive(vec![1, 2, 3]));
/// assert!(!all_positive(vec![1, -2, 3]));
/// assert!(all_positive(Vec::new()));
/// ```
#[inline]
pub fn all<I, P>(predicate: P) -> impl Fn(I) -> bool + Clone
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    let any_fails = any(not(predicate));
    move |sequence| !any_fails(sequence)
}

/// Returns a function that checks whether a sequence contains `value`.
///
/// Equivalent to `any(|element| element == value)`.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::contains;
///
/// assert!(contains('b')("abc".chars()));
/// assert!(!contains(9)(vec![1, 2, 3]));
/// ```
#[inline]
pub fn contains<I, T>(value: T) -> impl Fn(I) -> bool + Clone
where
    I: IntoIterator,
    I::Item: PartialEq<T>,
    T: Clone,
{
    any(move |element: &I::Item| *element == value)
}

/// Returns the first element of a sequence, pulling exactly one element.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{first, iterate};
///
/// assert_eq!(first(iterate(|value: &i32| value * 3)(1)), Some(3));
/// assert_eq!(first(Vec::<i32>::new()), None);
/// ```
#[inline]
pub fn first<I: IntoIterator>(sequence: I) -> Option<I::Item> {
    sequence.into_iter().next()
}

/// Returns the last element of a sequence, draining it completely.
///
/// Never returns on an infinite sequence.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{last, range};
///
/// assert_eq!(last(range(5)), Some(4));
/// assert_eq!(last(range(0)), None);
/// ```
#[inline]
pub fn last<I: IntoIterator>(sequence: I) -> Option<I::Item> {
    let mut last = None;
    for element in sequence {
        last = Some(element);
    }
    last
}

/// Returns a function that calls `function` on every element, draining the sequence.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use seqpipe::sequence::for_each;
///
/// let seen = RefCell::new(Vec::new());
/// for_each(|value: i32| seen.borrow_mut().push(value * 10))(vec![1, 2]);
/// assert_eq!(seen.into_inner(), vec![10, 20]);
/// ```
#[inline]
pub fn for_each<I, F>(function: F) -> impl Fn(I) + Clone
where
    I: IntoIterator,
    F: FnMut(I::Item) + Clone,
{
    move |sequence| sequence.into_iter().for_each(function.clone())
}

/// Counts the elements of a sequence, draining it.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::length;
///
/// assert_eq!(length("héllo".chars()), 5);
/// assert_eq!(length(Vec::<u8>::new()), 0);
/// ```
#[inline]
pub fn length<I: IntoIterator>(sequence: I) -> usize {
    sequence.into_iter().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{iterate, truthy};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_reduce_single_element_is_returned_untouched() {
        let calls = Cell::new(0);
        let subtract = reduce(|left: i32, right: i32| {
            calls.set(calls.get() + 1);
            left - right
        });
        assert_eq!(subtract(vec![42]), Ok(42));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_reduce_folds_left() {
        let subtract = reduce(|left: i32, right: i32| left - right);
        // ((10 - 1) - 2) - 3 = 4
        assert_eq!(subtract(vec![10, 1, 2, 3]), Ok(4));
    }

    #[rstest]
    fn test_reduce_with_reuses_initial() {
        let push = reduce_with(
            |mut accumulator: Vec<i32>, value: i32| {
                accumulator.push(value);
                accumulator
            },
            vec![0],
        );
        assert_eq!(push(vec![1]), vec![0, 1]);
        assert_eq!(push(vec![2]), vec![0, 2]);
    }

    #[rstest]
    #[case(vec![], 0.0)]
    #[case(vec![0.5, 0.25], 0.75)]
    fn test_sum_of_floats(#[case] values: Vec<f64>, #[case] expected: f64) {
        assert!((sum(values) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_min_max_keep_first_on_ties() {
        let pairs = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        assert_eq!(min(|pair: &(i32, char)| pair.0)(pairs.clone()), Ok((0, 'b')));
        assert_eq!(max(|pair: &(i32, char)| pair.0)(pairs), Ok((1, 'a')));
    }

    #[rstest]
    fn test_min_max_empty_fail() {
        let smallest = min(|value: &i32| *value);
        let largest = max(|value: &i32| *value);
        assert_eq!(smallest(Vec::new()), Err(EmptySequenceError { operation: "min" }));
        assert_eq!(largest(Vec::new()), Err(EmptySequenceError { operation: "max" }));
    }

    #[rstest]
    fn test_max_ignores_nan_keys() {
        let largest = max(|value: &f64| *value);
        assert_eq!(largest(vec![1.0, f64::NAN, 3.0]), Ok(3.0));
    }

    #[rstest]
    fn test_any_short_circuits() {
        let calls = Cell::new(0);
        let found = any(|value: &u64| {
            calls.set(calls.get() + 1);
            *value == 3
        })(iterate(|value: &u64| value + 1)(0));
        assert!(found);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_all_short_circuits() {
        let calls = Cell::new(0);
        let holds = all(|value: &u64| {
            calls.set(calls.get() + 1);
            *value < 2
        })(iterate(|value: &u64| value + 1)(0));
        assert!(!holds);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(vec![], false, true)]
    #[case(vec![0, 0], false, false)]
    #[case(vec![0, 2], true, false)]
    #[case(vec![1, 2], true, true)]
    fn test_truthiness_defaults(
        #[case] values: Vec<i32>,
        #[case] expected_any: bool,
        #[case] expected_all: bool,
    ) {
        assert_eq!(any(truthy)(values.clone()), expected_any);
        assert_eq!(all(truthy)(values), expected_all);
    }

    #[rstest]
    fn test_contains_on_strings() {
        let has_needle = contains("needle");
        assert!(has_needle(vec!["hay", "needle"]));
        assert!(!has_needle(vec!["hay"]));
    }

    #[rstest]
    fn test_first_pulls_one_element() {
        let pulls = Cell::new(0);
        let source = (0..).inspect(|_| pulls.set(pulls.get() + 1));
        assert_eq!(first(source), Some(0));
        assert_eq!(pulls.get(), 1);
    }

    #[rstest]
    fn test_last_drains() {
        assert_eq!(last("abc".chars()), Some('c'));
        assert_eq!(last(Vec::<i32>::new()), None);
    }

    #[rstest]
    fn test_length_counts() {
        assert_eq!(length(0..17), 17);
    }
}
