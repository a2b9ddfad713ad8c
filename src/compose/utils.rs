//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`not`]: Predicate negation
//!
//! Both are stateless; they hold nothing beyond the function they wrap.

/// Returns the value unchanged.
///
/// The identity function is the unit element of pipelines:
/// - `pipe!(identity, f)` is equivalent to `f`
/// - `pipe!(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use seqpipe::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a predicate that negates the result of `predicate`.
///
/// Predicates take their argument by reference, so a negated predicate can
/// be handed to any combinator that accepts the original one (`filter`,
/// `take_while`, `any`, ...).
///
/// # Laws
///
/// - **Involution**: `not(not(p))(x) == p(x)`
/// - **Complement**: `not(p)(x) == !p(x)`
///
/// # Examples
///
/// ```
/// use seqpipe::compose::not;
///
/// let is_blank = |text: &&str| text.trim().is_empty();
/// let has_content = not(is_blank);
///
/// assert!(has_content(&"hello"));
/// assert!(!has_content(&"   "));
/// ```
#[inline]
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool + Clone
where
    T: ?Sized,
    P: Fn(&T) -> bool + Clone,
{
    move |value: &T| !predicate(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_identity_in_const_context() {
        const ANSWER: u32 = identity(42);
        assert_eq!(ANSWER, 42);
    }

    #[test]
    fn test_not_inverts_predicate() {
        let is_positive = |value: &i32| *value > 0;
        let is_not_positive = not(is_positive);

        assert!(is_not_positive(&0));
        assert!(is_not_positive(&-3));
        assert!(!is_not_positive(&7));
    }

    #[test]
    fn test_not_is_an_involution() {
        let is_even = |value: &i32| value % 2 == 0;
        let twice_negated = not(not(is_even));

        for value in -5..5 {
            assert_eq!(twice_negated(&value), is_even(&value));
        }
    }

    #[test]
    fn test_not_on_unsized_argument() {
        let is_empty = |text: &str| text.is_empty();
        let is_filled = not(is_empty);

        assert!(is_filled("x"));
        assert!(!is_filled(""));
    }
}
