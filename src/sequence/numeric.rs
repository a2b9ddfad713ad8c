//! Numeric and truthiness helpers used by the combinators.
//!
//! - [`Step`]: what `range` needs from its element type
//! - [`MultiplicativeIdentity`]: the `1` that seeds `product`
//! - [`Truthy`]: the default predicate of `any` and `all`
//! - [`is_between`], [`modulo`]: small numeric utilities

use std::ops::{Add, Rem};

/// A numeric type that can drive a [`range`](super::range).
///
/// Implemented for every primitive integer and float type.
pub trait Step: Copy + PartialOrd {
    /// The additive identity, the default `start` of a range.
    const ZERO: Self;

    /// The multiplicative identity, the default `step` of a range.
    const ONE: Self;

    /// Adds `step` to `self`, or returns `None` if the result is not
    /// representable. Floats never overflow.
    fn checked_advance(self, step: Self) -> Option<Self>;
}

/// Types with a multiplicative identity (`1`).
///
/// The additive identity is taken from [`Default`], as numeric defaults are
/// `0`; the multiplicative one needs its own trait.
pub trait MultiplicativeIdentity {
    /// Returns `1`.
    fn one() -> Self;
}

macro_rules! impl_integer_numeric {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Step for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }

            impl MultiplicativeIdentity for $integer {
                #[inline]
                fn one() -> Self {
                    1
                }
            }

            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

macro_rules! impl_float_numeric {
    ($($float:ty),* $(,)?) => {
        $(
            impl Step for $float {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn checked_advance(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }

            impl MultiplicativeIdentity for $float {
                #[inline]
                fn one() -> Self {
                    1.0
                }
            }

            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_integer_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_numeric!(f32, f64);

/// Truthiness: whether a value counts as "present".
///
/// This is the default test of [`any`](super::any) and [`all`](super::all)
/// when used through [`truthy`].
///
/// | Type | Truthy when |
/// |------|-------------|
/// | `bool` | `true` |
/// | integers | non-zero |
/// | floats | non-zero and not NaN |
/// | `str`, `String` | non-empty |
/// | `[T]`, `Vec<T>` | non-empty |
/// | `Option<T>` | `Some` |
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// The truthiness predicate, for use as the default of `any` and `all`.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::{all, any, truthy};
///
/// assert!(any(truthy)(vec![0, 0, 3]));
/// assert!(!all(truthy)(vec!["a", "", "c"]));
/// ```
#[inline]
pub fn truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

/// Returns a predicate testing `start <= value <= end_inclusive`.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::is_between;
///
/// let is_digit_value = is_between(0, 9);
/// assert!(is_digit_value(&0));
/// assert!(is_digit_value(&9));
/// assert!(!is_digit_value(&10));
/// ```
#[inline]
pub fn is_between<T>(start: T, end_inclusive: T) -> impl Fn(&T) -> bool + Clone
where
    T: PartialOrd + Clone,
{
    move |value: &T| start <= *value && *value <= end_inclusive
}

/// Remainder whose sign follows the divisor: `((dividend % divisor) + divisor) % divisor`.
///
/// Unlike `%`, the result for a positive divisor is never negative, which
/// makes it suitable for wrapping indices.
///
/// # Panics
///
/// Panics on an integer `divisor` of zero, like `%`.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::modulo;
///
/// assert_eq!(modulo(7, 3), 1);
/// assert_eq!(modulo(-7, 3), 2);
/// assert_eq!(modulo(7, -3), -2);
/// ```
#[inline]
pub fn modulo<T>(dividend: T, divisor: T) -> T
where
    T: Copy + Add<Output = T> + Rem<Output = T>,
{
    ((dividend % divisor) + divisor) % divisor
}
