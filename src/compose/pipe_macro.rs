//! The `pipe!` macro for left-to-right function composition.
//!
//! This module provides the [`pipe!`] macro which builds a single function
//! out of a list of unary functions, applying them from left to right.

/// Composes functions from left to right.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// This is the "data flow" style of composition: the value flows through the
/// stages in the order they are written. Nothing is applied until the
/// returned function is called, and the returned function holds no data of
/// its own, so it can be called any number of times with different inputs
/// (as long as every stage implements [`Fn`]).
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Composes any number of functions
///
/// # Type Requirements
///
/// The output type of each stage must be the input type of the next one.
/// A mismatch is a compile error at the `pipe!` invocation.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use seqpipe::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipe!(f, g)(x) = g(f(x)) = add_one(double(5)) = add_one(10) = 11
/// let pipeline = pipe!(double, add_one);
/// assert_eq!(pipeline(5), 11);
/// ```
///
/// ## Type conversion through a pipeline
///
/// ```
/// use seqpipe::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = pipe!(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// ## Sequence pipelines
///
/// ```
/// use seqpipe::pipe;
/// use seqpipe::sequence::{collect_to_array, map, split};
///
/// let parse_csv = pipe!(
///     split(","),
///     map(|field: &str| field.parse::<i32>().unwrap_or_default()),
///     collect_to_array,
/// );
///
/// assert_eq!(parse_csv("1,2,3"), vec![1, 2, 3]);
/// assert_eq!(parse_csv("40,2"), vec![40, 2]);
/// ```
#[macro_export]
macro_rules! pipe {
    // Single function: returned as is
    ($function:expr $(,)?) => {
        $function
    };

    // Two or more functions: apply the first, then the rest recursively
    // pipe!(f, g, h, ...) = |x| pipe!(g, h, ...)(f(x))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
