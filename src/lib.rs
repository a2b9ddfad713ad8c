//! # seqpipe
//!
//! Lazy, composable sequence combinators and left-to-right function
//! composition.
//!
//! ## Overview
//!
//! The library has two layers:
//!
//! - **Sequence Combinators**: sources (`range`, `iterate`), transforms
//!   (`map`, `filter`, `take`, `skip`, `flatten`, `aperture`, ...) and
//!   aggregations (`reduce`, `sum`, `min`, `any`, `first`, ...). Every lazy
//!   combinator is a pull-based [`Iterator`] adapter: nothing runs until the
//!   consumer asks for the next element.
//! - **Function Composition**: the [`pipe!`] macro and the [`Pipeline`](compose::Pipeline)
//!   builder chain unary functions left-to-right; [`not`](compose::not)
//!   inverts a predicate.
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence combinators (implies `compose`)
//! - `compose`: Function composition utilities
//! - `tracing`: Structured diagnostic events through the `tracing` crate
//! - `fxhash`: Use `FxHash` for the seen-set of `remove_duplicates`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqpipe::prelude::*;
//!
//! let sum_of_even_squares = pipe!(
//!     filter(|value: &u32| value % 2 == 0),
//!     map(|value: u32| value * value),
//!     sum,
//! );
//!
//! assert_eq!(sum_of_even_squares(range(7_u32)), 56);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites stay free of `cfg` noise.
#[cfg(feature = "tracing")]
macro_rules! sequence_event {
    (debug, $($arguments:tt)*) => {
        ::tracing::debug!(target: "seqpipe::sequence", $($arguments)*)
    };
    (trace, $($arguments:tt)*) => {
        ::tracing::trace!(target: "seqpipe::sequence", $($arguments)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sequence_event {
    ($level:ident, $($arguments:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use sequence_event;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use seqpipe::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;
