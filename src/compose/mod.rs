//! Function composition utilities.
//!
//! This module provides the Composition Layer: tools for chaining unary
//! functions left-to-right and for building predicates out of other
//! predicates.
//!
//! # Overview
//!
//! - [`pipe!`]: Compose functions left-to-right into a single function
//! - [`Pipeline`]: A value-level builder for the same composition, assembled
//!   step by step
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`not`]: Inverts a predicate
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use seqpipe::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(f, g)(x) = g(f(x))
//! let pipeline = pipe!(double, add_one);
//! assert_eq!(pipeline(5), 11); // add_one(double(5)) = 11
//! ```
//!
//! ## Negating a predicate
//!
//! ```
//! use seqpipe::compose::not;
//!
//! let is_even = |value: &i32| value % 2 == 0;
//! let is_odd = not(is_even);
//!
//! assert!(is_odd(&3));
//! assert!(!is_odd(&4));
//! ```
//!
//! # Mathematical Background
//!
//! A pipeline reads left-to-right:
//!
//! ```text
//! pipe(f, g, h)(x) = h(g(f(x)))
//! ```
//!
//! This matches the mental model of data flowing through a chain of
//! sequence combinators.
//!
//! # Laws
//!
//! ## Pipe Laws
//!
//! - **Associativity**: `pipe!(pipe!(f, g), h) == pipe!(f, pipe!(g, h))`
//! - **Identity**: `pipe!(identity, f) == f == pipe!(f, identity)`
//!
//! ## Not Laws
//!
//! - **Involution**: `not(not(p)) == p`

mod pipe_macro;
mod pipeline;
mod utils;

pub use pipeline::Pipeline;
pub use utils::{identity, not};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::pipe;
