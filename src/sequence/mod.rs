//! Lazy sequence combinators.
//!
//! A *sequence* is anything implementing [`IntoIterator`]; a traversal of it
//! is an [`Iterator`]. The combinators in this module build new sequences out
//! of existing ones, or drain a sequence into a single value.
//!
//! # Evaluation Model
//!
//! Evaluation is pull-based: a combinator does nothing until its consumer
//! asks for the next element, and then does only the work needed to produce
//! that one element. Each lazy combinator is an adapter struct wrapping its
//! source iterator; all traversal state (cursors, counters, the single
//! element of lookahead in [`aperture`]) lives in that struct and is dropped
//! with it. Abandoning a traversal midway is always safe.
//!
//! Once an adapter reports exhaustion it keeps reporting it, provided its
//! source does (every adapter is a [`FusedIterator`](std::iter::FusedIterator)
//! over fused sources, and the ones that decide exhaustion themselves, such
//! as [`take`] and [`take_while`], are fused unconditionally).
//!
//! # Calling Convention
//!
//! Combinators with parameters are curried: `map(f)` returns a function from
//! a sequence to a sequence. These functions are `Fn + Clone`, so they can be
//! reused, chained with [`pipe!`](crate::pipe!) and nested inside other
//! stages. Combinators without parameters (`flatten`, `aperture`, `sum`,
//! `first`, ...) are plain generic functions and slot into a pipeline as is.
//!
//! ```
//! use seqpipe::pipe;
//! use seqpipe::sequence::{aperture, filter, iterate, length, take_while};
//!
//! // Collatz sequence from 27: how many steps go up?
//! let collatz = iterate(|value: &u64| if value % 2 == 0 { value / 2 } else { 3 * value + 1 });
//! let rising_steps = pipe!(
//!     collatz,
//!     take_while(|value: &u64| *value != 1),
//!     aperture,
//!     filter(|(before, after): &(u64, u64)| after > before),
//!     length,
//! );
//!
//! assert_eq!(rising_steps(27), 40);
//! ```
//!
//! # Sources
//!
//! - [`range`], [`range_with`]: arithmetic progressions
//! - [`iterate`]: repeated application of a function
//!
//! # Transforms
//!
//! - [`map`], [`filter`], [`flatten`], [`flat_map`]
//! - [`take`], [`take_while`], [`skip`], [`skip_while`]
//! - [`aperture`], [`zip_with_index`], [`combinations2`]
//! - [`column`], [`transpose`], [`entries`]
//! - [`split`]
//!
//! # Aggregations
//!
//! - [`reduce`], [`reduce_with`], [`sum`], [`product`], [`min`], [`max`]
//! - [`any`], [`all`], [`contains`]
//! - [`first`], [`last`], [`length`], [`for_each`]
//! - [`join`], [`collect_to_array`], [`collect`], [`from_entries`],
//!   [`remove_duplicates`]
//!
//! # Errors
//!
//! Only the unseeded folds ([`reduce`], [`min`], [`max`]) can fail, with
//! [`EmptySequenceError`]. [`first`] and [`last`] return `None` on an empty
//! sequence.

mod aggregate;
mod bounded;
mod collect;
mod error;
mod grid;
mod numeric;
mod source;
mod text;
mod transform;
mod window;

pub use aggregate::{
    all, any, contains, first, for_each, last, length, max, min, product, reduce, reduce_with,
    sum,
};
pub use bounded::{Skip, SkipWhile, Take, TakeWhile, skip, skip_while, take, take_while};
pub use collect::{
    Entries, collect, collect_to_array, entries, from_entries, remove, remove_duplicates,
};
pub use error::EmptySequenceError;
pub use grid::{Column, Transpose, column, transpose};
pub use numeric::{MultiplicativeIdentity, Step, Truthy, is_between, modulo, truthy};
pub use source::{Iterate, Range, RangeOptions, iterate, range, range_with};
pub use text::{Split, join, split};
pub use transform::{FlatMap, Filter, Flatten, Map, filter, flat_map, flatten, map};
pub use window::{Aperture, Combinations2, ZipWithIndex, aperture, combinations2, zip_with_index};
