//! Error types for the sequence combinators.
//!
//! Only unseeded folds can fail: with no initial accumulator and no first
//! element there is nothing to return. Seeded folds are total, and lookups
//! such as `first` and `last` report absence with `Option`.

/// Represents an unseeded fold applied to an empty sequence.
///
/// Returned by [`reduce`](super::reduce), [`min`](super::min) and
/// [`max`](super::max). The fold either completes over every element or
/// returns this error; no partial accumulator is ever exposed.
///
/// # Examples
///
/// ```rust
/// use seqpipe::sequence::{EmptySequenceError, max};
///
/// let longest = max(|word: &&str| word.len());
/// let error = longest(Vec::<&str>::new()).unwrap_err();
///
/// assert_eq!(error, EmptySequenceError { operation: "max" });
/// assert_eq!(
///     format!("{error}"),
///     "max: sequence is empty and no initial value was given"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptySequenceError {
    /// The name of the combinator that was applied to the empty sequence.
    pub operation: &'static str,
}

impl EmptySequenceError {
    pub(crate) fn new(operation: &'static str) -> Self {
        crate::sequence_event!(debug, operation, "unseeded fold over an empty sequence");
        Self { operation }
    }
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: sequence is empty and no initial value was given",
            self.operation
        )
    }
}

impl std::error::Error for EmptySequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_error_display() {
        let error = EmptySequenceError::new("reduce");
        assert_eq!(
            format!("{error}"),
            "reduce: sequence is empty and no initial value was given"
        );
    }

    #[test]
    fn test_empty_sequence_error_equality() {
        assert_eq!(EmptySequenceError::new("min"), EmptySequenceError { operation: "min" });
        assert_ne!(EmptySequenceError::new("min"), EmptySequenceError::new("max"));
    }

    #[test]
    fn test_empty_sequence_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(EmptySequenceError::new("max"));
        assert!(error.source().is_none());
    }
}
