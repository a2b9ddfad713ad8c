//! A value-level pipeline builder.
//!
//! [`Pipeline`] is the builder counterpart of [`pipe!`](crate::pipe!): where
//! the macro needs every stage at once, a `Pipeline` can be assembled one
//! stage at a time, passed around, and extended later.

/// An ordered chain of unary functions, applied left-to-right.
///
/// `Pipeline::new(f).then(g).then(h).run(x)` is equivalent to `h(g(f(x)))`.
///
/// A pipeline holds only its stages. Running it does not consume it, so the
/// same pipeline can be applied to any number of inputs.
///
/// # Type Parameters
///
/// * `F` - The composed function
///
/// # Examples
///
/// ```
/// use seqpipe::compose::Pipeline;
/// use seqpipe::sequence::{filter, sum};
///
/// let sum_of_odds = Pipeline::new(filter(|value: &i32| value % 2 != 0)).then(sum);
///
/// assert_eq!(sum_of_odds.run(vec![1, 2, 3, 4, 5]), 9);
/// assert_eq!(sum_of_odds.run(vec![2, 4]), 0);
/// ```
#[derive(Clone, Copy)]
pub struct Pipeline<F> {
    function: F,
}

impl<F> Pipeline<F> {
    /// Creates a pipeline with a single stage.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Appends a stage to the end of the pipeline.
    ///
    /// The new stage receives the output of every stage before it. The
    /// types are checked here, when the pipeline is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqpipe::compose::Pipeline;
    ///
    /// let pipeline = Pipeline::new(|x: i32| x + 1).then(|x: i32| x.to_string());
    /// assert_eq!(pipeline.run(41), "42");
    /// ```
    #[inline]
    pub fn then<A, B, C, G>(self, next: G) -> Pipeline<impl Fn(A) -> C>
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        let function = self.function;
        Pipeline::new(move |input| next(function(input)))
    }

    /// Applies the pipeline to an input.
    #[inline]
    pub fn run<A, B>(&self, input: A) -> B
    where
        F: Fn(A) -> B,
    {
        (self.function)(input)
    }

    /// Returns the composed function.
    #[inline]
    pub fn into_function(self) -> F {
        self.function
    }
}

impl<F> std::fmt::Debug for Pipeline<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_single_stage() {
        let pipeline = Pipeline::new(|x: i32| x * 2);
        assert_eq!(pipeline.run(21), 42);
    }

    #[test]
    fn test_pipeline_applies_left_to_right() {
        let pipeline = Pipeline::new(|x: i32| x + 1)
            .then(|x: i32| x * 2)
            .then(|x: i32| x - 3);
        // ((5 + 1) * 2) - 3 = 9
        assert_eq!(pipeline.run(5), 9);
    }

    #[test]
    fn test_pipeline_into_function() {
        let function = Pipeline::new(|text: &str| text.len())
            .then(|length: usize| length * 2)
            .into_function();
        assert_eq!(function("abc"), 6);
    }

    #[test]
    fn test_pipeline_debug() {
        let pipeline = Pipeline::new(|x: i32| x);
        assert_eq!(format!("{pipeline:?}"), "Pipeline { .. }");
    }
}
