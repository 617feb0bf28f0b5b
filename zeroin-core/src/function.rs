/// A scalar real function of one real variable.
///
/// Implementations must be deterministic, meaning the same input must always
/// produce the same output. Solvers evaluate the function strictly
/// sequentially and propagate any evaluation failure to the caller.
pub trait UnivariateFn {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails, for example because `x` is
    /// outside the function's domain.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation so plain closures can be used directly.
impl<F> UnivariateFn for F
where
    F: Fn(f64) -> f64,
{
    type Error = std::convert::Infallible;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// A wrapper that allows using fallible closures as functions.
pub struct Fallible<F> {
    function: F,
}

impl<F> Fallible<F> {
    /// Creates a new fallible closure-based function.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, E> UnivariateFn for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        (self.function)(x)
    }
}
