/// The result of a Brent solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Converged root estimate.
    pub x: f64,
    /// Function value at the root estimate.
    pub residual: f64,
    /// Iteration count when the solver converged.
    ///
    /// Zero means an endpoint already satisfied the residual tolerance.
    pub iters: usize,
}
