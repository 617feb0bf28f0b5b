use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a Brent solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no root in bracket: f({min}) = {f_min}, f({max}) = {f_max}")]
    NoBracket {
        min: f64,
        max: f64,
        f_min: f64,
        f_max: f64,
    },

    #[error("function evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },

    #[error("no convergence after {max_iters} iterations")]
    MaxIters { max_iters: usize },
}
