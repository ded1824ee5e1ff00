use thiserror::Error;

/// Errors that can end an extremum search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The interval bounds are non-finite or equal.
    #[error("invalid interval [{low}, {high}]")]
    InvalidInterval { low: f64, high: f64 },

    /// The function returned NaN or an infinity.
    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    /// The iteration cap was reached before the interval narrowed enough.
    ///
    /// `x` and `value` describe the best point seen.
    #[error("no convergence after {iters} iterations: best point f({x}) = {value}")]
    NonConvergence { x: f64, value: f64, iters: usize },
}
