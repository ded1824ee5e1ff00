use thiserror::Error;

/// Errors that can end the refinement of a single bracket.
///
/// During a scan these are recorded per bracket and never abort the scan.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// A secant step was requested through two points with equal values.
    #[error("degenerate secant step: f({low}) and f({high}) are both {value}")]
    DegenerateBracket { low: f64, high: f64, value: f64 },

    /// The local quadratic of a Muller step has no real root.
    #[error("complex root rejected: discriminant {discriminant} is negative at x = {x}")]
    ComplexRootRejected { x: f64, discriminant: f64 },

    /// Two abscissas of a Muller triple coincide.
    #[error("coincident abscissas at x = {x}")]
    CoincidentPoints { x: f64 },

    /// The iteration cap was reached before the residual test passed.
    ///
    /// `x` and `residual` describe the best estimate seen.
    #[error("no convergence after {iters} iterations: best estimate f({x}) = {residual}")]
    NonConvergence { x: f64, residual: f64, iters: usize },

    /// The function returned NaN or an infinity.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}
