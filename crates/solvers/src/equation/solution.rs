use super::{Bracket, Evaluation};

/// Indicates how a refinement finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The squared residual satisfied the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of refining one bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final refiner status.
    pub status: Status,

    /// The bracket that was refined.
    pub bracket: Bracket,

    /// Root estimate.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// Iteration count when the refiner finished.
    pub iters: usize,
}

impl Solution {
    /// Constructs a solution from an evaluation.
    pub(super) fn from_eval(
        bracket: Bracket,
        eval: Evaluation,
        status: Status,
        iters: usize,
    ) -> Self {
        Self {
            status,
            bracket,
            x: eval.x,
            residual: eval.residual,
            iters,
        }
    }
}
