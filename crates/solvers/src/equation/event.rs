use super::{Bracket, Evaluation, muller::StepKind};

/// Event emitted by a refiner after each new evaluation.
///
/// The seed evaluations at the bracket endpoints are not reported; the
/// first event carries `iter == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The bracket being refined.
    pub bracket: Bracket,

    /// Iteration counter (1-based within the refinement loop).
    pub iter: usize,

    /// The newest estimate and its residual.
    pub eval: Evaluation,

    /// Method-specific view of the points the estimate came from.
    pub window: Window,
}

/// The points a refiner holds after an iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Window {
    /// Secant refiner: the sign change `[low, high]` after the update.
    Secant { low: f64, high: f64 },

    /// Muller refiner: the shifted triple, newest estimate last.
    Muller {
        triple: [f64; 3],

        /// Which formula produced the newest estimate.
        step: StepKind,
    },
}

impl Event {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the evaluated x.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }
}
