use super::Point;

/// Indicates how an extremum search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The interval narrowed to the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an extremum search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Location of the extremum estimate.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Iteration count when the search finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn from_point(point: Point, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: point.x,
            value: point.value,
            iters,
        }
    }
}
