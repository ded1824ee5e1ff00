/// A point with its function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub value: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, value: f64) -> Self {
        Self { x, value }
    }
}

/// Event emitted by an extremum search after each new evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the search loop).
    pub iter: usize,

    /// The point evaluated in this iteration.
    pub point: Point,

    /// The search interval `[low, high]` after the update.
    pub interval: [f64; 2],
}
