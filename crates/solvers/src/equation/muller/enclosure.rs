use crate::equation::{Error, Evaluation, evaluate::secant_point};

/// The sign change a Muller refinement has narrowed down so far.
///
/// Starts as the bracket endpoints and shrinks with every evaluation,
/// keeping one endpoint on each side of the sign change.
#[derive(Debug, Clone, Copy)]
pub(super) struct Enclosure {
    a: Evaluation,
    b: Evaluation,
}

impl Enclosure {
    pub(super) fn new(a: Evaluation, b: Evaluation) -> Self {
        Self { a, b }
    }

    /// Returns true if `x` lies between the endpoints.
    ///
    /// NaN is never contained.
    pub(super) fn contains(&self, x: f64) -> bool {
        let (low, high) = if self.a.x <= self.b.x {
            (self.a.x, self.b.x)
        } else {
            (self.b.x, self.a.x)
        };
        low <= x && x <= high
    }

    /// Replaces the endpoint on the same side of the sign change as `eval`.
    pub(super) fn shrink(&mut self, eval: Evaluation) {
        if self.a.residual * eval.residual < 0.0 {
            self.b = eval;
        } else {
            self.a = eval;
        }
    }

    /// Returns the false-position estimate on the enclosure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBracket`] if both endpoints share a value.
    pub(super) fn false_position(&self) -> Result<f64, Error> {
        secant_point(self.a, self.b)
    }
}
