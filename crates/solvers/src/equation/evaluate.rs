use rootscan_core::Function;

use super::Error;

/// The value of the target function at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub residual: f64,
}

impl Evaluation {
    /// Creates an evaluation from a known value.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }
}

/// Evaluates `f` at `x`.
///
/// # Errors
///
/// Returns [`Error::NonFiniteResidual`] if `f(x)` is NaN or infinite.
pub fn evaluate<F: Function>(f: &F, x: f64) -> Result<Evaluation, Error> {
    let residual = f.call(x);
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(Evaluation { x, residual })
}

/// Returns the point where the line through `a` and `b` crosses zero.
///
/// The line is extrapolated from `b`, matching
/// `b.x - (b.x - a.x) / (f(b) - f(a)) * f(b)`.
///
/// # Errors
///
/// Returns [`Error::DegenerateBracket`] if `a` and `b` have equal values.
pub(crate) fn secant_point(a: Evaluation, b: Evaluation) -> Result<f64, Error> {
    #[allow(clippy::float_cmp)]
    if a.residual == b.residual {
        return Err(Error::DegenerateBracket {
            low: a.x,
            high: b.x,
            value: a.residual,
        });
    }
    Ok(b.x - (b.x - a.x) / (b.residual - a.residual) * b.residual)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluate_records_value() {
        let eval = evaluate(&|x: f64| x * x - 2.0, 3.0).expect("finite");
        assert_eq!(eval, Evaluation::new(3.0, 7.0));
    }

    #[test]
    fn evaluate_rejects_non_finite() {
        let result = evaluate(&|x: f64| 1.0 / x, 0.0);
        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));

        let result = evaluate(&|x: f64| (x - 2.0).sqrt(), 1.0);
        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }

    #[test]
    fn secant_point_of_a_line_is_its_root() {
        // f(x) = 2x - 1
        let a = Evaluation::new(0.0, -1.0);
        let b = Evaluation::new(1.0, 1.0);
        assert_relative_eq!(secant_point(a, b).expect("distinct values"), 0.5);
    }

    #[test]
    fn secant_point_rejects_equal_values() {
        let a = Evaluation::new(0.0, 0.24);
        let b = Evaluation::new(1.0, 0.24);
        assert!(matches!(
            secant_point(a, b),
            Err(Error::DegenerateBracket { .. })
        ));
    }
}
