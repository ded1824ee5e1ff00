use crate::equation::{Error, Evaluation, evaluate::secant_point};

/// Which formula produced a Muller estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Root of the quadratic through the triple.
    Quadratic,

    /// Secant through the two newest points, used when the triple is
    /// collinear.
    Linear,

    /// False-position step on the sign change, used when the quadratic
    /// estimate left it.
    Confined,
}

/// A new Muller estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub x: f64,
    pub kind: StepKind,
}

/// Performs one Muller iteration on the triple `[x0, x1, x2]`.
///
/// With `h1 = x1 - x0`, `h2 = x2 - x1`, divided differences
/// `delta1 = (f1 - f0) / h1`, `delta2 = (f2 - f1) / h2`, and curvature
/// `d = (delta2 - delta1) / (h1 + h2)`, the local quadratic around `x2` has
/// slope `b = delta2 + h2 * d`. The estimate is
///
/// ```text
/// x2 - 2 * f2 / E,    E = b ± sqrt(b^2 - 4 * f2 * d)
/// ```
///
/// where the sign of the root is chosen to give `E` the larger magnitude,
/// avoiding cancellation in the division.
///
/// When `delta1 == delta2` the points are collinear and the secant through
/// `x1` and `x2` is used instead.
///
/// # Errors
///
/// - [`Error::CoincidentPoints`] if two abscissas are equal.
/// - [`Error::DegenerateBracket`] if a collinear triple has `f1 == f2`.
/// - [`Error::ComplexRootRejected`] if the discriminant is negative.
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn step(triple: [Evaluation; 3]) -> Result<Step, Error> {
    let [p0, p1, p2] = triple;

    let h1 = p1.x - p0.x;
    let h2 = p2.x - p1.x;
    if h1 == 0.0 {
        return Err(Error::CoincidentPoints { x: p1.x });
    }
    if h2 == 0.0 || h1 + h2 == 0.0 {
        return Err(Error::CoincidentPoints { x: p2.x });
    }

    let delta1 = (p1.residual - p0.residual) / h1;
    let delta2 = (p2.residual - p1.residual) / h2;
    if delta1 == delta2 {
        return Ok(Step {
            x: secant_point(p1, p2)?,
            kind: StepKind::Linear,
        });
    }

    let d = (delta2 - delta1) / (h1 + h2);
    let b = delta2 + h2 * d;
    let discriminant = b * b - 4.0 * p2.residual * d;
    if discriminant < 0.0 {
        return Err(Error::ComplexRootRejected {
            x: p2.x,
            discriminant,
        });
    }

    let root = discriminant.sqrt();
    let e = if (b - root).abs() < (b + root).abs() {
        b + root
    } else {
        b - root
    };

    // `e` vanishes only when f2 is already zero.
    let x = if e == 0.0 {
        p2.x
    } else {
        p2.x - 2.0 * p2.residual / e
    };

    Ok(Step {
        x,
        kind: StepKind::Quadratic,
    })
}
