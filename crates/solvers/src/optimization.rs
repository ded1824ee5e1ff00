//! Solvers that find local extrema of `f` on a closed interval.
//!
//! # Solvers
//!
//! - [`golden_section`] — golden-ratio interval shrinking toward a minimum
//!   or a maximum, chosen with a [`Goal`]
//! - [`bisection`] — five-point halving that converges to a local extremum
//!   of either kind
//!
//! Both stop once the search interval is no wider than [`Config::x_tol`],
//! and both assume the interval holds a single extremum. With several, they
//! return one of them without saying which.

mod config;
mod error;
mod event;
mod solution;

pub mod bisection;
pub mod golden_section;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Point};
pub use solution::{Solution, Status};

pub use crate::equation::Action;

use rootscan_core::Function;

/// Which kind of extremum a search looks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    #[default]
    Minimum,
    Maximum,
}

impl Goal {
    /// Maps a function value to a score where lower is better.
    #[must_use]
    pub fn score(self, value: f64) -> f64 {
        match self {
            Goal::Minimum => value,
            Goal::Maximum => -value,
        }
    }

    /// Returns true if `a` is at least as good as `b`.
    #[must_use]
    pub fn prefers(self, a: Point, b: Point) -> bool {
        self.score(a.value) <= self.score(b.value)
    }
}

/// Evaluates `f` at `x`, rejecting non-finite values.
fn evaluate<F: Function>(f: &F, x: f64) -> Result<Point, Error> {
    let value = f.call(x);
    if !value.is_finite() {
        return Err(Error::NonFiniteValue { x, value });
    }
    Ok(Point::new(x, value))
}

/// Validates interval bounds and returns them in `low < high` order.
fn validate_interval(interval: [f64; 2]) -> Result<(f64, f64), Error> {
    let [a, b] = interval;

    #[allow(clippy::float_cmp)]
    if !a.is_finite() || !b.is_finite() || a == b {
        return Err(Error::InvalidInterval { low: a, high: b });
    }

    if a < b { Ok((a, b)) } else { Ok((b, a)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximum_scores_are_negated() {
        let low = Point::new(0.0, -1.0);
        let high = Point::new(1.0, 2.0);

        assert!(Goal::Minimum.prefers(low, high));
        assert!(Goal::Maximum.prefers(high, low));
        assert!(Goal::Maximum.prefers(low, low));
    }

    #[test]
    fn interval_is_normalized() {
        assert_eq!(validate_interval([3.0, -1.0]), Ok((-1.0, 3.0)));
        assert_eq!(validate_interval([-1.0, 3.0]), Ok((-1.0, 3.0)));
    }

    #[test]
    fn degenerate_intervals_are_rejected() {
        for interval in [[1.0, 1.0], [f64::NAN, 1.0], [0.0, f64::INFINITY]] {
            assert!(matches!(
                validate_interval(interval),
                Err(Error::InvalidInterval { .. })
            ));
        }
    }

    #[test]
    fn evaluate_rejects_non_finite() {
        let result = evaluate(&|x: f64| x.ln(), -1.0);
        assert!(matches!(result, Err(Error::NonFiniteValue { .. })));
    }
}
