//! Five-point bisection toward a local extremum.
//!
//! # Algorithm
//!
//! The search holds the endpoints and the midpoint of its interval and
//! evaluates the two quarter points. A quarter point lies at an extremum of
//! its half when its value is above both neighbours or below both, which
//! makes the product of its differences to them positive. The search keeps
//! the half that passes this test, or the half with the larger product when
//! both do, and repeats on it. The interval halves every iteration, and the
//! search converges once it is no wider than [`Config::x_tol`].
//!
//! Unlike [`golden_section`](super::golden_section), the search does not aim
//! for a minimum or a maximum; it settles on whichever extremum the test
//! leads to.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration for the new midpoint. Observers
//! can return [`Action::StopEarly`] to finish at the current midpoint.

use rootscan_core::{Function, Observer};

use super::{Action, Config, Error, Event, Point, Solution, Status, evaluate, validate_interval};

/// Locates a local extremum of `f` in `interval`.
///
/// # Errors
///
/// Returns an error if the interval is invalid, if `f` returns a non-finite
/// value, or if the iteration cap is reached ([`Error::NonConvergence`],
/// carrying the last midpoint).
pub fn locate<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let (low, high) = validate_interval(interval)?;

    let mut low = evaluate(f, low)?;
    let mut high = evaluate(f, high)?;
    let mut mid = evaluate(f, 0.5 * (low.x + high.x))?;

    for iter in 1..=config.max_iters() {
        if high.x - low.x <= config.x_tol() {
            return Ok(Solution::from_point(mid, Status::Converged, iter - 1));
        }

        let lower_quarter = evaluate(f, 0.5 * (low.x + mid.x))?;
        let upper_quarter = evaluate(f, 0.5 * (mid.x + high.x))?;
        if keeps_lower_half(low, lower_quarter, mid, upper_quarter, high) {
            high = mid;
        } else {
            low = mid;
        }
        mid = evaluate(f, 0.5 * (low.x + high.x))?;

        let event = Event {
            iter,
            point: mid,
            interval: [low.x, high.x],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_point(mid, Status::StoppedByObserver, iter));
        }
    }

    if high.x - low.x <= config.x_tol() {
        return Ok(Solution::from_point(
            mid,
            Status::Converged,
            config.max_iters(),
        ));
    }
    Err(Error::NonConvergence {
        x: mid.x,
        value: mid.value,
        iters: config.max_iters(),
    })
}

/// Locates a local extremum of `f` without observation.
///
/// # Errors
///
/// Same as [`locate`].
pub fn locate_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    locate(f, interval, config, ())
}

/// Decides which half of `[low, high]` holds the extremum.
fn keeps_lower_half(low: Point, lower: Point, mid: Point, upper: Point, high: Point) -> bool {
    let lower_test = (lower.value - low.value) * (lower.value - mid.value);
    let upper_test = (upper.value - mid.value) * (upper.value - high.value);

    if lower_test * upper_test > 0.0 {
        lower_test > upper_test
    } else {
        lower_test > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn parabola(x: f64) -> f64 {
        -(x - 3.0) * (x - 3.0) + 1.0
    }

    #[test]
    fn finds_parabola_maximum() {
        let solution =
            locate_unobserved(&parabola, [-20.0, 20.0], &Config::default()).expect("converges");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 39);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(solution.value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn finds_a_minimum_just_as_well() {
        let f = |x: f64| (x - 1.5) * (x - 1.5) - 2.0;

        let solution = locate_unobserved(&f, [20.0, -20.0], &Config::default()).expect("converges");

        assert_relative_eq!(solution.x, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn settles_on_one_extremum_of_several() {
        // 4 cos t - 3 sin t has a maximum near -0.64 and a minimum near 2.50.
        let f = |t: f64| 4.0 * t.cos() - 3.0 * t.sin();

        let solution = locate_unobserved(&f, [-5.0, 5.0], &Config::default()).expect("converges");

        assert_relative_eq!(solution.x, 2.498_091_5, epsilon = 1e-6);
        assert_relative_eq!(solution.value, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn quarter_point_test_picks_the_half() {
        let point = |x: f64| Point::new(x, parabola(x));

        // Peak at 3 lies in the upper half of [-4, 4].
        assert!(!keeps_lower_half(
            point(-4.0),
            point(-2.0),
            point(0.0),
            point(2.0),
            point(4.0)
        ));
        // And in the lower half of [1, 9].
        assert!(keeps_lower_half(
            point(1.0),
            point(3.0),
            point(5.0),
            point(7.0),
            point(9.0)
        ));
    }

    #[test]
    fn iteration_cap_reports_last_midpoint() {
        let config = Config::new(5, 1e-10).expect("valid config");

        let result = locate_unobserved(&parabola, [-20.0, 20.0], &config);

        let Err(Error::NonConvergence { x, iters, .. }) = result else {
            panic!("expected non-convergence, got {result:?}");
        };
        assert_eq!(iters, 5);
        assert_relative_eq!(x, 3.125);
    }

    #[test]
    fn observer_sees_halving_intervals() {
        let mut widths = Vec::new();
        let observer = |event: &Event| {
            let [low, high] = event.interval;
            widths.push(high - low);
            (event.iter >= 4).then_some(Action::StopEarly)
        };

        let solution =
            locate(&parabola, [-20.0, 20.0], &Config::default(), observer).expect("stops cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(widths, vec![20.0, 10.0, 5.0, 2.5]);
    }
}
