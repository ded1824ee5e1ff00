//! Golden section search for a local minimum or maximum.
//!
//! # Algorithm
//!
//! The search keeps two interior points that split the interval by the
//! golden ratio, compares their values, and discards the outer part beyond
//! the worse one. The better interior point becomes an interior point of
//! the shrunken interval, so each iteration costs one evaluation and shrinks
//! the interval by `1/φ`. The search converges once the interior points are
//! no more than [`Config::x_tol`] apart.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration for the newly evaluated interior
//! point. The two initial interior points are not reported. Observers can
//! return [`Action::StopEarly`] to finish with the best point so far.

mod sections;


use rootscan_core::{Function, Observer};

use super::{
    Action, Config, Error, Event, Goal, Point, Solution, Status, evaluate, validate_interval,
};

use sections::Sections;

/// Finds a local minimum of `f` in `interval`.
///
/// # Errors
///
/// Returns an error if the interval is invalid, if `f` returns a non-finite
/// value, or if the iteration cap is reached ([`Error::NonConvergence`]).
pub fn minimize<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    search(f, interval, Goal::Minimum, config, observer)
}

/// Finds a local minimum of `f` without observation.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn minimize_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    minimize(f, interval, config, ())
}

/// Finds a local maximum of `f` in `interval`.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    search(f, interval, Goal::Maximum, config, observer)
}

/// Finds a local maximum of `f` without observation.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    maximize(f, interval, config, ())
}

/// Runs the search toward `goal`.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn search<F, Obs>(
    f: &F,
    interval: [f64; 2],
    goal: Goal,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let (low, high) = validate_interval(interval)?;
    let mut sections = Sections::new(low, high);

    let mut lower = evaluate(f, sections.inner_low)?;
    let mut upper = evaluate(f, sections.inner_high)?;
    let mut best = if goal.prefers(lower, upper) {
        lower
    } else {
        upper
    };

    for iter in 1..=config.max_iters() {
        if sections.is_converged(config.x_tol()) {
            return Ok(Solution::from_point(best, Status::Converged, iter - 1));
        }

        let point = if goal.prefers(lower, upper) {
            sections.keep_low();
            upper = lower;
            lower = evaluate(f, sections.inner_low)?;
            lower
        } else {
            sections.keep_high();
            lower = upper;
            upper = evaluate(f, sections.inner_high)?;
            upper
        };

        if goal.score(point.value) < goal.score(best.value) {
            best = point;
        }

        let event = Event {
            iter,
            point,
            interval: [sections.low, sections.high],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_point(best, Status::StoppedByObserver, iter));
        }
    }

    if sections.is_converged(config.x_tol()) {
        return Ok(Solution::from_point(
            best,
            Status::Converged,
            config.max_iters(),
        ));
    }
    Err(nonconvergence(best, config.max_iters()))
}

fn nonconvergence(best: Point, iters: usize) -> Error {
    Error::NonConvergence {
        x: best.x,
        value: best.value,
        iters,
    }
}
