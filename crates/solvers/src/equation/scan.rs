//! Multi-root scan over an integer range.
//!
//! [`all_roots`] brackets every sign change in `[low, high]` with
//! [`find_brackets`](super::bracket::find_brackets) and refines each bracket
//! with the selected [`Method`]. Brackets are refined in ascending order and
//! independently: a bracket that fails is recorded in the [`RootScan`] with
//! its [`Error`](super::Error) and the scan moves on.
//!
//! # Observer Events
//!
//! The observer sees every refiner [`Event`] of every bracket, in order;
//! [`Event::bracket`] tells brackets apart. Returning
//! [`Action::StopEarly`] stops the current bracket only.

mod method;
mod report;

pub use method::{Method, ParseMethodError};
pub use report::{Outcome, RootScan};

use rootscan_core::{Function, Observer};

use super::{Action, Config, Event, bracket::find_brackets};

/// Finds and refines every bracketed root of `f` in `[low, high]`.
///
/// Returns an empty scan when no sign change is found.
pub fn all_roots<F, Obs>(
    f: &F,
    low: i64,
    high: i64,
    method: Method,
    config: &Config,
    mut observer: Obs,
) -> RootScan
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let brackets = find_brackets(f, low, high);
    log::debug!(
        "found {} bracket(s) in [{low}, {high}], refining with {method}",
        brackets.len()
    );

    let outcomes = brackets
        .into_iter()
        .map(|bracket| {
            let result = method.refine(f, bracket, config, &mut observer);
            match &result {
                Ok(solution) => log::debug!(
                    "bracket [{}, {}]: x = {} after {} iteration(s)",
                    bracket.lo(),
                    bracket.hi(),
                    solution.x,
                    solution.iters
                ),
                Err(error) => {
                    log::warn!("bracket [{}, {}] failed: {error}", bracket.lo(), bracket.hi());
                }
            }
            Outcome { bracket, result }
        })
        .collect();

    RootScan::new(outcomes)
}

/// Runs [`all_roots`] without observation.
pub fn all_roots_unobserved<F: Function>(
    f: &F,
    low: i64,
    high: i64,
    method: Method,
    config: &Config,
) -> RootScan {
    all_roots(f, low, high, method, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::{Bracket, Error, Status};

    fn quartic(x: f64) -> f64 {
        x.powi(4) + x.powi(3) - 2.0 * x * x + x - 6.0
    }

    #[test]
    fn scans_quartic_with_both_methods() {
        let config = Config::default();

        for method in [Method::Secant, Method::Muller] {
            let scan = all_roots_unobserved(&quartic, -20, 20, method, &config);

            assert_eq!(scan.len(), 2);
            assert_eq!(scan.failures().count(), 0);

            let roots = scan.roots();
            assert_relative_eq!(roots[0], -2.4206, epsilon = 1e-3);
            assert_relative_eq!(roots[1], 1.5355, epsilon = 1e-3);
        }
    }

    #[test]
    fn no_sign_change_gives_empty_scan() {
        let f = |x: f64| x * x + 1.0;

        let scan = all_roots_unobserved(&f, -20, 20, Method::Muller, &Config::default());

        assert!(scan.is_empty());
        assert!(scan.roots().is_empty());
    }

    #[test]
    fn failures_are_isolated_per_bracket() {
        // Root at 0.5 is hit exactly by the first midpoint; the root at 3.3
        // needs iterations that a zero cap does not allow.
        let f = |x: f64| (x - 0.5) * (x - 3.3);
        let config = Config::new(0, 1e-4).expect("valid config");

        let scan = all_roots_unobserved(&f, -5, 5, Method::Secant, &config);

        assert_eq!(scan.len(), 2);
        assert_eq!(scan.roots(), vec![0.5]);

        let failures: Vec<_> = scan.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Bracket::new(3));
        assert!(matches!(failures[0].1, Error::NonConvergence { iters: 0, .. }));
    }

    #[test]
    fn observer_stop_applies_to_one_bracket() {
        let config = Config::default();
        let mut brackets_seen = Vec::new();
        let observer = |event: &Event| {
            brackets_seen.push(event.bracket);
            Some(Action::StopEarly)
        };

        let scan = all_roots(&quartic, -20, 20, Method::Secant, &config, observer);

        assert_eq!(brackets_seen, vec![Bracket::new(-3), Bracket::new(1)]);
        assert!(
            scan.solutions()
                .all(|solution| solution.status == Status::StoppedByObserver)
        );
        assert_eq!(scan.solutions().count(), 2);
    }
}
