//! Secant refinement inside a sign change.
//!
//! # Algorithm
//!
//! Starting from the bracket `[lo, lo + 1]` and the guess `lo + 0.5`, each
//! iteration draws the secant through the current endpoints, takes its zero
//! as the new guess, and keeps whichever half still shows a sign change.
//! Because every guess stays inside the sign change, the refinement never
//! leaves its bracket. Convergence is linear.
//!
//! # Observer Events
//!
//! One [`Event`] with a [`Window::Secant`] is emitted per new guess, after
//! the sign change has been updated. Observers can return
//! [`Action::StopEarly`] to finish with the best guess so far.


use rootscan_core::{Function, Observer};

use super::{
    Action, Bracket, Config, Error, Event, Solution, Status, Window, best::Best, evaluate,
    evaluate::secant_point,
};

/// Refines a bracket to a root using the secant method.
///
/// # Errors
///
/// Returns an error if the endpoints of the sign change ever share a value
/// ([`Error::DegenerateBracket`]), if `f` returns a non-finite value, or if
/// the iteration cap is reached ([`Error::NonConvergence`]).
pub fn solve<F, Obs>(
    f: &F,
    bracket: Bracket,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    refine(f, bracket, config, &mut observer)
}

/// Refines a bracket with the secant method without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: Bracket,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

pub(super) fn refine<F, Obs>(
    f: &F,
    bracket: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let mut low = evaluate(f, bracket.left())?;
    let mut high = evaluate(f, bracket.right())?;
    let mut mid = evaluate(f, bracket.midpoint())?;
    let mut best = Best::new(mid);

    for iter in 1..=config.max_iters() {
        if config.is_converged(mid.residual) {
            return Ok(Solution::from_eval(bracket, mid, Status::Converged, iter - 1));
        }

        mid = evaluate(f, secant_point(low, high)?)?;
        best.update(mid);

        if low.residual * mid.residual < 0.0 {
            high = mid;
        } else {
            low = mid;
        }

        let event = Event {
            bracket,
            iter,
            eval: mid,
            window: Window::Secant {
                low: low.x,
                high: high.x,
            },
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(best.stopped(bracket, iter));
        }
    }

    if config.is_converged(mid.residual) {
        return Ok(Solution::from_eval(
            bracket,
            mid,
            Status::Converged,
            config.max_iters(),
        ));
    }
    Err(best.non_convergence(config.max_iters()))
}
