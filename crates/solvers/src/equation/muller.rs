//! Muller refinement by quadratic interpolation.
//!
//! # Algorithm
//!
//! The refinement seeds a triple from the bracket `[lo, lo + 1]`: the two
//! endpoints plus one secant guess between them. Each iteration fits a
//! quadratic through the triple, takes the root of the quadratic closest to
//! the newest point, and shifts the triple `(x0, x1, x2) := (x1, x2, x_new)`.
//! See [`step`] for the update and its edge cases.
//!
//! # Confinement
//!
//! A quadratic estimate can land outside the bracket and pull the
//! refinement toward a neighbouring root. Under
//! [`Confinement::Bracketed`](super::Confinement::Bracketed) the refiner
//! tracks the sign change inside the bracket and replaces such estimates
//! with a false-position step on it. [`Confinement::Free`](super::Confinement::Free)
//! uses every estimate as is.
//!
//! # Observer Events
//!
//! One [`Event`] with a [`Window::Muller`] is emitted per new estimate,
//! after the triple has been shifted. Observers can return
//! [`Action::StopEarly`] to finish with the best estimate so far.

mod enclosure;
mod step;


pub use step::{Step, StepKind, step};

use rootscan_core::{Function, Observer};

use super::{
    Action, Bracket, Config, Confinement, Error, Event, Solution, Status, Window, best::Best,
    evaluate, evaluate::secant_point,
};

use enclosure::Enclosure;

/// Refines a bracket to a root using Muller's method.
///
/// # Errors
///
/// Returns an error if the bracket endpoints share a value
/// ([`Error::DegenerateBracket`]), if a step meets a negative discriminant
/// ([`Error::ComplexRootRejected`]) or a repeated abscissa, if `f` returns a
/// non-finite value, or if the iteration cap is reached
/// ([`Error::NonConvergence`]). A rejected complex root ends the refinement;
/// it is not retried.
///
/// An estimate that repeats a point of the triple means floating point can
/// get no closer; the refinement then ends with the best estimate, as if the
/// iteration cap had been reached.
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

/// Refines a bracket with Muller's method without observation.
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
    let left = evaluate(f, bracket.left())?;
    let right = evaluate(f, bracket.right())?;
    let guess = evaluate(f, secant_point(left, right)?)?;

    let mut enclosure = Enclosure::new(left, right);
    enclosure.shrink(guess);

    let mut best = Best::new(right);
    best.update(guess);
    best.update(left);

    let mut triple = [left, guess, right];

    for iter in 1..=config.max_iters() {
        let newest = triple[2];
        if config.is_converged(newest.residual) {
            return Ok(Solution::from_eval(bracket, newest, Status::Converged, iter - 1));
        }

        let mut next = step(triple)?;
        if config.confinement() == Confinement::Bracketed && !enclosure.contains(next.x) {
            next = Step {
                x: enclosure.false_position()?,
                kind: StepKind::Confined,
            };
        }

        #[allow(clippy::float_cmp)]
        if triple.iter().any(|point| point.x == next.x) {
            log::trace!("muller stalled at x = {} in bracket {}", next.x, bracket.lo());
            return best.exhausted(bracket, config, iter - 1);
        }

        let eval = evaluate(f, next.x)?;
        enclosure.shrink(eval);
        best.update(eval);
        triple = [triple[1], triple[2], eval];

        let event = Event {
            bracket,
            iter,
            eval,
            window: Window::Muller {
                triple: triple.map(|point| point.x),
                step: next.kind,
            },
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(best.stopped(bracket, iter));
        }
    }

    let newest = triple[2];
    if config.is_converged(newest.residual) {
        return Ok(Solution::from_eval(
            bracket,
            newest,
            Status::Converged,
            config.max_iters(),
        ));
    }
    Err(best.non_convergence(config.max_iters()))
}
