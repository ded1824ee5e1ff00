//! Capability traits for generic observers.
//!
//! These traits abstract over event and action types so an observer can be
//! written once and reused with any refiner that emits compatible events.
//!
//! # Event traits
//!
//! - [`HasEstimate`] — events that carry the newest root estimate
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootscan_core::Observer;
//! use rootscan_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use rootscan_solvers::{
    equation::{Action, Event},
    optimization,
};

/// An event that carries the newest root estimate.
pub trait HasEstimate {
    /// Returns the abscissa evaluated in this event.
    fn estimate(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the function value being minimized or maximized.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the refiner early.
    fn stop_early() -> Self;
}

impl HasEstimate for Event {
    fn estimate(&self) -> f64 {
        self.x()
    }
}

impl HasResidual for Event {
    fn residual(&self) -> f64 {
        Event::residual(self)
    }
}

impl HasEstimate for optimization::Event {
    fn estimate(&self) -> f64 {
        self.point.x
    }
}

impl HasObjective for optimization::Event {
    fn objective(&self) -> f64 {
        self.point.value
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootscan_core::Observer;
    use rootscan_solvers::{
        equation::{Bracket, Config, Status, secant},
        optimization::golden_section,
    };

    /// Stops once the residual magnitude drops below a tolerance.
    struct GoodEnough {
        tolerance: f64,
        seen: Vec<f64>,
    }

    impl<E, A> Observer<E, A> for &mut GoodEnough
    where
        E: HasEstimate + HasResidual,
        A: CanStopEarly,
    {
        fn observe(&mut self, event: &E) -> Option<A> {
            self.seen.push(event.estimate());
            (event.residual().abs() < self.tolerance).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_a_refiner() {
        let f = |x: f64| x * x - 2.0;
        let mut observer = GoodEnough {
            tolerance: 0.1,
            seen: Vec::new(),
        };

        let solution = secant::solve(&f, Bracket::new(1), &Config::default(), &mut observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(observer.seen.len(), solution.iters);
        assert!(f(solution.x).abs() < 0.1);
    }

    /// Stops once the objective stops improving by more than a margin.
    struct Plateau {
        margin: f64,
        last: Option<f64>,
    }

    impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Plateau {
        fn observe(&mut self, event: &E) -> Option<A> {
            let objective = event.objective();
            let stalled = self
                .last
                .is_some_and(|last| (objective - last).abs() < self.margin);
            self.last = Some(objective);
            stalled.then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_an_extremum_search() {
        let f = |x: f64| (x - 1.0) * (x - 1.0);
        let observer = Plateau {
            margin: 1e-6,
            last: None,
        };

        let solution = golden_section::minimize(
            &f,
            [-10.0, 10.0],
            &rootscan_solvers::optimization::Config::default(),
            observer,
        )
        .expect("should stop cleanly");

        assert_eq!(
            solution.status,
            rootscan_solvers::optimization::Status::StoppedByObserver
        );
        assert!(f(solution.x) < 1e-5);
    }
}
