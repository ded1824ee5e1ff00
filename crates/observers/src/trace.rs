//! Iterate recorder.
//!
//! See [`Trace`] for usage.

use std::collections::BTreeMap;

use rootscan_core::Observer;
use rootscan_solvers::equation::{Bracket, Evaluation, Event};

/// An observer that records every iterate, grouped by bracket.
///
/// Pass `&mut Trace` as the observer so the recorded iterates can be read
/// once the refinement or scan completes. The trace never requests an action.
///
/// # Example
///
/// ```
/// use rootscan_observers::Trace;
/// use rootscan_solvers::equation::{Bracket, Config, secant};
///
/// let f = |x: f64| x * x - 2.0;
/// let mut trace = Trace::new();
///
/// let solution = secant::solve(&f, Bracket::new(1), &Config::default(), &mut trace).unwrap();
///
/// let last = trace.iterates(Bracket::new(1)).last().unwrap();
/// assert_eq!(last.x, solution.x);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    iterates: BTreeMap<Bracket, Vec<Evaluation>>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one evaluation for `bracket`.
    pub fn record(&mut self, bracket: Bracket, eval: Evaluation) {
        self.iterates.entry(bracket).or_default().push(eval);
    }

    /// Returns the iterates recorded for `bracket`, oldest first.
    ///
    /// Returns an empty slice for a bracket that emitted no events.
    #[must_use]
    pub fn iterates(&self, bracket: Bracket) -> &[Evaluation] {
        self.iterates.get(&bracket).map_or(&[], Vec::as_slice)
    }

    /// Returns the residuals recorded for `bracket`, oldest first.
    #[must_use]
    pub fn residuals(&self, bracket: Bracket) -> Vec<f64> {
        self.iterates(bracket)
            .iter()
            .map(|eval| eval.residual)
            .collect()
    }

    /// Iterates over the brackets that emitted at least one event, ascending.
    pub fn brackets(&self) -> impl Iterator<Item = Bracket> {
        self.iterates.keys().copied()
    }

    /// Returns the total number of recorded iterates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.values().map(Vec::len).sum()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.iterates.clear();
    }
}

impl<A> Observer<Event, A> for Trace {
    fn observe(&mut self, event: &Event) -> Option<A> {
        self.record(event.bracket, event.eval);
        None
    }
}

/// Allows `&mut Trace` to be passed to refiners that take an observer by
/// value, so the trace can be read after the refinement completes.
impl<A> Observer<Event, A> for &mut Trace {
    fn observe(&mut self, event: &Event) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootscan_solvers::equation::{
        Config, muller,
        scan::{Method, all_roots},
        secant,
    };

    fn quartic(x: f64) -> f64 {
        x.powi(4) + x.powi(3) - 2.0 * x * x + x - 6.0
    }

    #[test]
    fn records_one_iterate_per_event() {
        let bracket = Bracket::new(1);
        let mut trace = Trace::new();

        let solution =
            secant::solve(&quartic, bracket, &Config::default(), &mut trace).expect("converges");

        let iterates = trace.iterates(bracket);
        assert_eq!(iterates.len(), solution.iters);
        assert!(iterates.iter().all(|eval| bracket.contains(eval.x)));
        assert_relative_eq!(iterates[iterates.len() - 1].x, solution.x);
    }

    #[test]
    fn muller_residuals_shrink() {
        let bracket = Bracket::new(1);
        let mut trace = Trace::new();

        muller::solve(&quartic, bracket, &Config::default(), &mut trace).expect("converges");

        let residuals: Vec<f64> = trace.residuals(bracket).iter().map(|r| r.abs()).collect();
        assert_eq!(residuals.len(), 3);
        assert!(residuals.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn groups_a_scan_by_bracket() {
        let mut trace = Trace::new();

        let scan = all_roots(&quartic, -20, 20, Method::Secant, &Config::default(), &mut trace);

        assert_eq!(
            trace.brackets().collect::<Vec<_>>(),
            vec![Bracket::new(-3), Bracket::new(1)]
        );
        for solution in scan.solutions() {
            assert_eq!(trace.iterates(solution.bracket).len(), solution.iters);
        }
        assert_eq!(trace.len(), scan.solutions().map(|s| s.iters).sum::<usize>());

        trace.clear();
        assert!(trace.is_empty());
        assert!(trace.iterates(Bracket::new(1)).is_empty());
    }
}
