use crate::equation::{Bracket, Error, Solution};

/// The refinement outcome of one bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub bracket: Bracket,
    pub result: Result<Solution, Error>,
}

/// Per-bracket outcomes of a scan, in ascending bracket order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootScan {
    outcomes: Vec<Outcome>,
}

impl RootScan {
    pub(super) fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    /// Returns every outcome, successful or not.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the root estimates of the successful brackets, in order.
    #[must_use]
    pub fn roots(&self) -> Vec<f64> {
        self.solutions().map(|solution| solution.x).collect()
    }

    /// Iterates over the successful refinements.
    pub fn solutions(&self) -> impl Iterator<Item = &Solution> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
    }

    /// Iterates over the failed brackets and why they failed.
    pub fn failures(&self) -> impl Iterator<Item = (Bracket, &Error)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.result {
            Ok(_) => None,
            Err(error) => Some((outcome.bracket, error)),
        })
    }

    /// Returns the number of brackets found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if no bracket was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
