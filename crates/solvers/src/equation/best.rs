use super::{Bracket, Config, Error, Evaluation, Solution, Status};

/// Tracks the best evaluation encountered so far.
///
/// The best evaluation is defined by minimum residual magnitude.
pub(super) struct Best {
    eval: Evaluation,
}

impl Best {
    /// Starts tracking from an initial evaluation.
    pub(super) fn new(eval: Evaluation) -> Self {
        Self { eval }
    }

    /// Updates the best evaluation if the residual magnitude improves.
    pub(super) fn update(&mut self, eval: Evaluation) {
        if eval.residual.abs() < self.eval.residual.abs() {
            self.eval = eval;
        }
    }

    /// Finishes an early stop with the best evaluation.
    pub(super) fn stopped(self, bracket: Bracket, iters: usize) -> Solution {
        Solution::from_eval(bracket, self.eval, Status::StoppedByObserver, iters)
    }

    /// Finishes a refinement that can make no further progress.
    ///
    /// Converges if the best evaluation passes the tolerance, and reports
    /// [`Error::NonConvergence`] otherwise.
    pub(super) fn exhausted(
        self,
        bracket: Bracket,
        config: &Config,
        iters: usize,
    ) -> Result<Solution, Error> {
        if config.is_converged(self.eval.residual) {
            return Ok(Solution::from_eval(bracket, self.eval, Status::Converged, iters));
        }
        Err(self.non_convergence(iters))
    }

    /// Reports that the iteration cap was reached.
    pub(super) fn non_convergence(self, iters: usize) -> Error {
        Error::NonConvergence {
            x: self.eval.x,
            residual: self.eval.residual,
            iters,
        }
    }
}
