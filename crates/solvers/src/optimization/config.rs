use thiserror::Error;

/// Configuration shared by the extremum searches.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
}

/// Errors that can occur when validating an extremum search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and non-negative")]
    XTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-10).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// A search converges once its interval is no wider than `x_tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` is negative or non-finite.
    pub fn new(max_iters: usize, x_tol: f64) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }

        Ok(Self { max_iters, x_tol })
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the interval width at which a search converges.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }
}
