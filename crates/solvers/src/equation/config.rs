use thiserror::Error;

/// Configuration shared by the secant and Muller refiners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    confinement: Confinement,
}

/// How Muller's method treats estimates that leave the bracket.
///
/// The secant refiner always stays inside its sign change and ignores this
/// setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confinement {
    /// Keep estimates inside the current sign change.
    ///
    /// A quadratic estimate that lands outside is replaced by a
    /// false-position step on the sign change, so the returned root always
    /// lies in the original unit bracket.
    #[default]
    Bracketed,

    /// Use every quadratic estimate as is.
    ///
    /// The refinement may wander out of its bracket and converge to a root
    /// that belongs to a neighbouring one.
    Free,
}

/// Errors that can occur when validating a refiner config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and non-negative")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// `epsilon` bounds the squared residual: a refinement converges once
    /// `f(x)^2 <= epsilon`.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is negative or non-finite.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            max_iters,
            epsilon,
            confinement: Confinement::default(),
        })
    }

    /// Returns a copy of this config with the given confinement.
    #[must_use]
    pub fn with_confinement(mut self, confinement: Confinement) -> Self {
        self.confinement = confinement;
        self
    }

    /// Returns the maximum number of refinement iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the squared-residual tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns how Muller's method treats estimates outside the bracket.
    #[must_use]
    pub fn confinement(&self) -> Confinement {
        self.confinement
    }

    /// Returns true if `residual` satisfies the squared-residual test.
    #[must_use]
    pub fn is_converged(&self, residual: f64) -> bool {
        residual * residual <= self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_relative_eq!(config.epsilon(), 1e-4);
        assert_eq!(config.confinement(), Confinement::Bracketed);
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert_eq!(Config::new(10, -1e-6), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Epsilon));
    }

    #[test]
    fn zero_epsilon_is_allowed() {
        let config = Config::new(10, 0.0).expect("zero is non-negative");
        assert!(config.is_converged(0.0));
        assert!(!config.is_converged(1e-300));
    }

    #[test]
    fn convergence_uses_squared_residual() {
        let config = Config::new(10, 1e-4).expect("valid config");
        assert!(config.is_converged(0.01));
        assert!(config.is_converged(-0.01));
        assert!(!config.is_converged(0.0101));
    }

    #[test]
    fn with_confinement_keeps_other_fields() {
        let config = Config::new(7, 1e-8)
            .expect("valid config")
            .with_confinement(Confinement::Free);
        assert_eq!(config.max_iters(), 7);
        assert_relative_eq!(config.epsilon(), 1e-8);
        assert_eq!(config.confinement(), Confinement::Free);
    }
}
