//! Root bracketing and refinement for real functions of one variable.
//!
//! See [`equation`] for the bracketer, the secant and Muller refiners, and
//! the scan that ties them together, and [`optimization`] for the local
//! extremum searches.

pub mod equation;
pub mod optimization;
