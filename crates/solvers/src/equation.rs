//! Solvers that find roots of `f(x) = 0`.
//!
//! A scan runs in two phases:
//!
//! 1. [`bracket::find_brackets`] walks an integer range and reports every
//!    unit interval `[i, i + 1]` where `f` changes sign.
//! 2. A refiner converges each bracket to a root estimate:
//!    - [`secant`] — linear interpolation kept inside the sign change
//!    - [`muller`] — quadratic interpolation through three points
//!
//! [`scan::all_roots`] runs both phases and keeps per-bracket failures
//! isolated from each other.
//!
//! # Convergence
//!
//! Both refiners stop when the squared residual satisfies
//! `f(x)^2 <= epsilon`. This is a residual test, not a step-size test: a
//! function that is small in magnitude far from any sign change can satisfy
//! it without being near a root, and a function that is flat near its root
//! can take many iterations to satisfy it. Every refinement is bounded by
//! [`Config::max_iters`].

mod action;
mod best;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;

pub mod bracket;
pub mod muller;
pub mod scan;
pub mod secant;

pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError, Confinement};
pub use error::Error;
pub use evaluate::{Evaluation, evaluate};
pub use event::{Event, Window};
pub use solution::{Solution, Status};
