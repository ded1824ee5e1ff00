//! Core traits for the rootscan workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] — a pure real function of one real variable
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
