//! Reusable observers for rootscan refiners.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the secant and Muller refiners and with multi-root scans.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasEstimate`], [`HasResidual`], [`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — Logs every iteration through the `log` facade.
//! - [`Trace`] — Records the iterates of each bracket, in order.
//!
//! [`Observer`]: rootscan_core::Observer
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

mod log_observer;
mod trace;

pub mod traits;

pub use log_observer::LogObserver;
pub use trace::Trace;
