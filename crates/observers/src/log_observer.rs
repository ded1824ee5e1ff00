//! Logging observer.

use log::Level;
use rootscan_core::Observer;
use rootscan_solvers::equation::{Event, Window};

/// An observer that logs every refiner iteration through the `log` facade.
///
/// Records go to the `rootscan_observers` target at the configured level
/// (default [`Level::Debug`]). The observer never requests an action.
///
/// # Example
///
/// ```
/// use log::Level;
/// use rootscan_observers::LogObserver;
/// use rootscan_solvers::equation::{Config, scan::{Method, all_roots}};
///
/// let f = |x: f64| x * x - 2.0;
/// let scan = all_roots(&f, -3, 3, Method::Muller, &Config::default(), LogObserver::new(Level::Trace));
/// assert_eq!(scan.roots().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates a logging observer that emits at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<A> Observer<Event, A> for LogObserver {
    fn observe(&mut self, event: &Event) -> Option<A> {
        if !log::log_enabled!(self.level) {
            return None;
        }

        let Event {
            bracket,
            iter,
            eval,
            window,
        } = event;

        match window {
            Window::Secant { low, high } => log::log!(
                self.level,
                "[{}, {}] secant iter {iter}: x = {}, f(x) = {:e}, window = [{low}, {high}]",
                bracket.lo(),
                bracket.hi(),
                eval.x,
                eval.residual,
            ),
            Window::Muller { triple, step } => log::log!(
                self.level,
                "[{}, {}] muller iter {iter}: x = {}, f(x) = {:e}, triple = {triple:?} ({step:?})",
                bracket.lo(),
                bracket.hi(),
                eval.x,
                eval.residual,
            ),
        }

        None
    }
}

/// Allows `&mut LogObserver` to be passed to refiners that take an observer
/// by value.
impl<A> Observer<Event, A> for &mut LogObserver {
    fn observe(&mut self, event: &Event) -> Option<A> {
        (**self).observe(event)
    }
}
