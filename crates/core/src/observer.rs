/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers watch or steer a refinement without changing its
/// API: logging, recording iterates, or stopping early.
///
/// `observe` returns `Some(action)` to request a solver-specific action and
/// `None` to let the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and `()` is a no-op observer
/// that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
