/// A real-valued function of a single real variable.
///
/// Solvers assume referential transparency: calling with the same `x` must
/// return the same value, and calls have no side effects. Values are never
/// memoized across solver calls, so expensive functions should cache on
/// their own.
///
/// Closures of the form `Fn(f64) -> f64` implement this trait automatically.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
