//! Integer bracketing by sign change.
//!
//! [`find_brackets`] assumes at most one root per unit interval. Two roots
//! in the same interval cancel each other's sign change and are missed, and
//! a root that falls exactly on an integer makes the product of endpoint
//! values zero, so it is not reported either.

use rootscan_core::Function;

/// A unit interval `[lo, lo + 1]` on the integer grid.
///
/// Brackets returned by [`find_brackets`] satisfy `f(lo) * f(lo + 1) < 0`.
/// Brackets built with [`Bracket::new`] carry no such guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bracket {
    lo: i64,
}

impl Bracket {
    /// Creates the bracket `[lo, lo + 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo` is `i64::MAX`, whose upper bound is not representable.
    /// Use [`Bracket::try_new`] for unchecked input.
    #[must_use]
    pub fn new(lo: i64) -> Self {
        assert!(lo < i64::MAX, "bracket [{lo}, {lo} + 1] overflows i64");
        Self { lo }
    }

    /// Creates the bracket `[lo, lo + 1]`, or `None` if `lo + 1` overflows.
    #[must_use]
    pub fn try_new(lo: i64) -> Option<Self> {
        (lo < i64::MAX).then_some(Self { lo })
    }

    /// Returns the integer lower bound.
    #[must_use]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// Returns the integer upper bound.
    #[must_use]
    pub fn hi(&self) -> i64 {
        self.lo + 1
    }

    /// Returns the lower bound as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn left(&self) -> f64 {
        self.lo as f64
    }

    /// Returns the upper bound as a float.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left() + 1.0
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.left() + 0.5
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left() <= x && x <= self.right()
    }
}

/// Scans `[low, high]` for unit intervals where `f` changes sign.
///
/// For each integer `i` in `low..high`, `i` is reported when
/// `f(i) * f(i + 1) < 0`. Results are in ascending order. An empty range or
/// a range without sign changes yields an empty vector. NaN values never
/// compare below zero and so never produce a bracket.
#[allow(clippy::cast_precision_loss)]
pub fn find_brackets<F: Function>(f: &F, low: i64, high: i64) -> Vec<Bracket> {
    if low >= high {
        return Vec::new();
    }

    let mut brackets = Vec::new();
    let mut f_lo = f.call(low as f64);
    for lo in low..high {
        let f_hi = f.call((lo + 1) as f64);
        if f_lo * f_hi < 0.0 {
            brackets.push(Bracket::new(lo));
        }
        f_lo = f_hi;
    }
    brackets
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn lows(brackets: &[Bracket]) -> Vec<i64> {
        brackets.iter().map(Bracket::lo).collect()
    }

    #[test]
    fn bracket_bounds() {
        let bracket = Bracket::new(-3);
        assert_eq!(bracket.hi(), -2);
        assert_relative_eq!(bracket.left(), -3.0);
        assert_relative_eq!(bracket.right(), -2.0);
        assert_relative_eq!(bracket.midpoint(), -2.5);
        assert!(bracket.contains(-3.0));
        assert!(bracket.contains(-2.0));
        assert!(!bracket.contains(-1.999));
    }

    #[test]
    fn upper_bound_never_overflows() {
        assert_eq!(Bracket::try_new(i64::MAX), None);

        let bracket = Bracket::try_new(i64::MAX - 1).expect("representable");
        assert_eq!(bracket.hi(), i64::MAX);

        let f = |x: f64| x;
        assert!(find_brackets(&f, i64::MAX - 2, i64::MAX).is_empty());
    }

    #[test]
    #[should_panic(expected = "overflows i64")]
    fn new_rejects_the_last_integer() {
        let _ = Bracket::new(i64::MAX);
    }

    #[test]
    fn finds_quartic_sign_changes() {
        let f = |x: f64| x.powi(4) + x.powi(3) - 2.0 * x * x + x - 6.0;
        assert_eq!(lows(&find_brackets(&f, -20, 20)), vec![-3, 1]);
    }

    #[test]
    fn exact_integer_root_is_invisible() {
        let f = |x: f64| x - 2.0;
        assert!(find_brackets(&f, 0, 5).is_empty());

        // Only the non-integer root at 3.5 is reported.
        let f = |x: f64| (x - 2.0) * (x - 3.5);
        assert_eq!(lows(&find_brackets(&f, 0, 5)), vec![3]);
    }

    #[test]
    fn two_roots_in_one_interval_are_missed() {
        let f = |x: f64| (x - 0.25) * (x - 0.75);
        assert!(find_brackets(&f, -5, 5).is_empty());
    }

    #[test]
    fn empty_range_has_no_brackets() {
        let f = |x: f64| x - 0.5;
        assert!(find_brackets(&f, 3, 3).is_empty());
        assert!(find_brackets(&f, 3, -3).is_empty());
    }

    #[test]
    fn upper_endpoint_is_scanned() {
        // Root in [4, 5] is found when high = 5.
        let f = |x: f64| x - 4.5;
        assert_eq!(lows(&find_brackets(&f, 0, 5)), vec![4]);
        assert!(find_brackets(&f, 0, 4).is_empty());
    }

    #[test]
    fn evaluates_each_integer_once() {
        let calls = std::cell::Cell::new(0);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x - 0.5
        };
        let _ = find_brackets(&f, -10, 10);
        assert_eq!(calls.get(), 21);
    }
}
