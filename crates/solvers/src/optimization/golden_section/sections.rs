/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio, equal to φ - 1.
const INV_PHI: f64 = PHI - 1.0;

/// A search interval split by two golden-ratio interior points.
#[derive(Debug, Clone, Copy)]
pub(super) struct Sections {
    pub(super) low: f64,
    pub(super) high: f64,

    /// At `low + (1 - 1/φ) * width`.
    pub(super) inner_low: f64,

    /// At `low + (1/φ) * width`.
    pub(super) inner_high: f64,
}

impl Sections {
    /// Splits `[low, high]`, which must already be ordered.
    pub(super) fn new(low: f64, high: f64) -> Self {
        let width = high - low;
        Self {
            low,
            high,
            inner_low: low + (1.0 - INV_PHI) * width,
            inner_high: low + INV_PHI * width,
        }
    }

    /// Shrinks to `[low, inner_high]`; the old `inner_low` becomes `inner_high`.
    pub(super) fn keep_low(&mut self) {
        self.high = self.inner_high;
        self.inner_high = self.inner_low;
        self.inner_low = self.low + (1.0 - INV_PHI) * (self.high - self.low);
    }

    /// Shrinks to `[inner_low, high]`; the old `inner_high` becomes `inner_low`.
    pub(super) fn keep_high(&mut self) {
        self.low = self.inner_low;
        self.inner_low = self.inner_high;
        self.inner_high = self.low + INV_PHI * (self.high - self.low);
    }

    /// Returns true once the interior points are within `x_tol`.
    pub(super) fn is_converged(&self, x_tol: f64) -> bool {
        (self.inner_high - self.inner_low).abs() <= x_tol
    }
}
