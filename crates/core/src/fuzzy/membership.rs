//! Triangular membership functions
//!
//! A triangle `(a, b, c)` rises linearly from `a` to its peak at `b` and falls
//! back to zero at `c`. Degenerate triangles (`a == b` or `b == c`) are
//! shoulders: the zero-width side is a vertical edge and the peak still
//! evaluates to 1.
//!
//! No division is ever performed with a zero denominator. The rising slope is
//! only evaluated strictly left of the peak (where `b - a > 0`), the falling
//! slope only strictly right of it (where `c - b > 0`).

use serde::{Deserialize, Serialize};

/// Triangular fuzzy region with breakpoints `a <= b <= c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Left foot (membership 0)
    pub a: f64,
    /// Peak (membership 1)
    pub b: f64,
    /// Right foot (membership 0)
    pub c: f64,
}

impl Triangle {
    /// Create a triangle from its three breakpoints
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Degree of membership of `x` in this region, in `[0, 1]`
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        triangular(x, self.a, self.b, self.c)
    }
}

/// Evaluate the triangular membership function `(a, b, c)` at `x`
///
/// Returns 0 when `x` lies outside `[a, c]`, when `x` is NaN, or when the
/// breakpoints are not weakly increasing (NaN breakpoints included).
/// Returns exactly 1 at `x == b`, including for degenerate shoulders.
#[inline]
#[must_use]
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    // Negated comparisons so NaN anywhere falls through to 0
    if !(a <= b && b <= c) || !(a <= x && x <= c) {
        return 0.0;
    }

    let rising = if x < b { (x - a) / (b - a) } else { 1.0 };
    let falling = if x > b { (c - x) / (c - b) } else { 1.0 };

    rising.min(falling).max(0.0)
}
