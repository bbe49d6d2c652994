//! Regime Classification via the Damping Ratio
//!
//! The response shape of m·x'' + c·x' + k·x = 0 is governed entirely by the
//! dimensionless damping ratio
//!
//!   ζ = c / (2·√(k·m))
//!
//! - ζ < 1: **underdamped** — oscillatory decay at the damped frequency
//!   ω_d = ω_n·√(1 − ζ²)
//! - ζ = 1: **critically damped** — fastest non-oscillatory return
//! - ζ > 1: **overdamped** — slow non-oscillatory return
//!
//! ## Ordering of the Branches
//!
//! The closeness-to-1 test runs before the strict inequalities. The
//! overdamped formula contains √(ζ² − 1), which is ill-conditioned when ζ
//! is barely above 1; routing near-critical ratios to the critically damped
//! formula keeps the evaluation stable on both sides of the boundary.

/// Damping regime of the oscillator response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// ζ < 1: oscillatory decay
    Underdamped,
    /// ζ within tolerance of 1: fastest non-oscillatory return
    CriticallyDamped,
    /// ζ > 1: non-oscillatory return with two real decay rates
    Overdamped,
}

// Closeness tolerance against ζ = 1, |ζ − 1| ≤ ATOL + RTOL·1
const RTOL: f64 = 1e-5;
const ATOL: f64 = 1e-8;

/// Damping ratio ζ = c / (2·√(k·m)).
///
/// Defined only for m > 0 and k > 0; the solver guards those bounds before
/// calling.
pub fn damping_ratio(mass: f64, stiffness: f64, damping: f64) -> f64 {
    damping / (2.0 * (stiffness * mass).sqrt())
}

/// Natural (undamped) frequency ω_n = √(k/m)
pub fn natural_frequency(mass: f64, stiffness: f64) -> f64 {
    (stiffness / mass).sqrt()
}

/// Classify a damping ratio into its regime.
///
/// Near-critical ratios on either side of 1 classify as
/// [`Regime::CriticallyDamped`]; see the module docs for why the tolerance
/// check precedes the inequalities.
pub fn classify(zeta: f64) -> Regime {
    if (zeta - 1.0).abs() <= ATOL + RTOL {
        Regime::CriticallyDamped
    } else if zeta < 1.0 {
        Regime::Underdamped
    } else {
        Regime::Overdamped
    }
}
