//! Analytic Critical-Point Extraction for Oscillatory Trajectories
//!
//! An underdamped displacement and its velocity share the form
//!
//!   e^(−ζω_n t)·(P·cos ω_d t + Q·sin ω_d t)
//!
//! The exponential never vanishes, so every zero solves the transcendental
//! equation P·cos ω t + Q·sin ω t = 0. Its first non-negative root is
//!
//!   t₀ = atan2(−P, Q) / ω,  shifted by π/ω into [0, π/ω) when negative
//!
//! and the remaining roots recur every half period π/ω. Zero-crossings of
//! x(t) come from the displacement coefficients (A, B); extrema of x(t)
//! come from the velocity coefficients (A_v, B_v), since x has a local
//! extremum exactly where v vanishes. No numerical search is involved.

use std::f64::consts::PI;

use crate::evaluate::UnderdampedCoefficients;

/// Zero-crossings, peaks, and valleys of an underdamped trajectory.
///
/// Each list is ascending in time and holds at most the requested number of
/// `(time, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriticalPoints {
    /// Times where x(t) crosses zero (value is always 0.0)
    pub zeros: Vec<(f64, f64)>,
    /// Local maxima with positive displacement
    pub peaks: Vec<(f64, f64)>,
    /// Local minima with non-positive displacement
    pub valleys: Vec<(f64, f64)>,
}

/// First `count` non-negative roots of P·cos(ωt) + Q·sin(ωt) = 0,
/// ascending.
///
/// The degenerate pair P = Q = 0 makes the equation hold identically and
/// the root formula undefined; it yields no roots here. The solver never
/// produces that pair, because the zero-initial-state override guarantees
/// at least one non-zero coefficient in each of the displacement and
/// velocity forms.
pub fn trig_roots(p: f64, q: f64, w: f64, count: usize) -> Vec<f64> {
    if p == 0.0 && q == 0.0 {
        return Vec::new();
    }

    let mut first_angle = (-p).atan2(q);
    if first_angle < 0.0 {
        first_angle += PI;
    }

    let t_base = first_angle / w;
    let period = PI / w;
    (0..count).map(|i| t_base + i as f64 * period).collect()
}

/// Locate the first `count` zeros, peaks, and valleys of an underdamped
/// response.
///
/// Extrema candidates are drawn from 2·`count` velocity roots: peaks and
/// valleys alternate, so half the candidates land in each list. A candidate
/// with positive displacement is a peak, otherwise a valley; candidates
/// past a full list are discarded.
pub fn find_critical_points(coeffs: &UnderdampedCoefficients, count: usize) -> CriticalPoints {
    let zeros = trig_roots(coeffs.a, coeffs.b, coeffs.w_d, count)
        .into_iter()
        .map(|t| (t, 0.0))
        .collect();

    let mut peaks = Vec::with_capacity(count);
    let mut valleys = Vec::with_capacity(count);
    for t in trig_roots(coeffs.a_v, coeffs.b_v, coeffs.w_d, 2 * count) {
        let value = coeffs.displacement_at(t);
        if value > 0.0 {
            if peaks.len() < count {
                peaks.push((t, value));
            }
        } else if valleys.len() < count {
            valleys.push((t, value));
        }
    }

    CriticalPoints {
        zeros,
        peaks,
        valleys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_trig_roots_of_pure_cosine() {
        // cos t = 0 at π/2, 3π/2, 5π/2, ...
        let roots = trig_roots(1.0, 0.0, 1.0, 3);
        assert_eq!(roots.len(), 3);
        for (i, &root) in roots.iter().enumerate() {
            assert_relative_eq!(root, FRAC_PI_2 + i as f64 * PI, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_trig_roots_first_root_non_negative() {
        for &(p, q) in &[(1.0, 1.0), (-1.0, 2.0), (0.5, -0.5), (0.0, 1.0), (-3.0, 0.0)] {
            let roots = trig_roots(p, q, 2.0, 4);
            assert!(roots[0] >= 0.0, "first root {} for ({}, {})", roots[0], p, q);
            assert!(roots[0] < PI / 2.0, "first root outside [0, π/ω)");
            for pair in roots.windows(2) {
                assert!(pair[1] > pair[0], "roots must ascend");
            }
        }
    }

    #[test]
    fn test_trig_roots_solve_the_equation() {
        let (p, q, w) = (0.8, -1.7, 3.2);
        for root in trig_roots(p, q, w, 5) {
            let residual = p * (w * root).cos() + q * (w * root).sin();
            assert!(residual.abs() < 1e-12, "residual {} at t = {}", residual, root);
        }
    }

    #[test]
    fn test_degenerate_pair_yields_no_roots() {
        assert!(trig_roots(0.0, 0.0, 1.0, 4).is_empty());
    }

    #[test]
    fn test_cosine_critical_points() {
        // ζ = 0, ω_n = 1, x0 = 1, v0 = 0  ⇒  x(t) = cos t
        let coeffs = UnderdampedCoefficients::new(0.0, 1.0, 1.0, 0.0);
        let points = find_critical_points(&coeffs, 2);

        assert_eq!(points.zeros.len(), 2);
        assert_relative_eq!(points.zeros[0].0, FRAC_PI_2, max_relative = 1e-12);
        assert_relative_eq!(points.zeros[1].0, 3.0 * FRAC_PI_2, max_relative = 1e-12);
        assert_eq!(points.zeros[0].1, 0.0);

        // Peaks of cos t at 0 and 2π, valleys at π and 3π
        assert_eq!(points.peaks.len(), 2);
        assert_relative_eq!(points.peaks[0].0, 0.0, epsilon = 1e-12);
        assert_relative_eq!(points.peaks[0].1, 1.0, max_relative = 1e-12);
        assert_relative_eq!(points.peaks[1].0, 2.0 * PI, max_relative = 1e-12);

        assert_eq!(points.valleys.len(), 2);
        assert_relative_eq!(points.valleys[0].0, PI, max_relative = 1e-12);
        assert_relative_eq!(points.valleys[0].1, -1.0, max_relative = 1e-12);
        assert_relative_eq!(points.valleys[1].0, 3.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn test_damped_extrema_shrink_and_alternate() {
        let coeffs = UnderdampedCoefficients::new(0.1, 2.0, 1.0, 0.0);
        let points = find_critical_points(&coeffs, 3);

        assert_eq!(points.peaks.len(), 3);
        assert_eq!(points.valleys.len(), 3);

        for pair in points.peaks.windows(2) {
            assert!(pair[1].0 > pair[0].0, "peak times must ascend");
            assert!(
                pair[1].1 < pair[0].1,
                "damped peaks must shrink: {} then {}",
                pair[0].1,
                pair[1].1
            );
        }
        for &(_, value) in &points.peaks {
            assert!(value > 0.0);
        }
        for &(_, value) in &points.valleys {
            assert!(value <= 0.0);
        }
    }

    #[test]
    fn test_extrema_sit_on_velocity_zeros() {
        let coeffs = UnderdampedCoefficients::new(0.25, 1.3, 0.4, -0.8);
        let points = find_critical_points(&coeffs, 2);
        for &(t, _) in points.peaks.iter().chain(&points.valleys) {
            assert!(
                coeffs.velocity_at(t).abs() < 1e-12,
                "v({}) = {}",
                t,
                coeffs.velocity_at(t)
            );
        }
    }

    #[test]
    fn test_requested_count_caps_lists() {
        let coeffs = UnderdampedCoefficients::new(0.05, 1.0, 1.0, 0.3);
        for count in [1, 2, 5] {
            let points = find_critical_points(&coeffs, count);
            assert!(points.zeros.len() <= count);
            assert!(points.peaks.len() <= count);
            assert!(points.valleys.len() <= count);
        }
    }
}
