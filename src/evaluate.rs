//! Closed-Form Trajectory Evaluation
//!
//! One formula per regime, evaluated over the whole time vector:
//!
//! - **Underdamped** (ζ < 1):
//!   x(t) = e^(−ζω_n t)·(A·cos ω_d t + B·sin ω_d t), with
//!   A = x0, B = (v0 + ζω_n x0)/ω_d and ω_d = ω_n·√(1 − ζ²).
//!   The amplitude envelope √(A² + B²)·e^(−ζω_n t) bounds |x(t)| from
//!   above; it is not the exact locus of the local extrema.
//! - **Critically damped** (ζ = 1):
//!   x(t) = (A + B·t)·e^(−ω_n t), with A = x0, B = v0 + ω_n x0.
//! - **Overdamped** (ζ > 1):
//!   x(t) = A·e^(r₁t) + B·e^(r₂t), with the real characteristic roots
//!   r₁,₂ = −ω_n·(ζ ∓ √(ζ² − 1)), B = (v0 − r₁x0)/(r₂ − r₁), A = x0 − B.
//!
//! Each evaluator also returns the velocity trajectory from the
//! differentiated closed form, so a caller can plot x'(t) alongside x(t).

use ndarray::Array1;

/// Coefficients of an underdamped response and its velocity,
///
///   x(t) = e^(−ζω_n t)·(A·cos ω_d t + B·sin ω_d t)
///   v(t) = e^(−ζω_n t)·(A_v·cos ω_d t + B_v·sin ω_d t)
///
/// Shared between the trajectory evaluator and the critical-point finder,
/// which solves the same trigonometric forms for their roots.
#[derive(Debug, Clone, Copy)]
pub struct UnderdampedCoefficients {
    /// Damped natural frequency ω_d = ω_n·√(1 − ζ²)
    pub w_d: f64,
    /// Exponential decay rate ζ·ω_n
    pub decay_rate: f64,
    /// Displacement cosine coefficient A = x0
    pub a: f64,
    /// Displacement sine coefficient B = (v0 + ζω_n x0)/ω_d
    pub b: f64,
    /// Velocity cosine coefficient A_v = v0
    pub a_v: f64,
    /// Velocity sine coefficient B_v = −ω_n·(ζv0 + ω_n x0)/ω_d
    pub b_v: f64,
}

impl UnderdampedCoefficients {
    /// Derive the coefficient set from ζ < 1, ω_n, and initial conditions
    pub fn new(zeta: f64, w_n: f64, x0: f64, v0: f64) -> Self {
        let w_d = w_n * (1.0 - zeta * zeta).sqrt();
        Self {
            w_d,
            decay_rate: zeta * w_n,
            a: x0,
            b: (v0 + zeta * w_n * x0) / w_d,
            a_v: v0,
            b_v: -w_n * (zeta * v0 + w_n * x0) / w_d,
        }
    }

    /// Displacement at a single instant
    pub fn displacement_at(&self, t: f64) -> f64 {
        (-self.decay_rate * t).exp() * (self.a * (self.w_d * t).cos() + self.b * (self.w_d * t).sin())
    }

    /// Velocity at a single instant
    pub fn velocity_at(&self, t: f64) -> f64 {
        (-self.decay_rate * t).exp()
            * (self.a_v * (self.w_d * t).cos() + self.b_v * (self.w_d * t).sin())
    }

    /// Envelope amplitude √(A² + B²)
    pub fn amplitude(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// Underdamped trajectory: (displacement, velocity, envelope) over `t`
pub fn underdamped(
    coeffs: &UnderdampedCoefficients,
    t: &Array1<f64>,
) -> (Array1<f64>, Array1<f64>, Array1<f64>) {
    let x = t.mapv(|ti| coeffs.displacement_at(ti));
    let v = t.mapv(|ti| coeffs.velocity_at(ti));
    let amplitude = coeffs.amplitude();
    let envelope = t.mapv(|ti| amplitude * (-coeffs.decay_rate * ti).exp());
    (x, v, envelope)
}

/// Critically damped trajectory: (displacement, velocity) over `t`
pub fn critically_damped(
    w_n: f64,
    x0: f64,
    v0: f64,
    t: &Array1<f64>,
) -> (Array1<f64>, Array1<f64>) {
    let a = x0;
    let b = v0 + w_n * x0;
    let x = t.mapv(|ti| (a + b * ti) * (-w_n * ti).exp());
    let v = t.mapv(|ti| (b - w_n * (a + b * ti)) * (-w_n * ti).exp());
    (x, v)
}

/// Overdamped trajectory: (displacement, velocity) over `t`
pub fn overdamped(
    zeta: f64,
    w_n: f64,
    x0: f64,
    v0: f64,
    t: &Array1<f64>,
) -> (Array1<f64>, Array1<f64>) {
    let root_term = (zeta * zeta - 1.0).sqrt();
    let r1 = -w_n * (zeta - root_term);
    let r2 = -w_n * (zeta + root_term);

    let b = (v0 - r1 * x0) / (r2 - r1);
    let a = x0 - b;

    let x = t.mapv(|ti| a * (r1 * ti).exp() + b * (r2 * ti).exp());
    let v = t.mapv(|ti| a * r1 * (r1 * ti).exp() + b * r2 * (r2 * ti).exp());
    (x, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linspace(n: usize, end: f64) -> Array1<f64> {
        Array1::linspace(0.0, end, n)
    }

    #[test]
    fn test_undamped_reduces_to_cosine() {
        // m = k = 1, c = 0, x0 = 1, v0 = 0  ⇒  x(t) = cos t
        let coeffs = UnderdampedCoefficients::new(0.0, 1.0, 1.0, 0.0);
        let t = linspace(500, 20.0);
        let (x, v, envelope) = underdamped(&coeffs, &t);

        for (i, &ti) in t.iter().enumerate() {
            assert_relative_eq!(x[i], ti.cos(), max_relative = 1e-12, epsilon = 1e-12);
            assert_relative_eq!(v[i], -ti.sin(), max_relative = 1e-12, epsilon = 1e-12);
            assert_relative_eq!(envelope[i], 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_envelope_bounds_displacement() {
        let coeffs = UnderdampedCoefficients::new(0.3, 2.0, 1.0, -0.5);
        let t = linspace(2000, 30.0);
        let (x, _, envelope) = underdamped(&coeffs, &t);

        for i in 0..t.len() {
            assert!(
                envelope[i] >= x[i].abs() - 1e-12,
                "envelope {} < |x| {} at t = {}",
                envelope[i],
                x[i].abs(),
                t[i]
            );
        }
    }

    #[test]
    fn test_initial_conditions_all_regimes() {
        let (x0, v0) = (0.7, -1.3);
        let t = linspace(10, 5.0);

        let coeffs = UnderdampedCoefficients::new(0.4, 1.5, x0, v0);
        let (x, v, _) = underdamped(&coeffs, &t);
        assert_relative_eq!(x[0], x0, max_relative = 1e-12);
        assert_relative_eq!(v[0], v0, max_relative = 1e-12);

        let (x, v) = critically_damped(1.5, x0, v0, &t);
        assert_relative_eq!(x[0], x0, max_relative = 1e-12);
        assert_relative_eq!(v[0], v0, max_relative = 1e-12);

        let (x, v) = overdamped(2.0, 1.0, x0, v0, &t);
        assert_relative_eq!(x[0], x0, max_relative = 1e-12);
        assert_relative_eq!(v[0], v0, max_relative = 1e-12);
    }

    #[test]
    fn test_overdamped_decays_to_rest() {
        // m = 1, k = 1, c = 4  ⇒  ζ = 2
        let t = linspace(100, 80.0);
        let (x, v) = overdamped(2.0, 1.0, 1.0, 0.0, &t);
        assert!(x[t.len() - 1].abs() < 1e-6, "x(80) = {}", x[t.len() - 1]);
        assert!(v[t.len() - 1].abs() < 1e-6);
    }

    #[test]
    fn test_critically_damped_no_oscillation() {
        // Released from rest at x0 > 0 the trajectory never crosses zero
        let t = linspace(1000, 40.0);
        let (x, _) = critically_damped(1.0, 1.0, 0.0, &t);
        assert!(x.iter().all(|&xi| xi >= 0.0));
        assert!(x[t.len() - 1] < 1e-10);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        let coeffs = UnderdampedCoefficients::new(0.2, 3.0, 1.0, 0.5);
        let h = 1e-6;
        for &ti in &[0.1, 0.5, 1.7, 4.2] {
            let numeric = (coeffs.displacement_at(ti + h) - coeffs.displacement_at(ti - h)) / (2.0 * h);
            assert_relative_eq!(coeffs.velocity_at(ti), numeric, max_relative = 1e-6, epsilon = 1e-8);
        }
    }
}
