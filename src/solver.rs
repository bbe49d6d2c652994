//! Oscillator Solver: Parameter State and On-Demand Evaluation
//!
//! [`OscillatorSolver`] owns a [`ParameterSet`] and exposes one operation,
//! [`calculate`](OscillatorSolver::calculate), which runs the full pipeline:
//!
//! 1. validate m > 0, k > 0, c ≥ 0
//! 2. classify the damping regime from ζ
//! 3. evaluate the regime's closed form over the time vector
//! 4. (underdamped only) extract zeros, peaks, and valleys analytically
//!
//! Every call is a pure function of the current parameter state; nothing is
//! cached between calls. One solver instance serves one caller — there is
//! no internal locking, concurrent sessions use independent instances.

use ndarray::Array1;
use thiserror::Error;

use crate::critical::{find_critical_points, CriticalPoints};
use crate::evaluate::{self, UnderdampedCoefficients};
use crate::params::{FieldError, FieldValue, ParameterSet};
use crate::regime::{classify, damping_ratio, natural_frequency, Regime};

/// Number of zeros/peaks/valleys reported by [`OscillatorSolver::calculate`]
pub const DEFAULT_CRITICAL_POINT_COUNT: usize = 2;

/// Parameter combinations rejected before evaluation.
///
/// ζ and ω_n are undefined for non-positive mass or stiffness, and the
/// three-regime classification only covers ζ ≥ 0; all three cases fail
/// fast instead of propagating non-finite values into the trajectory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Mass must be strictly positive
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),
    /// Stiffness must be strictly positive
    #[error("stiffness must be positive, got {0}")]
    NonPositiveStiffness(f64),
    /// Negative damping has no regime; the classifier covers ζ ≥ 0 only
    #[error("damping coefficient must be non-negative, got {0}")]
    NegativeDamping(f64),
}

/// Immutable snapshot produced by one [`OscillatorSolver::calculate`] call
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryResult {
    /// Time vector the trajectory was evaluated over
    pub t: Array1<f64>,
    /// Displacement x(t), aligned with `t`
    pub x: Array1<f64>,
    /// Velocity x'(t), aligned with `t`
    pub v: Array1<f64>,
    /// Amplitude envelope bounding |x(t)| (underdamped only)
    pub envelope: Option<Array1<f64>>,
    /// Zeros, peaks, and valleys (underdamped only)
    pub critical_points: Option<CriticalPoints>,
    /// Damping regime the trajectory was evaluated in
    pub regime: Regime,
    /// Damping ratio ζ
    pub zeta: f64,
    /// Natural frequency ω_n
    pub w_n: f64,
}

/// Analytic damped-oscillator solver
///
/// ```
/// use damped_oscillator::{OscillatorSolver, Regime};
///
/// let mut solver = OscillatorSolver::new();
/// solver.update_params(&[1.0, 1.0, 0.2, 1.0, 0.0]);
///
/// let result = solver.calculate().unwrap();
/// assert_eq!(result.regime, Regime::Underdamped);
/// assert!(result.envelope.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OscillatorSolver {
    params: ParameterSet,
}

impl OscillatorSolver {
    /// Solver with default parameters (m = k = 1, c = 0, at rest)
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver seeded with an existing parameter set
    pub fn with_params(params: ParameterSet) -> Self {
        Self { params }
    }

    /// Read access to the current parameters
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// The canonical ordered field schema, for UI field generation
    pub fn field_names() -> &'static [&'static str] {
        ParameterSet::field_names()
    }

    /// Update one named field; see [`ParameterSet::update_value`]
    pub fn update_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FieldError> {
        self.params.update_value(name, value.into())
    }

    /// Positional bulk update of the five scalar fields in schema order
    pub fn update_params(&mut self, values: &[f64]) {
        self.params.update_params(values);
    }

    /// Evaluate the trajectory with the default critical-point count
    pub fn calculate(&self) -> Result<TrajectoryResult, SolverError> {
        self.calculate_with_count(DEFAULT_CRITICAL_POINT_COUNT)
    }

    /// Evaluate the trajectory, reporting up to `count` zeros, peaks, and
    /// valleys in the underdamped regime
    pub fn calculate_with_count(&self, count: usize) -> Result<TrajectoryResult, SolverError> {
        let m = self.params.mass;
        let k = self.params.stiffness;
        let c = self.params.damping_coefficient;

        // NaN fails the > comparison and is rejected with the same error
        if !(m > 0.0) {
            return Err(SolverError::NonPositiveMass(m));
        }
        if !(k > 0.0) {
            return Err(SolverError::NonPositiveStiffness(k));
        }
        if c < 0.0 {
            return Err(SolverError::NegativeDamping(c));
        }

        // Zero-initial-state override: a system released at rest from the
        // origin stays there identically, so the reference behavior
        // substitutes a unit initial displacement to keep the trajectory
        // informative. Preserved deliberately; the stored parameter is not
        // modified.
        let x0 = if self.params.initial_displacement == 0.0 && self.params.initial_velocity == 0.0 {
            1.0
        } else {
            self.params.initial_displacement
        };
        let v0 = self.params.initial_velocity;

        let t = self.params.time_vector();
        let zeta = damping_ratio(m, k, c);
        let w_n = natural_frequency(m, k);
        let regime = classify(zeta);

        let (x, v, envelope, critical_points) = match regime {
            Regime::Underdamped => {
                let coeffs = UnderdampedCoefficients::new(zeta, w_n, x0, v0);
                let (x, v, envelope) = evaluate::underdamped(&coeffs, &t);
                let points = find_critical_points(&coeffs, count);
                (x, v, Some(envelope), Some(points))
            }
            Regime::CriticallyDamped => {
                let (x, v) = evaluate::critically_damped(w_n, x0, v0, &t);
                (x, v, None, None)
            }
            Regime::Overdamped => {
                let (x, v) = evaluate::overdamped(zeta, w_n, x0, v0, &t);
                (x, v, None, None)
            }
        };

        Ok(TrajectoryResult {
            t,
            x,
            v,
            envelope,
            critical_points,
            regime,
            zeta,
            w_n,
        })
    }
}
