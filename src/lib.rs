//! # Damped Oscillator: Analytic Trajectory Solver
//!
//! Closed-form solver for the second-order linear damped oscillator
//!
//!   m·x'' + c·x' + k·x = 0,  x(0) = x0,  x'(0) = v0
//!
//! intended as the computation core behind an interactive parameter
//! explorer: a UI layer owns sliders and plotting, this crate owns the
//! physics.
//!
//! ## Method
//!
//! No numerical integration is involved anywhere. The solver:
//!
//! 1. Classifies the system by its damping ratio ζ = c/(2·√(k·m)) into
//!    underdamped (ζ < 1), critically damped (ζ ≈ 1), or overdamped
//!    (ζ > 1), with a closeness tolerance around 1 that shields the
//!    ill-conditioned √(ζ² − 1) of the overdamped formula.
//! 2. Evaluates the regime's exact closed-form displacement and velocity
//!    over the requested time vector.
//! 3. For the oscillatory regime, locates zero-crossings, peaks, and
//!    valleys by solving P·cos ωt + Q·sin ωt = 0 analytically: the first
//!    root is atan2(−P, Q)/ω and the rest recur every half period.
//!
//! ## Usage
//!
//! ```
//! use damped_oscillator::{OscillatorSolver, Regime};
//!
//! let mut solver = OscillatorSolver::new();
//!
//! // mass, stiffness, damping, initial displacement, initial velocity
//! solver.update_params(&[1.0, 4.0, 0.4, 1.0, 0.0]);
//!
//! let result = solver.calculate().unwrap();
//! assert_eq!(result.regime, Regime::Underdamped);
//!
//! let points = result.critical_points.unwrap();
//! let (t_first_peak, height) = points.peaks[0];
//! assert!(height > 0.0 && t_first_peak >= 0.0);
//! ```
//!
//! Parameter mutation is lazy and in-place; every
//! [`calculate`](OscillatorSolver::calculate) call recomputes from the
//! current parameter state and returns an immutable snapshot. One solver
//! instance serves one caller.

pub mod critical;
pub mod evaluate;
pub mod params;
pub mod regime;
pub mod solver;

// Re-exports from params
pub use params::{
    FieldError,
    FieldValue,
    ParameterSet,
    DEFAULT_SAMPLES,
    DEFAULT_T_MAX,
    FIELD_NAMES,
};

// Re-exports from regime
pub use regime::{classify, damping_ratio, natural_frequency, Regime};

// Re-exports from evaluate
pub use evaluate::UnderdampedCoefficients;

// Re-exports from critical
pub use critical::{find_critical_points, trig_roots, CriticalPoints};

// Re-exports from solver
pub use solver::{
    OscillatorSolver,
    SolverError,
    TrajectoryResult,
    DEFAULT_CRITICAL_POINT_COUNT,
};
