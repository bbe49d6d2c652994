//! Parameter Store: Named Oscillator Parameters and Time Domain
//!
//! Holds the five physical scalars of the damped oscillator
//!
//!   m·x'' + c·x' + k·x = 0,  x(0) = x0,  x'(0) = v0
//!
//! plus an optional time-domain sample vector. Mutation is in-place and
//! lazy: nothing is recomputed until [`crate::OscillatorSolver::calculate`]
//! is invoked, and no derived quantity is cached between calls.
//!
//! ## Field Schema
//!
//! The schema is a single pre-declared ordered list ([`FIELD_NAMES`]). It is
//! the one source of truth for two contracts:
//!
//! - the positional assignment order of [`ParameterSet::update_params`]
//! - the field order a UI layer uses to generate its input widgets
//!
//! Updates go through a shallow category check only: scalar fields accept
//! any scalar, the time field accepts any sample vector. Out-of-physical-
//! range values (negative mass, zero stiffness) are accepted here and
//! rejected by the solver before evaluation.

use ndarray::Array1;
use thiserror::Error;

/// Canonical ordered field schema.
///
/// The first five entries are the positional contract of
/// [`ParameterSet::update_params`]; the trailing `t` entry is addressable
/// only by name.
pub const FIELD_NAMES: [&str; 6] = [
    "mass",
    "stiffness",
    "damping_coefficient",
    "initial_displacement",
    "initial_velocity",
    "t",
];

/// Number of samples in the default time grid
pub const DEFAULT_SAMPLES: usize = 1000;

/// End of the default time grid (the grid spans `[0, DEFAULT_T_MAX]`)
pub const DEFAULT_T_MAX: f64 = 50.0;

/// A value accepted by [`ParameterSet::update_value`]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Scalar parameter value
    Scalar(f64),
    /// Time-domain sample vector (ascending)
    Samples(Array1<f64>),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Array1<f64>> for FieldValue {
    fn from(value: Array1<f64>) -> Self {
        FieldValue::Samples(value)
    }
}

/// Errors from single-field updates
///
/// On error the store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The name is not part of the field schema
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// The value's category (scalar vs. sample vector) does not match the field
    #[error("field `{name}` expects a {expected}")]
    TypeMismatch {
        /// Field that rejected the value
        name: String,
        /// Category the field stores
        expected: &'static str,
    },
}

/// Physical parameters of the oscillator plus the evaluation time domain
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    /// Mass m (kg); must be positive for the physics to be defined
    pub mass: f64,
    /// Stiffness k (N/m); must be positive
    pub stiffness: f64,
    /// Damping coefficient c (N·s/m); non-negative
    pub damping_coefficient: f64,
    /// Initial displacement x0
    pub initial_displacement: f64,
    /// Initial velocity v0
    pub initial_velocity: f64,
    /// Time domain; `None` selects the default grid of
    /// [`DEFAULT_SAMPLES`] samples over `[0, DEFAULT_T_MAX]`
    pub t: Option<Array1<f64>>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 1.0,
            damping_coefficient: 0.0,
            initial_displacement: 0.0,
            initial_velocity: 0.0,
            t: None,
        }
    }
}

impl ParameterSet {
    /// The canonical ordered field schema
    pub fn field_names() -> &'static [&'static str] {
        &FIELD_NAMES
    }

    /// Update a single named field.
    ///
    /// Accepts any scalar for the five scalar fields and any sample vector
    /// for `t`; rejects category mismatches and unknown names, leaving the
    /// store unchanged. No numeric-range check happens here.
    pub fn update_value(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match (name, value) {
            ("mass", FieldValue::Scalar(v)) => self.mass = v,
            ("stiffness", FieldValue::Scalar(v)) => self.stiffness = v,
            ("damping_coefficient", FieldValue::Scalar(v)) => self.damping_coefficient = v,
            ("initial_displacement", FieldValue::Scalar(v)) => self.initial_displacement = v,
            ("initial_velocity", FieldValue::Scalar(v)) => self.initial_velocity = v,
            ("t", FieldValue::Samples(v)) => self.t = Some(v),
            ("t", FieldValue::Scalar(_)) => {
                return Err(FieldError::TypeMismatch {
                    name: name.to_owned(),
                    expected: "sample vector",
                });
            }
            (other, FieldValue::Samples(_)) if FIELD_NAMES.contains(&other) => {
                return Err(FieldError::TypeMismatch {
                    name: other.to_owned(),
                    expected: "scalar",
                });
            }
            (other, _) => return Err(FieldError::UnknownField(other.to_owned())),
        }
        Ok(())
    }

    /// Assign the five scalar fields positionally in schema order.
    ///
    /// A shorter slice assigns a prefix of the schema; values beyond the
    /// fifth are ignored. The time domain is not addressable positionally.
    pub fn update_params(&mut self, values: &[f64]) {
        let slots: [&mut f64; 5] = [
            &mut self.mass,
            &mut self.stiffness,
            &mut self.damping_coefficient,
            &mut self.initial_displacement,
            &mut self.initial_velocity,
        ];
        for (slot, &value) in slots.into_iter().zip(values) {
            *slot = value;
        }
    }

    /// Time vector the evaluator runs over; the default grid when unset
    pub fn time_vector(&self) -> Array1<f64> {
        match &self.t {
            Some(t) => t.clone(),
            None => Array1::linspace(0.0, DEFAULT_T_MAX, DEFAULT_SAMPLES),
        }
    }
}
