use nalgebra::{Complex, DMatrix};
use serde::Serialize;

use crate::control::{sorted_eigenvalues, ModalDamping, StateSpace};
use crate::error::{LongitudinalError, Result};

/// Number of states in the longitudinal model.
pub const N_STATES: usize = 6;

/// Longitudinal state vector, in matrix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StateVariable {
    /// Velocity deviation V (m/s)
    Velocity = 0,
    /// Flight-path angle γ (rad)
    FlightPathAngle = 1,
    /// Angle of attack α (rad)
    AngleOfAttack = 2,
    /// Pitch rate q (rad/s)
    PitchRate = 3,
    /// Pitch angle θ (rad)
    PitchAngle = 4,
    /// Altitude z (m)
    Altitude = 5,
}

impl StateVariable {
    pub const ALL: [StateVariable; N_STATES] = [
        StateVariable::Velocity,
        StateVariable::FlightPathAngle,
        StateVariable::AngleOfAttack,
        StateVariable::PitchRate,
        StateVariable::PitchAngle,
        StateVariable::Altitude,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            StateVariable::Velocity => "V",
            StateVariable::FlightPathAngle => "gamma",
            StateVariable::AngleOfAttack => "alpha",
            StateVariable::PitchRate => "q",
            StateVariable::PitchAngle => "theta",
            StateVariable::Altitude => "z",
        }
    }
}

/// Dimensional stability and control derivatives at the trim point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StabilityDerivatives {
    /// Pitch moment of inertia (kg·m²)
    pub iyy: f64,
    pub cx_alpha: f64,
    pub cm_alpha: f64,
    pub cm_delta_m: f64,
    pub x_v: f64,
    pub x_alpha: f64,
    pub x_gamma: f64,
    pub x_delta_m: f64,
    pub x_tau: f64,
    pub m_v: f64,
    pub m_alpha: f64,
    pub m_q: f64,
    pub m_delta_m: f64,
    pub z_v: f64,
    pub z_alpha: f64,
    pub z_gamma: f64,
    pub z_delta_m: f64,
    pub z_tau: f64,
}

/// Full six-state longitudinal model with full-state observation.
///
/// C is always the 6×6 identity and D the 6×1 zero matrix. The model is never
/// modified once built; reductions copy the blocks they need.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    state_space: StateSpace,
    eigenvalues: Vec<Complex<f64>>,
    derivatives: Option<StabilityDerivatives>,
}

impl LinearSystem {
    /// Wraps a 6×6 state matrix and 6×1 elevator input matrix.
    pub fn new(a: DMatrix<f64>, b: DMatrix<f64>) -> Result<Self> {
        if a.shape() != (N_STATES, N_STATES) || b.shape() != (N_STATES, 1) {
            return Err(LongitudinalError::InvalidPrecondition(format!(
                "longitudinal model needs A 6x6 and B 6x1, got A {:?} and B {:?}",
                a.shape(),
                b.shape()
            )));
        }
        let eigenvalues = sorted_eigenvalues(&a);
        let state_space = StateSpace::new(
            a,
            b,
            DMatrix::identity(N_STATES, N_STATES),
            DMatrix::zeros(N_STATES, 1),
        )?;

        Ok(Self {
            state_space,
            eigenvalues,
            derivatives: None,
        })
    }

    pub fn with_derivatives(mut self, derivatives: StabilityDerivatives) -> Self {
        self.derivatives = Some(derivatives);
        self
    }

    pub fn a(&self) -> &DMatrix<f64> {
        &self.state_space.a
    }

    pub fn b(&self) -> &DMatrix<f64> {
        &self.state_space.b
    }

    pub fn c(&self) -> &DMatrix<f64> {
        &self.state_space.c
    }

    pub fn d(&self) -> &DMatrix<f64> {
        &self.state_space.d
    }

    pub fn state_space(&self) -> &StateSpace {
        &self.state_space
    }

    pub fn eigenvalues(&self) -> &[Complex<f64>] {
        &self.eigenvalues
    }

    pub fn derivatives(&self) -> Option<&StabilityDerivatives> {
        self.derivatives.as_ref()
    }

    /// Damping table of the full system.
    pub fn damping(&self) -> Vec<ModalDamping> {
        crate::control::damp(&self.eigenvalues)
    }

    /// Copy of the square block of A on `start..start + size` and the matching rows of B.
    pub fn block(&self, start: usize, size: usize) -> (DMatrix<f64>, DMatrix<f64>) {
        (
            self.a().slice((start, start), (size, size)).into_owned(),
            self.b().rows(start, size).into_owned(),
        )
    }
}
