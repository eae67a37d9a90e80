use serde::{Deserialize, Serialize};

/// Trim solution of the longitudinal equilibrium.
///
/// Only the equilibrium solver hands out converged states. The seed state
/// exists so the iteration has a well-defined starting point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumState {
    /// Trim angle of attack (rad).
    pub alpha_eq: f64,
    /// Angle of attack from the previous iteration (rad).
    pub alpha_eq_prev: f64,
    /// Trim lift coefficient.
    pub cz_eq: f64,
    /// Trim drag coefficient.
    pub cx_eq: f64,
    /// Drag sensitivity to elevator deflection at trim.
    pub cx_delta_m: f64,
    /// Trim elevator deflection (rad).
    pub delta_m_eq: f64,
    /// Trim thrust (N).
    pub fpx_eq: f64,
    pub iteration_count: usize,
    pub converged: bool,
}

impl EquilibriumState {
    pub fn seed() -> Self {
        Self {
            alpha_eq: 1.0,
            alpha_eq_prev: 0.0,
            cz_eq: f64::NAN,
            cx_eq: f64::NAN,
            cx_delta_m: f64::NAN,
            delta_m_eq: f64::NAN,
            fpx_eq: 0.0,
            iteration_count: 0,
            converged: false,
        }
    }

    /// Change between the last two angle-of-attack iterates (rad).
    pub fn alpha_step(&self) -> f64 {
        (self.alpha_eq - self.alpha_eq_prev).abs()
    }

    pub fn is_converged(&self) -> bool {
        self.converged && self.cz_eq.is_finite()
    }
}
