use nalgebra::DMatrix;
use tracing::debug;

use crate::components::{
    AircraftParameters, EquilibriumState, LinearSystem, StabilityDerivatives, N_STATES,
};
use crate::error::{LongitudinalError, Result};

/// Assembles the six-state longitudinal model [V, γ, α, q, θ, z] around a
/// trimmed flight condition in level flight (γ_eq = 0).
pub struct LinearStateSpaceBuilder;

impl LinearStateSpaceBuilder {
    /// Dimensional stability and control derivatives at the trim point.
    pub fn derivatives(
        params: &AircraftParameters,
        trim: &EquilibriumState,
    ) -> Result<StabilityDerivatives> {
        if !trim.is_converged() {
            return Err(LongitudinalError::InvalidPrecondition(format!(
                "trim state is not converged (converged = {}, Cz = {})",
                trim.converged, trim.cz_eq
            )));
        }

        let aero = &params.aero_coef;
        let geometry = &params.geometry;
        let l_ref = geometry.reference_length;
        let g = params.physics.gravity;
        let m = params.mass.mass;
        let v = params.condition.airspeed;
        let qs = params.dynamic_force();
        let mv = m * v;
        let iyy = params.mass.pitch_inertia();

        let alpha = trim.alpha_eq;
        let gamma: f64 = 0.0;
        let (sin_a, cos_a) = alpha.sin_cos();
        let f_tau = params.thrust_gradient;

        let cx_alpha = 2.0 * aero.polar_k * trim.cz_eq * aero.cz_alpha;
        let cm_alpha = geometry.aero_lever_arm() / l_ref * (cx_alpha * sin_a + aero.cz_alpha * cos_a);
        let cm_delta_m = geometry.elevator_lever_arm() / l_ref
            * (trim.cx_delta_m * sin_a + aero.cz_delta_m * cos_a);

        Ok(StabilityDerivatives {
            iyy,
            cx_alpha,
            cm_alpha,
            cm_delta_m,
            x_v: 2.0 * qs * trim.cx_eq / mv,
            x_alpha: trim.fpx_eq * sin_a / mv + qs * cx_alpha / mv,
            x_gamma: g * gamma.cos() / v,
            x_delta_m: qs * trim.cx_delta_m / mv,
            x_tau: -f_tau * cos_a / mv,
            m_v: 0.0,
            m_alpha: qs * l_ref * cm_alpha / iyy,
            m_q: qs * l_ref.powi(2) * aero.cm_q / (v * iyy),
            m_delta_m: qs * l_ref * cm_delta_m / iyy,
            z_v: 2.0 * qs * trim.cz_eq / mv,
            z_alpha: trim.fpx_eq * cos_a / mv + qs * aero.cz_alpha / mv,
            z_gamma: g * gamma.sin() / v,
            z_delta_m: qs * aero.cz_delta_m / mv,
            z_tau: f_tau * sin_a / mv,
        })
    }

    /// Builds A, B, C = I₆ and D = 0 from the trim state. Pure: the same
    /// inputs always give bit-identical matrices.
    ///
    /// # Arguments
    /// * `params` - Aircraft parameters the trim state was computed for.
    /// * `trim` - Converged equilibrium.
    ///
    /// # Returns
    /// The `LinearSystem` with its ordered eigenvalues and derivatives, or
    /// `InvalidPrecondition` when `trim` did not converge.
    pub fn build(params: &AircraftParameters, trim: &EquilibriumState) -> Result<LinearSystem> {
        let d = Self::derivatives(params, trim)?;
        let v = params.condition.airspeed;

        #[rustfmt::skip]
        let a = DMatrix::from_row_slice(N_STATES, N_STATES, &[
            -d.x_v, -d.x_gamma, -d.x_alpha, 0.0,   0.0, 0.0,
             d.z_v,  d.z_gamma,  d.z_alpha, 0.0,   0.0, 0.0,
            -d.z_v, -d.z_gamma, -d.z_alpha, 1.0,   0.0, 0.0,
             d.m_v,  0.0,        d.m_alpha, d.m_q, 0.0, 0.0,
             0.0,    0.0,        0.0,       1.0,   0.0, 0.0,
             0.0,    v,          0.0,       0.0,   0.0, 0.0,
        ]);
        // Elevator drag (x_delta_m) is left out of the velocity row
        let b = DMatrix::from_column_slice(
            N_STATES,
            1,
            &[0.0, d.z_delta_m, -d.z_delta_m, d.m_delta_m, 0.0, 0.0],
        );

        let system = LinearSystem::new(a, b)?.with_derivatives(d);
        debug!("Longitudinal eigenvalues: {:?}", system.eigenvalues());
        Ok(system)
    }
}
