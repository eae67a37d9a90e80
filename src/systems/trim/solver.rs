use tracing::{debug, info, warn};

use crate::components::{AircraftParameters, EquilibriumState, TrimSolverConfig};
use crate::error::{LongitudinalError, Result, Stage};

/// Fixed-point solver for the longitudinal trim point.
///
/// Lift balances weight minus the vertical thrust component, the elevator
/// cancels the pitching moment about the centre of gravity and thrust
/// balances drag along the flight path. Each pass feeds the previous angle of
/// attack and thrust back into the balance until α settles.
#[derive(Debug, Clone, Default)]
pub struct EquilibriumSolver {
    settings: TrimSolverConfig,
}

impl EquilibriumSolver {
    pub fn new(settings: TrimSolverConfig) -> Self {
        Self { settings }
    }

    /// Iterates from the seed state until two successive α iterates are
    /// closer than `epsilon`.
    ///
    /// # Arguments
    /// * `params` - Aircraft and operating point to trim.
    ///
    /// # Returns
    /// The converged `EquilibriumState`, or an error when the geometry is
    /// degenerate or the iteration does not settle.
    pub fn solve(&self, params: &AircraftParameters) -> Result<EquilibriumState> {
        let x = params.geometry.aero_lever_arm();
        let y = params.geometry.elevator_lever_arm();
        let lever_difference = y - x;

        if !(lever_difference.abs() >= self.settings.degeneracy_tolerance) {
            return Err(LongitudinalError::DegenerateConfiguration(format!(
                "elevator and wing lever arms coincide (Y - X = {:e} m)",
                lever_difference
            )));
        }

        let moment_ratio = x / lever_difference;
        if moment_ratio.abs() > self.settings.ratio_warning {
            warn!(
                "Near-degenerate geometry: X/(Y - X) = {:.3e}, trim elevator will be very sensitive",
                moment_ratio
            );
        }

        let qs = params.dynamic_force();
        if !(qs > 0.0) {
            return Err(LongitudinalError::DegenerateConfiguration(format!(
                "dynamic force Q·S must be positive, got {}",
                qs
            )));
        }

        let weight = params.weight();
        let aero = &params.aero_coef;
        let mut state = EquilibriumState::seed();

        while state.alpha_step() >= self.settings.epsilon {
            if state.iteration_count >= self.settings.max_iterations {
                return Err(LongitudinalError::ConvergenceFailure {
                    stage: Stage::Equilibrium,
                    iterations: state.iteration_count as u64,
                    reason: format!("alpha step still {:.3e} rad", state.alpha_step()),
                });
            }

            state.alpha_eq_prev = state.alpha_eq;
            let alpha = state.alpha_eq_prev;
            let (sin_a, cos_a) = alpha.sin_cos();

            state.cz_eq = (weight - sin_a * state.fpx_eq) / qs;
            state.cx_eq = aero.cx_0 + aero.polar_k * state.cz_eq.powi(2);
            state.cx_delta_m = 2.0 * aero.polar_k * state.cz_eq * aero.cz_delta_m;

            let elevator_effectiveness = state.cx_delta_m * sin_a + aero.cz_delta_m * cos_a;
            if elevator_effectiveness.abs() < f64::EPSILON {
                return Err(LongitudinalError::DegenerateConfiguration(format!(
                    "elevator has no normal-force effectiveness at alpha = {:.4} rad",
                    alpha
                )));
            }

            let normal_force = state.cx_eq * sin_a + state.cz_eq * cos_a;
            state.delta_m_eq = aero.delta_m_0 - normal_force / elevator_effectiveness * moment_ratio;
            state.alpha_eq = aero.alpha_0 + state.cz_eq / aero.cz_alpha
                - aero.cz_delta_m / aero.cz_alpha * state.delta_m_eq;
            state.fpx_eq = qs * state.cx_eq / state.alpha_eq.cos();
            state.iteration_count += 1;

            debug!(
                "Trim iteration {}: alpha={:.6} rad, delta_m={:.6} rad, Fpx={:.1} N, step={:.3e}",
                state.iteration_count,
                state.alpha_eq,
                state.delta_m_eq,
                state.fpx_eq,
                state.alpha_step()
            );

            if !(state.alpha_eq.is_finite() && state.fpx_eq.is_finite()) {
                return Err(LongitudinalError::ConvergenceFailure {
                    stage: Stage::Equilibrium,
                    iterations: state.iteration_count as u64,
                    reason: "iterate became non-finite".to_string(),
                });
            }
        }

        state.converged = true;
        info!(
            "{} trimmed in {} iterations: alpha={:.2}°, delta_m={:.2}°, thrust={:.0} N",
            params.name,
            state.iteration_count,
            state.alpha_eq.to_degrees(),
            state.delta_m_eq.to_degrees(),
            state.fpx_eq
        );

        Ok(state)
    }
}
