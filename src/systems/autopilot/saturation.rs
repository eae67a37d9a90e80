use argmin::core::{CostFunction, Error};
use tracing::info;

use crate::components::{
    AircraftParameters, EquilibriumState, FeedbackCascade, SaturationConfig, SaturationResult,
};
use crate::control::{step_response, StateSpace, TimeGrid};
use crate::error::{Result, Stage};
use crate::systems::autopilot::newton::NewtonRaphson;

/// Index of α in the reduced [γ, α, q, θ, z] model.
const ALPHA_STATE: usize = 1;

/// Peak angle of attack reached after a γ step, minus the α limit.
///
/// The target is linear, so the unit step response is simulated once and
/// scaled by the command.
#[derive(Debug, Clone)]
pub struct SaturationProblem {
    alpha_max: f64,
    unit_response: Vec<f64>,
}

impl SaturationProblem {
    /// # Arguments
    /// * `target` - Closed γ loop observed on α.
    /// * `alpha_max` - Angle-of-attack limit (rad).
    pub fn new(target: &StateSpace, alpha_max: f64) -> Result<Self> {
        let grid = TimeGrid::auto(target);
        let response = step_response(target, &grid)?;
        Ok(Self {
            alpha_max,
            unit_response: response.output,
        })
    }

    pub fn alpha_max(&self) -> f64 {
        self.alpha_max
    }

    /// max(γc · y(t)) − alpha_max for a step of size `gamma_c`.
    pub fn saturation(&self, gamma_c: f64) -> f64 {
        let peak = self
            .unit_response
            .iter()
            .map(|y| gamma_c * y)
            .fold(f64::NEG_INFINITY, f64::max);
        peak - self.alpha_max
    }
}

impl CostFunction for SaturationProblem {
    type Param = f64;
    type Output = f64;

    fn cost(&self, gamma_c: &Self::Param) -> std::result::Result<Self::Output, Error> {
        Ok(self.saturation(*gamma_c))
    }
}

/// Finds the largest flight-path command that keeps α under its limit.
#[derive(Debug, Clone, Default)]
pub struct SaturationRootFinder {
    settings: SaturationConfig,
}

impl SaturationRootFinder {
    pub fn new(settings: SaturationConfig) -> Self {
        Self { settings }
    }

    /// alpha_max = α_eq + (α_eq − α0)·n_z.
    pub fn alpha_max(&self, params: &AircraftParameters, trim: &EquilibriumState) -> f64 {
        trim.alpha_eq
            + (trim.alpha_eq - params.aero_coef.alpha_0) * self.settings.load_factor_margin
    }

    /// Closed γ loop observed on α, D = 0.
    pub fn target(cascade: &FeedbackCascade) -> Result<StateSpace> {
        cascade.flight_path.closed.observe(ALPHA_STATE)
    }

    pub fn solve(
        &self,
        params: &AircraftParameters,
        trim: &EquilibriumState,
        cascade: &FeedbackCascade,
    ) -> Result<SaturationResult> {
        let alpha_max = self.alpha_max(params, trim);
        let problem = SaturationProblem::new(&Self::target(cascade)?, alpha_max)?;

        let found = NewtonRaphson::new(self.settings.step, self.settings.tolerance)
            .with_stage(Stage::Saturation)
            .find_root(
                problem.clone(),
                self.settings.seed,
                self.settings.max_iterations,
                self.settings.debug_level,
            )?;

        let result = SaturationResult {
            alpha_max: problem.alpha_max(),
            gamma_max: found.root,
            iterations: found.iterations,
            residual: problem.saturation(found.root),
        };
        info!(
            "Maximum gamma command {:.4} rad ({:.2}°) for alpha_max {:.4} rad after {} iterations",
            result.gamma_max,
            result.gamma_max.to_degrees(),
            result.alpha_max,
            result.iterations
        );

        Ok(result)
    }
}
