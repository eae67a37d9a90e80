use nalgebra::DMatrix;
use tracing::{info, warn};

use crate::components::{AutopilotGains, FeedbackCascade, FeedbackLoop, LinearSystem, LoopKind};
use crate::control::{selection_row, step_response, StateSpace};
use crate::error::{LongitudinalError, Result};

/// Real parts below this are treated as sitting on the imaginary axis.
const MARGINAL_POLE: f64 = 1e-9;

/// Closes the q, γ and z loops one after the other on the reduced
/// [γ, α, q, θ, z] model.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSynthesizer {
    gains: AutopilotGains,
}

impl FeedbackSynthesizer {
    pub fn new(gains: AutopilotGains) -> Self {
        Self { gains }
    }

    /// Drops the velocity state: A[1.., 1..], B[1..], observed on γ.
    pub fn reduced_plant(system: &LinearSystem) -> Result<StateSpace> {
        let n = system.a().nrows() - 1;
        StateSpace::new(
            system.a().slice((1, 1), (n, n)).into_owned(),
            system.b().rows(1, n).into_owned(),
            selection_row(n, 0),
            DMatrix::zeros(1, 1),
        )
    }

    /// Closes a scalar loop around `plant` observed on `observed`:
    /// A' = A − K·B·C, B' = K·B, D' = K·D.
    ///
    /// # Arguments
    /// * `plant` - Open-loop SISO system. Only A, B and D are used.
    /// * `kind` - Which loop is being closed.
    /// * `gain` - Scalar feedback gain K.
    pub fn close_loop(plant: &StateSpace, kind: LoopKind, gain: f64) -> Result<FeedbackLoop> {
        let n = plant.n_states();
        let observed = kind.observed_state();
        if observed >= n || plant.b.ncols() != 1 {
            return Err(LongitudinalError::InvalidPrecondition(format!(
                "{} needs a single-input plant with at least {} states",
                kind,
                observed + 1
            )));
        }

        let c = selection_row(n, observed);
        let plant = StateSpace::new(plant.a.clone(), plant.b.clone(), c.clone(), plant.d.clone())?;
        let closed = StateSpace::new(
            &plant.a - &plant.b * &c * gain,
            &plant.b * gain,
            c,
            &plant.d * gain,
        )?;

        let eigenvalues = closed.poles();
        let damping = closed.damping();
        let transfer_function = closed.transfer_function()?;
        let step = step_response(&closed, &kind.time_grid())?.metrics();

        let feedback = FeedbackLoop {
            kind,
            gain,
            plant,
            closed,
            eigenvalues,
            damping,
            transfer_function,
            step,
        };

        if feedback.eigenvalues.iter().any(|e| e.re > MARGINAL_POLE) {
            warn!("{} with K = {} has unstable poles", kind, gain);
        }
        info!(
            "{} closed with K = {}: settling {:.2} s, overshoot {:.1} %",
            kind, gain, feedback.step.settling_time, feedback.step.overshoot
        );

        Ok(feedback)
    }

    /// Builds the three loops in order, each on the previous closed loop.
    pub fn synthesize(&self, system: &LinearSystem) -> Result<FeedbackCascade> {
        let plant = Self::reduced_plant(system)?;

        let pitch_rate = Self::close_loop(&plant, LoopKind::PitchRate, self.gains.k_q)?;
        let flight_path = Self::close_loop(
            &pitch_rate.closed,
            LoopKind::FlightPathAngle,
            self.gains.k_gamma,
        )?;
        let altitude = Self::close_loop(&flight_path.closed, LoopKind::Altitude, self.gains.k_z)?;

        Ok(FeedbackCascade {
            pitch_rate,
            flight_path,
            altitude,
        })
    }
}
