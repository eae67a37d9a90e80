use nalgebra::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_6;

use crate::control::{ModalDamping, StateSpace, StepMetrics, TimeGrid, TransferFunction};

/// Scalar gains of the cascaded q / γ / z autopilot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotGains {
    /// Pitch-rate damper gain Kr
    pub k_q: f64,
    /// Flight-path angle gain Kγ
    pub k_gamma: f64,
    /// Altitude-hold gain Kz
    pub k_z: f64,
}

impl Default for AutopilotGains {
    fn default() -> Self {
        Self {
            k_q: -0.33057,
            k_gamma: 13.5,
            k_z: 0.0012,
        }
    }
}

impl AutopilotGains {
    pub fn gain(&self, kind: LoopKind) -> f64 {
        match kind {
            LoopKind::PitchRate => self.k_q,
            LoopKind::FlightPathAngle => self.k_gamma,
            LoopKind::Altitude => self.k_z,
        }
    }
}

/// Settings of the maximum flight-path command search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturationConfig {
    /// Load factor margin n_z used to derive alpha_max from the trim incidence
    pub load_factor_margin: f64,
    /// Initial γ command of the Newton iteration (rad)
    pub seed: f64,
    /// Forward-difference step of the numerical derivative
    pub step: f64,
    /// Convergence tolerance on successive iterates (rad)
    pub tolerance: f64,
    pub max_iterations: u64,
    /// 0 = none, 1 = observer on every iteration
    pub debug_level: usize,
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self {
            load_factor_margin: 3.1,
            seed: FRAC_PI_6,
            step: 1e-10,
            tolerance: 1e-10,
            max_iterations: 100,
            debug_level: 0,
        }
    }
}

/// The three loops of the cascade, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoopKind {
    PitchRate,
    FlightPathAngle,
    Altitude,
}

impl LoopKind {
    pub const CASCADE: [LoopKind; 3] = [
        LoopKind::PitchRate,
        LoopKind::FlightPathAngle,
        LoopKind::Altitude,
    ];

    /// Index of the fed-back state in the reduced [γ, α, q, θ, z] model.
    pub fn observed_state(self) -> usize {
        match self {
            LoopKind::PitchRate => 2,
            LoopKind::FlightPathAngle => 0,
            LoopKind::Altitude => 4,
        }
    }

    pub fn time_grid(self) -> TimeGrid {
        match self {
            LoopKind::PitchRate => TimeGrid::new(5.0, 0.01),
            LoopKind::FlightPathAngle => TimeGrid::new(10.0, 0.01),
            LoopKind::Altitude => TimeGrid::new(30.0, 0.01),
        }
    }
}

impl std::fmt::Display for LoopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoopKind::PitchRate => write!(f, "q loop"),
            LoopKind::FlightPathAngle => write!(f, "gamma loop"),
            LoopKind::Altitude => write!(f, "z loop"),
        }
    }
}

/// One closed scalar feedback loop. `closed` becomes the plant of the next loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackLoop {
    pub kind: LoopKind,
    pub gain: f64,
    pub plant: StateSpace,
    pub closed: StateSpace,
    pub eigenvalues: Vec<Complex<f64>>,
    pub damping: Vec<ModalDamping>,
    pub transfer_function: TransferFunction,
    pub step: StepMetrics,
}

impl FeedbackLoop {
    pub fn is_stable(&self) -> bool {
        self.eigenvalues.iter().all(|e| e.re < 0.0)
    }
}

/// q → γ → z loops, each closed around the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackCascade {
    pub pitch_rate: FeedbackLoop,
    pub flight_path: FeedbackLoop,
    pub altitude: FeedbackLoop,
}

impl FeedbackCascade {
    pub fn loops(&self) -> [&FeedbackLoop; 3] {
        [&self.pitch_rate, &self.flight_path, &self.altitude]
    }
}

/// Largest commandable flight-path angle before α reaches its limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SaturationResult {
    /// Angle-of-attack limit (rad)
    pub alpha_max: f64,
    /// Maximum γ command (rad)
    pub gamma_max: f64,
    pub iterations: u64,
    /// Saturation function evaluated at `gamma_max` (rad)
    pub residual: f64,
}
