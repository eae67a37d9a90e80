use nalgebra::DMatrix;
use serde::Serialize;

use crate::components::StateVariable;
use crate::control::{ModalDamping, StateSpace, StepMetrics, TimeGrid, TransferFunction};

/// Characteristic longitudinal modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Slow speed/altitude exchange, states V and γ
    Phugoid,
    /// Fast α/q oscillation, states α and q
    ShortPeriod,
}

impl Mode {
    /// Observed states, in reduced-model order.
    pub fn states(self) -> [StateVariable; 2] {
        match self {
            Mode::Phugoid => [StateVariable::Velocity, StateVariable::FlightPathAngle],
            Mode::ShortPeriod => [StateVariable::AngleOfAttack, StateVariable::PitchRate],
        }
    }

    /// Index of the first state of the mode in the full model.
    pub fn offset(self) -> usize {
        self.states()[0].index()
    }

    /// Step-response window used for the mode's settling metrics.
    pub fn time_grid(self) -> TimeGrid {
        match self {
            Mode::Phugoid => TimeGrid::new(700.0, 0.1),
            Mode::ShortPeriod => TimeGrid::new(10.0, 0.01),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Phugoid => write!(f, "Phugoid"),
            Mode::ShortPeriod => write!(f, "Short period"),
        }
    }
}

/// One observation channel of a reduced mode, e.g. α/δm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeChannel {
    pub output: StateVariable,
    pub system: StateSpace,
    pub transfer_function: TransferFunction,
    pub dc_gain: f64,
    pub damping: Vec<ModalDamping>,
    pub step: StepMetrics,
}

/// Two-state, one-input reduction of the longitudinal model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subsystem {
    pub mode: Mode,
    pub a: DMatrix<f64>,
    pub b: DMatrix<f64>,
    pub channels: Vec<ModeChannel>,
}

impl Subsystem {
    pub fn channel(&self, output: StateVariable) -> Option<&ModeChannel> {
        self.channels.iter().find(|c| c.output == output)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalAnalysis {
    pub phugoid: Subsystem,
    pub short_period: Subsystem,
}
