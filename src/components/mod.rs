pub mod aircraft;
pub mod autopilot;
pub mod linear;
pub mod modes;
pub mod trim;

pub use aircraft::{
    AircraftAeroCoefficients, AircraftGeometry, AircraftParameters, AircraftSource, AircraftType,
    ConfigError, FlightCondition, FlightPoint, MassModel, RawAircraftConfig,
};
pub use autopilot::{
    AutopilotGains, FeedbackCascade, FeedbackLoop, LoopKind, SaturationConfig, SaturationResult,
};
pub use linear::{LinearSystem, StabilityDerivatives, StateVariable, N_STATES};
pub use modes::{ModalAnalysis, Mode, ModeChannel, Subsystem};
pub use trim::{EquilibriumState, TrimSolverConfig};
