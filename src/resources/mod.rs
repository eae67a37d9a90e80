pub mod config;
mod environment;

pub use config::{analysis::AnalysisConfig, physics::PhysicsConfig};
pub use environment::{AtmosphereConfig, AtmosphereProperties, AtmosphereType, MAX_ALTITUDE};
