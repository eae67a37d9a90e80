pub mod config;

pub use config::{
    AircraftAeroCoefficients, AircraftGeometry, AircraftParameters, AircraftSource, AircraftType,
    ConfigError, FlightCondition, FlightPoint, MassModel, RawAircraftConfig,
};
