mod aero_coef;
mod aircraft;
mod flight;
mod geometry;
mod loader;
mod mass;

pub use aero_coef::AircraftAeroCoefficients;
pub use aircraft::{AircraftParameters, AircraftSource, AircraftType};
pub use flight::{FlightCondition, FlightPoint};
pub use geometry::AircraftGeometry;
pub use loader::{ConfigError, RawAircraftConfig};
pub use mass::MassModel;
