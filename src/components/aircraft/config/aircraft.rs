use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{
    AircraftAeroCoefficients, AircraftGeometry, ConfigError, FlightCondition, FlightPoint,
    MassModel, RawAircraftConfig,
};
use crate::resources::{AtmosphereConfig, PhysicsConfig};

/// Immutable set of physical and aerodynamic constants describing one
/// aircraft at one operating point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftParameters {
    /// Name of the aircraft.
    pub name: String,
    /// Mass and pitch inertia properties.
    pub mass: MassModel,
    /// Longitudinal geometry and lever arms.
    pub geometry: AircraftGeometry,
    /// Longitudinal aerodynamic coefficients.
    pub aero_coef: AircraftAeroCoefficients,
    /// Thrust sensitivity to the throttle (N per unit throttle).
    pub thrust_gradient: f64,
    /// Requested Mach number and altitude.
    pub flight: FlightPoint,
    /// Air data at the operating point.
    pub condition: FlightCondition,
    /// Gravity and other physical constants.
    pub physics: PhysicsConfig,
}

/// Where aircraft parameters come from.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    /// Hard-coded parameter set
    Programmed(AircraftType),
    /// YAML parameter file
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftType {
    MirageIII,
}

impl Default for AircraftParameters {
    /// The `MirageIII` configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::from_programmed(AircraftType::MirageIII)
    }
}

impl AircraftParameters {
    /// Creates aircraft parameters from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` specifying whether the parameters are
    ///              hardcoded (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the parameters or an error if the file fails to load or validate.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::MirageIII => {
                let flight = FlightPoint {
                    mach: 1.326,
                    altitude: 7000.0,
                };
                let condition = FlightCondition::at(&flight, &AtmosphereConfig::default());
                Self {
                    name: "MirageIII".to_string(),
                    mass: MassModel::mirage_iii(),
                    geometry: AircraftGeometry::mirage_iii(),
                    aero_coef: AircraftAeroCoefficients::mirage_iii(),
                    thrust_gradient: 7.5e4,
                    flight,
                    condition,
                    physics: PhysicsConfig::default(),
                }
            }
        }
    }

    /// Loads and validates parameters from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawAircraftConfig = serde_yaml::from_str(contents)?;
        Self::from_raw(&raw)
    }

    pub fn from_raw(raw: &RawAircraftConfig) -> Result<Self, ConfigError> {
        raw.validate()?;

        let flight = raw.flight_point();
        let condition = FlightCondition::at(&flight, &raw.atmosphere);

        Ok(Self {
            name: raw.name.clone(),
            mass: MassModel::from_raw(raw),
            geometry: AircraftGeometry::from_raw(raw),
            aero_coef: AircraftAeroCoefficients::from_raw(raw),
            thrust_gradient: raw.F_tau,
            flight,
            condition,
            physics: PhysicsConfig { gravity: raw.g },
        })
    }

    /// Weight m·g (N).
    pub fn weight(&self) -> f64 {
        self.mass.mass * self.physics.gravity
    }

    /// Q·S, the force scale of every aerodynamic coefficient (N).
    pub fn dynamic_force(&self) -> f64 {
        self.condition.dynamic_pressure * self.geometry.wing_area
    }
}
