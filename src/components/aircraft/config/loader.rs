use serde::Deserialize;
use thiserror::Error;

use crate::components::aircraft::config::{
    aero_coef::AircraftAeroCoefficients, flight::FlightPoint, geometry::AircraftGeometry,
    mass::MassModel,
};
use crate::resources::{AtmosphereConfig, PhysicsConfig, MAX_ALTITUDE};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

fn default_gravity() -> f64 {
    PhysicsConfig::default().gravity
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Operating point
    pub mach: f64,
    pub altitude: f64,

    /// Mass properties
    pub mass: f64,
    pub rg: f64,

    /// Geometry
    pub S: f64,
    pub l_ref: f64,
    pub l_t: f64,
    pub c: f64,
    pub f: f64,
    pub f_delta: f64,

    /// Aerodynamic coefficients
    pub Cx0: f64,
    pub k: f64,
    pub Cz_alpha: f64,
    pub Cz_delta_m: f64,
    pub delta_m0: f64,
    pub alpha0: f64,
    pub Cm_q: f64,

    /// Thrust sensitivity to the throttle (N per unit throttle)
    #[serde(default)]
    pub F_tau: f64,

    #[serde(default = "default_gravity")]
    pub g: f64,
    #[serde(default)]
    pub atmosphere: AtmosphereConfig,
}

impl RawAircraftConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mass", self.mass),
            ("rg", self.rg),
            ("S", self.S),
            ("l_ref", self.l_ref),
            ("l_t", self.l_t),
            ("mach", self.mach),
            ("g", self.g),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let fractions = [("c", self.c), ("f", self.f), ("f_delta", self.f_delta)];
        for (name, value) in fractions {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a fraction of the total length in (0, 1), got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=MAX_ALTITUDE).contains(&self.altitude) {
            return Err(ConfigError::ValidationError(format!(
                "altitude {} m is outside the atmosphere model range [0, {}]",
                self.altitude, MAX_ALTITUDE
            )));
        }

        if self.Cz_alpha == 0.0 || !self.Cz_alpha.is_finite() {
            return Err(ConfigError::ValidationError(
                "Cz_alpha must be non-zero".to_string(),
            ));
        }

        let coefficients = [
            ("Cx0", self.Cx0),
            ("k", self.k),
            ("Cz_delta_m", self.Cz_delta_m),
            ("delta_m0", self.delta_m0),
            ("alpha0", self.alpha0),
            ("Cm_q", self.Cm_q),
            ("F_tau", self.F_tau),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn flight_point(&self) -> FlightPoint {
        FlightPoint {
            mach: self.mach,
            altitude: self.altitude,
        }
    }
}

impl AircraftGeometry {
    pub fn from_raw(raw: &RawAircraftConfig) -> Self {
        AircraftGeometry::new(raw.S, raw.l_ref, raw.l_t, raw.c, raw.f, raw.f_delta)
    }
}

impl MassModel {
    pub fn from_raw(raw: &RawAircraftConfig) -> Self {
        MassModel::new(raw.mass, raw.rg)
    }
}

impl AircraftAeroCoefficients {
    pub fn from_raw(raw: &RawAircraftConfig) -> Self {
        AircraftAeroCoefficients {
            cx_0: raw.Cx0,
            polar_k: raw.k,
            cz_alpha: raw.Cz_alpha,
            cz_delta_m: raw.Cz_delta_m,
            delta_m_0: raw.delta_m0,
            alpha_0: raw.alpha0,
            cm_q: raw.Cm_q,
        }
    }
}
