use serde::{Deserialize, Serialize};

use crate::resources::AtmosphereConfig;

/// Operating point requested for the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPoint {
    pub mach: f64,
    /// Geometric altitude (m).
    pub altitude: f64,
}

/// Air data at the operating point, derived once when parameters are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightCondition {
    /// Air density ρ (kg/m³).
    pub density: f64,
    /// Speed of sound a (m/s).
    pub speed_of_sound: f64,
    /// True airspeed V = Mach·a (m/s).
    pub airspeed: f64,
    /// Dynamic pressure Q = ½ρV² (Pa).
    pub dynamic_pressure: f64,
}

impl FlightCondition {
    pub fn at(point: &FlightPoint, atmosphere: &AtmosphereConfig) -> Self {
        let props = atmosphere.properties(point.altitude);
        let airspeed = point.mach * props.speed_of_sound;

        Self {
            density: props.density,
            speed_of_sound: props.speed_of_sound,
            airspeed,
            dynamic_pressure: 0.5 * props.density * airspeed * airspeed,
        }
    }
}
