use serde::{Deserialize, Serialize};

/// Specific gas constant for dry air (J/(kg·K)).
const GAS_CONSTANT: f64 = 287.052_87;
/// Ratio of specific heats for air.
const HEAT_CAPACITY_RATIO: f64 = 1.4;
/// Standard gravity used by the barometric formula (m/s²).
const STANDARD_GRAVITY: f64 = 9.806_65;
/// Troposphere temperature lapse rate (K/m).
const LAPSE_RATE: f64 = 0.0065;
/// Tropopause altitude (m).
const TROPOPAUSE: f64 = 11_000.0;
/// Upper bound of the isothermal layer modelled here (m).
pub const MAX_ALTITUDE: f64 = 20_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    pub sea_level_density: f64,
    pub sea_level_temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AtmosphereType {
    Constant,
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: 1.225,
            sea_level_temperature: 288.15,
        }
    }
}

/// Air properties at a given geometric altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereProperties {
    /// Static temperature (K).
    pub temperature: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Speed of sound (m/s).
    pub speed_of_sound: f64,
}

impl AtmosphereConfig {
    /// Evaluates the atmosphere at `altitude` metres.
    ///
    /// The standard model follows the ISA troposphere up to 11 km and the
    /// isothermal lower stratosphere above it. Altitudes are clamped to
    /// `[0, MAX_ALTITUDE]`; range checks belong to the parameter loader.
    pub fn properties(&self, altitude: f64) -> AtmosphereProperties {
        let t0 = self.sea_level_temperature;
        let rho0 = self.sea_level_density;

        let (temperature, density) = match self.model_type {
            AtmosphereType::Constant => (t0, rho0),
            AtmosphereType::Standard => {
                let h = altitude.clamp(0.0, MAX_ALTITUDE);
                let exponent = STANDARD_GRAVITY / (LAPSE_RATE * GAS_CONSTANT);
                if h <= TROPOPAUSE {
                    let temperature = t0 - LAPSE_RATE * h;
                    let density = rho0 * (temperature / t0).powf(exponent - 1.0);
                    (temperature, density)
                } else {
                    let t11 = t0 - LAPSE_RATE * TROPOPAUSE;
                    let rho11 = rho0 * (t11 / t0).powf(exponent - 1.0);
                    let density = rho11
                        * (-STANDARD_GRAVITY * (h - TROPOPAUSE) / (GAS_CONSTANT * t11)).exp();
                    (t11, density)
                }
            }
        };

        AtmosphereProperties {
            temperature,
            density,
            speed_of_sound: (HEAT_CAPACITY_RATIO * GAS_CONSTANT * temperature).sqrt(),
        }
    }
}
