use serde::{Deserialize, Serialize};

/// Longitudinal aerodynamic coefficients about the trim point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftAeroCoefficients {
    /// Zero-lift drag coefficient.
    pub cx_0: f64,
    /// Induced drag polar coefficient k in Cx = Cx0 + k·Cz².
    pub polar_k: f64,
    /// Lift curve slope (per rad).
    pub cz_alpha: f64,
    /// Lift due to elevator deflection (per rad).
    pub cz_delta_m: f64,
    /// Elevator deflection at zero moment (rad).
    pub delta_m_0: f64,
    /// Zero-lift angle of attack (rad).
    pub alpha_0: f64,
    /// Pitch damping coefficient.
    pub cm_q: f64,
}

impl AircraftAeroCoefficients {
    pub fn mirage_iii() -> Self {
        Self {
            cx_0: 0.034,
            polar_k: 0.30,
            cz_alpha: 2.5,
            cz_delta_m: 0.36,
            delta_m_0: 0.0,
            alpha_0: 0.008,
            cm_q: -0.31,
        }
    }
}
