use serde::{Deserialize, Serialize};

/// Longitudinal geometry of the aircraft.
///
/// Positions along the fuselage are given as fractions of `total_length`,
/// measured from the nose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Reference wing area S (m²).
    pub wing_area: f64,
    /// Reference length l_ref used for moment coefficients (m).
    pub reference_length: f64,
    /// Total length l_t (m).
    pub total_length: f64,
    /// Centre of gravity position c (fraction of l_t).
    pub cg_position: f64,
    /// Wing/body aerodynamic centre position f (fraction of l_t).
    pub aero_center: f64,
    /// Elevator aerodynamic centre position f_δ (fraction of l_t).
    pub elevator_aero_center: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance.
    ///
    /// # Arguments
    /// * `wing_area` - Reference wing area (m²).
    /// * `reference_length` - Reference length (m).
    /// * `total_length` - Total aircraft length (m).
    /// * `cg_position` - Centre of gravity as a fraction of the total length.
    /// * `aero_center` - Wing/body aerodynamic centre as a fraction of the total length.
    /// * `elevator_aero_center` - Elevator aerodynamic centre as a fraction of the total length.
    pub fn new(
        wing_area: f64,
        reference_length: f64,
        total_length: f64,
        cg_position: f64,
        aero_center: f64,
        elevator_aero_center: f64,
    ) -> Self {
        Self {
            wing_area,
            reference_length,
            total_length,
            cg_position,
            aero_center,
            elevator_aero_center,
        }
    }

    pub fn mirage_iii() -> Self {
        Self::new(34.0, 5.24, 7.86, 0.52, 0.608, 0.9)
    }

    /// Lever arm X = X_G − X_f from the aerodynamic centre to the centre of gravity (m).
    pub fn aero_lever_arm(&self) -> f64 {
        (self.cg_position - self.aero_center) * self.total_length
    }

    /// Lever arm Y = X_G − X_fδ from the elevator centre to the centre of gravity (m).
    pub fn elevator_lever_arm(&self) -> f64 {
        (self.cg_position - self.elevator_aero_center) * self.total_length
    }
}
