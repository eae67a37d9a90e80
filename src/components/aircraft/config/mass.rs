use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Radius of gyration about the pitch axis (m).
    pub radius_of_gyration: f64,
}

impl MassModel {
    pub fn new(mass: f64, radius_of_gyration: f64) -> Self {
        Self {
            mass,
            radius_of_gyration,
        }
    }

    pub fn mirage_iii() -> Self {
        Self::new(8400.0, 2.65)
    }

    /// Pitch moment of inertia Iyy = m·rg² (kg·m²).
    pub fn pitch_inertia(&self) -> f64 {
        self.mass * self.radius_of_gyration.powi(2)
    }
}
