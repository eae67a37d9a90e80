use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { gravity: 9.81 }
    }
}
