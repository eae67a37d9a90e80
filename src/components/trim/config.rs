use serde::{Deserialize, Serialize};

/// Configuration for the equilibrium solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimSolverConfig {
    /// Convergence tolerance on successive angle-of-attack iterates (rad)
    pub epsilon: f64,
    /// Maximum number of fixed-point iterations
    pub max_iterations: usize,
    /// Smallest admissible |Y − X| lever-arm difference (m)
    pub degeneracy_tolerance: f64,
    /// |X/(Y − X)| above which the geometry is reported as near-degenerate
    pub ratio_warning: f64,
}

impl Default for TrimSolverConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-5,
            max_iterations: 100,
            degeneracy_tolerance: 1e-9,
            ratio_warning: 1e3,
        }
    }
}
