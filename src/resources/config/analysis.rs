use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{AutopilotGains, ConfigError, SaturationConfig, TrimSolverConfig};

/// Solver settings and tuning constants for one analysis run.
///
/// Every section falls back to its default when absent, so an empty YAML
/// document is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub trim: TrimSolverConfig,
    pub autopilot: AutopilotGains,
    pub saturation: SaturationConfig,
}

impl AnalysisConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.trim.epsilon > 0.0) {
            return Err(ConfigError::ValidationError(
                "trim.epsilon must be positive".to_string(),
            ));
        }
        if self.trim.max_iterations == 0 || self.saturation.max_iterations == 0 {
            return Err(ConfigError::ValidationError(
                "iteration limits must be non-zero".to_string(),
            ));
        }
        if !(self.saturation.step > 0.0) || !(self.saturation.tolerance > 0.0) {
            return Err(ConfigError::ValidationError(
                "saturation step and tolerance must be positive".to_string(),
            ));
        }
        if !(self.saturation.load_factor_margin > 0.0) {
            return Err(ConfigError::ValidationError(
                "saturation.load_factor_margin must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
