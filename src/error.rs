use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::ConfigError;

/// Pipeline stage names used when reporting where a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Equilibrium,
    Linearisation,
    Modal,
    Feedback,
    Saturation,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Equilibrium => "equilibrium solver",
            Stage::Linearisation => "state-space builder",
            Stage::Modal => "modal decomposer",
            Stage::Feedback => "feedback synthesizer",
            Stage::Saturation => "saturation root finder",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug)]
pub enum LongitudinalError {
    #[error("Degenerate configuration: {0}")]
    DegenerateConfiguration(String),

    #[error("Invalid precondition: {0}")]
    InvalidPrecondition(String),

    #[error("{stage} did not converge after {iterations} iterations: {reason}")]
    ConvergenceFailure {
        stage: Stage,
        iterations: u64,
        reason: String,
    },

    #[error("Numeric instability in {stage}: {detail}")]
    NumericInstability { stage: Stage, detail: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialise report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<LongitudinalError>,
    },
}

impl LongitudinalError {
    /// Tags the error with the pipeline stage it came from.
    pub fn at(self, stage: Stage) -> Self {
        match self {
            LongitudinalError::Stage { .. } => self,
            other => LongitudinalError::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// The error underneath any stage tag.
    pub fn root(&self) -> &LongitudinalError {
        match self {
            LongitudinalError::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            LongitudinalError::Stage { stage, .. } => Some(*stage),
            LongitudinalError::ConvergenceFailure { stage, .. }
            | LongitudinalError::NumericInstability { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl From<argmin::core::Error> for LongitudinalError {
    fn from(err: argmin::core::Error) -> Self {
        match err.downcast::<LongitudinalError>() {
            Ok(inner) => inner,
            Err(other) => LongitudinalError::Solver(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LongitudinalError>;
