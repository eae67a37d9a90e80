//! Longitudinal flight dynamics of a fixed-wing aircraft: trim, linearisation
//! about the trim point, modal decomposition and a cascaded q / γ / z
//! autopilot with a saturation-aware command limit.

pub mod components;
pub mod control;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod resources;
pub mod systems;

pub use error::{LongitudinalError, Result, Stage};
pub use pipeline::Pipeline;
pub use report::AnalysisReport;
