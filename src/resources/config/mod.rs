pub mod analysis;
pub mod physics;

pub use analysis::AnalysisConfig;
pub use physics::PhysicsConfig;
