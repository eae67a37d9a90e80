mod config;
mod state;

pub use config::TrimSolverConfig;
pub use state::EquilibriumState;
