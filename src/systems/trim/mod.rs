mod solver;

pub use solver::EquilibriumSolver;
