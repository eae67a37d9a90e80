mod autopilot;
mod linearize;
mod modal;
mod trim;

pub use autopilot::{
    forward_difference, FeedbackSynthesizer, NewtonRaphson, NewtonRoot, SaturationProblem,
    SaturationRootFinder, ScalarFunction,
};
pub use linearize::LinearStateSpaceBuilder;
pub use modal::ModalDecomposer;
pub use trim::EquilibriumSolver;
