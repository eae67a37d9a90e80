mod cascade;
pub mod newton;
mod saturation;

pub use cascade::FeedbackSynthesizer;
pub use newton::{forward_difference, NewtonRaphson, NewtonRoot, ScalarFunction};
pub use saturation::{SaturationProblem, SaturationRootFinder};
