//! Small linear-systems toolbox: state-space container, transfer functions,
//! damping tables and step responses.

mod damping;
mod state_space;
mod step;
mod transfer_function;

pub use damping::{damp, ModalDamping};
pub use state_space::{selection_row, sorted_eigenvalues, StateSpace};
pub use step::{step_response, StepMetrics, StepResponse, TimeGrid};
pub use transfer_function::TransferFunction;
