use approx::assert_relative_eq;
use longitudinal::components::{AircraftParameters, EquilibriumState, LinearSystem, N_STATES};
use longitudinal::systems::{EquilibriumSolver, LinearStateSpaceBuilder};
use longitudinal::LongitudinalError;
use nalgebra::DMatrix;
use pretty_assertions::assert_eq;

use crate::common::{reference_a, reference_b};

fn mirage_system() -> LinearSystem {
    let params = AircraftParameters::default();
    let trim = EquilibriumSolver::default().solve(&params).unwrap();
    LinearStateSpaceBuilder::build(&params, &trim).unwrap()
}

#[test]
fn test_builder_is_pure() {
    let params = AircraftParameters::default();
    let trim = EquilibriumSolver::default().solve(&params).unwrap();

    let first = LinearStateSpaceBuilder::build(&params, &trim).unwrap();
    let second = LinearStateSpaceBuilder::build(&params, &trim).unwrap();

    // Bit-identical, not just close
    assert_eq!(first.a(), second.a());
    assert_eq!(first.b(), second.b());
    assert_eq!(first.c(), second.c());
    assert_eq!(first.d(), second.d());
}

#[test]
fn test_full_state_observation() {
    let system = mirage_system();
    assert_eq!(system.c(), &DMatrix::<f64>::identity(N_STATES, N_STATES));
    assert_eq!(system.d(), &DMatrix::<f64>::zeros(N_STATES, 1));
}

#[test]
fn test_mirage_reproduces_reference_matrices() {
    let system = mirage_system();
    let (a, b) = (system.a(), system.b());
    let (a_ref, b_ref) = (reference_a(), reference_b());

    for (actual, expected) in a.iter().zip(a_ref.iter()) {
        if *expected == 0.0 {
            assert_eq!(*actual, 0.0);
        } else {
            assert_relative_eq!(*actual, *expected, max_relative = 0.05);
        }
    }
    for (actual, expected) in b.iter().zip(b_ref.iter()) {
        assert_relative_eq!(*actual, *expected, max_relative = 0.05);
    }
}

#[test]
fn test_eigenvalues_are_ordered() {
    let system = mirage_system();
    let eigenvalues = system.eigenvalues();

    assert_eq!(eigenvalues.len(), N_STATES);
    for pair in eigenvalues.windows(2) {
        assert!(pair[0].norm() <= pair[1].norm() + 1e-12);
    }
    // θ and z are pure integrators
    assert!(eigenvalues[0].norm() < 1e-9);
    assert!(eigenvalues[1].norm() < 1e-9);
}

#[test]
fn test_integrators_share_one_damping_row() {
    let system = mirage_system();
    let damping = system.damping();

    // θ and z sort first and report ωn = 0, ζ = −1 whatever their round-off
    for row in &damping[..2] {
        assert_eq!(row.natural_frequency, 0.0);
        assert_eq!(row.damping_ratio, -1.0);
    }
    for row in &damping[2..] {
        assert!(row.natural_frequency > 0.0);
    }
}

#[test]
fn test_unconverged_trim_is_rejected() {
    let params = AircraftParameters::default();
    let mut trim = EquilibriumSolver::default().solve(&params).unwrap();
    trim.converged = false;

    assert!(matches!(
        LinearStateSpaceBuilder::build(&params, &trim),
        Err(LongitudinalError::InvalidPrecondition(_))
    ));
    assert!(matches!(
        LinearStateSpaceBuilder::build(&params, &EquilibriumState::seed()),
        Err(LongitudinalError::InvalidPrecondition(_))
    ));
}

#[test]
fn test_elevator_drag_is_reported_but_not_applied() {
    let params = AircraftParameters::default();
    let trim = EquilibriumSolver::default().solve(&params).unwrap();
    let system = LinearStateSpaceBuilder::build(&params, &trim).unwrap();
    let derivatives = system.derivatives().unwrap();

    assert!(derivatives.x_delta_m != 0.0);
    assert_eq!(system.b()[0], 0.0);
    assert_eq!(system.b()[1], derivatives.z_delta_m);
}
