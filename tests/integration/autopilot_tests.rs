use approx::assert_relative_eq;
use longitudinal::components::{AutopilotGains, LoopKind};
use longitudinal::control::selection_row;
use longitudinal::systems::{
    FeedbackSynthesizer, NewtonRaphson, SaturationProblem, SaturationRootFinder, ScalarFunction,
};
use nalgebra::DMatrix;
use pretty_assertions::assert_eq;
use std::f64::consts::FRAC_PI_6;

use crate::common::{
    assert_matrix_eq, assert_stable, damped_reduced_plant, reference_a, reference_system, K_Q,
};

#[test]
fn test_pitch_rate_loop_stabilises_damped_plant() {
    let plant = damped_reduced_plant();
    let feedback = FeedbackSynthesizer::close_loop(&plant, LoopKind::PitchRate, K_Q).unwrap();

    assert_eq!(feedback.eigenvalues.len(), 5);
    assert_stable(&feedback.eigenvalues);
    assert!(feedback.is_stable());
    assert_eq!(feedback.closed.c, selection_row(5, 2));
}

#[test]
fn test_closed_loop_update_rule() {
    let plant = damped_reduced_plant();
    let feedback = FeedbackSynthesizer::close_loop(&plant, LoopKind::PitchRate, K_Q).unwrap();

    let c = selection_row(5, 2);
    let expected_a = &plant.a - &plant.b * &c * K_Q;
    assert_matrix_eq(&feedback.closed.a, &expected_a, 1e-15);
    assert_matrix_eq(&feedback.closed.b, &(&plant.b * K_Q), 1e-15);
    assert_eq!(feedback.closed.d, DMatrix::zeros(1, 1));
}

#[test]
fn test_reduced_plant_drops_velocity() {
    let plant = FeedbackSynthesizer::reduced_plant(&reference_system()).unwrap();

    assert_eq!(plant.a, reference_a().slice((1, 1), (5, 5)).into_owned());
    assert_eq!(plant.b.nrows(), 5);
    assert_eq!(plant.b[0], 0.1785);
    assert_eq!(plant.d, DMatrix::zeros(1, 1));
}

#[test]
fn test_cascade_chains_closed_loops() {
    let cascade = FeedbackSynthesizer::default()
        .synthesize(&reference_system())
        .unwrap();

    assert_eq!(cascade.flight_path.plant.a, cascade.pitch_rate.closed.a);
    assert_eq!(cascade.flight_path.plant.b, cascade.pitch_rate.closed.b);
    assert_eq!(cascade.flight_path.plant.d, cascade.pitch_rate.closed.d);
    assert_eq!(cascade.altitude.plant.a, cascade.flight_path.closed.a);
    assert_eq!(cascade.altitude.plant.b, cascade.flight_path.closed.b);
    assert_eq!(cascade.altitude.plant.d, cascade.flight_path.closed.d);

    let kinds: Vec<LoopKind> = cascade.loops().iter().map(|l| l.kind).collect();
    assert_eq!(kinds, LoopKind::CASCADE.to_vec());
}

#[test]
fn test_loop_integrators_report_the_same_damping() {
    let cascade = FeedbackSynthesizer::default()
        .synthesize(&reference_system())
        .unwrap();

    for feedback in cascade.loops() {
        let integrators: Vec<_> = feedback
            .damping
            .iter()
            .filter(|row| row.natural_frequency == 0.0)
            .collect();
        assert!(!integrators.is_empty(), "{} lost its θ integrator", feedback.kind);
        for row in integrators {
            assert_eq!(row.damping_ratio, -1.0, "{}", feedback.kind);
        }
    }
}

#[test]
fn test_default_gains_keep_reference_loops_stable() {
    let cascade = FeedbackSynthesizer::new(AutopilotGains::default())
        .synthesize(&reference_system())
        .unwrap();

    // θ never feeds back, so its integrator stays on the imaginary axis
    for feedback in cascade.loops() {
        for pole in &feedback.eigenvalues {
            assert!(pole.re < 1e-9, "{} pole {} is unstable", feedback.kind, pole);
        }
    }
}

#[test]
fn test_newton_quadratic_root() {
    let found = NewtonRaphson::new(1e-10, 1e-10)
        .find_root(
            ScalarFunction(|x: f64| (x - 2.0).powi(2) - 1.0),
            FRAC_PI_6,
            100,
            0,
        )
        .unwrap();

    assert!((found.root - 1.0).abs() < 1e-10);
    assert!(found.iterations < 100);
}

#[test]
fn test_saturation_limit_on_reference_cascade() {
    let cascade = FeedbackSynthesizer::default()
        .synthesize(&reference_system())
        .unwrap();
    let target = SaturationRootFinder::target(&cascade).unwrap();
    assert_eq!(target.c, selection_row(5, 1));
    assert_eq!(target.d, DMatrix::zeros(1, 1));

    let alpha_max = 0.1;
    let problem = SaturationProblem::new(&target, alpha_max).unwrap();
    let found = NewtonRaphson::new(1e-10, 1e-10)
        .find_root(problem.clone(), FRAC_PI_6, 100, 0)
        .unwrap();

    assert!(found.root > 0.0);
    assert_relative_eq!(problem.saturation(found.root), 0.0, epsilon = 1e-8);
}
