use approx::assert_relative_eq;
use longitudinal::components::{Mode, StateVariable};
use longitudinal::systems::ModalDecomposer;
use nalgebra::DMatrix;
use pretty_assertions::assert_eq;

use crate::common::{assert_damping_matches, reference_a, reference_system};

#[test]
fn test_short_period_blocks() {
    let modes = ModalDecomposer::decompose(&reference_system()).unwrap();
    let short_period = &modes.short_period;

    assert_eq!(short_period.mode, Mode::ShortPeriod);
    assert_eq!(
        short_period.a,
        DMatrix::from_row_slice(2, 2, &[-1.2484, 1.0, -50.2354, -0.6048])
    );
    assert_eq!(
        short_period.b,
        DMatrix::from_column_slice(2, 1, &[-0.1785, -31.4385])
    );
}

#[test]
fn test_short_period_damping_matches_closed_form() {
    let modes = ModalDecomposer::decompose(&reference_system()).unwrap();
    let short_period = &modes.short_period;

    for channel in &short_period.channels {
        assert_damping_matches(&channel.damping, &short_period.a);
    }
    let pole = short_period.channels[0].damping[0];
    assert_relative_eq!(pole.natural_frequency, 7.1407, epsilon = 1e-4);
    assert_relative_eq!(pole.damping_ratio, 0.1298, epsilon = 1e-4);
}

#[test]
fn test_phugoid_blocks() {
    let modes = ModalDecomposer::decompose(&reference_system()).unwrap();
    let phugoid = &modes.phugoid;

    assert_eq!(phugoid.mode, Mode::Phugoid);
    assert_eq!(
        phugoid.a,
        DMatrix::from_row_slice(2, 2, &[-0.034, -0.0237, 0.0461, 0.0])
    );
    assert_eq!(phugoid.b, DMatrix::from_column_slice(2, 1, &[0.0, 0.1785]));
    assert_eq!(phugoid.a, reference_a().slice((0, 0), (2, 2)).into_owned());
    for channel in &phugoid.channels {
        assert_damping_matches(&channel.damping, &phugoid.a);
    }
}

#[test]
fn test_channels_observe_one_state_each() {
    let modes = ModalDecomposer::decompose(&reference_system()).unwrap();

    let velocity = modes.phugoid.channel(StateVariable::Velocity).unwrap();
    let gamma = modes.phugoid.channel(StateVariable::FlightPathAngle).unwrap();
    assert_eq!(velocity.system.c, DMatrix::from_row_slice(1, 2, &[1.0, 0.0]));
    assert_eq!(gamma.system.c, DMatrix::from_row_slice(1, 2, &[0.0, 1.0]));
    assert_eq!(gamma.system.d, DMatrix::zeros(1, 1));

    let alpha = modes
        .short_period
        .channel(StateVariable::AngleOfAttack)
        .unwrap();
    assert!(modes.short_period.channel(StateVariable::Velocity).is_none());
    assert_eq!(alpha.transfer_function.den.len(), 3);
}

#[test]
fn test_dc_gain_matches_steady_state() {
    let modes = ModalDecomposer::decompose(&reference_system()).unwrap();
    let short_period = &modes.short_period;

    // Steady state of ẋ = A·x + B for a unit step is −A⁻¹·B
    let steady = -(short_period.a.clone().try_inverse().unwrap() * &short_period.b);
    let alpha = short_period.channel(StateVariable::AngleOfAttack).unwrap();
    let q = short_period.channel(StateVariable::PitchRate).unwrap();

    assert_relative_eq!(alpha.dc_gain, steady[0], max_relative = 1e-9);
    assert_relative_eq!(q.dc_gain, steady[1], max_relative = 1e-9);
    assert_relative_eq!(alpha.step.final_value, steady[0], max_relative = 1e-3);
}

#[test]
fn test_step_metrics_settle_inside_window() {
    let modes = ModalDecomposer::decompose(&reference_system()).unwrap();

    for subsystem in [&modes.phugoid, &modes.short_period] {
        let horizon = subsystem.mode.time_grid().horizon;
        for channel in &subsystem.channels {
            let step = channel.step;
            assert!(
                step.settling_time > 0.0 && step.settling_time < horizon,
                "{} {} settling time {} outside (0, {})",
                subsystem.mode,
                channel.output.symbol(),
                step.settling_time,
                horizon
            );
        }
    }
}

#[test]
fn test_parent_is_untouched() {
    let system = reference_system();
    let before = system.clone();
    let _ = ModalDecomposer::decompose(&system).unwrap();
    assert_eq!(system, before);
}
