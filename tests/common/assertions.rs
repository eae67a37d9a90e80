use approx::assert_relative_eq;
use longitudinal::control::ModalDamping;
use nalgebra::{Complex, DMatrix};

/// Assert two matrices have the same shape and agree entry by entry.
#[track_caller]
pub fn assert_matrix_eq(actual: &DMatrix<f64>, expected: &DMatrix<f64>, epsilon: f64) {
    assert_eq!(actual.shape(), expected.shape(), "Matrix shapes differ");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= epsilon,
            "Entry {} differs: {} vs {} (epsilon {})",
            i,
            a,
            e,
            epsilon
        );
    }
}

/// Assert every pole lies strictly in the left half-plane.
#[track_caller]
pub fn assert_stable(poles: &[Complex<f64>]) {
    for pole in poles {
        assert!(pole.re < 0.0, "Pole {} is not strictly stable", pole);
    }
}

/// Assert a damping table matches the closed-form eigenvalues of a 2×2 block.
#[track_caller]
pub fn assert_damping_matches(table: &[ModalDamping], block: &DMatrix<f64>) {
    assert_eq!(block.shape(), (2, 2), "Closed form needs a 2x2 block");
    assert_eq!(table.len(), 2, "Damping table needs two rows");

    let trace = block.trace();
    let det = block[(0, 0)] * block[(1, 1)] - block[(0, 1)] * block[(1, 0)];
    let disc = trace * trace / 4.0 - det;
    assert!(disc < 0.0, "Closed form only handles an oscillatory pair");
    let (re, im) = (trace / 2.0, (-disc).sqrt());

    let natural_frequency = det.sqrt();
    let damping_ratio = -re / natural_frequency;

    for row in table {
        assert_relative_eq!(row.real, re, epsilon = 1e-9);
        assert_relative_eq!(row.imag.abs(), im, epsilon = 1e-9);
        assert_relative_eq!(row.natural_frequency, natural_frequency, epsilon = 1e-9);
        assert_relative_eq!(row.damping_ratio, damping_ratio, epsilon = 1e-9);
    }
    assert_relative_eq!(table[0].imag, -table[1].imag, epsilon = 1e-9);
}
