use longitudinal::components::LinearSystem;
use longitudinal::control::{selection_row, StateSpace};
use nalgebra::DMatrix;

/// Pitch-rate gain used throughout the cascade tests.
pub const K_Q: f64 = -0.33057;

/// Longitudinal state matrix of a Mirage III at Mach 1.326, 7000 m.
#[rustfmt::skip]
pub fn reference_a() -> DMatrix<f64> {
    DMatrix::from_row_slice(6, 6, &[
        -0.034,  -0.0237,  -0.0361,   0.0,    0.0, 0.0,
         0.0461,  0.0,      1.2484,   0.0,    0.0, 0.0,
        -0.0461,  0.0,     -1.2484,   1.0,    0.0, 0.0,
         0.0,     0.0,    -50.2354,  -0.6048, 0.0, 0.0,
         0.0,     0.0,      0.0,      1.0,    0.0, 0.0,
         0.0,   414.0176,   0.0,      0.0,    0.0, 0.0,
    ])
}

pub fn reference_b() -> DMatrix<f64> {
    DMatrix::from_column_slice(6, 1, &[0.0, 0.1785, -0.1785, -31.4385, 0.0, 0.0])
}

pub fn reference_system() -> LinearSystem {
    LinearSystem::new(reference_a(), reference_b()).expect("reference matrices are 6x6 and 6x1")
}

/// Reduced [γ, α, q, θ, z] plant with light damping added on θ and z so
/// that every pole of the pitch-rate loop is strictly stable.
#[rustfmt::skip]
pub fn damped_reduced_plant() -> StateSpace {
    let a = DMatrix::from_row_slice(5, 5, &[
        -0.05,     1.2484,  0.0,     0.0,  0.0,
         0.0,     -1.2484,  1.0,     0.0,  0.0,
         0.0,    -50.2354, -0.6048,  0.0,  0.0,
         0.0,      0.0,     1.0,    -0.5,  0.0,
       414.0,      0.0,     0.0,     0.0, -0.2,
    ]);
    let b = DMatrix::from_column_slice(5, 1, &[0.1785, -0.1785, -31.4385, 0.0, 0.0]);
    StateSpace::new(a, b, selection_row(5, 0), DMatrix::zeros(1, 1))
        .expect("test plant shapes are consistent")
}
