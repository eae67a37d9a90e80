use nalgebra::Complex;
use serde::Serialize;

/// Poles closer to the origin than this are treated as integrators.
pub(crate) const INTEGRATOR_THRESHOLD: f64 = 1e-9;

/// One row of a damping table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModalDamping {
    pub real: f64,
    pub imag: f64,
    /// ζ = −cos(arg λ); −1 for an integrator (|λ| below `INTEGRATOR_THRESHOLD`).
    pub damping_ratio: f64,
    /// ωn = |λ| (rad/s).
    pub natural_frequency: f64,
}

impl ModalDamping {
    pub fn from_pole(pole: Complex<f64>) -> Self {
        if pole.norm() < INTEGRATOR_THRESHOLD {
            return Self {
                real: pole.re,
                imag: pole.im,
                damping_ratio: -1.0,
                natural_frequency: 0.0,
            };
        }
        Self {
            real: pole.re,
            imag: pole.im,
            damping_ratio: -pole.arg().cos(),
            natural_frequency: pole.norm(),
        }
    }

    pub fn is_stable(&self) -> bool {
        self.real < 0.0
    }
}

/// Damping table for a set of poles, in the order given.
pub fn damp(poles: &[Complex<f64>]) -> Vec<ModalDamping> {
    poles.iter().copied().map(ModalDamping::from_pole).collect()
}
