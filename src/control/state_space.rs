use nalgebra::{Complex, DMatrix};
use serde::Serialize;
use std::cmp::Ordering;

use crate::control::{damp, ModalDamping, TransferFunction};
use crate::error::{LongitudinalError, Result};

/// Continuous-time linear system ẋ = A·x + B·u, y = C·x + D·u.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSpace {
    pub a: DMatrix<f64>,
    pub b: DMatrix<f64>,
    pub c: DMatrix<f64>,
    pub d: DMatrix<f64>,
}

impl StateSpace {
    /// Creates a state-space system after checking that the four matrices
    /// have compatible shapes.
    ///
    /// # Arguments
    /// * `a` - State matrix (n×n).
    /// * `b` - Input matrix (n×m).
    /// * `c` - Output matrix (p×n).
    /// * `d` - Feedthrough matrix (p×m).
    pub fn new(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
    ) -> Result<Self> {
        let n = a.nrows();
        if a.ncols() != n
            || b.nrows() != n
            || c.ncols() != n
            || d.nrows() != c.nrows()
            || d.ncols() != b.ncols()
        {
            return Err(LongitudinalError::InvalidPrecondition(format!(
                "incompatible state-space shapes: A {}x{}, B {}x{}, C {}x{}, D {}x{}",
                a.nrows(),
                a.ncols(),
                b.nrows(),
                b.ncols(),
                c.nrows(),
                c.ncols(),
                d.nrows(),
                d.ncols()
            )));
        }
        Ok(Self { a, b, c, d })
    }

    pub fn n_states(&self) -> usize {
        self.a.nrows()
    }

    pub fn is_siso(&self) -> bool {
        self.b.ncols() == 1 && self.c.nrows() == 1
    }

    /// Replaces the observation with a single row selecting `state`.
    pub fn observe(&self, state: usize) -> Result<Self> {
        let n = self.n_states();
        if state >= n {
            return Err(LongitudinalError::InvalidPrecondition(format!(
                "cannot observe state {} of a {}-state system",
                state, n
            )));
        }
        Self::new(
            self.a.clone(),
            self.b.clone(),
            selection_row(n, state),
            DMatrix::zeros(1, self.b.ncols()),
        )
    }

    /// Eigenvalues of A ordered by natural frequency, then imaginary part.
    pub fn poles(&self) -> Vec<Complex<f64>> {
        sorted_eigenvalues(&self.a)
    }

    /// Damping ratio and natural frequency of every pole.
    pub fn damping(&self) -> Vec<ModalDamping> {
        damp(&self.poles())
    }

    pub fn transfer_function(&self) -> Result<TransferFunction> {
        TransferFunction::from_state_space(self)
    }
}

/// A 1×n row with a single one at `index`.
pub fn selection_row(n: usize, index: usize) -> DMatrix<f64> {
    DMatrix::from_fn(1, n, |_, j| if j == index { 1.0 } else { 0.0 })
}

pub fn sorted_eigenvalues(a: &DMatrix<f64>) -> Vec<Complex<f64>> {
    let mut eigenvalues: Vec<Complex<f64>> = a.complex_eigenvalues().iter().copied().collect();
    eigenvalues.sort_by(|x, y| {
        x.norm()
            .partial_cmp(&y.norm())
            .unwrap_or(Ordering::Equal)
            .then(x.im.partial_cmp(&y.im).unwrap_or(Ordering::Equal))
    });
    eigenvalues
}
