use nalgebra::DMatrix;
use serde::Serialize;
use std::fmt;

use crate::control::StateSpace;
use crate::error::{LongitudinalError, Result};

/// Coefficients smaller than this fraction of the largest one are treated as zero.
const COEFFICIENT_CUTOFF: f64 = 1e-12;

/// Rational transfer function num(s)/den(s), coefficients in descending powers of s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferFunction {
    pub num: Vec<f64>,
    pub den: Vec<f64>,
}

impl TransferFunction {
    pub fn new(num: Vec<f64>, den: Vec<f64>) -> Self {
        Self { num, den }
    }

    /// Derives the transfer function of a SISO system.
    ///
    /// The denominator is the characteristic polynomial of A and the numerator
    /// is C·adj(sI − A)·B + D·det(sI − A), both obtained from the
    /// Faddeev–LeVerrier recursion.
    pub fn from_state_space(sys: &StateSpace) -> Result<Self> {
        if !sys.is_siso() {
            return Err(LongitudinalError::InvalidPrecondition(format!(
                "transfer function needs a SISO system, got {} inputs and {} outputs",
                sys.b.ncols(),
                sys.c.nrows()
            )));
        }

        let n = sys.n_states();
        let identity = DMatrix::<f64>::identity(n, n);
        let feedthrough = sys.d[(0, 0)];

        let mut den = Vec::with_capacity(n + 1);
        den.push(1.0);
        let mut adjugate_terms = Vec::with_capacity(n);
        let mut m = identity.clone();

        for k in 1..=n {
            let am = &sys.a * &m;
            let coefficient = -am.trace() / k as f64;
            den.push(coefficient);
            adjugate_terms.push(m);
            m = am + &identity * coefficient;
        }

        let mut num = Vec::with_capacity(n + 1);
        num.push(feedthrough);
        for (k, term) in adjugate_terms.iter().enumerate() {
            let cmb = (&sys.c * term * &sys.b)[(0, 0)];
            num.push(cmb + feedthrough * den[k + 1]);
        }

        Ok(Self::new(trim_leading(num), den))
    }

    pub fn eval(&self, s: f64) -> f64 {
        polyval(&self.num, s) / polyval(&self.den, s)
    }

    /// Steady-state gain H(0). Infinite when the system contains a free integrator.
    pub fn dc_gain(&self) -> f64 {
        let num = self.num.last().copied().unwrap_or(0.0);
        let den = self.den.last().copied().unwrap_or(0.0);
        num / den
    }
}

fn polyval(coefficients: &[f64], s: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * s + c)
}

fn trim_leading(coefficients: Vec<f64>) -> Vec<f64> {
    let scale = coefficients.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if scale == 0.0 {
        return vec![0.0];
    }
    let first = coefficients
        .iter()
        .position(|c| c.abs() > COEFFICIENT_CUTOFF * scale)
        .unwrap_or(coefficients.len() - 1);
    coefficients[first..].to_vec()
}

fn format_polynomial(coefficients: &[f64]) -> String {
    let degree = coefficients.len().saturating_sub(1);
    let scale = coefficients.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()));
    let mut terms: Vec<String> = Vec::new();

    for (i, &c) in coefficients.iter().enumerate() {
        if c.abs() <= COEFFICIENT_CUTOFF * scale {
            continue;
        }
        let power = degree - i;
        let magnitude = c.abs();
        let body = match power {
            0 => format!("{:.4}", magnitude),
            _ => {
                let s = if power == 1 {
                    "s".to_string()
                } else {
                    format!("s^{}", power)
                };
                if (magnitude - 1.0).abs() < 1e-12 {
                    s
                } else {
                    format!("{:.4} {}", magnitude, s)
                }
            }
        };
        let sign = if c < 0.0 { "-" } else { "+" };
        if terms.is_empty() {
            terms.push(if c < 0.0 { format!("-{}", body) } else { body });
        } else {
            terms.push(format!("{} {}", sign, body));
        }
    }

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" ")
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = format_polynomial(&self.num);
        let den = format_polynomial(&self.den);
        let width = num.len().max(den.len());
        writeln!(f, "{:^width$}", num, width = width)?;
        writeln!(f, "{}", "-".repeat(width))?;
        write!(f, "{:^width$}", den, width = width)
    }
}
