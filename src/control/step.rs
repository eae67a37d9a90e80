use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::control::damping::INTEGRATOR_THRESHOLD;
use crate::control::StateSpace;
use crate::error::{LongitudinalError, Result};

/// Settling band as a fraction of the final value.
const SETTLING_BAND: f64 = 0.05;
/// Cap on the number of samples of an automatically chosen grid.
const MAX_AUTO_SAMPLES: f64 = 20_000.0;

/// Uniform simulation grid [0, horizon] with spacing `dt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    pub horizon: f64,
    pub dt: f64,
}

impl TimeGrid {
    pub fn new(horizon: f64, dt: f64) -> Self {
        Self { horizon, dt }
    }

    /// Picks a grid from the pole locations: long enough for the slowest
    /// stable pole to decay, fine enough to resolve the fastest one.
    pub fn auto(sys: &StateSpace) -> Self {
        let poles = sys.poles();

        let slowest = poles
            .iter()
            .filter(|p| p.re < -INTEGRATOR_THRESHOLD)
            .map(|p| p.re.abs())
            .fold(f64::INFINITY, f64::min);
        let horizon = if slowest.is_finite() {
            (7.0 / slowest).clamp(1.0, 1000.0)
        } else {
            100.0
        };

        let fastest = poles
            .iter()
            .map(|p| p.norm())
            .filter(|w| *w > INTEGRATOR_THRESHOLD)
            .fold(0.0, f64::max);
        let dt = if fastest > 0.0 {
            2.0 * PI / (25.0 * fastest)
        } else {
            horizon / 1000.0
        };

        Self::new(horizon, dt.clamp(horizon / MAX_AUTO_SAMPLES, horizon / 200.0))
    }

    pub fn samples(&self) -> usize {
        (self.horizon / self.dt).round() as usize + 1
    }
}

/// Sampled response to a unit step on the single input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResponse {
    pub time: Vec<f64>,
    pub output: Vec<f64>,
}

/// Overshoot, rise time and settling time of a step response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepMetrics {
    /// Peak overshoot relative to the final value (%).
    pub overshoot: f64,
    /// 10 %–90 % rise time (s).
    pub rise_time: f64,
    /// 5 % settling time (s).
    pub settling_time: f64,
    pub final_value: f64,
}

/// Simulates the unit step response of a SISO system from rest.
///
/// The continuous system is discretised exactly for a held input by taking
/// the exponential of the augmented matrix [[A, B], [0, 0]]·dt.
pub fn step_response(sys: &StateSpace, grid: &TimeGrid) -> Result<StepResponse> {
    if !sys.is_siso() {
        return Err(LongitudinalError::InvalidPrecondition(
            "step response needs a SISO system".to_string(),
        ));
    }
    if !(grid.dt > 0.0 && grid.horizon > 0.0) {
        return Err(LongitudinalError::InvalidPrecondition(format!(
            "invalid time grid: horizon {} s, dt {} s",
            grid.horizon, grid.dt
        )));
    }

    let n = sys.n_states();
    let mut augmented = DMatrix::<f64>::zeros(n + 1, n + 1);
    augmented.slice_mut((0, 0), (n, n)).copy_from(&(&sys.a * grid.dt));
    augmented.slice_mut((0, n), (n, 1)).copy_from(&(&sys.b * grid.dt));
    let transition = augmented.exp();

    let ad = transition.slice((0, 0), (n, n)).into_owned();
    let bd: DVector<f64> = transition.slice((0, n), (n, 1)).column(0).into_owned();
    let c = sys.c.row(0).transpose();
    let d = sys.d[(0, 0)];

    let samples = grid.samples();
    let mut time = Vec::with_capacity(samples);
    let mut output = Vec::with_capacity(samples);
    let mut x = DVector::<f64>::zeros(n);

    for k in 0..samples {
        time.push(k as f64 * grid.dt);
        output.push(c.dot(&x) + d);
        x = &ad * &x + &bd;
    }

    Ok(StepResponse { time, output })
}

impl StepResponse {
    pub fn final_value(&self) -> f64 {
        self.output.last().copied().unwrap_or(0.0)
    }

    pub fn peak(&self) -> f64 {
        self.output.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn metrics(&self) -> StepMetrics {
        let final_value = self.final_value();
        StepMetrics {
            overshoot: self.overshoot(final_value),
            rise_time: self.rise_time(final_value),
            settling_time: self.settling_time(final_value),
            final_value,
        }
    }

    fn normalised(&self, final_value: f64) -> Vec<f64> {
        self.output.iter().map(|y| y / final_value).collect()
    }

    fn overshoot(&self, final_value: f64) -> f64 {
        if final_value == 0.0 {
            return f64::NAN;
        }
        let peak = self
            .normalised(final_value)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        (peak - 1.0) * 100.0
    }

    fn rise_time(&self, final_value: f64) -> f64 {
        if final_value == 0.0 {
            return f64::NAN;
        }
        let normalised = self.normalised(final_value);
        match (
            self.first_crossing(&normalised, 0.1),
            self.first_crossing(&normalised, 0.9),
        ) {
            (Some(t10), Some(t90)) => t90 - t10,
            _ => f64::NAN,
        }
    }

    /// First time the normalised response reaches `level`, linearly interpolated.
    fn first_crossing(&self, normalised: &[f64], level: f64) -> Option<f64> {
        let i = normalised.iter().position(|r| *r >= level)?;
        if i == 0 {
            return Some(self.time[0]);
        }
        let (r0, r1) = (normalised[i - 1], normalised[i]);
        let (t0, t1) = (self.time[i - 1], self.time[i]);
        Some(t0 + (t1 - t0) * (level - r0) / (r1 - r0))
    }

    /// First time after which the response stays inside the ±5 % band around
    /// its final value, interpolated between the last sample outside the band
    /// and the one after it.
    fn settling_time(&self, final_value: f64) -> f64 {
        let band = SETTLING_BAND * final_value.abs();
        let excess: Vec<f64> = self
            .output
            .iter()
            .map(|y| (y - final_value).abs() - band)
            .collect();

        match excess.iter().rposition(|e| *e > 0.0) {
            None => self.time.first().copied().unwrap_or(0.0),
            Some(i) if i + 1 >= excess.len() => self.time[i],
            Some(i) => {
                let (e0, e1) = (excess[i], excess[i + 1]);
                let (t0, t1) = (self.time[i], self.time[i + 1]);
                t0 + (t1 - t0) * e0 / (e0 - e1)
            }
        }
    }
}
