use chrono::Utc;
use nalgebra::{Complex, DMatrix};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::components::{
    EquilibriumState, FeedbackCascade, FeedbackLoop, FlightCondition, FlightPoint, LinearSystem,
    ModalAnalysis, SaturationResult, StabilityDerivatives, StateVariable, Subsystem,
};
use crate::control::{damp, ModalDamping};
use crate::error::Result;

/// Everything the analysis produced for one aircraft at one operating point.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// RFC 3339 creation time.
    pub generated_at: String,
    pub aircraft: String,
    pub flight: FlightPoint,
    pub condition: FlightCondition,
    pub trim: EquilibriumState,
    pub derivatives: Option<StabilityDerivatives>,
    pub a: DMatrix<f64>,
    pub b: DMatrix<f64>,
    pub c: DMatrix<f64>,
    pub d: DMatrix<f64>,
    pub eigenvalues: Vec<Complex<f64>>,
    pub damping: Vec<ModalDamping>,
    pub modes: ModalAnalysis,
    pub autopilot: FeedbackCascade,
    pub saturation: SaturationResult,
}

impl AnalysisReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        aircraft: &str,
        flight: FlightPoint,
        condition: FlightCondition,
        trim: EquilibriumState,
        system: &LinearSystem,
        modes: ModalAnalysis,
        autopilot: FeedbackCascade,
        saturation: SaturationResult,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            aircraft: aircraft.to_string(),
            flight,
            condition,
            trim,
            derivatives: system.derivatives().copied(),
            a: system.a().clone(),
            b: system.b().clone(),
            c: system.c().clone(),
            d: system.d().clone(),
            eigenvalues: system.eigenvalues().to_vec(),
            damping: damp(system.eigenvalues()),
            modes,
            autopilot,
            saturation,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn write_matrix(f: &mut fmt::Formatter<'_>, name: &str, m: &DMatrix<f64>) -> fmt::Result {
    writeln!(f, "{} =", name)?;
    for row in m.row_iter() {
        write!(f, "  [")?;
        for value in row.iter() {
            write!(f, " {:>12.5}", value)?;
        }
        writeln!(f, " ]")?;
    }
    Ok(())
}

fn write_damping(f: &mut fmt::Formatter<'_>, table: &[ModalDamping]) -> fmt::Result {
    writeln!(
        f,
        "  {:>24}  {:>10}  {:>12}",
        "eigenvalue", "damping", "wn (rad/s)"
    )?;
    for row in table {
        writeln!(
            f,
            "  {:>11.5} {:>+11.5}j  {:>10.4}  {:>12.5}",
            row.real, row.imag, row.damping_ratio, row.natural_frequency
        )?;
    }
    Ok(())
}

fn write_subsystem(f: &mut fmt::Formatter<'_>, subsystem: &Subsystem) -> fmt::Result {
    writeln!(f, "-- {} --", subsystem.mode)?;
    write_matrix(f, "A", &subsystem.a)?;
    write_matrix(f, "B", &subsystem.b)?;
    for channel in &subsystem.channels {
        writeln!(f)?;
        writeln!(f, "{}/delta_m:", channel.output.symbol())?;
        writeln!(f, "{}", channel.transfer_function)?;
        writeln!(f, "  dc gain        {:.5}", channel.dc_gain)?;
        writeln!(f, "  overshoot      {:.2} %", channel.step.overshoot)?;
        writeln!(f, "  rise time      {:.3} s", channel.step.rise_time)?;
        writeln!(f, "  settling time  {:.3} s", channel.step.settling_time)?;
    }
    if let Some(channel) = subsystem.channels.first() {
        write_damping(f, &channel.damping)?;
    }
    Ok(())
}

fn write_loop(f: &mut fmt::Formatter<'_>, feedback: &FeedbackLoop) -> fmt::Result {
    writeln!(f, "-- {} (K = {}) --", feedback.kind, feedback.gain)?;
    write_matrix(f, "A'", &feedback.closed.a)?;
    write_matrix(f, "B'", &feedback.closed.b)?;
    writeln!(f, "{}", feedback.transfer_function)?;
    write_damping(f, &feedback.damping)?;
    writeln!(
        f,
        "  settling time {:.3} s, overshoot {:.2} %",
        feedback.step.settling_time, feedback.step.overshoot
    )
}

fn write_trim(f: &mut fmt::Formatter<'_>, trim: &EquilibriumState) -> fmt::Result {
    writeln!(f, "Equilibrium ({} iterations)", trim.iteration_count)?;
    writeln!(f, "  alpha_eq    {:>12.6} rad ({:.3}°)", trim.alpha_eq, trim.alpha_eq.to_degrees())?;
    writeln!(f, "  delta_m_eq  {:>12.6} rad ({:.3}°)", trim.delta_m_eq, trim.delta_m_eq.to_degrees())?;
    writeln!(f, "  Cz_eq       {:>12.6}", trim.cz_eq)?;
    writeln!(f, "  Cx_eq       {:>12.6}", trim.cx_eq)?;
    writeln!(f, "  Cx_delta_m  {:>12.6}", trim.cx_delta_m)?;
    writeln!(f, "  Fpx_eq      {:>12.1} N", trim.fpx_eq)
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Longitudinal analysis of {} ({})", self.aircraft, self.generated_at)?;
        writeln!(
            f,
            "Mach {:.3} at {:.0} m: V = {:.2} m/s, rho = {:.4} kg/m3, Q = {:.0} Pa",
            self.flight.mach,
            self.flight.altitude,
            self.condition.airspeed,
            self.condition.density,
            self.condition.dynamic_pressure
        )?;
        writeln!(f)?;
        write_trim(f, &self.trim)?;
        writeln!(f)?;

        let states: Vec<&str> = StateVariable::ALL.iter().map(|s| s.symbol()).collect();
        writeln!(f, "State vector [{}]", states.join(", "))?;
        write_matrix(f, "A", &self.a)?;
        write_matrix(f, "B", &self.b)?;
        writeln!(f, "C = I{}, D = 0", self.c.nrows())?;
        writeln!(f)?;
        writeln!(f, "Eigenvalues")?;
        write_damping(f, &self.damping)?;
        writeln!(f)?;

        write_subsystem(f, &self.modes.phugoid)?;
        writeln!(f)?;
        write_subsystem(f, &self.modes.short_period)?;
        writeln!(f)?;

        for feedback in self.autopilot.loops() {
            write_loop(f, feedback)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "Saturation: alpha_max = {:.5} rad, gamma_max = {:.5} rad ({:.2}°) after {} iterations",
            self.saturation.alpha_max,
            self.saturation.gamma_max,
            self.saturation.gamma_max.to_degrees(),
            self.saturation.iterations
        )
    }
}

/// Text rendering of a trim result on its own.
pub struct TrimSummary<'a>(pub &'a EquilibriumState);

impl fmt::Display for TrimSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_trim(f, self.0)
    }
}

/// Text rendering of both modal reductions.
pub struct ModesSummary<'a>(pub &'a ModalAnalysis);

impl fmt::Display for ModesSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subsystem(f, &self.0.phugoid)?;
        writeln!(f)?;
        write_subsystem(f, &self.0.short_period)
    }
}
