use nalgebra::DMatrix;
use tracing::{debug, info};

use crate::components::{
    LinearSystem, ModalAnalysis, Mode, ModeChannel, StateVariable, Subsystem,
};
use crate::control::{selection_row, step_response, StateSpace};
use crate::error::Result;

/// Splits the longitudinal model into its phugoid and short-period reductions.
pub struct ModalDecomposer;

impl ModalDecomposer {
    /// Both reductions read disjoint blocks of the parent, so they run in parallel.
    pub fn decompose(system: &LinearSystem) -> Result<ModalAnalysis> {
        let (phugoid, short_period) = rayon::join(
            || Self::reduce(system, Mode::Phugoid),
            || Self::reduce(system, Mode::ShortPeriod),
        );

        Ok(ModalAnalysis {
            phugoid: phugoid?,
            short_period: short_period?,
        })
    }

    /// Two-state reduction of `mode` with one observation channel per state.
    pub fn reduce(system: &LinearSystem, mode: Mode) -> Result<Subsystem> {
        let (a, b) = system.block(mode.offset(), 2);

        let channels = mode
            .states()
            .iter()
            .enumerate()
            .map(|(i, output)| {
                let sys = StateSpace::new(
                    a.clone(),
                    b.clone(),
                    selection_row(2, i),
                    DMatrix::zeros(1, 1),
                )?;
                Self::channel(sys, *output, mode)
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(pole) = channels.first().and_then(|c| c.damping.last()) {
            info!(
                "{} mode: wn={:.4} rad/s, zeta={:.4}",
                mode, pole.natural_frequency, pole.damping_ratio
            );
        }

        Ok(Subsystem {
            mode,
            a,
            b,
            channels,
        })
    }

    fn channel(system: StateSpace, output: StateVariable, mode: Mode) -> Result<ModeChannel> {
        let transfer_function = system.transfer_function()?;
        let dc_gain = transfer_function.dc_gain();
        let damping = system.damping();
        let step = step_response(&system, &mode.time_grid())?.metrics();

        debug!(
            "{} {}/delta_m: dc gain {:.4}, overshoot {:.1} %, settling {:.2} s",
            mode,
            output.symbol(),
            dc_gain,
            step.overshoot,
            step.settling_time
        );

        Ok(ModeChannel {
            output,
            system,
            transfer_function,
            dc_gain,
            damping,
            step,
        })
    }
}
