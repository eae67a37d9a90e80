use argmin::core::observers::ObserverMode;
use argmin::core::{
    CostFunction, Error, Executor, IterState, Problem, Solver, State, TerminationReason,
    TerminationStatus, KV,
};
use argmin_observer_slog::SlogLogger;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LongitudinalError, Result, Stage};

/// Slopes smaller than this in magnitude stop the iteration.
pub const MIN_SLOPE: f64 = 1e-14;

type ScalarState = IterState<f64, (), (), (), (), f64>;

/// Forward-difference derivative (f(x0 + h) − f(x0)) / h.
pub fn forward_difference<F, E>(mut f: F, x0: f64, h: f64) -> std::result::Result<f64, E>
where
    F: FnMut(f64) -> std::result::Result<f64, E>,
{
    let f0 = f(x0)?;
    let f1 = f(x0 + h)?;
    Ok((f1 - f0) / h)
}

/// Wraps a plain scalar function as an argmin problem.
#[derive(Clone)]
pub struct ScalarFunction<F>(pub F);

impl<F> CostFunction for ScalarFunction<F>
where
    F: Fn(f64) -> f64,
{
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> std::result::Result<Self::Output, Error> {
        Ok((self.0)(*x))
    }
}

/// Root and the number of Newton steps taken to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewtonRoot {
    pub root: f64,
    pub iterations: u64,
}

/// Scalar Newton-Raphson with a forward-difference slope.
///
/// The cost function of the problem is the function whose root is sought.
/// Iteration stops once two successive iterates are closer than `tolerance`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NewtonRaphson {
    step: f64,
    tolerance: f64,
    stage: Stage,
    last_step: f64,
}

impl NewtonRaphson {
    /// # Arguments
    /// * `step` - Forward-difference step h.
    /// * `tolerance` - Convergence threshold on |x_{k+1} − x_k|.
    pub fn new(step: f64, tolerance: f64) -> Self {
        Self {
            step,
            tolerance,
            stage: Stage::Saturation,
            last_step: f64::INFINITY,
        }
    }

    /// Pipeline stage named in the errors this solver raises.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Runs the iteration from `seed`.
    ///
    /// # Arguments
    /// * `problem` - Function whose root is sought.
    /// * `seed` - Starting iterate.
    /// * `max_iterations` - Iteration cap, exceeded caps fail with `ConvergenceFailure`.
    /// * `debug_level` - Attaches a terminal observer when non-zero.
    pub fn find_root<O>(
        self,
        problem: O,
        seed: f64,
        max_iterations: u64,
        debug_level: usize,
    ) -> Result<NewtonRoot>
    where
        O: CostFunction<Param = f64, Output = f64> + 'static,
    {
        let stage = self.stage;
        let mut executor = Executor::new(problem, self)
            .configure(|state| state.param(seed).max_iters(max_iterations));
        if debug_level > 0 {
            executor = executor.add_observer(SlogLogger::term(), ObserverMode::Always);
        }

        let result = executor.run()?;
        let state = result.state();
        let iterations = state.get_iter();

        match state.get_termination_status() {
            TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
                let root = state.get_param().copied().ok_or_else(|| {
                    LongitudinalError::Solver("Newton iteration produced no iterate".to_string())
                })?;
                debug!("Newton converged to {:.12} in {} iterations", root, iterations);
                Ok(NewtonRoot { root, iterations })
            }
            status => Err(LongitudinalError::ConvergenceFailure {
                stage,
                iterations,
                reason: format!("{:?}", status),
            }),
        }
    }
}

impl<O> Solver<O, ScalarState> for NewtonRaphson
where
    O: CostFunction<Param = f64, Output = f64>,
{
    const NAME: &'static str = "Newton-Raphson";

    fn next_iter(
        &mut self,
        problem: &mut Problem<O>,
        state: ScalarState,
    ) -> std::result::Result<(ScalarState, Option<KV>), Error> {
        let x = state.get_param().copied().ok_or_else(|| {
            LongitudinalError::InvalidPrecondition("Newton iteration needs a seed".to_string())
        })?;

        let fx = problem.cost(&x)?;
        let slope = forward_difference(|p| problem.cost(&p), x, self.step)?;
        if !(slope.abs() >= MIN_SLOPE) {
            return Err(LongitudinalError::NumericInstability {
                stage: self.stage,
                detail: format!("slope {:e} at x = {} is too flat for a Newton step", slope, x),
            }
            .into());
        }

        let next = x - fx / slope;
        if !next.is_finite() {
            return Err(LongitudinalError::ConvergenceFailure {
                stage: self.stage,
                iterations: state.get_iter() + 1,
                reason: format!("iterate became non-finite from x = {}", x),
            }
            .into());
        }

        self.last_step = (next - x).abs();
        Ok((state.param(next).cost(fx), None))
    }

    fn terminate(&mut self, _state: &ScalarState) -> TerminationStatus {
        if self.last_step < self.tolerance {
            TerminationStatus::Terminated(TerminationReason::SolverConverged)
        } else {
            TerminationStatus::NotTerminated
        }
    }
}
