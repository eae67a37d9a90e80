use tracing::info;

use crate::components::{
    AircraftParameters, EquilibriumState, FeedbackCascade, LinearSystem, ModalAnalysis,
    SaturationResult,
};
use crate::error::{Result, Stage};
use crate::report::AnalysisReport;
use crate::resources::AnalysisConfig;
use crate::systems::{
    EquilibriumSolver, FeedbackSynthesizer, LinearStateSpaceBuilder, ModalDecomposer,
    SaturationRootFinder,
};

/// Runs the analysis stages in dependency order, keeping every result.
///
/// Each stage is computed at most once. When a stage fails, the results of the
/// stages before it stay available through the accessors.
pub struct Pipeline<'a> {
    params: &'a AircraftParameters,
    config: &'a AnalysisConfig,
    trim: Option<EquilibriumState>,
    system: Option<LinearSystem>,
    modes: Option<ModalAnalysis>,
    autopilot: Option<FeedbackCascade>,
    saturation: Option<SaturationResult>,
}

impl<'a> Pipeline<'a> {
    pub fn new(params: &'a AircraftParameters, config: &'a AnalysisConfig) -> Self {
        Self {
            params,
            config,
            trim: None,
            system: None,
            modes: None,
            autopilot: None,
            saturation: None,
        }
    }

    /// Validates the configuration and runs every stage.
    ///
    /// # Arguments
    /// * `params` - Aircraft and operating point.
    /// * `config` - Solver settings and autopilot gains.
    ///
    /// # Returns
    /// The full `AnalysisReport`, or the first stage error tagged with its stage.
    pub fn run(params: &AircraftParameters, config: &AnalysisConfig) -> Result<AnalysisReport> {
        config.validate()?;
        Pipeline::new(params, config).execute()
    }

    pub fn execute(&mut self) -> Result<AnalysisReport> {
        info!("Analysing {}", self.params.name);
        let params = self.params;

        let trim = self.equilibrium()?;
        self.linear_system()?;
        let modes = self.modes()?.clone();
        let autopilot = self.autopilot()?.clone();
        let saturation = self.saturation()?;
        let system = self.linear_system()?;

        Ok(AnalysisReport::new(
            &params.name,
            params.flight.clone(),
            params.condition,
            trim,
            system,
            modes,
            autopilot,
            saturation,
        ))
    }

    pub fn equilibrium(&mut self) -> Result<EquilibriumState> {
        if let Some(trim) = self.trim {
            return Ok(trim);
        }
        let trim = EquilibriumSolver::new(self.config.trim)
            .solve(self.params)
            .map_err(|e| e.at(Stage::Equilibrium))?;
        self.trim = Some(trim);
        Ok(trim)
    }

    pub fn linear_system(&mut self) -> Result<&LinearSystem> {
        let system = match self.system.take() {
            Some(system) => system,
            None => {
                let trim = self.equilibrium()?;
                LinearStateSpaceBuilder::build(self.params, &trim)
                    .map_err(|e| e.at(Stage::Linearisation))?
            }
        };
        Ok(self.system.insert(system))
    }

    pub fn modes(&mut self) -> Result<&ModalAnalysis> {
        let modes = match self.modes.take() {
            Some(modes) => modes,
            None => {
                let system = self.linear_system()?;
                ModalDecomposer::decompose(system).map_err(|e| e.at(Stage::Modal))?
            }
        };
        Ok(self.modes.insert(modes))
    }

    pub fn autopilot(&mut self) -> Result<&FeedbackCascade> {
        let autopilot = match self.autopilot.take() {
            Some(autopilot) => autopilot,
            None => {
                let synthesizer = FeedbackSynthesizer::new(self.config.autopilot);
                let system = self.linear_system()?;
                synthesizer
                    .synthesize(system)
                    .map_err(|e| e.at(Stage::Feedback))?
            }
        };
        Ok(self.autopilot.insert(autopilot))
    }

    pub fn saturation(&mut self) -> Result<SaturationResult> {
        if let Some(saturation) = self.saturation {
            return Ok(saturation);
        }
        let params = self.params;
        let finder = SaturationRootFinder::new(self.config.saturation);
        let trim = self.equilibrium()?;
        let cascade = self.autopilot()?;
        let saturation = finder
            .solve(params, &trim, cascade)
            .map_err(|e| e.at(Stage::Saturation))?;
        self.saturation = Some(saturation);
        Ok(saturation)
    }

    pub fn trim_state(&self) -> Option<&EquilibriumState> {
        self.trim.as_ref()
    }

    pub fn system(&self) -> Option<&LinearSystem> {
        self.system.as_ref()
    }

    pub fn modal_analysis(&self) -> Option<&ModalAnalysis> {
        self.modes.as_ref()
    }

    pub fn cascade(&self) -> Option<&FeedbackCascade> {
        self.autopilot.as_ref()
    }
}
