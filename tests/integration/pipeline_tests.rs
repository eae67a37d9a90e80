use longitudinal::components::{AircraftParameters, N_STATES};
use longitudinal::resources::AnalysisConfig;
use longitudinal::{Pipeline, Stage};
use nalgebra::DMatrix;
use pretty_assertions::assert_eq;

use crate::common::{write_temp_yaml, TRAINER_YAML};

#[test]
fn test_mirage_end_to_end() {
    let params = AircraftParameters::default();
    let report = Pipeline::run(&params, &AnalysisConfig::default()).unwrap();

    assert!(report.trim.converged);
    assert!(report.trim.iteration_count > 0);
    assert_eq!(report.c, DMatrix::<f64>::identity(N_STATES, N_STATES));
    assert_eq!(report.eigenvalues.len(), N_STATES);
    assert_eq!(report.damping.len(), N_STATES);

    let saturation = report.saturation;
    assert!(saturation.alpha_max > report.trim.alpha_eq);
    assert!(saturation.gamma_max > 0.0);
    assert!(saturation.iterations > 0 && saturation.iterations < 100);
    assert!(saturation.residual.abs() < 1e-8);
}

#[test]
fn test_report_renderings() {
    let params = AircraftParameters::default();
    let report = Pipeline::run(&params, &AnalysisConfig::default()).unwrap();

    let text = report.to_string();
    assert!(text.contains("Longitudinal analysis of MirageIII"));
    assert!(text.contains("Phugoid"));
    assert!(text.contains("Short period"));
    assert!(text.contains("gamma loop"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    for key in ["trim", "a", "b", "modes", "autopilot", "saturation", "generated_at"] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(json["aircraft"], "MirageIII");
}

#[test]
fn test_write_json_report() {
    let params = AircraftParameters::default();
    let report = Pipeline::run(&params, &AnalysisConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    report.write_json(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, report.to_json().unwrap());
}

#[test]
fn test_stages_are_cached() {
    let params = AircraftParameters::default();
    let config = AnalysisConfig::default();
    let mut pipeline = Pipeline::new(&params, &config);

    let trim = pipeline.equilibrium().unwrap();
    assert!(pipeline.system().is_none());

    let a = pipeline.linear_system().unwrap().a().clone();
    assert_eq!(pipeline.equilibrium().unwrap(), trim);
    assert_eq!(pipeline.linear_system().unwrap().a(), &a);
    assert!(pipeline.modal_analysis().is_none());
}

#[test]
fn test_invalid_config_fails_before_any_stage() {
    let params = AircraftParameters::from_yaml(TRAINER_YAML).unwrap();
    let mut config = AnalysisConfig::default();
    config.trim.epsilon = 0.0;

    let err = Pipeline::run(&params, &config).unwrap_err();
    assert_eq!(err.stage(), None);
}

#[test]
fn test_trim_stage_failure_is_tagged() {
    let file = write_temp_yaml(TRAINER_YAML);
    let params = AircraftParameters::from_file(file.path()).unwrap();
    let mut config = AnalysisConfig::default();
    config.trim.max_iterations = 1;

    let err = Pipeline::run(&params, &config).unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Equilibrium));
}
