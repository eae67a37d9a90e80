use approx::assert_relative_eq;
use longitudinal::components::{
    AircraftParameters, AircraftSource, AircraftType, ConfigError, RawAircraftConfig,
};
use longitudinal::resources::AnalysisConfig;
use pretty_assertions::assert_eq;

use crate::common::{bundled_config, write_temp_yaml, TRAINER_YAML};

#[test]
fn test_bundled_mirage_matches_programmed() {
    let from_file =
        AircraftParameters::new(AircraftSource::File(bundled_config("mirage_iii.yaml"))).unwrap();
    let programmed = AircraftParameters::new(AircraftSource::Programmed(AircraftType::MirageIII))
        .unwrap();

    assert_eq!(from_file, programmed);
}

#[test]
fn test_load_from_temp_file() {
    let file = write_temp_yaml(TRAINER_YAML);
    let params = AircraftParameters::from_file(file.path()).unwrap();

    assert_eq!(params.name, "Trainer");
    assert_eq!(params.geometry.total_length, 10.0);
    assert_eq!(params.thrust_gradient, 0.0);
    assert_eq!(params.physics.gravity, 9.81);
    assert_relative_eq!(
        params.condition.airspeed,
        0.6 * params.condition.speed_of_sound,
        epsilon = 1e-12
    );
    assert_relative_eq!(params.geometry.aero_lever_arm(), -0.5, epsilon = 1e-12);
}

#[test]
fn test_fraction_out_of_range() {
    let yaml = TRAINER_YAML.replace("f_delta: 0.9", "f_delta: 1.4");
    let result = AircraftParameters::from_yaml(&yaml);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_zero_lift_slope_rejected() {
    let yaml = TRAINER_YAML.replace("Cz_alpha: 4.5", "Cz_alpha: 0.0");
    let raw: RawAircraftConfig = serde_yaml::from_str(&yaml).unwrap();
    assert!(matches!(
        AircraftParameters::from_raw(&raw),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_missing_key_is_a_yaml_error() {
    let yaml = TRAINER_YAML.replace("Cm_q: -0.5\n", "");
    assert!(matches!(
        AircraftParameters::from_yaml(&yaml),
        Err(ConfigError::YamlError(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = AircraftParameters::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_bundled_analysis_config() {
    let config = AnalysisConfig::from_file(bundled_config("analysis.yaml")).unwrap();
    let defaults = AnalysisConfig::default();

    assert_eq!(config.autopilot, defaults.autopilot);
    assert_eq!(config.trim, defaults.trim);
    assert_eq!(config.saturation, defaults.saturation);
}

#[test]
fn test_invalid_analysis_config_file() {
    let file = write_temp_yaml("saturation:\n  tolerance: -1.0\n");
    assert!(matches!(
        AnalysisConfig::from_file(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}
