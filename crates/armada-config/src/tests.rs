//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        restarts = 10
        swap_iterations = 25
        min_combat_score = 1.5
        restart_mode = "sequential"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, 42);
    assert_eq!(config.restarts, 10);
    assert_eq!(config.swap_iterations, 25);
    assert_eq!(config.min_combat_score, Some(1.5));
    assert_eq!(config.restart_mode, RestartMode::Sequential);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        restarts: 12
        restart_mode: parallel
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, 42);
    assert_eq!(config.restarts, 12);
    assert_eq!(config.swap_iterations, DEFAULT_SWAP_ITERATIONS);
    assert_eq!(config.restart_mode, RestartMode::Parallel);
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.restarts, DEFAULT_RESTARTS);
    assert_eq!(config.min_combat_score, None);
}

#[test]
fn test_negative_min_combat_rejected() {
    let err = SolverConfig::from_toml_str("min_combat_score = -1.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_mode_rejected() {
    let err = SolverConfig::from_toml_str(r#"restart_mode = "sideways""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SolverConfig::load("definitely/not/here/armada.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_restarts(0)
        .with_swap_iterations(5)
        .with_min_combat_score(2.0)
        .with_restart_mode(RestartMode::Parallel);

    assert_eq!(config.random_seed, 123);
    assert_eq!(config.effective_restarts(), 1);
    assert_eq!(config.swap_iterations, 5);
    assert_eq!(config.min_combat_score, Some(2.0));
    assert_eq!(config.restart_mode.as_str(), "parallel");
    assert!(config.validate().is_ok());
}
