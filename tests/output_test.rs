// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! File output of the best suite and JSON configuration round trips.

use aetg_search::config::GeneratorConfig;
use aetg_search::output::write_suite_to_path;
use aetg_search::trials::run_trials;
use aetg_search::AetgError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_best_suite_written_in_persisted_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("suite.txt");

    let mut config = GeneratorConfig::new(4, 3);
    config.seed = Some(8);
    config.trials = 2;
    let summary = run_trials(&config).unwrap();
    write_suite_to_path(&path, &summary.best).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(summary.best_size.to_string().as_str()));
    assert_eq!(lines.next(), Some(""));
    let rows: Vec<Vec<u32>> = lines
        .map(|line| line.split(' ').map(|id| id.parse().unwrap()).collect())
        .collect();
    assert_eq!(rows.len(), summary.best_size);
    for (row, case) in rows.iter().zip(&summary.best) {
        assert_eq!(row.len(), 4);
        let expected: Vec<u32> = case.levels().map(|level| level.value()).collect();
        assert_eq!(row, &expected);
    }
    // Seed rows come first.
    assert_eq!(rows[0], vec![0, 3, 6, 9]);
    assert_eq!(rows[1], vec![2, 5, 8, 11]);
}

#[test]
fn test_config_loaded_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "factors": 5, "levels": 2, "strength": 2, "candidates": 20, "seed": 3 }"#,
    )
    .unwrap();

    let config = GeneratorConfig::from_path(&path).unwrap();
    assert_eq!(config.factors, 5);
    assert_eq!(config.candidates, 20);
    assert_eq!(config.trials, 1);

    let written = temp_dir.path().join("written.json");
    fs::write(&written, serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(GeneratorConfig::from_path(&written).unwrap(), config);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = GeneratorConfig::from_path(temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(AetgError::Io(_))));
}
