use photogenic::config::{ColorMetric, ConfigManager, CrossoverMethod, SelectionMethod};
use photogenic::PhotogenicError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_then_load_restores_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photogenic.toml");

    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.evolution.population_size = 250;
            c.evolution.color_count = 32;
            c.evolution.selection_method = SelectionMethod::Rank;
            c.evolution.crossover_method = CrossoverMethod::Uniform;
            c.evolution.color_metric = ColorMetric::Cie2000;
            c.evolution.seed = Some(99);
            c.display.show_target = false;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = ConfigManager::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.get(), manager.get());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "[evolution]\ncolor_count = 12\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.color_count, 12);
    assert_eq!(config.evolution.population_size, 100);
    assert_eq!(config.display.bar_width, 10.0);
}

#[test]
fn test_invalid_file_keeps_previous_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[evolution]\nmutation_rate = 2.5\n").unwrap();

    let manager = ConfigManager::new();
    let before = manager.get();
    let result = manager.load_from_file(&path);

    assert!(matches!(result, Err(PhotogenicError::InvalidConfiguration(_))));
    assert_eq!(manager.get(), before);
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[evolution\n").unwrap();

    let result = ConfigManager::new().load_from_file(&path);
    assert!(matches!(result, Err(PhotogenicError::TomlDe(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = ConfigManager::new().load_from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(PhotogenicError::Io(_))));
}
