//! Loading gameplay configs from disk

use ironsight::prelude::*;
use std::path::PathBuf;

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ironsight-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_toml_file() {
    let path = temp_file(
        "arena.toml",
        r#"
        seed = 42

        [enemy]
        max_health = 300.0
        stun_chance = 0.0

        [player]
        item_pickup_radius = 200.0
        "#,
    );

    let config = GameplayConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.seed, 42);
    assert_eq!(config.enemy.max_health, 300.0);
    assert_eq!(config.enemy.stun_chance, 0.0);
    assert_eq!(config.player.item_pickup_radius, 200.0);
    // Untouched sections keep their defaults
    assert_eq!(config.player.max_health, 100.0);
    assert_eq!(config.explosive, ExplosiveConfig::default());
}

#[test]
fn test_load_json_file() {
    let path = temp_file("arena.json", r#"{ "seed": 9, "explosive": { "damage": 55.0 } }"#);

    let config = GameplayConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.seed, 9);
    assert_eq!(config.explosive.damage, 55.0);
    assert_eq!(config.explosive.radius, ExplosiveConfig::default().radius);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let path = temp_file("arena.yaml", "seed: 1");

    let err = GameplayConfig::load_from_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ConfigError::UnsupportedExtension(ext) if ext == "yaml"));
}

#[test]
fn test_missing_file_reports_path() {
    let path = std::env::temp_dir().join("ironsight-does-not-exist.toml");

    let err = GameplayConfig::load_from_file(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert!(reported.ends_with("ironsight-does-not-exist.toml")),
        other => panic!("expected an io error, got {other}"),
    }
}

#[test]
fn test_malformed_json_is_an_error() {
    let path = temp_file("broken.json", "{ \"seed\": ");

    let err = GameplayConfig::load_from_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ConfigError::Json(_)));
}
