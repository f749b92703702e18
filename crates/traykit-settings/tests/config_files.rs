use tempfile::tempdir;
use traykit_settings::{Config, OutputFormat, SettingsError};

fn custom_config() -> Config {
    let mut config = Config::new();
    config.tray.sx = vec![40.0, 60.0, 40.0];
    config.tray.hi = Some(90.0);
    config.tray.front = 0.3;
    config.tray.finger_joint.play = 0.05;
    config.output.format = OutputFormat::Gcode;
    config.output.gcode.laser_passes = 2;
    config
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tray.json");
    let config = custom_config();

    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tray.toml");
    let config = custom_config();

    config.save_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[tray]"));
    assert!(text.contains("format = \"gcode\""));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    let mut config = Config::new();
    config.tray.sx.clear();

    assert!(matches!(
        config.save_to_file(&path),
        Err(SettingsError::Parameter(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"tray": {"y": -5}}"#).unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Parameter(_))
    ));

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::IoError(_))
    ));
}
