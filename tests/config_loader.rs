use rinkwatch::config::{Config, ConfigError, MAX_SLOTS};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.display.game_slots, 10);
    assert_eq!(config.display.event_slots, 6);
    assert_eq!(config.companion.poll_interval_seconds, 30);
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = write_config(
        r#"
[display]
game_slots = 4

[companion]
base_url = "http://localhost:9000/api/v1"
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.display.game_slots, 4);
    assert_eq!(config.display.event_slots, 6);
    assert_eq!(config.display.tick_ms, 250);
    assert_eq!(config.companion.base_url, "http://localhost:9000/api/v1");
    assert_eq!(config.companion.timeout_seconds, 10);
}

#[test]
fn zero_event_slots_is_allowed() {
    let file = write_config("[display]\nevent_slots = 0\n");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.display.event_slots, 0);
}

#[test]
fn too_many_slots_fails_validation() {
    let file = write_config(&format!("[display]\ngame_slots = {}\n", MAX_SLOTS + 1));
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("game_slots"));
}

#[test]
fn zero_poll_interval_fails_validation() {
    let file = write_config("[companion]\npoll_interval_seconds = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn blank_base_url_fails_validation() {
    let file = write_config("[companion]\nbase_url = \"  \"\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("[display\ngame_slots = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
