//! Config file → session → trace, end to end.

use pidsim_common::config::ConfigError;
use pidsim_engine::SimulationSession;
use pidsim_engine::config::{GainOverrides, load_config};
use pidsim_engine::output::{TraceFormat, write_trace};
use std::fs;
use tempfile::TempDir;

#[test]
fn file_config_drives_session() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pidsim.toml");
    fs::write(
        &path,
        r#"
[simulation]
max_time = 1.0
delay_steps = 2

[gains]
kp = 1.0
"#,
    )
    .unwrap();

    let cfg = load_config(Some(&path), &GainOverrides::default()).unwrap();
    let mut session = SimulationSession::new(cfg.simulation).unwrap();
    let trace = session.on_params_changed(cfg.gains).unwrap();

    assert_eq!(trace.len(), 10);
    assert_eq!(trace.output()[1], 1.0);
    assert_eq!(trace.pose()[2], 0.0);
    assert!(trace.pose()[3] > 0.0);

    let mut csv = Vec::new();
    write_trace(trace, None, TraceFormat::Csv, &mut csv).unwrap();
    let text = String::from_utf8(csv).unwrap();
    assert_eq!(text.lines().count(), 11);
    assert!(text.starts_with("time,setpoint,pose,output\n0.0,0,0,0\n"));
}

#[test]
fn invalid_file_aborts_before_simulation() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("pidsim.toml");
    fs::write(&path, "[simulation]\ndt = -0.1\n").unwrap();

    let err = load_config(Some(&path), &GainOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn missing_file_reported() {
    let tmp = TempDir::new().unwrap();
    let err = load_config(
        Some(&tmp.path().join("nope.toml")),
        &GainOverrides::default(),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::FileNotFound);
}
