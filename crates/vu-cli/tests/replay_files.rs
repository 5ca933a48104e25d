//! # Replay From Files
//!
//! Drives config and script loading through real files, the way `vu replay
//! --config vu.yaml script.yaml` does.

use std::io::Write;

use serde_json::{json, Value};
use vu_cli::config::{LogFormat, VuConfig};
use vu_cli::replay::{Replay, Script};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn replay_lines(config: &VuConfig, script: &Script) -> Vec<Value> {
    let mut out = Vec::new();
    Replay::new(config.clock.clone())
        .run(script, &mut out)
        .expect("replay should succeed");
    String::from_utf8(out)
        .expect("utf-8 output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[test]
fn non_transferable_license_scenario_from_files() {
    let config = write_temp("log:\n  format: json\nclock:\n  fixed_epoch_millis: 1000\n");
    let script = write_temp(
        r#"
steps:
  - op: issue_license
    universe_id: 9
    recipient: holder
    duration_secs: 5
    transferable: false
  - op: transfer_license
    license_id: 1
    new_owner: someone-else
  - op: get_license
    license_id: 1
  - op: transfer_license
    license_id: 2
    new_owner: nobody
"#,
    );

    let config = VuConfig::load(config.path()).expect("config loads");
    assert_eq!(config.log.format, LogFormat::Json);
    let script = Script::load(script.path()).expect("script loads");

    let lines = replay_lines(&config, &script);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["output"], json!({ "success": true, "result": 1 }));
    assert_eq!(lines[1]["output"], json!({ "success": false }));
    assert_eq!(
        lines[2]["output"],
        json!({
            "universe_id": 9,
            "owner": "holder",
            "expiration": 6000,
            "transferable": false,
        })
    );
    assert_eq!(lines[3]["output"], json!({ "success": false }));
}

#[test]
fn reports_are_stamped_with_the_fixed_clock() {
    let config = write_temp("clock:\n  fixed_epoch_millis: 1768478400000\n");
    let script = write_temp(
        r#"
steps:
  - op: submit_stability_report
    universe_id: 1
    stability_score: 95
    issues:
      - Minor fluctuations in gravity
  - op: get_stability_report
    report_id: 1
  - op: latest_stability_score
    universe_id: 2
"#,
    );

    let config = VuConfig::load(config.path()).expect("config loads");
    let script = Script::load(script.path()).expect("script loads");
    let lines = replay_lines(&config, &script);

    assert_eq!(
        lines[1]["output"],
        json!({
            "universe_id": 1,
            "timestamp": 1_768_478_400_000i64,
            "stability_score": 95.0,
            "issues": ["Minor fluctuations in gravity"],
        })
    );
    assert_eq!(lines[2]["output"], json!(0.0));
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.yaml");
    assert!(VuConfig::load(&missing).is_err());
}

#[test]
fn malformed_script_is_an_error() {
    let script = write_temp("steps:\n  - op: issue_license\n    universe_id: one\n");
    assert!(Script::load(script.path()).is_err());
}
