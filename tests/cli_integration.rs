//! End-to-end tests running the `power-advisor` binary.

use std::fs;
use std::process::{Command, Output};

use serde_json::Value;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_power-advisor"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("power-advisor process should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn battery_json_output() {
    let output = run(&[
        "--format", "json", "battery", "--select", "lights=4", "--select", "fans=2", "--hours",
        "4", "--quote",
    ]);
    assert!(output.status.success(), "{output:?}");

    let json: Value = serde_json::from_str(&stdout(&output)).expect("output should be JSON");
    assert_eq!(json["recommendation"]["required_battery_ah"], 163);
    assert_eq!(json["recommendation"]["band"], "mid");
    assert!(json["quote"]["mailto"].as_str().is_some());
}

#[test]
fn solar_text_report() {
    let output = run(&["solar", "--bill", "5000", "--roof", "500"]);
    assert!(output.status.success(), "{output:?}");

    let text = stdout(&output);
    assert!(text.contains("5 kW"), "{text}");
    assert!(text.contains("pay for itself in about 6.9 years"), "{text}");
}

#[test]
fn sweep_solar_writes_csv() {
    let path = std::env::temp_dir().join(format!("power-advisor-sweep-{}.csv", std::process::id()));
    let path_str = path.to_str().expect("temp path is UTF-8");

    let output = run(&[
        "sweep-solar", "--from", "2000", "--to", "4000", "--step", "1000", "--out", path_str,
    ]);
    assert!(output.status.success(), "{output:?}");

    let csv = fs::read_to_string(&path).expect("CSV should be written");
    fs::remove_file(&path).ok();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("installation_type,goal,monthly_bill"));
}

#[test]
fn sweep_with_too_many_points_fails() {
    let output = run(&["sweep-battery", "--select", "tv=1", "--step", "1e-300"]);
    assert!(!output.status.success());
}

#[test]
fn sweep_solar_rejects_negative_roof() {
    let output = run(&["sweep-solar", "--roof=-5"]);
    assert!(!output.status.success());
}

#[test]
fn unknown_appliance_fails() {
    let output = run(&["battery", "--select", "heater=1"]);
    assert!(!output.status.success());
}

#[test]
fn invalid_config_fails() {
    let path =
        std::env::temp_dir().join(format!("power-advisor-bad-{}.toml", std::process::id()));
    fs::write(&path, "[solar]\nrate_per_unit = 0.0\n").expect("temp config should be written");

    let output = run(&[
        "--config",
        path.to_str().expect("temp path is UTF-8"),
        "solar",
        "--bill",
        "5000",
    ]);
    fs::remove_file(&path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("solar.rate_per_unit"), "{stderr}");
}
