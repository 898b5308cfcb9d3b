//! Integration tests for the pinflags binary.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temporary project directory holding `device_config.ini`.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create fixture dir");
        std::fs::write(dir.path().join("device_config.ini"), contents).expect("write fixture");
        Self { dir }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("device_config.ini")
    }

    fn arg(&self) -> String {
        self.config().to_string_lossy().into_owned()
    }
}

fn pinflags(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pinflags"))
        .args(args)
        .env_remove("PINFLAGS_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute pinflags")
}

const BOARD: &str = "[Switch_2]\nrelay_pin=5\nphysical_pin=9\n[Switch_1]\nrelay_pin=1\nphysical_pin=2\n";

#[test]
fn generate_defaults_to_space_separated() {
    let fixture = Fixture::new(BOARD);
    let output = pinflags(&["--config", &fixture.arg()]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "-DSWITCH_1_RELAY_PIN_INDEX=1 -DSWITCH_1_PHYSICAL_DEVICE_PIN_INDEX=2 \
         -DSWITCH_2_RELAY_PIN_INDEX=5 -DSWITCH_2_PHYSICAL_DEVICE_PIN_INDEX=9\n"
    );
}

#[test]
fn generate_pio_is_newline_separated() {
    let fixture = Fixture::new(BOARD);
    let output = pinflags(&["--config", &fixture.arg(), "generate", "pio"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert_eq!(stdout.lines().next(), Some("-DSWITCH_1_RELAY_PIN_INDEX=1"));
}

#[test]
fn generate_writes_output_file() {
    let fixture = Fixture::new(BOARD);
    let target = fixture.dir.path().join("flags.txt");
    let output = pinflags(&[
        "--config",
        &fixture.arg(),
        "generate",
        "cmake",
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("-DSWITCH_1_RELAY_PIN_INDEX=1 "));
}

#[test]
fn missing_config_still_succeeds() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = dir.path().join("absent.ini");
    let output = pinflags(&["--config", config.to_str().unwrap(), "generate"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no device macros will be generated"));
}

#[test]
fn warnings_go_to_stderr_only() {
    let fixture = Fixture::new("[Switch_1]\nrelay_pin=3\n");
    let output = pinflags(&["--config", &fixture.arg()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Switch_1"));
}

#[test]
fn validate_reports_problems() {
    let clean = Fixture::new(BOARD);
    let output = pinflags(&["--config", &clean.arg(), "validate"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));

    let broken = Fixture::new("[Switch_x]\nrelay_pin=1\nphysical_pin=1\n");
    let output = pinflags(&["--config", &broken.arg(), "validate"]);
    assert!(!output.status.success());
}

#[test]
fn list_prints_json() {
    let fixture = Fixture::new(BOARD);
    let output = pinflags(&["--config", &fixture.arg(), "list", "--kind", "switch"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"kind\": \"switch\""));
    assert!(stdout.contains("\"relay_pin\": 5"));
}
