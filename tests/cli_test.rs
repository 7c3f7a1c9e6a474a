//! Tests for the `kitty-plot` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn kitty_plot() -> Command {
    let mut cmd = Command::cargo_bin("kitty-plot").unwrap();
    cmd.env_remove("MPLBACKEND_KITTY_SIZING")
        .env_remove("MPLBACKEND_KITTY_ICAT")
        .env_remove("RUST_LOG");
    cmd
}

fn ihdr_size(png: &[u8]) -> (u32, u32) {
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (width, height)
}

#[rstest]
#[case("line")]
#[case("scatter")]
#[case("bars")]
fn test_demo_to_stdout(#[case] demo: &str) {
    let output = kitty_plot().args([demo, "--stdout"]).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.starts_with(PNG_SIGNATURE));
    assert_eq!(ihdr_size(&output.stdout), (640, 480));
}

#[test]
fn test_size_and_dpi() {
    let output = kitty_plot()
        .args(["bars", "--stdout", "--size", "2", "1", "--dpi", "50"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ihdr_size(&output.stdout), (100, 50));
}

#[test]
fn test_oversized_figure_fails_cleanly() {
    kitty_plot()
        .args(["line", "--stdout", "--size", "1e9", "1e9"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid figure size"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = kitty_plot()
        .args(["line", "--stdout", "--debug"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.starts_with(PNG_SIGNATURE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("kitty-plot"));
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sizing = \"manual\"").unwrap();
    writeln!(file, "icat = \"cat\"").unwrap();

    kitty_plot()
        .args(["line", "--stdout", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::function(|out: &[u8]| out.starts_with(PNG_SIGNATURE)));
}

#[test]
fn test_bad_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sizing = \"sideways\"").unwrap();

    kitty_plot()
        .args(["line", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[cfg(unix)]
#[test]
fn test_image_command_receives_png() {
    // the image command copies its stdin to the test's stdout
    kitty_plot()
        .args(["scatter", "--manual"])
        .env("MPLBACKEND_KITTY_ICAT", "cat")
        .assert()
        .success()
        .stdout(predicate::function(|out: &[u8]| out.starts_with(PNG_SIGNATURE)));
}

#[test]
fn test_missing_image_command_fails() {
    kitty_plot()
        .args(["line", "--manual"])
        .env("MPLBACKEND_KITTY_ICAT", "no-such-icat-8c1d")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not display"));
}

#[test]
fn test_unknown_demo() {
    kitty_plot()
        .arg("pie")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_version() {
    kitty_plot()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
