use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("meminspect")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("total and free system memory"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("meminspect")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("meminspect"));
}

#[test]
fn test_unknown_flag_fails() {
    cargo_bin_cmd!("meminspect")
        .arg("--interval")
        .assert()
        .failure();
}

// ============================================================================
// Banner Tests
// ============================================================================

#[test]
fn test_banner_reports_memory() {
    cargo_bin_cmd!("meminspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("GriCom Basic Compiler Runtime"))
        .stdout(predicate::str::contains("Maximum memory (Bytes):"))
        .stdout(predicate::str::contains("Free memory (Bytes):"));
}

#[test]
fn test_banner_total_is_numeric() {
    let output = cargo_bin_cmd!("meminspect").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let total = stdout
        .lines()
        .find_map(|l| l.split("Maximum memory (Bytes):").nth(1))
        .expect("banner should have a maximum memory line");
    let total: u64 = total.trim().parse().expect("total should be a number");
    assert!(total > 0);
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    cargo_bin_cmd!("meminspect")
        .arg("-vvv")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stdout(predicate::str::contains("TRACE").not());
}

#[test]
fn test_verbose_logs_reading_to_stderr() {
    cargo_bin_cmd!("meminspect")
        .arg("-v")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("memory read"));
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_is_valid() {
    let output = cargo_bin_cmd!("meminspect").arg("--json").output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let total = json["total_bytes"].as_u64().expect("total_bytes should be set");
    let free = json["free_bytes"].as_u64().expect("free_bytes should be set");
    assert!(total > 0);
    assert!(free <= total);
}

#[test]
fn test_json_output_has_no_banner() {
    cargo_bin_cmd!("meminspect")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("GriCom").not());
}
