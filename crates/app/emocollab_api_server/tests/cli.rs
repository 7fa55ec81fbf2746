use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_flags() {
    Command::cargo_bin("emocollab_api_server")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--strict-user-id"));
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("emocollab_api_server")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_fails() {
    Command::cargo_bin("emocollab_api_server")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure();
}
