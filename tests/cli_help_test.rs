// CLI surface tests: the no-argument overview and the help output must name
// the commands inspectors actually use. No network access is involved.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_no_arguments_shows_overview() {
    let mut cmd = Command::cargo_bin("inspection-desk").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Inspection Desk"))
        .stdout(predicate::str::contains("inspection-desk worklist"))
        .stdout(predicate::str::contains("inspection-desk verify"))
        .stdout(predicate::str::contains("inspection-desk status"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("inspection-desk").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("worklist"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_worklist_help_documents_role_and_filter() {
    let mut cmd = Command::cargo_bin("inspection-desk").unwrap();

    cmd.args(["worklist", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--role"))
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("registration"));
}

#[test]
fn test_verify_requires_contract_id() {
    let mut cmd = Command::cargo_bin("inspection-desk").unwrap();

    cmd.arg("verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONTRACT_ID"));
}
