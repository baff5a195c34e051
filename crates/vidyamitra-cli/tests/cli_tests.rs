//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn vidyamitra() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("vidyamitra").unwrap()
}

#[test]
fn help_output() {
    vidyamitra()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Career assessment client"))
        .stdout(predicate::str::contains("quiz"))
        .stdout(predicate::str::contains("interview"));
}

#[test]
fn version_output() {
    vidyamitra()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vidyamitra"));
}

#[test]
fn quiz_requires_a_domain() {
    vidyamitra().arg("quiz").assert().failure();
}

#[test]
fn quiz_rejects_out_of_range_count_before_any_request() {
    vidyamitra()
        .arg("quiz")
        .arg("--domain")
        .arg("rust")
        .arg("--count")
        .arg("11")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 10"));
}

#[test]
fn quiz_rejects_unknown_difficulty() {
    vidyamitra()
        .arg("quiz")
        .arg("--domain")
        .arg("rust")
        .arg("--difficulty")
        .arg("expert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty"));
}

#[test]
fn interview_rejects_negative_experience() {
    vidyamitra()
        .arg("interview")
        .arg("--role")
        .arg("Data Analyst")
        .arg("--years=-2")
        .arg("--answer")
        .arg("something")
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero or more"));
}

#[test]
fn resume_requires_a_readable_file() {
    vidyamitra()
        .arg("resume")
        .arg("--file")
        .arg("no_such_resume.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read resume file"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    vidyamitra()
        .arg("--config")
        .arg("/nonexistent/vidyamitra.toml")
        .arg("progress")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
