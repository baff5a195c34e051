//! End-to-end runs of the binary against a wiremock service.
//!
//! The server runs on the test's tokio runtime; the binary is driven
//! synchronously with `--api-url` pointing at it.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn vidyamitra(api_url: &str) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vidyamitra").unwrap();
    cmd.arg("--api-url").arg(api_url);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn quiz_run_with_preset_answers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/quiz/generate"))
        .and(body_json(serde_json::json!({
            "domain": "algorithms",
            "difficulty": "medium",
            "num_questions": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "question": "Q1", "options": ["a", "b", "c"], "correct_index": 2},
            {"id": 2, "question": "Q2", "options": ["a", "b"], "correct_index": 0}
        ])))
        .mount(&server)
        .await;

    // --answers 3,0 is 1-based with 0 = skip: slot 0 carries option index 2,
    // slot 1 stays the -1 sentinel
    Mock::given(method("POST"))
        .and(path("/api/quiz/submit"))
        .and(body_json(serde_json::json!({"answers": [2, -1]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": 1, "total": 2, "feedback": "Review the explanations and try again."
        })))
        .mount(&server)
        .await;

    let api_url = format!("{}/api", server.uri());
    tokio::task::spawn_blocking(move || {
        vidyamitra(&api_url)
            .arg("quiz")
            .arg("--domain")
            .arg("algorithms")
            .arg("--count")
            .arg("2")
            .arg("--answers")
            .arg("3,0")
            .assert()
            .success()
            .stdout(predicate::str::contains("Score: 1/2"))
            .stdout(predicate::str::contains("Review the explanations"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn interview_run_renders_the_score_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interview/start"))
        .and(body_json(serde_json::json!({
            "target_role": "Data Analyst",
            "experience_years": 1.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "question": "Q1"},
            {"id": 2, "question": "Q2", "hint": "Think SQL."},
            {"id": 3, "question": "Q3"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/interview/feedback"))
        .and(body_json(serde_json::json!([
            {"question_id": 1, "answer": ""},
            {"question_id": 2, "answer": "I'd use SQL window functions"},
            {"question_id": 3, "answer": ""}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "score": 7,
            "strengths": ["Concrete tooling knowledge"],
            "improvements": ["Cover the other questions"]
        })))
        .mount(&server)
        .await;

    let api_url = format!("{}/api", server.uri());
    tokio::task::spawn_blocking(move || {
        vidyamitra(&api_url)
            .arg("interview")
            .arg("--role")
            .arg("Data Analyst")
            .arg("--years")
            .arg("1")
            .arg("--answer")
            .arg("")
            .arg("--answer")
            .arg("I'd use SQL window functions")
            .assert()
            .success()
            .stdout(predicate::str::contains("Score: 7/10"))
            .stdout(predicate::str::contains("Concrete tooling knowledge"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn progress_renders_a_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {"module": "Quizzes", "completed": 3, "total": 10},
                {"module": "Mock Interviews", "completed": 1, "total": 4}
            ]
        })))
        .mount(&server)
        .await;

    let api_url = format!("{}/api", server.uri());
    tokio::task::spawn_blocking(move || {
        vidyamitra(&api_url)
            .arg("progress")
            .assert()
            .success()
            .stdout(predicate::str::contains("Quizzes"))
            .stdout(predicate::str::contains("Mock Interviews"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn service_failure_surfaces_the_operation_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/progress"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api_url = format!("{}/api", server.uri());
    tokio::task::spawn_blocking(move || {
        vidyamitra(&api_url)
            .arg("progress")
            .assert()
            .failure()
            .stderr(predicate::str::contains("progress lookup failed (HTTP 500)"));
    })
    .await
    .unwrap();
}
