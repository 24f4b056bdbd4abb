// system-tests/tests/suites/support.rs
// ============================================================================
// Module: Harness Support Tests
// Description: Checks on the stub, fixture guard, and artifact writers.
// Purpose: Keep the suite's own plumbing honest before trusting its verdicts.
// Dependencies: system-tests helpers, reservation-client, tempfile
// ============================================================================

use std::error::Error;
use std::fs;
use std::time::Duration;

use helpers::artifacts::TRANSCRIPT_FILE;
use helpers::artifacts::TestArtifacts;
use helpers::artifacts::TestReporter;
use helpers::assertions::require_eq;
use helpers::fixture::CitizenFixture;
use helpers::service_stub::spawn_service_stub;
use reservation_client::ReservationClient;
use reservation_client::ReservationRecord;
use serde_json::Value;
use tempfile::TempDir;

use crate::helpers;

#[test]
fn stub_reset_of_unknown_citizen_is_not_found() -> Result<(), Box<dyn Error>> {
    let stub = spawn_service_stub()?;
    let client = ReservationClient::new(stub.base_url(), Duration::from_secs(5))?;

    let status = client.reset_citizen(&ReservationRecord::default())?;

    require_eq(&status, &404, "reset of unknown citizen")?;
    require_eq(&stub.requests().len(), &1, "stub request count")
}

#[test]
fn fixture_guard_resets_on_drop() -> Result<(), Box<dyn Error>> {
    let stub = spawn_service_stub()?;
    let client = ReservationClient::new(stub.base_url(), Duration::from_secs(5))?;

    drop(CitizenFixture::reset(&client)?);

    let methods: Vec<String> =
        stub.requests().into_iter().map(|request| request.method).collect();
    require_eq(&methods, &vec!["DELETE".to_string(), "DELETE".to_string()], "reset calls")
}

#[test]
fn reporter_writes_summary_and_transcript() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let stub = spawn_service_stub()?;
    let client = ReservationClient::new(stub.base_url(), Duration::from_secs(5))?;
    let artifacts = TestArtifacts::at(dir.path().join("case"), false)?;
    let mut reporter = TestReporter::with_artifacts(artifacts, "case", stub.base_url());
    reporter.watch(&client);

    client.reset_citizen(&ReservationRecord::default())?;
    reporter.finish("pass", vec!["ok".to_string()])?;

    let root = dir.path().join("case");
    let summary: Value = serde_json::from_slice(&fs::read(root.join("summary.json"))?)?;
    require_eq(&summary["status"], &Value::from("pass"), "summary status")?;
    require_eq(&summary["started_at_ms"].is_u64(), &true, "numeric start time")?;
    let transcript: Value = serde_json::from_slice(&fs::read(root.join(TRANSCRIPT_FILE))?)?;
    require_eq(&transcript[0]["path"], &Value::from("/citizen"), "transcript path")?;
    require_eq(&root.join("summary.md").is_file(), &true, "markdown summary")
}

#[test]
fn reporter_marks_unfinished_runs() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("case"), false)?;
    drop(TestReporter::with_artifacts(artifacts, "case", "stub"));

    let summary: Value =
        serde_json::from_slice(&fs::read(dir.path().join("case").join("summary.json"))?)?;
    require_eq(&summary["status"], &Value::from("unknown"), "summary status")
}

#[test]
fn reporter_records_failed_cases() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("case"), false)?;
    let mut reporter = TestReporter::with_artifacts(artifacts, "case", "stub");

    let outcome = reporter.conclude(Err("feedback mismatch".into()));
    require_eq(&outcome.is_err(), &true, "case error returned")?;

    let summary: Value =
        serde_json::from_slice(&fs::read(dir.path().join("case").join("summary.json"))?)?;
    require_eq(&summary["status"], &Value::from("fail"), "summary status")?;
    require_eq(&summary["notes"][0], &Value::from("feedback mismatch"), "failure note")?;
    require_eq(&summary["duration_ms"].is_u64(), &true, "numeric duration")
}

#[test]
fn artifact_root_requires_overwrite_flag() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let root = dir.path().join("case");
    TestArtifacts::at(root.clone(), false)?.write_text("note.txt", "x")?;

    require_eq(&TestArtifacts::at(root.clone(), false).is_err(), &true, "reuse without flag")?;
    require_eq(&TestArtifacts::at(root, true).is_ok(), &true, "reuse with flag")
}
