// system-tests/tests/suites/operations.rs
// ============================================================================
// Module: Operations Tests
// Description: Record lifecycle coverage for create and list operations.
// Purpose: Ensure the probe observes the documented record invariants.
// Dependencies: system-tests helpers
// ============================================================================

//! Record lifecycle tests for status-probe system-tests.

use status_probe_core::CheckId;
use status_probe_core::RunContext;
use status_probe_core::StatusApi;
use status_probe_core::StatusCheckCreate;
use status_probe_core::SuiteRunner;

use crate::helpers;
use helpers::artifacts::TestReporter;
use helpers::backend_stub::spawn_backend_stub;
use helpers::readiness::wait_for_backend_ready;
use helpers::timeouts;

#[tokio::test(flavor = "multi_thread")]
async fn create_echoes_name_and_listing_contains_ids() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_backend_stub().await?;
    let timeout = timeouts::resolve_timeout(timeouts::DEFAULT_REQUEST_TIMEOUT)?;
    let client = stub.client(timeout)?;
    wait_for_backend_ready(&client, timeout).await?;

    let first = client.create_status_check(&StatusCheckCreate::new("probe_client_ops_a")?).await?;
    first.validate()?;
    if first.client_name != "probe_client_ops_a" {
        return Err(format!("echoed client_name mismatch: {}", first.client_name).into());
    }

    let second = client.create_status_check(&StatusCheckCreate::new("probe_client_ops_b")?).await?;
    second.validate()?;
    if first.id == second.id {
        return Err(format!("expected distinct ids, both were {}", first.id).into());
    }
    if second.parsed_timestamp()? < first.parsed_timestamp()? {
        return Err("timestamps must be non-decreasing with insertion order".into());
    }

    let listing = client.list_status_checks().await?;
    for created in [&first, &second] {
        if !listing.iter().any(|record| record.id == created.id) {
            return Err(format!("created id {} absent from listing", created.id).into());
        }
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn full_suite_passes_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("full_suite_passes_end_to_end")?;
    let stub = spawn_backend_stub().await?;
    let timeout = timeouts::resolve_timeout(timeouts::DEFAULT_REQUEST_TIMEOUT)?;
    let client = stub.client(timeout)?;
    wait_for_backend_ready(&client, timeout).await?;

    let ctx = RunContext::new("probe_client_ops_suite")?;
    let report = SuiteRunner::new(stub.base_url()).run(&client, &ctx).await;
    reporter.artifacts().write_json("probe_report.json", &report)?;

    if !report.passed() {
        return Err(format!("expected a passing report, {} checks failed", report.failure_count())
            .into());
    }
    let order: Vec<CheckId> = report.outcomes.iter().map(|outcome| outcome.check).collect();
    if order != CheckId::ordered().to_vec() {
        return Err("checks ran out of order".into());
    }
    let created_id = report.created_id.clone().ok_or("create check captured no id")?;
    if !stub.records().iter().any(|record| record.id == created_id) {
        return Err(format!("captured id {created_id} missing from the stub store").into());
    }

    reporter.finish("pass", vec!["all four checks passed against the stub".to_string()])?;
    drop(reporter);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn acme_corp_scenario_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let stub = spawn_backend_stub().await?;
    let timeout = timeouts::resolve_timeout(timeouts::DEFAULT_REQUEST_TIMEOUT)?;
    let client = stub.client(timeout)?;
    wait_for_backend_ready(&client, timeout).await?;

    let created = client.create_status_check(&StatusCheckCreate::new("acme_corp")?).await?;
    if created.id.trim().is_empty() {
        return Err("created record carries an empty id".into());
    }
    let listing = client.list_status_checks().await?;
    if !listing.iter().any(|record| record.id == created.id) {
        return Err(format!("id {} absent from subsequent listing", created.id).into());
    }
    Ok(())
}
