// system-tests/tests/integration/performance.rs
// ============================================================================
// Module: Performance Tests
// Description: Latency gates for health and PDF transfer endpoints.
// Purpose: Fail when responses exceed the configured latency budget.
// Dependencies: system-tests helpers
// ============================================================================

use std::time::Duration;

use helpers::fixtures::minimal_pdf;
use helpers::harness::CaseResult;
use helpers::harness::Suite;
use helpers::harness::TestContext;
use helpers::harness::run_suite_case;
use tracing::info;

use crate::helpers;

/// Health probes sampled per run.
const HEALTH_SAMPLES: usize = 20;

/// Returns the slowest sample.
fn slowest(samples: &[Duration]) -> Duration {
    samples.iter().copied().max().unwrap_or_default()
}

fn check_budget(label: &str, observed: Duration, budget: Duration) -> CaseResult {
    if observed > budget {
        return Err(format!(
            "{label} took {}ms, budget is {}ms",
            observed.as_millis(),
            budget.as_millis()
        )
        .into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn health_latency_within_budget() -> CaseResult {
    run_suite_case(Suite::Performance, "health_latency_within_budget", health_latency_case).await
}

async fn health_latency_case(ctx: TestContext) -> CaseResult {
    let mut samples = Vec::with_capacity(HEALTH_SAMPLES);
    for _ in 0 .. HEALTH_SAMPLES {
        let response = ctx.client.health(None).await?;
        response.expect_success()?;
        samples.push(response.elapsed);
    }
    let total: Duration = samples.iter().sum();
    let average = total / u32::try_from(samples.len()).unwrap_or(1);
    info!(
        average_ms = average.as_millis(),
        max_ms = slowest(&samples).as_millis(),
        "health latency"
    );
    check_budget("average health check", average, ctx.settings.perf_max_response)?;
    check_budget("slowest health check", slowest(&samples), ctx.settings.perf_max_response)
}

#[tokio::test(flavor = "multi_thread")]
async fn pdf_transfer_latency_within_budget() -> CaseResult {
    run_suite_case(Suite::Performance, "pdf_transfer_latency_within_budget", pdf_transfer_case)
        .await
}

async fn pdf_transfer_case(ctx: TestContext) -> CaseResult {
    let budget = ctx.settings.perf_max_response;
    let bytes = minimal_pdf(10, "performance");

    let upload = ctx.client.upload("performance.pdf", "application/pdf", &bytes).await?;
    upload.expect_success()?;
    check_budget("upload", upload.elapsed, budget)?;
    let file_id = ctx
        .client
        .tracked_uploads()
        .pop()
        .ok_or("upload succeeded but was not tracked")?;

    let download = ctx.client.download(&file_id).await?;
    download.expect_success()?;
    check_budget("download", download.elapsed, budget)?;

    let metadata = ctx.client.metadata(&file_id).await?;
    metadata.expect_success()?;
    check_budget("metadata", metadata.elapsed, budget)
}
