//! Open-response-assessment data export
//!
//! Single-shot job: one aggregation call produces the whole table, so the
//! progress total is one unit and the counters record whether that unit
//! succeeded or failed. Aggregation failure is fatal for the job and
//! surfaces as a FAILED terminal report.

use crate::adapters::sources::OraSource;
use crate::core::jobs::{fail_job, JobContext, JobOutcome, ORA_REPORT};
use chrono::Utc;

/// Runs the ORA data export job
pub async fn run(ctx: &JobContext, source: &dyn OraSource) -> JobOutcome {
    let start_date = Utc::now();

    tracing::info!(
        task_id = %ctx.task_id,
        course_id = %ctx.course_id,
        action = %ctx.action_name,
        "Starting ORA data export"
    );

    let mut progress = ctx.progress(1);
    progress.attempted = 1;

    progress.report("Collecting responses").await;

    let table = match source.collect_submissions(&ctx.course_id).await {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(
                task_id = %ctx.task_id,
                course_id = %ctx.course_id,
                error = %e,
                "Failed to collect ORA data"
            );
            return fail_job(&mut progress, "Error while collecting data").await;
        }
    };

    progress.succeeded = 1;
    progress.report("Uploading CSV").await;

    let location = match ctx
        .report_store
        .upload(&table, ORA_REPORT, &ctx.course_id, start_date)
        .await
    {
        Ok(location) => location,
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    let counters = progress.report("Finalizing ORA data report").await;

    tracing::info!(
        task_id = %ctx.task_id,
        course_id = %ctx.course_id,
        rows = table.row_count(),
        "ORA data upload complete"
    );

    JobOutcome::succeeded(counters, Some(location))
}
