//! Proctored-exam result export
//!
//! Single-pass export of exam-attempt records. The task input's `features`
//! list selects and orders the report columns; attempt records missing a
//! requested feature render an empty cell.

use crate::adapters::sources::ExamResultsSource;
use crate::core::jobs::{fail_job, JobContext, JobOutcome, PROCTORED_EXAM_REPORT};
use crate::domain::ReportTable;
use chrono::Utc;

/// Runs the proctored-exam export job
pub async fn run(ctx: &JobContext, source: &dyn ExamResultsSource) -> JobOutcome {
    let start_date = Utc::now();
    let num_reports = 1;
    let mut progress = ctx.progress(num_reports);

    progress
        .report("Calculating info about proctored exam results in a course")
        .await;

    let features = &ctx.input.features;
    let records = match source
        .proctored_exam_results(&ctx.course_id, features)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(
                course_id = %ctx.course_id,
                error = %e,
                "Failed to query proctored exam results"
            );
            return fail_job(&mut progress, "Error while collecting data").await;
        }
    };

    let table = ReportTable::from_records(&records, features);

    progress.attempted = table.row_count() as u64;
    progress.succeeded = progress.attempted;
    progress.skipped = progress.total.saturating_sub(progress.attempted);

    progress.report("Uploading CSV").await;

    let location = match ctx
        .report_store
        .upload(&table, PROCTORED_EXAM_REPORT, &ctx.course_id, start_date)
        .await
    {
        Ok(location) => location,
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    let counters = progress.report("Uploading CSV").await;
    JobOutcome::succeeded(counters, Some(location))
}
