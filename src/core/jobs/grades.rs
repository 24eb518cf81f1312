//! Assignment-grade export and remote posting
//!
//! Two variants over the same grade datatable. The export variant uploads
//! the table to the report store; the post variant serializes it to an
//! in-memory CSV and submits it to the remote gradebook. A submission the
//! gradebook rejects fails the whole job with the server's message as the
//! terminal step label.

use crate::adapters::gradebook::GradebookClient;
use crate::adapters::sources::GradeSource;
use crate::core::csv::encode_table;
use crate::core::jobs::{fail_job, JobContext, JobOutcome, GRADES_REPORT};
use crate::core::progress::TaskProgress;
use crate::domain::ReportTable;
use chrono::Utc;

/// The gradebook action that receives posted grade files
const POST_GRADES_ACTION: &str = "post-grades";

/// Runs the grade-export job
pub async fn run_export(ctx: &JobContext, source: &dyn GradeSource) -> JobOutcome {
    let start_date = Utc::now();
    let num_reports = 1;
    let mut progress = ctx.progress(num_reports);

    let table = match load_datatable(ctx, source, &mut progress).await {
        Ok(table) => table,
        Err(outcome) => return outcome,
    };

    progress.report("Uploading CSV").await;

    let location = match ctx
        .report_store
        .upload(&table, GRADES_REPORT, &ctx.course_id, start_date)
        .await
    {
        Ok(location) => location,
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    let counters = progress.report("Uploaded CSV").await;
    JobOutcome::succeeded(counters, Some(location))
}

/// Runs the grade-posting job against the remote gradebook
pub async fn run_post(
    ctx: &JobContext,
    source: &dyn GradeSource,
    gradebook: &dyn GradebookClient,
) -> JobOutcome {
    let num_reports = 1;
    let mut progress = ctx.progress(num_reports);

    let endpoint_id = match ctx.input.required("endpoint_id") {
        Ok(endpoint_id) => endpoint_id.to_string(),
        Err(_) => return fail_job(&mut progress, "Error, gradebook endpoint missing").await,
    };

    let table = match load_datatable(ctx, source, &mut progress).await {
        Ok(table) => table,
        Err(outcome) => return outcome,
    };

    progress.report("Uploading CSV").await;

    let csv_bytes = match encode_table(&table) {
        Ok(bytes) => bytes,
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    let response = match gradebook
        .post_datafile(
            &endpoint_id,
            &ctx.course_id,
            POST_GRADES_ACTION,
            "grades.csv",
            csv_bytes,
        )
        .await
    {
        Ok(response) => response,
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    if let Some(error_message) = response.error_message {
        return fail_job(&mut progress, &error_message).await;
    }

    let counters = progress.report("Posted to remote gradebook").await;
    JobOutcome::succeeded(counters, None)
}

/// Shared front half of both variants: validate the assignment name, load
/// the datatable, and settle the counters.
async fn load_datatable(
    ctx: &JobContext,
    source: &dyn GradeSource,
    progress: &mut TaskProgress,
) -> Result<ReportTable, JobOutcome> {
    let assignment_name = match ctx.input.required("assignment_name") {
        Ok(assignment_name) => assignment_name.to_string(),
        Err(_) => return Err(fail_job(progress, "Error, assignment name missing").await),
    };

    progress.report("Loading grades").await;

    let table = match source
        .assignment_grade_datatable(&ctx.course_id, &assignment_name)
        .await
    {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(
                course_id = %ctx.course_id,
                assignment = %assignment_name,
                error = %e,
                "Failed to load grade datatable"
            );
            return Err(fail_job(progress, "Error while collecting data").await);
        }
    };

    progress.attempted = table.row_count() as u64;
    progress.succeeded = progress.attempted;
    progress.skipped = progress.total.saturating_sub(progress.attempted);

    Ok(table)
}
