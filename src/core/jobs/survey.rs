//! Survey result export
//!
//! Generates one report row per user who answered the course survey. The
//! column set is data-driven: every distinct survey field name seen for
//! the course becomes a column, sorted ascending, after the fixed
//! `User ID / User Name / Email` prefix. Users who skipped a field get an
//! empty cell.

use crate::adapters::sources::{SurveyAnswerRecord, SurveySource};
use crate::core::jobs::{fail_job, JobContext, JobOutcome, SURVEY_REPORT};
use crate::domain::{Cell, ReportTable};
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};

/// Runs the survey export job
pub async fn run(ctx: &JobContext, source: &dyn SurveySource) -> JobOutcome {
    let start_date = Utc::now();
    let num_reports = 1;
    let mut progress = ctx.progress(num_reports);

    progress
        .report("Gathering course survey report information")
        .await;

    let answers = match source.survey_answers(&ctx.course_id).await {
        Ok(answers) => answers,
        Err(e) => {
            tracing::error!(course_id = %ctx.course_id, error = %e, "Failed to query survey answers");
            return fail_job(&mut progress, "Error while collecting data").await;
        }
    };

    let table = build_survey_table(&answers);

    progress.attempted = table.row_count() as u64;
    progress.succeeded = progress.attempted;
    progress.skipped = progress.total.saturating_sub(progress.attempted);

    progress.report("Uploading CSV").await;

    let location = match ctx
        .report_store
        .upload(&table, SURVEY_REPORT, &ctx.course_id, start_date)
        .await
    {
        Ok(location) => location,
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    let counters = progress.report("Uploading CSV").await;
    JobOutcome::succeeded(counters, Some(location))
}

/// Shapes raw survey answers into the report table.
///
/// Answers are grouped per user in first-seen order; a later answer to the
/// same field overwrites the earlier one, matching how the survey stores
/// resubmissions.
pub fn build_survey_table(answers: &[SurveyAnswerRecord]) -> ReportTable {
    let survey_fields: BTreeSet<&str> = answers
        .iter()
        .map(|record| record.field_name.as_str())
        .collect();

    // Insertion-ordered grouping by user id.
    let mut user_order: Vec<i64> = Vec::new();
    let mut users: HashMap<i64, (&SurveyAnswerRecord, HashMap<&str, &str>)> = HashMap::new();

    for record in answers {
        let entry = users.entry(record.user_id).or_insert_with(|| {
            user_order.push(record.user_id);
            (record, HashMap::new())
        });
        entry
            .1
            .insert(record.field_name.as_str(), record.field_value.as_str());
    }

    let mut header = vec![
        "User ID".to_string(),
        "User Name".to_string(),
        "Email".to_string(),
    ];
    header.extend(survey_fields.iter().map(|field| field.to_string()));

    let mut table = ReportTable::new(header);
    for user_id in user_order {
        let (first_record, fields) = &users[&user_id];
        let mut row = vec![
            Cell::Int(user_id),
            Cell::from(first_record.username.as_str()),
            Cell::from(first_record.email.as_str()),
        ];
        for field in &survey_fields {
            row.push(Cell::from(fields.get(field).copied().unwrap_or("")));
        }
        table.push_row(row);
    }
    table
}
