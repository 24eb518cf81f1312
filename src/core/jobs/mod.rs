//! Background job drivers
//!
//! One module per job, all following the same skeleton:
//! validate input → (count total for file-driven jobs) → process units →
//! upload the finished table → final progress report → terminal status.
//!
//! Per-unit failures are tallied in the progress counters and never abort
//! the job; only whole-job failures (missing input, total data-collection
//! failure, rejected remote submission) produce a [`TaskStatus::Failed`]
//! outcome. Every terminal path, failed or not, publishes a final snapshot
//! first so the external poller always observes a consistent end state.

pub mod cohort;
pub mod grades;
pub mod ora;
pub mod proctored;
pub mod survey;

use crate::adapters::report_store::ReportStore;
use crate::adapters::status::StatusStore;
use crate::core::progress::{ProgressSnapshot, TaskProgress};
use crate::domain::{CourseId, TaskId, TaskInput, TaskStatus};
use std::sync::Arc;

/// Logical report name for the survey export
pub const SURVEY_REPORT: &str = "course_survey_results";
/// Logical report name for the proctored-exam export
pub const PROCTORED_EXAM_REPORT: &str = "proctored_exam_results_report";
/// Logical report name for the cohort-assignment result table
pub const COHORT_REPORT: &str = "cohort_results";
/// Logical report name for the ORA data export
pub const ORA_REPORT: &str = "ORA_data";
/// Logical report name for the assignment-grade export
pub const GRADES_REPORT: &str = "grades";

/// Everything a job driver needs besides its data source: identity,
/// payload, and the shared report/status stores.
pub struct JobContext {
    /// Id of this invocation in the task framework
    pub task_id: TaskId,
    /// Course the job operates on
    pub course_id: CourseId,
    /// Action name supplied by the task framework, echoed in logs
    pub action_name: String,
    /// Task payload
    pub input: TaskInput,
    /// Destination for finished report tables
    pub report_store: Arc<dyn ReportStore>,
    /// Destination for progress snapshots
    pub status_store: Arc<dyn StatusStore>,
}

impl JobContext {
    /// Creates a tracker for this invocation with the given total
    pub(crate) fn progress(&self, total: u64) -> TaskProgress {
        TaskProgress::new(
            self.task_id.clone(),
            self.action_name.clone(),
            total,
            self.status_store.clone(),
        )
    }
}

/// Structured result of one job invocation
///
/// The terminal status deliberately does not encode per-unit failures;
/// a consumer that needs the true success rate must read `counters`.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    /// Terminal sentinel the task framework consumes
    pub status: TaskStatus,
    /// Final published counter snapshot
    pub counters: ProgressSnapshot,
    /// Storage location of the uploaded report, when an upload happened
    pub report_location: Option<String>,
}

impl JobOutcome {
    /// A successful outcome with its final snapshot and report location
    pub fn succeeded(counters: ProgressSnapshot, report_location: Option<String>) -> Self {
        Self {
            status: TaskStatus::Succeeded,
            counters,
            report_location,
        }
    }

    /// A whole-job failure; no report was produced
    pub fn failed(counters: ProgressSnapshot) -> Self {
        Self {
            status: TaskStatus::Failed,
            counters,
            report_location: None,
        }
    }
}

/// Publishes a terminal FAILED snapshot carrying `step` as the label and
/// returns the failed outcome.
///
/// `failed` is forced to at least 1 so a poller that only reads counters
/// still sees the failure.
pub(crate) async fn fail_job(progress: &mut TaskProgress, step: &str) -> JobOutcome {
    tracing::error!(
        task_id = %progress.task_id(),
        action = %progress.action_name(),
        step = step,
        "Job failed"
    );
    if progress.failed == 0 {
        progress.failed = 1;
    }
    let counters = progress.report(step).await;
    JobOutcome::failed(counters)
}
