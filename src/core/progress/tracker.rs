//! Task progress tracker
//!
//! [`TaskProgress`] owns the mutable counters for one job invocation and
//! publishes snapshots to the task-status store. The counters are public:
//! job drivers mutate them directly, with the contract that each unit of
//! work increments `attempted` exactly once and exactly one of
//! {`succeeded`, `failed`, `skipped`, `preassigned`}.

use crate::adapters::status::StatusStore;
use crate::core::progress::snapshot::ProgressSnapshot;
use crate::domain::TaskId;
use std::sync::Arc;
use std::time::Instant;

/// Mutable progress counters for a single job invocation
///
/// Owned exclusively by one job driver and dropped when the driver
/// returns; only the published snapshots outlive it.
pub struct TaskProgress {
    task_id: TaskId,
    action_name: String,
    started_at: Instant,
    status_store: Arc<dyn StatusStore>,

    /// Total units of work expected, fixed at start
    pub total: u64,
    /// Units considered so far
    pub attempted: u64,
    /// Units completed successfully
    pub succeeded: u64,
    /// Units failed
    pub failed: u64,
    /// Units skipped
    pub skipped: u64,
    /// Learners preassigned for later auto-cohorting
    pub preassigned: u64,
}

impl TaskProgress {
    /// Creates a tracker with all counters zeroed and `total` fixed
    pub fn new(
        task_id: TaskId,
        action_name: impl Into<String>,
        total: u64,
        status_store: Arc<dyn StatusStore>,
    ) -> Self {
        Self {
            task_id,
            action_name: action_name.into(),
            started_at: Instant::now(),
            status_store,
            total,
            attempted: 0,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            preassigned: 0,
        }
    }

    /// The action name supplied by the task framework
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// The task id this tracker publishes under
    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Builds a snapshot of the current counters with recomputed duration
    pub fn snapshot(&self, step: &str) -> ProgressSnapshot {
        ProgressSnapshot {
            attempted: self.attempted,
            succeeded: self.succeeded,
            failed: self.failed,
            skipped: self.skipped,
            preassigned: self.preassigned,
            total: self.total,
            duration_secs: self.started_at.elapsed().as_secs_f64(),
            step: step.to_string(),
        }
    }

    /// Publishes the current counters under the given step label.
    ///
    /// Fire-and-forget toward the status store; safe to call any number of
    /// times. Returns the published snapshot so terminal callers can fold
    /// it into the job outcome.
    pub async fn report(&self, step: &str) -> ProgressSnapshot {
        let snapshot = self.snapshot(step);
        tracing::debug!(
            task_id = %self.task_id,
            action = %self.action_name,
            attempted = snapshot.attempted,
            succeeded = snapshot.succeeded,
            failed = snapshot.failed,
            skipped = snapshot.skipped,
            preassigned = snapshot.preassigned,
            total = snapshot.total,
            step = %snapshot.step,
            "Publishing task progress"
        );
        self.status_store.publish(&self.task_id, snapshot.clone()).await;
        snapshot
    }
}
