//! Progress snapshot model
//!
//! A snapshot is the unit published to the task-status store: one complete,
//! consistent view of a job's counters plus the current step label. An
//! external poller reads whole snapshots only, so it can never observe a
//! torn update.

use serde::{Deserialize, Serialize};

/// A point-in-time view of a job's progress counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Units of work considered so far
    pub attempted: u64,

    /// Units that completed successfully
    pub succeeded: u64,

    /// Units that failed
    pub failed: u64,

    /// Units skipped (e.g. already-member cohort rows)
    pub skipped: u64,

    /// Learners preassigned for auto-cohorting at registration
    pub preassigned: u64,

    /// Total units of work expected, fixed at job start
    pub total: u64,

    /// Wall-clock seconds since the job started, recomputed per snapshot
    pub duration_secs: f64,

    /// Human-readable label for the current phase
    pub step: String,
}

impl ProgressSnapshot {
    /// Sum of all outcome counters.
    ///
    /// For row-oriented jobs this should equal `attempted` by job end;
    /// the invariant is tested, not enforced.
    pub fn accounted(&self) -> u64 {
        self.succeeded + self.failed + self.skipped + self.preassigned
    }
}
