//! Progress tracking for background jobs
//!
//! The tracker pairs mutable counters with a publishing side effect: every
//! [`TaskProgress::report`] call pushes a complete [`ProgressSnapshot`] to
//! the task-status store, where an external caller polls it while the job
//! runs.

pub mod snapshot;
pub mod tracker;

pub use snapshot::ProgressSnapshot;
pub use tracker::TaskProgress;
