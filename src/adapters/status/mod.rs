//! Task-status store abstraction
//!
//! The status store is where job drivers publish progress snapshots and
//! where the task framework's pollers read them back. Publishing is
//! fire-and-forget: drivers never consume a return value, and a publish
//! that cannot land must not fail the job.

pub mod memory;

pub use memory::InMemoryStatusStore;

use crate::core::progress::ProgressSnapshot;
use crate::domain::TaskId;
use async_trait::async_trait;

/// Task-status store interface
///
/// Implementations must make each published snapshot visible to readers as
/// a single consistent value; a poller sees either the previous snapshot
/// or the new one, never a mix.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Publishes the latest snapshot for `task_id`, replacing any prior one
    async fn publish(&self, task_id: &TaskId, snapshot: ProgressSnapshot);
}
