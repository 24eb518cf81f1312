//! In-memory status store
//!
//! Keeps the latest snapshot per task id behind an async `RwLock`. Suitable
//! for tests and single-process deployments where the poller shares the
//! process with the workers.

use crate::adapters::status::StatusStore;
use crate::core::progress::ProgressSnapshot;
use crate::domain::TaskId;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory implementation of [`StatusStore`]
#[derive(Default)]
pub struct InMemoryStatusStore {
    snapshots: RwLock<HashMap<TaskId, ProgressSnapshot>>,
}

impl InMemoryStatusStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently published snapshot for `task_id`
    pub async fn latest(&self, task_id: &TaskId) -> Option<ProgressSnapshot> {
        self.snapshots.read().await.get(task_id).cloned()
    }

    /// Number of tasks with at least one published snapshot
    pub async fn task_count(&self) -> usize {
        self.snapshots.read().await.len()
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn publish(&self, task_id: &TaskId, snapshot: ProgressSnapshot) {
        self.snapshots
            .write()
            .await
            .insert(task_id.clone(), snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(step: &str, attempted: u64) -> ProgressSnapshot {
        ProgressSnapshot {
            attempted,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            preassigned: 0,
            total: 10,
            duration_secs: 0.0,
            step: step.to_string(),
        }
    }

    #[tokio::test]
    async fn test_publish_then_latest() {
        let store = InMemoryStatusStore::new();
        let task_id = TaskId::new("t1").unwrap();

        store.publish(&task_id, snapshot("collecting", 1)).await;

        let latest = store.latest(&task_id).await.unwrap();
        assert_eq!(latest.step, "collecting");
        assert_eq!(latest.attempted, 1);
    }

    #[tokio::test]
    async fn test_publish_replaces_previous_snapshot() {
        let store = InMemoryStatusStore::new();
        let task_id = TaskId::new("t1").unwrap();

        store.publish(&task_id, snapshot("first", 1)).await;
        store.publish(&task_id, snapshot("second", 2)).await;

        let latest = store.latest(&task_id).await.unwrap();
        assert_eq!(latest.step, "second");
        assert_eq!(latest.attempted, 2);
        assert_eq!(store.task_count().await, 1);
    }

    #[tokio::test]
    async fn test_latest_for_unknown_task_is_none() {
        let store = InMemoryStatusStore::new();
        assert!(store.latest(&TaskId::new("ghost").unwrap()).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_publish_and_poll() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryStatusStore::new());
        let task_id = TaskId::new("t1").unwrap();

        let writer = {
            let store = store.clone();
            let task_id = task_id.clone();
            tokio::spawn(async move {
                for i in 0..100u64 {
                    store.publish(&task_id, snapshot("working", i)).await;
                }
            })
        };

        // Polling while the writer runs must always see a complete snapshot.
        for _ in 0..50 {
            if let Some(seen) = store.latest(&task_id).await {
                assert_eq!(seen.step, "working");
                assert_eq!(seen.total, 10);
            }
        }

        writer.await.unwrap();
        assert_eq!(store.latest(&task_id).await.unwrap().attempted, 99);
    }
}
