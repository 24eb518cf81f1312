//! Local-filesystem report store
//!
//! Writes report CSVs under a root directory, one subdirectory per course.
//! This is the shipped backend for single-host deployments; object-store
//! backends implement the same [`ReportStore`] trait.

use crate::adapters::report_store::{report_key, ReportStore};
use crate::core::csv::encode_table;
use crate::domain::result::Result;
use crate::domain::{CourseId, RegistrarError, ReportTable};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Filesystem-backed implementation of [`ReportStore`]
pub struct LocalReportStore {
    root: PathBuf,
}

impl LocalReportStore {
    /// Creates a store rooted at `root`; the directory is created lazily
    /// on first upload
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory reports are written under
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ReportStore for LocalReportStore {
    async fn upload(
        &self,
        table: &ReportTable,
        report_name: &str,
        course_id: &CourseId,
        timestamp: DateTime<Utc>,
    ) -> Result<String> {
        let course_dir = self.root.join(course_id.filename_prefix());
        tokio::fs::create_dir_all(&course_dir).await.map_err(|e| {
            RegistrarError::ReportStore(format!(
                "Failed to create report directory {}: {}",
                course_dir.display(),
                e
            ))
        })?;

        let path = course_dir.join(report_key(course_id, report_name, timestamp));
        let bytes = encode_table(table)?;
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            RegistrarError::ReportStore(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!(
            report_name = report_name,
            course_id = %course_id,
            rows = table.row_count(),
            path = %path.display(),
            "Report uploaded"
        );

        Ok(path.display().to_string())
    }
}
