//! Report store abstraction
//!
//! Finished report tables are uploaded to durable storage under a
//! (course, report-name, timestamp) key. The timestamp is captured at job
//! start, so re-runs produce distinct, time-ordered artifacts instead of
//! overwriting earlier ones.

pub mod local;

pub use local::LocalReportStore;

use crate::domain::result::Result;
use crate::domain::{CourseId, ReportTable};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Builds the storage key for a report artifact.
///
/// Format: `{course_prefix}_{report_name}_{YYYY-MM-DD-HHMM}.csv`, with the
/// course prefix made filesystem-safe.
pub fn report_key(course_id: &CourseId, report_name: &str, timestamp: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}.csv",
        course_id.filename_prefix(),
        report_name,
        timestamp.format("%Y-%m-%d-%H%M")
    )
}

/// Durable report storage interface
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Uploads a finished table under its logical report name.
    ///
    /// Returns the storage location of the written artifact. Repeated
    /// uploads with different timestamps must not clobber each other; no
    /// overwrite guarantee is made for identical timestamps.
    async fn upload(
        &self,
        table: &ReportTable,
        report_name: &str,
        course_id: &CourseId,
        timestamp: DateTime<Utc>,
    ) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_key_format() {
        let course_id = CourseId::new("course-v1:DemoX+CS101+2026_T1").unwrap();
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();

        let key = report_key(&course_id, "cohort_results", timestamp);
        assert_eq!(
            key,
            "course-v1_DemoX_CS101_2026_T1_cohort_results_2026-03-14-1509.csv"
        );
    }

    #[test]
    fn test_report_key_distinct_per_timestamp() {
        let course_id = CourseId::new("course-v1:A+B+C").unwrap();
        let first = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2026, 1, 1, 0, 1, 0).unwrap();

        assert_ne!(
            report_key(&course_id, "grades", first),
            report_key(&course_id, "grades", second)
        );
    }
}
