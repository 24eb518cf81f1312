//! External integrations
//!
//! Every collaborator the jobs depend on sits behind a trait in this
//! layer: platform data sources, the report store, the uploaded-file
//! store, the task-status store, and the remote gradebook. Shipped
//! implementations cover single-host deployments (local filesystem,
//! in-memory status, HTTP gradebook); the platform substitutes its own
//! database-backed sources.

pub mod gradebook;
pub mod report_store;
pub mod sources;
pub mod status;
pub mod uploads;

pub use gradebook::{GradebookClient, GradebookResponse, HttpGradebookClient};
pub use report_store::{LocalReportStore, ReportStore};
pub use sources::{
    CohortAddOutcome, CohortRef, CohortService, ExamResultsSource, GradeSource, OraSource,
    SurveyAnswerRecord, SurveySource,
};
pub use status::{InMemoryStatusStore, StatusStore};
pub use uploads::{LocalUploadStore, UploadStore};
