//! Data-source traits
//!
//! Each job reads from a persistent platform store that lives outside this
//! crate. These traits model those collaborators: query functions taking a
//! course id (and sometimes filter parameters) and returning rows. The
//! platform wires in concrete database-backed implementations; tests use
//! in-memory fakes.

use crate::domain::result::Result;
use crate::domain::{Cell, CohortMembershipError, CourseId, ReportTable};
use async_trait::async_trait;
use std::collections::HashMap;

/// One survey answer: a single (user, field) pair
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyAnswerRecord {
    /// Platform user id
    pub user_id: i64,
    /// Username at answer time
    pub username: String,
    /// Email at answer time
    pub email: String,
    /// Survey field this answer belongs to
    pub field_name: String,
    /// The answer itself
    pub field_value: String,
}

/// Survey answer queries
#[async_trait]
pub trait SurveySource: Send + Sync {
    /// All survey answers for a course, in submission order
    async fn survey_answers(&self, course_id: &CourseId) -> Result<Vec<SurveyAnswerRecord>>;
}

/// Proctored-exam attempt queries
#[async_trait]
pub trait ExamResultsSource: Send + Sync {
    /// One record per exam attempt, keyed by feature name. Only the
    /// requested `features` end up in the report; records may carry more
    /// or fewer keys.
    async fn proctored_exam_results(
        &self,
        course_id: &CourseId,
        features: &[String],
    ) -> Result<Vec<HashMap<String, Cell>>>;
}

/// Open-response-assessment aggregation
#[async_trait]
pub trait OraSource: Send + Sync {
    /// Aggregates every open-response submission for a course into a
    /// single table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::DataCollection`] with a diagnostic
    /// message when aggregation fails; the driver treats that as fatal
    /// for the job.
    ///
    /// [`RegistrarError::DataCollection`]: crate::domain::RegistrarError::DataCollection
    async fn collect_submissions(&self, course_id: &CourseId) -> Result<ReportTable>;
}

/// Gradebook queries
#[async_trait]
pub trait GradeSource: Send + Sync {
    /// The grade datatable for one assignment: header plus one row per
    /// enrolled student
    async fn assignment_grade_datatable(
        &self,
        course_id: &CourseId,
        assignment_name: &str,
    ) -> Result<ReportTable>;
}

/// A resolved cohort group within a course
///
/// Handed back by [`CohortService::find_cohort`] and cached by the cohort
/// job so each distinct cohort name is resolved exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortRef {
    /// Platform group id
    pub id: i64,
    /// Cohort name
    pub name: String,
}

/// Outcome of adding one identifier to a cohort
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CohortAddOutcome {
    /// The user was added; carries the cohort they were moved out of, if any
    Added {
        /// Name of the user's previous cohort
        previous_cohort: Option<String>,
    },
    /// No such user yet; the email was recorded for auto-cohorting at
    /// registration
    Preassigned,
    /// The user was already a member; trivial success, nothing changed
    AlreadyMember,
}

/// Cohort membership service
#[async_trait]
pub trait CohortService: Send + Sync {
    /// Resolves a cohort name to an existing group for the course, or
    /// `None` when no such group exists
    async fn find_cohort(&self, course_id: &CourseId, name: &str) -> Result<Option<CohortRef>>;

    /// Attempts to add the identified user (username or email) to the
    /// cohort.
    ///
    /// # Errors
    ///
    /// Per-row failures only: [`CohortMembershipError::UserNotFound`] when
    /// no user matches, [`CohortMembershipError::InvalidEmail`] when the
    /// unresolved identifier contains `@`. Already-member is not an error;
    /// it comes back as [`CohortAddOutcome::AlreadyMember`].
    async fn add_user_to_cohort(
        &self,
        cohort: &CohortRef,
        identifier: &str,
    ) -> std::result::Result<CohortAddOutcome, CohortMembershipError>;
}
