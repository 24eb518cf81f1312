//! Shared fakes and fixtures for job integration tests
//!
//! The job drivers talk to the platform through traits; these in-memory
//! fakes stand in for the database-backed implementations the platform
//! wires in. Report uploads go to a real temp directory so tests can
//! decode the written CSV.

#![allow(dead_code)]

use async_trait::async_trait;
use registrar::adapters::{
    CohortAddOutcome, CohortRef, CohortService, ExamResultsSource, GradeSource,
    InMemoryStatusStore, LocalReportStore, OraSource, SurveyAnswerRecord, SurveySource,
    UploadStore,
};
use registrar::core::jobs::JobContext;
use registrar::domain::{
    Cell, CohortMembershipError, CourseId, RegistrarError, ReportTable, Result, TaskId, TaskInput,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tempfile::TempDir;

/// A job context wired to an in-memory status store and a temp-dir report
/// store. Keep the returned `TempDir` alive for the duration of the test.
pub fn test_context(
    action_name: &str,
    input: TaskInput,
) -> (JobContext, Arc<InMemoryStatusStore>, TempDir) {
    let reports_dir = TempDir::new().unwrap();
    let status_store = Arc::new(InMemoryStatusStore::new());
    let ctx = JobContext {
        task_id: TaskId::new("task-0001").unwrap(),
        course_id: CourseId::new("course-v1:DemoX+CS101+2026_T1").unwrap(),
        action_name: action_name.to_string(),
        input,
        report_store: Arc::new(LocalReportStore::new(reports_dir.path())),
        status_store: status_store.clone(),
    };
    (ctx, status_store, reports_dir)
}

/// Reads back and decodes a report written by [`LocalReportStore`]
pub async fn read_report(location: &str) -> ReportTable {
    let bytes = tokio::fs::read(location).await.unwrap();
    registrar::core::csv::decode_table(&bytes).unwrap()
}

/// Survey source returning a fixed answer list, or failing
pub struct FakeSurveySource {
    pub answers: std::result::Result<Vec<SurveyAnswerRecord>, String>,
}

impl FakeSurveySource {
    pub fn with_answers(answers: Vec<SurveyAnswerRecord>) -> Self {
        Self {
            answers: Ok(answers),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answers: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl SurveySource for FakeSurveySource {
    async fn survey_answers(&self, _course_id: &CourseId) -> Result<Vec<SurveyAnswerRecord>> {
        match &self.answers {
            Ok(answers) => Ok(answers.clone()),
            Err(message) => Err(RegistrarError::DataCollection(message.clone())),
        }
    }
}

/// Exam-results source returning fixed records, or failing
pub struct FakeExamResultsSource {
    pub records: std::result::Result<Vec<HashMap<String, Cell>>, String>,
}

impl FakeExamResultsSource {
    pub fn with_records(records: Vec<HashMap<String, Cell>>) -> Self {
        Self {
            records: Ok(records),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            records: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl ExamResultsSource for FakeExamResultsSource {
    async fn proctored_exam_results(
        &self,
        _course_id: &CourseId,
        _features: &[String],
    ) -> Result<Vec<HashMap<String, Cell>>> {
        match &self.records {
            Ok(records) => Ok(records.clone()),
            Err(message) => Err(RegistrarError::DataCollection(message.clone())),
        }
    }
}

/// ORA source returning a fixed table, or failing
pub struct FakeOraSource {
    pub table: std::result::Result<ReportTable, String>,
}

impl FakeOraSource {
    pub fn with_table(table: ReportTable) -> Self {
        Self { table: Ok(table) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            table: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl OraSource for FakeOraSource {
    async fn collect_submissions(&self, _course_id: &CourseId) -> Result<ReportTable> {
        match &self.table {
            Ok(table) => Ok(table.clone()),
            Err(message) => Err(RegistrarError::DataCollection(message.clone())),
        }
    }
}

/// Grade source returning a fixed datatable, or failing
pub struct FakeGradeSource {
    pub table: std::result::Result<ReportTable, String>,
}

impl FakeGradeSource {
    pub fn with_table(table: ReportTable) -> Self {
        Self { table: Ok(table) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            table: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl GradeSource for FakeGradeSource {
    async fn assignment_grade_datatable(
        &self,
        _course_id: &CourseId,
        _assignment_name: &str,
    ) -> Result<ReportTable> {
        match &self.table {
            Ok(table) => Ok(table.clone()),
            Err(message) => Err(RegistrarError::DataCollection(message.clone())),
        }
    }
}

/// Cohort service over fixed sets of cohorts and users.
///
/// Identifiers in `known_users` resolve and get added; identifiers in
/// `members` are already in the cohort; identifiers in `preassign_emails`
/// are unknown emails recorded for auto-cohorting. Anything else fails the
/// row the way the platform would: `@` means invalid email, otherwise
/// user-not-found.
#[derive(Default)]
pub struct FakeCohortService {
    pub cohorts: HashMap<String, CohortRef>,
    pub known_users: HashSet<String>,
    pub members: HashSet<String>,
    pub preassign_emails: HashSet<String>,
}

impl FakeCohortService {
    pub fn with_cohorts(names: &[&str]) -> Self {
        let cohorts = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                (
                    name.to_string(),
                    CohortRef {
                        id: i as i64 + 1,
                        name: name.to_string(),
                    },
                )
            })
            .collect();
        Self {
            cohorts,
            ..Self::default()
        }
    }

    pub fn knowing(mut self, identifiers: &[&str]) -> Self {
        self.known_users
            .extend(identifiers.iter().map(|s| s.to_string()));
        self
    }

    pub fn already_member(mut self, identifiers: &[&str]) -> Self {
        self.members
            .extend(identifiers.iter().map(|s| s.to_string()));
        self
    }

    pub fn preassigning(mut self, emails: &[&str]) -> Self {
        self.preassign_emails
            .extend(emails.iter().map(|s| s.to_string()));
        self
    }
}

#[async_trait]
impl CohortService for FakeCohortService {
    async fn find_cohort(&self, _course_id: &CourseId, name: &str) -> Result<Option<CohortRef>> {
        Ok(self.cohorts.get(name).cloned())
    }

    async fn add_user_to_cohort(
        &self,
        _cohort: &CohortRef,
        identifier: &str,
    ) -> std::result::Result<CohortAddOutcome, CohortMembershipError> {
        if self.members.contains(identifier) {
            return Ok(CohortAddOutcome::AlreadyMember);
        }
        if self.known_users.contains(identifier) {
            return Ok(CohortAddOutcome::Added {
                previous_cohort: None,
            });
        }
        if self.preassign_emails.contains(identifier) {
            return Ok(CohortAddOutcome::Preassigned);
        }
        Err(CohortMembershipError::classify_unresolved(identifier))
    }
}

/// Upload store serving a single named file from memory
pub struct FakeUploadStore {
    pub file_name: String,
    pub content: String,
}

impl FakeUploadStore {
    pub fn serving(file_name: &str, content: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            content: content.to_string(),
        }
    }
}

#[async_trait]
impl UploadStore for FakeUploadStore {
    async fn read(&self, file_name: &str) -> Result<String> {
        if file_name == self.file_name {
            Ok(self.content.clone())
        } else {
            Err(RegistrarError::UploadStore(format!(
                "No such upload: {file_name}"
            )))
        }
    }
}
