//! Bulk student cohort assignment
//!
//! Processes a staff-uploaded delimited-text file of
//! `email`/`username` → `cohort` rows, adds each identified learner to the
//! named cohort, and uploads a per-cohort result table.
//!
//! The input file is read twice: a count pass to fix the progress total,
//! then the processing pass. That costs one extra read of an
//! administrative-scale upload and keeps the driver single-pass simple.
//!
//! Cohort resolution is fail-fast per cohort: each distinct name is
//! resolved once on first sight, and when resolution fails every later row
//! naming that cohort is counted failed without another lookup.

use crate::adapters::sources::{CohortAddOutcome, CohortRef, CohortService};
use crate::adapters::uploads::UploadStore;
use crate::core::csv::{count_keyed_rows, read_keyed_rows};
use crate::core::jobs::{fail_job, JobContext, JobOutcome, COHORT_REPORT};
use crate::domain::{Cell, CohortMembershipError, ReportTable};
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};

/// Per-cohort bookkeeping, one record per distinct cohort name in the
/// input file, created on first sight of the name
#[derive(Debug, Clone)]
pub struct CohortAssignmentStatus {
    /// Cohort name as it appears in the input file
    pub cohort_name: String,
    /// Whether a matching cohort group was found for the course
    pub exists: bool,
    /// Learners successfully added
    pub learners_added: u64,
    /// Identifiers that matched no user
    pub learners_not_found: BTreeSet<String>,
    /// Identifiers that look like emails but are invalid
    pub invalid_email_addresses: BTreeSet<String>,
    /// Emails recorded for auto-cohorting at registration
    pub preassigned_learners: BTreeSet<String>,
    /// Cached resolved group, so each name is looked up once
    cohort: Option<CohortRef>,
}

impl CohortAssignmentStatus {
    fn new(cohort_name: String, cohort: Option<CohortRef>) -> Self {
        Self {
            cohort_name,
            exists: cohort.is_some(),
            learners_added: 0,
            learners_not_found: BTreeSet::new(),
            invalid_email_addresses: BTreeSet::new(),
            preassigned_learners: BTreeSet::new(),
            cohort,
        }
    }
}

/// Insertion-ordered map of cohort name → status record
#[derive(Default)]
struct CohortStatusMap {
    statuses: Vec<CohortAssignmentStatus>,
    index: HashMap<String, usize>,
}

impl CohortStatusMap {
    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn insert(&mut self, status: CohortAssignmentStatus) {
        self.index
            .insert(status.cohort_name.clone(), self.statuses.len());
        self.statuses.push(status);
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut CohortAssignmentStatus> {
        let position = *self.index.get(name)?;
        Some(&mut self.statuses[position])
    }

    fn into_statuses(self) -> Vec<CohortAssignmentStatus> {
        self.statuses
    }
}

/// Runs the cohort bulk-assignment job
pub async fn run(
    ctx: &JobContext,
    uploads: &dyn UploadStore,
    cohorts: &dyn CohortService,
) -> JobOutcome {
    let start_date = Utc::now();

    let file_name = match ctx.input.required("file_name") {
        Ok(file_name) => file_name.to_string(),
        Err(_) => {
            let mut progress = ctx.progress(0);
            return fail_job(&mut progress, "Error, file name missing").await;
        }
    };

    // Count pass: fix the progress total before any row is processed.
    let total_assignments = match uploads.read(&file_name).await {
        Ok(content) => match count_keyed_rows(&content) {
            Ok(count) => count,
            Err(e) => {
                let mut progress = ctx.progress(0);
                return fail_job(&mut progress, &e.to_string()).await;
            }
        },
        Err(e) => {
            let mut progress = ctx.progress(0);
            return fail_job(&mut progress, &e.to_string()).await;
        }
    };

    let mut progress = ctx.progress(total_assignments);
    progress.report("Cohorting students").await;

    // Processing pass.
    let rows = match uploads.read(&file_name).await {
        Ok(content) => match read_keyed_rows(&content) {
            Ok(rows) => rows,
            Err(e) => return fail_job(&mut progress, &e.to_string()).await,
        },
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    let mut statuses = CohortStatusMap::default();

    for row in rows {
        // The 'email' field identifies the user when present; otherwise
        // fall back to 'username'.
        let identifier = non_empty(row.get("email"))
            .or_else(|| non_empty(row.get("username")))
            .unwrap_or_default();
        let cohort_name = non_empty(row.get("cohort")).unwrap_or_default();
        progress.attempted += 1;

        if !statuses.contains(&cohort_name) {
            let resolved = match cohorts.find_cohort(&ctx.course_id, &cohort_name).await {
                Ok(resolved) => resolved,
                Err(e) => {
                    tracing::warn!(
                        course_id = %ctx.course_id,
                        cohort = %cohort_name,
                        error = %e,
                        "Cohort resolution failed"
                    );
                    None
                }
            };
            statuses.insert(CohortAssignmentStatus::new(cohort_name.clone(), resolved));
        }

        let cached_cohort = statuses
            .get_mut(&cohort_name)
            .and_then(|status| status.cohort.clone());

        match cached_cohort {
            None => {
                // Every row naming a missing cohort is a failure; no set
                // is mutated for it.
                progress.failed += 1;
            }
            Some(cohort) => {
                let outcome = cohorts.add_user_to_cohort(&cohort, &identifier).await;
                let status = statuses
                    .get_mut(&cohort_name)
                    .expect("status inserted on first sight of the cohort name");
                match outcome {
                    Ok(CohortAddOutcome::Added { .. }) => {
                        status.learners_added += 1;
                        progress.succeeded += 1;
                    }
                    Ok(CohortAddOutcome::Preassigned) => {
                        status.preassigned_learners.insert(identifier.clone());
                        progress.preassigned += 1;
                    }
                    Ok(CohortAddOutcome::AlreadyMember) => {
                        progress.skipped += 1;
                    }
                    Err(CohortMembershipError::UserNotFound(_)) => {
                        status.learners_not_found.insert(identifier.clone());
                        progress.failed += 1;
                    }
                    Err(CohortMembershipError::InvalidEmail(_)) => {
                        status.invalid_email_addresses.insert(identifier.clone());
                        progress.failed += 1;
                    }
                }
            }
        }

        progress.report("Cohorting students").await;
    }

    progress.report("Uploading CSV").await;

    let table = build_cohort_table(&statuses.into_statuses());
    let location = match ctx
        .report_store
        .upload(&table, COHORT_REPORT, &ctx.course_id, start_date)
        .await
    {
        Ok(location) => location,
        Err(e) => return fail_job(&mut progress, &e.to_string()).await,
    };

    let counters = progress.report("Uploading CSV").await;
    JobOutcome::succeeded(counters, Some(location))
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Builds the result table, one row per distinct cohort in encounter order
pub fn build_cohort_table(statuses: &[CohortAssignmentStatus]) -> ReportTable {
    let header = vec![
        "Cohort Name".to_string(),
        "Exists".to_string(),
        "Learners Added".to_string(),
        "Learners Not Found".to_string(),
        "Invalid Email Addresses".to_string(),
        "Preassigned Learners".to_string(),
    ];

    let mut table = ReportTable::new(header);
    for status in statuses {
        table.push_row(vec![
            Cell::from(status.cohort_name.as_str()),
            Cell::from(status.exists),
            Cell::from(status.learners_added),
            Cell::from(join_set(&status.learners_not_found)),
            Cell::from(join_set(&status.invalid_email_addresses)),
            Cell::from(join_set(&status.preassigned_learners)),
        ]);
    }
    table
}

fn join_set(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(",")
}
