// Registrar - Course Report-Generation Jobs
// Copyright (c) 2026 Registrar Contributors
// Licensed under the MIT License

//! # Registrar - Course Report-Generation Jobs
//!
//! Registrar implements the background report-generation jobs of an
//! online-course platform: survey result export, proctored-exam result
//! export, bulk student cohort assignment, open-response-assessment (ORA)
//! data export, and assignment-grade export/posting.
//!
//! ## Overview
//!
//! Every job follows the same shape:
//! - **Read** rows from a platform data source
//! - **Transform** them into a tabular report
//! - **Write** the table to the report store, or post it to a remote
//!   gradebook
//!
//! while publishing live progress counters to a task-status store that an
//! external caller polls.
//!
//! ## Architecture
//!
//! Registrar follows a layered architecture:
//!
//! - [`cli`] - Command-line interface for worker deployments
//! - [`core`] - Business logic (progress tracking, CSV codecs, job drivers)
//! - [`adapters`] - External integrations (data sources, report store,
//!   status store, remote gradebook)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use registrar::adapters::{InMemoryStatusStore, LocalReportStore};
//! use registrar::core::jobs::{self, JobContext};
//! use registrar::domain::{CourseId, TaskId, TaskInput};
//! use std::sync::Arc;
//!
//! # async fn example(source: &dyn registrar::adapters::OraSource) {
//! let ctx = JobContext {
//!     task_id: TaskId::generate(),
//!     course_id: CourseId::new("course-v1:DemoX+CS101+2026_T1").unwrap(),
//!     action_name: "export_ora_data".to_string(),
//!     input: TaskInput::default(),
//!     report_store: Arc::new(LocalReportStore::new("/var/lib/registrar/reports")),
//!     status_store: Arc::new(InMemoryStatusStore::new()),
//! };
//!
//! let outcome = jobs::ora::run(&ctx, source).await;
//! println!("status: {:?}, succeeded: {}", outcome.status, outcome.counters.succeeded);
//! # }
//! ```
//!
//! ## Progress And Partial Failure
//!
//! A job's terminal status is deliberately coarse: `FAILED` means the job
//! as a whole could not proceed, while per-row failures only show up in
//! the final counters. [`core::jobs::JobOutcome`] therefore pairs the
//! status with the final counter snapshot so consumers never have to
//! choose between the two.
//!
//! ## Error Handling
//!
//! Registrar uses the [`domain::RegistrarError`] type for all errors:
//!
//! ```rust
//! use registrar::domain::{Result, TaskInput};
//!
//! fn example(input: &TaskInput) -> Result<()> {
//!     let _assignment = input.required("assignment_name")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Registrar uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting job");
//! warn!(cohort = "staff", "Cohort resolution failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
