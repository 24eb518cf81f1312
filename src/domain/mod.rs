//! Domain models and types for Registrar.
//!
//! This module contains the core domain models, types, and business rules
//! for the report-generation jobs.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CourseId`], [`TaskId`])
//! - **Tabular report model** ([`Cell`], [`ReportTable`])
//! - **Task payloads and terminal statuses** ([`TaskInput`], [`TaskStatus`])
//! - **Error types** ([`RegistrarError`], [`CohortMembershipError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Registrar uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use registrar::domain::{CourseId, TaskId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let course_id = CourseId::new("course-v1:DemoX+CS101+2026_T1")?;
//! let task_id = TaskId::generate();
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: CourseId = task_id;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use registrar::domain::{RegistrarError, Result};
//!
//! fn example(input: &registrar::domain::TaskInput) -> Result<&str> {
//!     input.required("assignment_name")
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod table;
pub mod task;

// Re-export commonly used types for convenience
pub use errors::{CohortMembershipError, RegistrarError};
pub use ids::{CourseId, TaskId};
pub use result::Result;
pub use table::{Cell, ReportTable};
pub use task::{TaskInput, TaskStatus};
