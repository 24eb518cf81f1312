//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for course-platform identifiers.
//! Each type ensures type safety and provides validation for format
//! compliance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course identifier newtype wrapper
///
/// Represents a unique identifier for a course run, e.g.
/// `course-v1:DemoX+CS101+2026_T1`. The exact format varies by platform
/// deployment, so only non-emptiness is validated.
///
/// # Examples
///
/// ```
/// use registrar::domain::ids::CourseId;
/// use std::str::FromStr;
///
/// let course_id = CourseId::from_str("course-v1:DemoX+CS101+2026_T1").unwrap();
/// assert_eq!(course_id.as_str(), "course-v1:DemoX+CS101+2026_T1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a new CourseId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Course ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the course ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// A filesystem-safe prefix derived from the course ID, used in report
    /// storage keys. Any character outside `[A-Za-z0-9.-]` becomes `_`.
    pub fn filename_prefix(&self) -> String {
        self.0
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Task identifier newtype wrapper
///
/// Identifies one background-job invocation in the external task framework.
/// The status store keys progress snapshots by this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new TaskId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Task ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Generates a fresh random task id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the task ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
