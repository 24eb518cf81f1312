//! Task payload and terminal status types
//!
//! A background job arrives from the external task framework as a course
//! id plus a [`TaskInput`] payload. The framework consumes exactly two
//! terminal sentinel values, [`TaskStatus::Succeeded`] and
//! [`TaskStatus::Failed`].

use crate::domain::errors::RegistrarError;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};

/// Terminal status of a job driver
///
/// `Failed` means the job as a whole could not proceed (missing input,
/// total data-collection failure, rejected remote submission). Per-row
/// failures inside an otherwise-complete job do NOT produce `Failed`; they
/// are visible only in the final counters. Consumers that care about the
/// true success rate must inspect the counters in the job outcome, not
/// just this sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// The job ran to completion
    Succeeded,
    /// The job as a whole could not proceed
    Failed,
}

impl TaskStatus {
    /// True for the `Succeeded` sentinel
    pub fn is_succeeded(&self) -> bool {
        matches!(self, TaskStatus::Succeeded)
    }
}

/// Input payload carried by the external task framework
///
/// Each driver validates only the fields it requires; an absent or empty
/// required field aborts the job with
/// [`RegistrarError::MissingInput`] before any processing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInput {
    /// Requested exam-attempt columns (proctored-exam export)
    #[serde(default)]
    pub features: Vec<String>,

    /// Name of the uploaded cohort-assignment file (cohort job)
    #[serde(default)]
    pub file_name: Option<String>,

    /// Assignment to export or post grades for (grade jobs)
    #[serde(default)]
    pub assignment_name: Option<String>,

    /// Remote gradebook endpoint identifier (grade posting)
    #[serde(default)]
    pub endpoint_id: Option<String>,
}

impl TaskInput {
    /// Returns the named field or a `MissingInput` error when it is absent
    /// or empty. Empty strings count as missing, matching how operators
    /// submit blank form fields.
    pub fn required<'a>(&'a self, field: &str) -> Result<&'a str> {
        let value = match field {
            "file_name" => self.file_name.as_deref(),
            "assignment_name" => self.assignment_name.as_deref(),
            "endpoint_id" => self.endpoint_id.as_deref(),
            _ => None,
        };

        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(RegistrarError::MissingInput(field.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_serializes_as_sentinel() {
        let json = serde_json::to_string(&TaskStatus::Succeeded).unwrap();
        assert_eq!(json, "\"SUCCEEDED\"");
        let json = serde_json::to_string(&TaskStatus::Failed).unwrap();
        assert_eq!(json, "\"FAILED\"");
    }

    #[test]
    fn test_required_field_present() {
        let input = TaskInput {
            assignment_name: Some("Homework 3".to_string()),
            ..Default::default()
        };
        assert_eq!(input.required("assignment_name").unwrap(), "Homework 3");
    }

    #[test]
    fn test_required_field_absent() {
        let input = TaskInput::default();
        let err = input.required("assignment_name").unwrap_err();
        assert!(matches!(err, RegistrarError::MissingInput(field) if field == "assignment_name"));
    }

    #[test]
    fn test_required_field_empty_counts_as_missing() {
        let input = TaskInput {
            file_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(input.required("file_name").is_err());
    }

    #[test]
    fn test_task_input_deserializes_with_defaults() {
        let input: TaskInput = serde_json::from_str("{}").unwrap();
        assert!(input.features.is_empty());
        assert!(input.file_name.is_none());
    }
}
