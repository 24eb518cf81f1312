//! Business logic
//!
//! The core layer holds what is shared across the job drivers: the
//! progress-tracking model, CSV encoding/decoding, and the drivers
//! themselves.

pub mod csv;
pub mod jobs;
pub mod progress;

pub use jobs::{JobContext, JobOutcome};
pub use progress::{ProgressSnapshot, TaskProgress};
