//! Error types and the removal stage

pub mod error;
pub mod removal;

pub use error::{DedupError, FailedFile, Result};
pub use removal::{execute_removal, plan_removal, RemovalOutcome, RemovalPlan};
