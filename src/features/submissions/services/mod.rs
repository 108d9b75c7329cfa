mod submission_service;

pub use submission_service::{SubmissionOutcome, SubmissionService};
