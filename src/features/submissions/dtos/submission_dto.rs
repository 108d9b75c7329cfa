use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::submissions::services::SubmissionOutcome;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResultDto {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// Email account rows stored with the submission
    pub email_accounts: u64,
}

impl From<SubmissionOutcome> for SubmissionResultDto {
    fn from(outcome: SubmissionOutcome) -> Self {
        Self {
            submission_id: outcome.submission_id,
            submitted_at: outcome.submitted_at,
            email_accounts: outcome.email_accounts,
        }
    }
}
