use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::wizard::Wizard;

/// Where a session is in its submit lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Fields and navigation are open
    #[default]
    Editing,
    /// A submission attempt is in flight; everything else is locked
    Submitting,
    /// Stored successfully; only reset or delete are accepted
    Submitted,
}

/// One browser's in-progress onboarding form
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub id: Uuid,
    pub wizard: Wizard,
    pub status: SessionStatus,
    /// Id of the stored submission once the form went through
    pub submission_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WizardSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            wizard: Wizard::new(),
            status: SessionStatus::Editing,
            submission_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Idle sessions get pruned, but never while a submission is running.
    pub fn is_expired(&self, now: DateTime<Utc>, idle_timeout: chrono::Duration) -> bool {
        self.status != SessionStatus::Submitting && now - self.updated_at > idle_timeout
    }
}
