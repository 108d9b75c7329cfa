use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::submissions::dtos::SubmissionResultDto;
use crate::features::wizard::models::{
    OnboardingForm, SessionStatus, WizardSession, WizardStep, TOTAL_STEPS,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StepInfoDto {
    /// 1-based position
    pub number: u8,
    pub step: WizardStep,
    pub title: String,
}

impl From<WizardStep> for StepInfoDto {
    fn from(step: WizardStep) -> Self {
        Self {
            number: step.number(),
            step,
            title: step.title().to_string(),
        }
    }
}

/// Everything a client needs to render the wizard
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WizardStateDto {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub current_step: StepInfoDto,
    pub total_steps: u8,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub steps: Vec<StepInfoDto>,
    pub form: OnboardingForm,
    pub submission_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WizardSession> for WizardStateDto {
    fn from(session: &WizardSession) -> Self {
        let wizard = &session.wizard;
        Self {
            session_id: session.id,
            status: session.status,
            current_step: wizard.current_step().into(),
            total_steps: TOTAL_STEPS,
            is_first_step: wizard.is_first_step(),
            is_last_step: wizard.is_last_step(),
            steps: WizardStep::ALL.into_iter().map(StepInfoDto::from).collect(),
            form: wizard.form().clone(),
            submission_id: session.submission_id,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// Multipart body for staging a file. Documentation only; the handler reads
/// the `file` field from axum's Multipart directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct StageFileDto {
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Returned by a successful submit
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitResponseDto {
    pub session: WizardStateDto,
    pub submission: SubmissionResultDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteSessionResponseDto {
    pub session_id: Uuid,
}
