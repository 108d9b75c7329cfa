use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::config::WizardConfig;
use crate::core::error::{AppError, Result};
use crate::features::submissions::services::SubmissionOutcome;
use crate::features::submissions::SubmissionService;
use crate::features::wizard::dtos::StepDataDto;
use crate::features::wizard::models::{FileSlot, SessionStatus, StagedFile, WizardSession};
use crate::shared::validation::file_extension;

type Sessions = Arc<RwLock<HashMap<Uuid, WizardSession>>>;

/// Owns every in-progress wizard session.
///
/// Sessions only live in memory. Everything except reset and delete requires
/// the session to be `editing`; a running submission locks the session.
pub struct WizardService {
    sessions: Sessions,
    submissions: Arc<SubmissionService>,
    idle_timeout: TimeDelta,
    max_upload_file_size: usize,
}

impl WizardService {
    pub fn new(submissions: Arc<SubmissionService>, config: &WizardConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            submissions,
            idle_timeout: TimeDelta::from_std(config.session_idle_timeout)
                .unwrap_or(TimeDelta::MAX),
            max_upload_file_size: config.max_upload_file_size,
        }
    }

    /// Start a fresh session on step one, dropping idle ones first
    pub async fn create_session(&self) -> WizardSession {
        let mut sessions = self.sessions.write().await;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, self.idle_timeout));
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!("Pruned {} idle wizard session(s)", pruned);
        }

        let session = WizardSession::new();
        sessions.insert(session.id, session.clone());
        tracing::info!("Created wizard session {}", session.id);
        session
    }

    pub async fn get_session(&self, id: Uuid) -> Result<WizardSession> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| session_not_found(id))
    }

    pub async fn update_step(&self, id: Uuid, data: StepDataDto) -> Result<WizardSession> {
        self.edit(id, |session| {
            data.apply_to(session.wizard.form_mut());
            Ok(())
        })
        .await
    }

    pub async fn advance(&self, id: Uuid) -> Result<WizardSession> {
        self.edit(id, |session| {
            session.wizard.advance();
            Ok(())
        })
        .await
    }

    pub async fn retreat(&self, id: Uuid) -> Result<WizardSession> {
        self.edit(id, |session| {
            session.wizard.retreat();
            Ok(())
        })
        .await
    }

    /// Hold a file in the session until submit. Replaces any earlier file
    /// in the same slot. The session is resolved before the file is checked.
    pub async fn stage_file(
        &self,
        id: Uuid,
        slot: FileSlot,
        file: StagedFile,
    ) -> Result<WizardSession> {
        self.edit(id, |session| {
            self.check_upload(slot, &file)?;
            tracing::debug!(
                "Staged {:?} file '{}' ({} bytes) in session {}",
                slot,
                file.file_name,
                file.size,
                session.id
            );
            session.wizard.form_mut().stage_file(slot, file);
            Ok(())
        })
        .await
    }

    pub async fn remove_file(&self, id: Uuid, slot: FileSlot) -> Result<WizardSession> {
        self.edit(id, |session| {
            session.wizard.form_mut().clear_file(slot);
            Ok(())
        })
        .await
    }

    /// Run the submission for a session sitting on the last step.
    ///
    /// The session is `submitting` for the whole attempt. The attempt runs on
    /// its own task, so the session is settled even if the caller goes away.
    pub async fn submit(&self, id: Uuid) -> Result<(WizardSession, SubmissionOutcome)> {
        let form = {
            let mut sessions = self.sessions.write().await;
            let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
            ensure_editing(session)?;
            if !session.wizard.is_last_step() {
                return Err(AppError::Conflict(
                    "The form can only be submitted from the last step".to_string(),
                ));
            }
            session.status = SessionStatus::Submitting;
            session.touch();
            session.wizard.form().clone()
        };

        let sessions = Arc::clone(&self.sessions);
        let submissions = Arc::clone(&self.submissions);
        let attempt = tokio::spawn(async move {
            let result = submissions.submit(&form).await;

            let mut sessions = sessions.write().await;
            let Some(session) = sessions.get_mut(&id) else {
                return Err(session_not_found(id));
            };
            session.touch();
            match result {
                Ok(outcome) => {
                    session.status = SessionStatus::Submitted;
                    session.submission_id = Some(outcome.submission_id);
                    Ok((session.clone(), outcome))
                }
                Err(e) => {
                    session.status = SessionStatus::Editing;
                    Err(e)
                }
            }
        });

        match attempt.await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Submission task for session {} failed: {}", id, e);
                self.release(id).await;
                Err(AppError::Internal(format!("Submission task failed: {}", e)))
            }
        }
    }

    /// Unlock a session whose submission task died before settling it
    async fn release(&self, id: Uuid) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(&id) {
            if session.status == SessionStatus::Submitting {
                session.status = SessionStatus::Editing;
                session.touch();
            }
        }
    }

    /// Back to step one with an empty form, ready for another submission
    pub async fn reset(&self, id: Uuid) -> Result<WizardSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        ensure_not_submitting(session)?;

        session.wizard.reset();
        session.status = SessionStatus::Editing;
        session.submission_id = None;
        session.touch();
        Ok(session.clone())
    }

    pub async fn delete_session(&self, id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
        ensure_not_submitting(session)?;

        sessions.remove(&id);
        tracing::info!("Deleted wizard session {}", id);
        Ok(())
    }

    async fn edit<F>(&self, id: Uuid, change: F) -> Result<WizardSession>
    where
        F: FnOnce(&mut WizardSession) -> Result<()>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        ensure_editing(session)?;

        change(session)?;
        session.touch();
        Ok(session.clone())
    }

    fn check_upload(&self, slot: FileSlot, file: &StagedFile) -> Result<()> {
        if file.size > self.max_upload_file_size {
            return Err(AppError::PayloadTooLarge(format!(
                "File too large. Maximum size is {} bytes ({} MB)",
                self.max_upload_file_size,
                self.max_upload_file_size / 1024 / 1024
            )));
        }

        let allowed = slot.allowed_extensions();
        match file_extension(&file.file_name) {
            Some(ext) if allowed.contains(&ext.as_str()) => Ok(()),
            _ => Err(AppError::Validation(format!(
                "File type of '{}' is not allowed. Allowed types: {}",
                file.file_name,
                allowed.join(", ")
            ))),
        }
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Wizard session {} not found", id))
}

fn ensure_editing(session: &WizardSession) -> Result<()> {
    match session.status {
        SessionStatus::Editing => Ok(()),
        SessionStatus::Submitting => Err(AppError::Conflict(
            "A submission is already in progress".to_string(),
        )),
        SessionStatus::Submitted => Err(AppError::Conflict(
            "The form has already been submitted; reset to start another".to_string(),
        )),
    }
}

fn ensure_not_submitting(session: &WizardSession) -> Result<()> {
    if session.status == SessionStatus::Submitting {
        return Err(AppError::Conflict(
            "A submission is already in progress".to_string(),
        ));
    }
    Ok(())
}
