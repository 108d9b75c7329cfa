use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::notifications::dtos::OnboardingNotification;
use crate::features::notifications::NotificationDispatcher;
use crate::features::submissions::models::{NewEmailAccount, NewSubmission, UploadedFiles};
use crate::features::submissions::repository::RecordStore;
use crate::features::wizard::models::{FileSlot, OnboardingForm};
use crate::modules::storage::{object_key, ObjectStore};

/// What a successful submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub email_accounts: u64,
}

/// Turns a completed form into stored files, rows and a notification.
///
/// Order is fixed: uploads, parent row, child rows, notification. Anything
/// failing before the notification aborts the attempt with
/// [`AppError::SubmissionFailed`]; rows already written stay written.
pub struct SubmissionService {
    objects: Arc<dyn ObjectStore>,
    records: Arc<dyn RecordStore>,
    notifier: Arc<dyn NotificationDispatcher>,
}

impl SubmissionService {
    pub fn new(
        objects: Arc<dyn ObjectStore>,
        records: Arc<dyn RecordStore>,
        notifier: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            objects,
            records,
            notifier,
        }
    }

    pub async fn submit(&self, form: &OnboardingForm) -> Result<SubmissionOutcome> {
        let files = self
            .upload_files(form)
            .await
            .map_err(|e| AppError::SubmissionFailed(e.to_string()))?;

        let record = self
            .records
            .insert_submission(&NewSubmission::from_form(form, files))
            .await
            .map_err(|e| AppError::SubmissionFailed(e.to_string()))?;

        let accounts: Vec<NewEmailAccount> = form
            .complete_email_entries()
            .map(|entry| NewEmailAccount::from_entry(record.id, entry))
            .collect();

        let email_accounts = self
            .records
            .insert_email_accounts(&accounts)
            .await
            .map_err(|e| AppError::SubmissionFailed(e.to_string()))?;

        tracing::info!(
            "Stored onboarding submission {} for '{}' ({}) with {} email account(s)",
            record.id,
            record.firm_name,
            record.country,
            email_accounts
        );

        self.spawn_notification(OnboardingNotification::from(form));

        Ok(SubmissionOutcome {
            submission_id: record.id,
            submitted_at: record.created_at,
            email_accounts,
        })
    }

    /// Uploads run one after another in slot order
    async fn upload_files(&self, form: &OnboardingForm) -> Result<UploadedFiles> {
        let mut uploaded = UploadedFiles::default();

        for slot in FileSlot::ALL {
            let Some(file) = form.staged_file(slot) else {
                continue;
            };

            let key = object_key(
                slot.storage_category(),
                Utc::now().timestamp_millis(),
                &file.file_name,
            );
            let url = self
                .objects
                .put(&key, file.data.clone(), &file.content_type)
                .await?;

            match slot {
                FileSlot::Logo => uploaded.logo_url = url,
                FileSlot::DoNotContact => uploaded.do_not_contact_file_url = url,
                FileSlot::CompanyProfile => uploaded.company_profile_file_url = url,
            }
        }

        Ok(uploaded)
    }

    fn spawn_notification(&self, payload: OnboardingNotification) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            match notifier.dispatch(&payload).await {
                Ok(response) if response.email_error.is_none() && response.error.is_none() => {
                    tracing::info!(
                        "Onboarding notification for '{}': {}",
                        payload.firm_name,
                        response.message.unwrap_or_default()
                    );
                }
                Ok(response) => {
                    tracing::warn!(
                        "Onboarding notification for '{}' not delivered: {}",
                        payload.firm_name,
                        response
                            .email_error
                            .or(response.error)
                            .unwrap_or_default()
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Onboarding notification for '{}' failed: {}",
                        payload.firm_name,
                        e
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::wizard::models::StagedFile;
    use crate::shared::test_helpers::{
        acme_form, InMemoryObjectStore, InMemoryRecordStore, RecordingNotifier,
    };
    use axum::body::Bytes;
    use std::time::Duration;
    use tokio_test::assert_ok;

    struct Harness {
        objects: Arc<InMemoryObjectStore>,
        records: Arc<InMemoryRecordStore>,
        notifier: Arc<RecordingNotifier>,
        service: SubmissionService,
    }

    fn harness() -> Harness {
        let objects = Arc::new(InMemoryObjectStore::default());
        let records = Arc::new(InMemoryRecordStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = SubmissionService::new(objects.clone(), records.clone(), notifier.clone());
        Harness {
            objects,
            records,
            notifier,
            service,
        }
    }

    #[tokio::test]
    async fn test_acme_submission_writes_one_child_row() {
        let h = harness();
        let form = acme_form();

        let outcome = h.service.submit(&form).await.unwrap();

        assert_eq!(outcome.email_accounts, 1);
        let submissions = h.records.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].firm_name, "Acme LLP");
        assert_eq!(submissions[0].country, "UAE");
        assert_eq!(submissions[0].logo_url, "");

        let accounts = h.records.email_accounts();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].submission_id, outcome.submission_id);
        assert_eq!(accounts[0].name, form.emails[0].name);
        assert_eq!(accounts[0].password, form.emails[0].password);

        let payload = h.notifier.next_payload(Duration::from_secs(1)).await.unwrap();
        assert_eq!(payload.firm_name, "Acme LLP");
        assert_eq!(payload.emails.len(), 1);
        assert!(h.objects.keys().is_empty());
    }

    #[tokio::test]
    async fn test_partial_email_entries_are_skipped() {
        let h = harness();
        let mut form = acme_form();
        form.emails[1].name = "Second".to_string();
        form.emails[1].email = "second@acme.ae".to_string();

        let outcome = h.service.submit(&form).await.unwrap();

        assert_eq!(outcome.email_accounts, 1);
        let payload = h.notifier.next_payload(Duration::from_secs(1)).await.unwrap();
        // Named entries are listed even without a password
        assert_eq!(payload.emails.len(), 2);
    }

    #[tokio::test]
    async fn test_no_complete_entries_writes_no_children() {
        let h = harness();
        let mut form = acme_form();
        form.emails[0].password.clear();

        let outcome = h.service.submit(&form).await.unwrap();

        assert_eq!(outcome.email_accounts, 0);
        assert!(h.records.email_accounts().is_empty());
        assert_eq!(h.records.submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_notification_still_succeeds() {
        let h = harness();
        h.notifier.fail_next();

        assert_ok!(h.service.submit(&acme_form()).await);

        assert_eq!(h.records.submissions().len(), 1);
        assert_eq!(h.records.email_accounts().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_parent_write_writes_no_children() {
        let h = harness();
        h.records.fail_submissions();

        let result = h.service.submit(&acme_form()).await;

        assert!(matches!(result, Err(AppError::SubmissionFailed(_))));
        assert!(h.records.email_accounts().is_empty());
        assert!(h
            .notifier
            .next_payload(Duration::from_millis(100))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_failing_child_write_fails_but_keeps_parent() {
        let h = harness();
        h.records.fail_email_accounts();

        let result = h.service.submit(&acme_form()).await;

        assert!(matches!(result, Err(AppError::SubmissionFailed(_))));
        assert_eq!(h.records.submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_before_any_write() {
        let h = harness();
        h.objects.fail_uploads();
        let mut form = acme_form();
        form.stage_file(
            FileSlot::Logo,
            StagedFile::new("logo.png", "image/png", Bytes::from_static(b"png")),
        );

        let result = h.service.submit(&form).await;

        assert!(matches!(result, Err(AppError::SubmissionFailed(_))));
        assert!(h.records.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_staged_files_are_uploaded_under_category_paths() {
        let h = harness();
        let mut form = acme_form();
        form.stage_file(
            FileSlot::Logo,
            StagedFile::new("logo.png", "image/png", Bytes::from_static(b"png")),
        );
        form.stage_file(
            FileSlot::CompanyProfile,
            StagedFile::new("Acme Profile.pdf", "application/pdf", Bytes::from_static(b"%PDF")),
        );

        h.service.submit(&form).await.unwrap();

        let keys = h.objects.keys();
        assert_eq!(keys.len(), 2);
        let logo_key = &keys[0];
        let (category, rest) = logo_key.split_once('/').unwrap();
        assert_eq!(category, "logos");
        let (millis, name) = rest.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(name, "logo.png");
        assert!(keys[1].starts_with("company-profiles/"));
        assert!(keys[1].ends_with("-Acme_Profile.pdf"));

        let stored = &h.records.submissions()[0];
        assert_eq!(stored.logo_url, h.objects.url_for(logo_key));
        assert_eq!(stored.do_not_contact_file_url, "");
        assert!(!stored.company_profile_file_url.is_empty());
    }
}
