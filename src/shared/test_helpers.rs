//! In-memory stand-ins for the submission collaborators, plus sample forms.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use chrono::Utc;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::notifications::dtos::{NotificationResponse, OnboardingNotification};
use crate::features::notifications::NotificationDispatcher;
use crate::features::submissions::models::{NewEmailAccount, NewSubmission, SubmissionRecord};
use crate::features::submissions::repository::RecordStore;
use crate::features::wizard::models::{EmailEntry, OnboardingForm};
use crate::modules::storage::{encode_key, ObjectStore};

const FAKE_BUCKET_URL: &str = "http://minio.test/onboarding-files";

#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<Vec<(String, Bytes)>>,
    fail: AtomicBool,
}

impl InMemoryObjectStore {
    pub fn fail_uploads(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Keys in upload order
    pub fn keys(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}", FAKE_BUCKET_URL, encode_key(key))
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put(&self, key: &str, data: Bytes, _content_type: &str) -> Result<String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Storage(format!("upload of '{}' refused", key)));
        }
        self.objects.lock().unwrap().push((key.to_string(), data));
        Ok(self.url_for(key))
    }
}

#[derive(Default)]
pub struct InMemoryRecordStore {
    submissions: Mutex<Vec<NewSubmission>>,
    email_accounts: Mutex<Vec<NewEmailAccount>>,
    fail_submissions: AtomicBool,
    fail_email_accounts: AtomicBool,
}

impl InMemoryRecordStore {
    pub fn fail_submissions(&self) {
        self.fail_submissions.store(true, Ordering::SeqCst);
    }

    pub fn fail_email_accounts(&self) {
        self.fail_email_accounts.store(true, Ordering::SeqCst);
    }

    pub fn submissions(&self) -> Vec<NewSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn email_accounts(&self) -> Vec<NewEmailAccount> {
        self.email_accounts.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert_submission(&self, submission: &NewSubmission) -> Result<SubmissionRecord> {
        if self.fail_submissions.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(SubmissionRecord {
            id: Uuid::now_v7(),
            firm_name: submission.firm_name.clone(),
            country: submission.country.clone(),
            created_at: Utc::now(),
        })
    }

    async fn insert_email_accounts(&self, accounts: &[NewEmailAccount]) -> Result<u64> {
        if self.fail_email_accounts.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        self.email_accounts
            .lock()
            .unwrap()
            .extend(accounts.iter().cloned());
        Ok(accounts.len() as u64)
    }
}

/// Forwards every dispatched payload to a channel the test can read from
pub struct RecordingNotifier {
    sender: mpsc::UnboundedSender<OnboardingNotification>,
    receiver: tokio::sync::Mutex<mpsc::UnboundedReceiver<OnboardingNotification>>,
    fail: AtomicBool,
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: tokio::sync::Mutex::new(receiver),
            fail: AtomicBool::new(false),
        }
    }
}

impl RecordingNotifier {
    /// The next dispatch is recorded, then reported as a transport failure
    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub async fn next_payload(&self, wait: Duration) -> Option<OnboardingNotification> {
        let mut receiver = self.receiver.lock().await;
        tokio::time::timeout(wait, receiver.recv())
            .await
            .ok()
            .flatten()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingNotifier {
    async fn dispatch(&self, payload: &OnboardingNotification) -> Result<NotificationResponse> {
        let _ = self.sender.send(payload.clone());
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "notification function unreachable".to_string(),
            ));
        }
        Ok(NotificationResponse::sent())
    }
}

/// "Acme LLP" in the UAE with one complete mailbox and two blank ones
pub fn acme_form() -> OnboardingForm {
    let mut form = OnboardingForm::default();
    form.firm.firm_name = "Acme LLP".to_string();
    form.firm.country = "UAE".to_string();
    form.emails[0] = EmailEntry {
        name: Name().fake(),
        email: SafeEmail().fake(),
        password: Password(8..16).fake(),
    };
    form.leadership.managing_partner.name = Name().fake();
    form.leadership.managing_partner.email = SafeEmail().fake();
    form.leadership.managing_partner.phone = PhoneNumber().fake();
    form
}
