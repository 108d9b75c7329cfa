//! Thin client for the Resend transactional email API.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResendError {
    #[error("Resend rejected the email: HTTP {status} - {body}")]
    Rejected { status: u16, body: String },

    #[error("Resend request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ResendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

pub struct ResendClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl ResendClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, ResendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResendError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }

    pub async fn send(&self, email: &ResendEmail) -> Result<(), ResendError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| ResendError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ResendError::Rejected {
                status,
                body: truncate(&body),
            });
        }

        tracing::debug!("Resend accepted email to {:?}", email.to);
        Ok(())
    }
}

fn truncate(s: &str) -> String {
    const MAX: usize = 512;
    match s.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
