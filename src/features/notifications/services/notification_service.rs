use async_trait::async_trait;
use serde_json::json;

use crate::core::config::NotificationConfig;
use crate::core::error::{AppError, Result};
use crate::features::notifications::clients::{ResendClient, ResendEmail, ResendError};
use crate::features::notifications::dispatcher::NotificationDispatcher;
use crate::features::notifications::dtos::{NotificationResponse, OnboardingNotification};
use crate::shared::templates::{render_template, ONBOARDING_NOTIFICATION_TEMPLATE};

const CAMPAIGN_LABEL: &str = "RSM MENA LinkedIn Campaign";
const SYSTEM_NAME: &str = "RSM MENA Onboarding System";

/// Sends the onboarding email through Resend from inside this process.
///
/// Every outcome is a soft success: a missing API key skips delivery, a
/// rejected send is reported in `email_error`, anything else in `error`.
pub struct NotificationService {
    client: Option<ResendClient>,
    from: String,
    to: Vec<String>,
}

impl NotificationService {
    pub fn new(config: &NotificationConfig) -> Result<Self> {
        let client = match &config.resend_api_key {
            Some(key) => Some(
                ResendClient::new(
                    key.clone(),
                    config.resend_api_url.clone(),
                    config.request_timeout,
                )
                .map_err(|e| AppError::Internal(e.to_string()))?,
            ),
            None => {
                tracing::warn!("RESEND_API_KEY not set, onboarding emails will be skipped");
                None
            }
        };

        Ok(Self {
            client,
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    pub async fn notify(&self, payload: &OnboardingNotification) -> NotificationResponse {
        let Some(client) = &self.client else {
            tracing::info!(
                "Skipping onboarding email for '{}': no API key",
                payload.firm_name
            );
            return NotificationResponse::skipped();
        };

        let email = match self.compose(payload) {
            Ok(email) => email,
            Err(e) => {
                tracing::error!("Failed to render onboarding email: {}", e);
                return NotificationResponse::errored(e);
            }
        };

        match client.send(&email).await {
            Ok(()) => {
                tracing::info!("Onboarding email sent for '{}'", payload.firm_name);
                NotificationResponse::sent()
            }
            Err(ResendError::Rejected { status, body }) => {
                tracing::warn!("Resend rejected onboarding email: HTTP {} {}", status, body);
                NotificationResponse::delivery_failed(body)
            }
            Err(e @ ResendError::Transport(_)) => {
                tracing::warn!("Onboarding email not sent: {}", e);
                NotificationResponse::errored(e.to_string())
            }
        }
    }

    fn compose(&self, payload: &OnboardingNotification) -> std::result::Result<ResendEmail, String> {
        let html = render_template(
            ONBOARDING_NOTIFICATION_TEMPLATE,
            json!({
                "campaign_label": CAMPAIGN_LABEL,
                "system_name": SYSTEM_NAME,
                "data": payload,
            }),
        )
        .map_err(|e| e.to_string())?;

        Ok(ResendEmail {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: subject_line(payload),
            html,
        })
    }
}

#[async_trait]
impl NotificationDispatcher for NotificationService {
    async fn dispatch(&self, payload: &OnboardingNotification) -> Result<NotificationResponse> {
        Ok(self.notify(payload).await)
    }
}

pub fn subject_line(payload: &OnboardingNotification) -> String {
    format!(
        "🎉 New Client Onboarded: {} ({})",
        payload.firm_name, payload.country
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notifications::dtos::{ContactSummary, EmailSummary};
    use std::time::Duration;

    fn payload() -> OnboardingNotification {
        OnboardingNotification {
            firm_name: "Acme LLP".to_string(),
            website: "acme.ae".to_string(),
            country: "UAE".to_string(),
            managing_partner: ContactSummary {
                name: "Sara".to_string(),
                email: "sara@acme.ae".to_string(),
                phone: "+971500000000".to_string(),
            },
            spoc: ContactSummary::default(),
            emails: vec![EmailSummary {
                name: "Outreach".to_string(),
                email: "out@acme.ae".to_string(),
            }],
        }
    }

    fn config(api_key: Option<&str>) -> NotificationConfig {
        NotificationConfig {
            resend_api_key: api_key.map(str::to_string),
            // Port 9 (discard) on loopback refuses connections quickly
            resend_api_url: "http://127.0.0.1:9/emails".to_string(),
            from: "System <noreply@example.com>".to_string(),
            to: vec!["ops@example.com".to_string()],
            function_url: None,
            function_key: None,
            request_timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn test_subject_line() {
        assert_eq!(
            subject_line(&payload()),
            "🎉 New Client Onboarded: Acme LLP (UAE)"
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_skips_delivery() {
        let service = NotificationService::new(&config(None)).unwrap();
        let response = service.notify(&payload()).await;
        assert!(response.success);
        assert!(response.message.unwrap().contains("skipped"));
        assert!(response.email_error.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_soft_failure() {
        let service = NotificationService::new(&config(Some("re_test"))).unwrap();
        let response = service.dispatch(&payload()).await.unwrap();
        assert!(response.success);
        assert!(response.error.is_some());
    }

    #[test]
    fn test_compose_renders_html_for_configured_recipients() {
        let service = NotificationService::new(&config(Some("re_test"))).unwrap();
        let email = service.compose(&payload()).unwrap();
        assert_eq!(email.to, vec!["ops@example.com"]);
        assert!(email.html.contains("Acme LLP"));
        assert!(email.html.contains("out@acme.ae"));
    }
}
