use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::wizard::models::{LeadershipContact, OnboardingForm};

/// Condensed view of a submission sent to the notification function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingNotification {
    pub firm_name: String,
    #[serde(default)]
    pub website: String,
    pub country: String,
    pub managing_partner: ContactSummary,
    pub spoc: ContactSummary,
    #[serde(default)]
    pub emails: Vec<EmailSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactSummary {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Mailbox listed in the notification; credentials are never forwarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailSummary {
    pub name: String,
    pub email: String,
}

impl From<&LeadershipContact> for ContactSummary {
    fn from(contact: &LeadershipContact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

impl From<&OnboardingForm> for OnboardingNotification {
    fn from(form: &OnboardingForm) -> Self {
        Self {
            firm_name: form.firm.firm_name.clone(),
            website: form.firm.website.clone(),
            country: form.firm.country.clone(),
            managing_partner: (&form.leadership.managing_partner).into(),
            spoc: (&form.leadership.spoc).into(),
            emails: form
                .emails
                .iter()
                .filter(|entry| entry.is_named())
                .map(|entry| EmailSummary {
                    name: entry.name.clone(),
                    email: entry.email.clone(),
                })
                .collect(),
        }
    }
}

/// Request body accepted by `POST /api/notifications/onboarding`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequestDto {
    pub onboarding_data: OnboardingNotification,
}

/// Soft-success envelope returned by the notification function.
///
/// `success` stays `true` whenever the request itself was understood; email
/// delivery problems are reported through `email_error` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationResponse {
    pub fn sent() -> Self {
        Self::soft("Form submitted and notification email sent successfully")
    }

    pub fn skipped() -> Self {
        Self::soft(
            "Form submitted successfully (email notification skipped - API key not configured)",
        )
    }

    pub fn delivery_failed(email_error: impl Into<String>) -> Self {
        Self {
            email_error: Some(email_error.into()),
            ..Self::soft("Form submitted successfully (email notification failed to send)")
        }
    }

    pub fn errored(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::soft(
                "Form submitted successfully (email notification encountered an error)",
            )
        }
    }

    fn soft(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            email_error: None,
            error: None,
        }
    }
}
