use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::notifications::dtos::{NotificationResponse, OnboardingNotification};

/// Delivers the "new client onboarded" notification.
///
/// Implementations report transport-level failures as `Err`. A response with
/// `success: false` or an email error is still `Ok`; callers decide how much
/// they care.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(&self, payload: &OnboardingNotification) -> Result<NotificationResponse>;
}
