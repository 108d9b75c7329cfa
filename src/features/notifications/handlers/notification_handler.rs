use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::features::notifications::dtos::{NotificationRequestDto, NotificationResponse};
use crate::features::notifications::services::NotificationService;

/// Send the "new client onboarded" email
///
/// Always answers 200. A body that cannot be read still gets the soft
/// envelope, with the parse problem in `error`.
#[utoipa::path(
    post,
    path = "/api/notifications/onboarding",
    request_body = NotificationRequestDto,
    responses(
        (status = 200, description = "Notification handled", body = NotificationResponse)
    ),
    tag = "notifications"
)]
pub async fn send_onboarding_notification(
    State(service): State<Arc<NotificationService>>,
    body: Bytes,
) -> Json<NotificationResponse> {
    let request: NotificationRequestDto = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Unreadable notification request: {}", e);
            return Json(NotificationResponse::errored(e.to_string()));
        }
    };

    Json(service.notify(&request.onboarding_data).await)
}
