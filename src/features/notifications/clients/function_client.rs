//! Invokes a notification function deployed elsewhere over HTTP.

use async_trait::async_trait;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::notifications::dispatcher::NotificationDispatcher;
use crate::features::notifications::dtos::{
    NotificationRequestDto, NotificationResponse, OnboardingNotification,
};

pub struct NotificationFunctionClient {
    client: reqwest::Client,
    function_url: String,
    api_key: Option<String>,
}

impl NotificationFunctionClient {
    pub fn new(function_url: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            function_url,
            api_key,
        })
    }
}

#[async_trait]
impl NotificationDispatcher for NotificationFunctionClient {
    async fn dispatch(&self, payload: &OnboardingNotification) -> Result<NotificationResponse> {
        let body = NotificationRequestDto {
            onboarding_data: payload.clone(),
        };

        let mut request = self.client.post(&self.function_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Notification function unreachable: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Notification function returned HTTP {}: {}",
                status, body
            )));
        }

        response.json::<NotificationResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!(
                "Notification function sent an unreadable response: {}",
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notifications::dtos::ContactSummary;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Seen {
        authorization: Arc<Mutex<Option<String>>>,
        firm_name: Arc<Mutex<Option<String>>>,
    }

    async fn accept(
        State(seen): State<Seen>,
        headers: HeaderMap,
        Json(body): Json<NotificationRequestDto>,
    ) -> Json<NotificationResponse> {
        *seen.authorization.lock().unwrap() = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        *seen.firm_name.lock().unwrap() = Some(body.onboarding_data.firm_name);
        Json(NotificationResponse::delivery_failed("mailbox full"))
    }

    async fn stub_function(seen: Seen) -> String {
        let app = Router::new()
            .route("/notify", post(accept))
            .route(
                "/broken",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/garbage", post(|| async { "not json" }))
            .with_state(seen);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn payload() -> OnboardingNotification {
        OnboardingNotification {
            firm_name: "Acme LLP".to_string(),
            website: String::new(),
            country: "UAE".to_string(),
            managing_partner: ContactSummary::default(),
            spoc: ContactSummary::default(),
            emails: vec![],
        }
    }

    fn client(url: String, key: Option<&str>) -> NotificationFunctionClient {
        NotificationFunctionClient::new(url, key.map(str::to_string), Duration::from_secs(2))
            .unwrap()
    }

    #[tokio::test]
    async fn test_soft_envelope_is_returned_with_bearer_key() {
        let seen = Seen::default();
        let base = stub_function(seen.clone()).await;

        let response = client(format!("{}/notify", base), Some("fn-key"))
            .dispatch(&payload())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.email_error.as_deref(), Some("mailbox full"));
        assert_eq!(
            seen.authorization.lock().unwrap().as_deref(),
            Some("Bearer fn-key")
        );
        assert_eq!(seen.firm_name.lock().unwrap().as_deref(), Some("Acme LLP"));
    }

    #[tokio::test]
    async fn test_no_key_sends_no_authorization() {
        let seen = Seen::default();
        let base = stub_function(seen.clone()).await;

        client(format!("{}/notify", base), None)
            .dispatch(&payload())
            .await
            .unwrap();

        assert!(seen.authorization.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_external_service_error() {
        let base = stub_function(Seen::default()).await;

        let result = client(format!("{}/broken", base), None)
            .dispatch(&payload())
            .await;

        match result {
            Err(AppError::ExternalServiceError(msg)) => assert!(msg.contains("500")),
            other => panic!("expected ExternalServiceError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreadable_body_is_external_service_error() {
        let base = stub_function(Seen::default()).await;

        let result = client(format!("{}/garbage", base), None)
            .dispatch(&payload())
            .await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_function_is_external_service_error() {
        let result = client("http://127.0.0.1:9/notify".to_string(), None)
            .dispatch(&payload())
            .await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
