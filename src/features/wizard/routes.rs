use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::features::wizard::handlers;
use crate::features::wizard::services::WizardService;

/// Multipart framing on top of the file itself
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Create routes for the onboarding wizard
pub fn routes(service: Arc<WizardService>, max_upload_file_size: usize) -> Router {
    Router::new()
        .route("/api/onboarding/sessions", post(handlers::create_session))
        .route(
            "/api/onboarding/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/api/onboarding/sessions/{id}/form", put(handlers::update_step))
        .route("/api/onboarding/sessions/{id}/advance", post(handlers::advance))
        .route("/api/onboarding/sessions/{id}/retreat", post(handlers::retreat))
        .route(
            "/api/onboarding/sessions/{id}/files/{slot}",
            post(handlers::stage_file)
                .layer(DefaultBodyLimit::max(
                    max_upload_file_size.saturating_add(MULTIPART_OVERHEAD),
                ))
                .delete(handlers::remove_file),
        )
        .route("/api/onboarding/sessions/{id}/submit", post(handlers::submit))
        .route("/api/onboarding/sessions/{id}/reset", post(handlers::reset))
        .with_state(service)
}
