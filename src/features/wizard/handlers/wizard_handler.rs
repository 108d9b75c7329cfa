use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::wizard::dtos::{
    DeleteSessionResponseDto, StageFileDto, StepDataDto, SubmitResponseDto, WizardStateDto,
};
use crate::features::wizard::models::{FileSlot, StagedFile, WizardSession};
use crate::features::wizard::services::WizardService;
use crate::shared::constants::SUBMISSION_SUCCEEDED_MESSAGE;
use crate::shared::types::ApiResponse;

type StateResponse = Result<Json<ApiResponse<WizardStateDto>>>;

fn state_response(session: &WizardSession) -> StateResponse {
    Ok(Json(ApiResponse::success(Some(session.into()), None, None)))
}

/// Start a new onboarding wizard session
#[utoipa::path(
    post,
    path = "/api/onboarding/sessions",
    responses(
        (status = 201, description = "Session created on step 1", body = ApiResponse<WizardStateDto>)
    ),
    tag = "onboarding"
)]
pub async fn create_session(
    State(service): State<Arc<WizardService>>,
) -> (StatusCode, Json<ApiResponse<WizardStateDto>>) {
    let session = service.create_session().await;
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(Some((&session).into()), None, None)),
    )
}

/// Current step, step list and form contents
#[utoipa::path(
    get,
    path = "/api/onboarding/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Wizard state", body = ApiResponse<WizardStateDto>),
        (status = 404, description = "Session not found")
    ),
    tag = "onboarding"
)]
pub async fn get_session(
    State(service): State<Arc<WizardService>>,
    AppPath(id): AppPath<Uuid>,
) -> StateResponse {
    state_response(&service.get_session(id).await?)
}

/// Replace the fields of one step
#[utoipa::path(
    put,
    path = "/api/onboarding/sessions/{id}/form",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = StepDataDto,
    responses(
        (status = 200, description = "Step saved", body = ApiResponse<WizardStateDto>),
        (status = 400, description = "Field too long or malformed payload"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is submitting or already submitted")
    ),
    tag = "onboarding"
)]
pub async fn update_step(
    State(service): State<Arc<WizardService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<StepDataDto>,
) -> StateResponse {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state_response(&service.update_step(id, dto).await?)
}

/// Go to the next step
#[utoipa::path(
    post,
    path = "/api/onboarding/sessions/{id}/advance",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Moved forward, or stayed on the last step", body = ApiResponse<WizardStateDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is submitting or already submitted")
    ),
    tag = "onboarding"
)]
pub async fn advance(
    State(service): State<Arc<WizardService>>,
    AppPath(id): AppPath<Uuid>,
) -> StateResponse {
    state_response(&service.advance(id).await?)
}

/// Go to the previous step
#[utoipa::path(
    post,
    path = "/api/onboarding/sessions/{id}/retreat",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Moved back, or stayed on the first step", body = ApiResponse<WizardStateDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is submitting or already submitted")
    ),
    tag = "onboarding"
)]
pub async fn retreat(
    State(service): State<Arc<WizardService>>,
    AppPath(id): AppPath<Uuid>,
) -> StateResponse {
    state_response(&service.retreat(id).await?)
}

/// Attach a file to a slot
///
/// Accepts multipart/form-data with a single `file` field. Slots are
/// `logo`, `do_not_contact` and `company_profile`.
#[utoipa::path(
    post,
    path = "/api/onboarding/sessions/{id}/files/{slot}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("slot" = FileSlot, Path, description = "File slot")
    ),
    request_body(
        content = StageFileDto,
        content_type = "multipart/form-data",
        description = "The file to stage",
    ),
    responses(
        (status = 200, description = "File staged", body = ApiResponse<WizardStateDto>),
        (status = 400, description = "Missing file or disallowed type"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is submitting or already submitted"),
        (status = 413, description = "File too large")
    ),
    tag = "onboarding"
)]
pub async fn stage_file(
    State(service): State<Arc<WizardService>>,
    AppPath((id, slot)): AppPath<(Uuid, FileSlot)>,
    mut multipart: Multipart,
) -> StateResponse {
    let mut staged: Option<StagedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            debug!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unnamed".to_string());
        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read file bytes: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        staged = Some(StagedFile::new(file_name, content_type, data));
    }

    let file = staged.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    state_response(&service.stage_file(id, slot, file).await?)
}

/// Remove the file staged in a slot
#[utoipa::path(
    delete,
    path = "/api/onboarding/sessions/{id}/files/{slot}",
    params(
        ("id" = Uuid, Path, description = "Session ID"),
        ("slot" = FileSlot, Path, description = "File slot")
    ),
    responses(
        (status = 200, description = "Slot cleared", body = ApiResponse<WizardStateDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is submitting or already submitted")
    ),
    tag = "onboarding"
)]
pub async fn remove_file(
    State(service): State<Arc<WizardService>>,
    AppPath((id, slot)): AppPath<(Uuid, FileSlot)>,
) -> StateResponse {
    state_response(&service.remove_file(id, slot).await?)
}

/// Submit the form
///
/// Uploads staged files, stores the submission and its email accounts, then
/// fires the notification in the background.
#[utoipa::path(
    post,
    path = "/api/onboarding/sessions/{id}/submit",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Submission stored", body = ApiResponse<SubmitResponseDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Not on the last step, or already submitting/submitted"),
        (status = 500, description = "Submission failed; the form can be submitted again")
    ),
    tag = "onboarding"
)]
pub async fn submit(
    State(service): State<Arc<WizardService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<SubmitResponseDto>>> {
    let (session, outcome) = service.submit(id).await?;
    let dto = SubmitResponseDto {
        session: (&session).into(),
        submission: outcome.into(),
    };
    Ok(Json(ApiResponse::success(
        Some(dto),
        Some(SUBMISSION_SUCCEEDED_MESSAGE.to_string()),
        None,
    )))
}

/// Start over with an empty form
#[utoipa::path(
    post,
    path = "/api/onboarding/sessions/{id}/reset",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session reset to step 1", body = ApiResponse<WizardStateDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "A submission is in progress")
    ),
    tag = "onboarding"
)]
pub async fn reset(
    State(service): State<Arc<WizardService>>,
    AppPath(id): AppPath<Uuid>,
) -> StateResponse {
    state_response(&service.reset(id).await?)
}

/// Discard a session
#[utoipa::path(
    delete,
    path = "/api/onboarding/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session deleted", body = ApiResponse<DeleteSessionResponseDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "A submission is in progress")
    ),
    tag = "onboarding"
)]
pub async fn delete_session(
    State(service): State<Arc<WizardService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<DeleteSessionResponseDto>>> {
    service.delete_session(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteSessionResponseDto { session_id: id }),
        Some("Session deleted".to_string()),
        None,
    )))
}
