use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        auth_dto::MessageResponse,
        candidate_dto::{
            CreateCandidatePayload, UpdateCandidatePayload, UpdateCandidateStatusPayload,
        },
        AppJson,
    },
    error::Result,
    middleware::auth::Claims,
    AppState,
};

pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list().await?;
    Ok(Json(candidates))
}

pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(id).await?;
    Ok(Json(candidate))
}

/// Runs the full onboarding workflow, not just the insert; see
/// `OnboardingService`.
pub async fn create_candidate(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let created_by = claims.sub.parse::<Uuid>().ok();
    let candidate = state.onboarding_service.onboard(payload, created_by).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.update(id, payload).await?;
    Ok(Json(candidate))
}

pub async fn update_candidate_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateCandidateStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state
        .candidate_service
        .update_status(id, &payload.status)
        .await?;
    Ok(Json(candidate))
}

pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Candidate deleted successfully")))
}
