use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        auth_dto::MessageResponse,
        interview_dto::{
            CreateInterviewPayload, InterviewListQuery, UpdateInterviewPayload,
            UpdateInterviewStatusPayload,
        },
        AppJson,
    },
    error::Result,
    AppState,
};

pub async fn list_interviews(
    State(state): State<AppState>,
    Query(query): Query<InterviewListQuery>,
) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list(query).await?;
    Ok(Json(interviews))
}

pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get(id).await?;
    Ok(Json(interview))
}

pub async fn create_interview(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.update(id, payload).await?;
    Ok(Json(interview))
}

pub async fn update_interview_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateInterviewStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state
        .interview_service
        .update_status(id, &payload.status)
        .await?;
    Ok(Json(interview))
}

pub async fn delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.interview_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Interview deleted successfully")))
}
