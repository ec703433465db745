use axum::{extract::State, response::IntoResponse, Extension, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        auth_dto::{LoginPayload, MessageResponse, ResetPasswordPayload, SendOtpPayload},
        AppJson,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let response = state.auth_service.login(payload).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| Error::Unauthorized("Invalid token subject".to_string()))?;
    let user = state.auth_service.current_user(user_id).await?;
    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn send_otp(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SendOtpPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.auth_service.send_otp(&payload.email).await?;
    Ok(Json(MessageResponse::new("OTP sent")))
}

#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ResetPasswordPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.auth_service.reset_password(payload).await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
