use axum::{extract::State, response::IntoResponse, Extension, Json};

use crate::{error::Result, middleware::auth::Claims, AppState};

/// Candidate self-profile, scoped to the caller's login email.
#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let profile = state
        .candidate_service
        .get_profile_by_email(&claims.email)
        .await?;
    Ok(Json(profile))
}
