use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        auth_dto::MessageResponse,
        company_dto::{CreateCompanyPayload, UpdateCompanyPayload},
        AppJson,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/companies",
    responses(
        (status = 200, description = "List of companies"),
        (status = 403, description = "Requires admin or recruiter role")
    )
)]
#[axum::debug_handler]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let companies = state.company_service.list().await?;
    Ok(Json(companies))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company found"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let company = state.company_service.get(id).await?;
    Ok(Json(company))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    responses(
        (status = 201, description = "Company created successfully"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state.company_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company updated successfully"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state.company_service.update(id, payload).await?;
    Ok(Json(company))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company deleted successfully"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.company_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Company deleted successfully")))
}
