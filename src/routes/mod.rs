pub mod auth;
pub mod candidates;
pub mod companies;
pub mod health;
pub mod interviews;
pub mod profile;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::{
    error::Error,
    middleware::{auth as auth_mw, rate_limit},
    AppState,
};

/// Full route table with role gates layered per sub-router. Shared by the
/// binary and the router-level tests.
pub fn router(state: AppState) -> Router {
    let auth_public = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/send-otp", post(auth::send_otp))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .layer(from_fn_with_state(
            rate_limit::new_rps_state(state.config.auth_rps),
            rate_limit::rps_middleware,
        ));

    let authenticated = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/candidates/:id", get(candidates::get_candidate))
        .route(
            "/api/candidates/:id/status",
            patch(candidates::update_candidate_status),
        )
        .route("/api/companies/:id", get(companies::get_company))
        .route(
            "/api/interviews",
            get(interviews::list_interviews).post(interviews::create_interview),
        )
        .route(
            "/api/interviews/:id",
            get(interviews::get_interview)
                .put(interviews::update_interview)
                .delete(interviews::delete_interview),
        )
        .route(
            "/api/interviews/:id/status",
            patch(interviews::update_interview_status),
        )
        .layer(from_fn_with_state(
            state.clone(),
            auth_mw::require_bearer_auth,
        ));

    let staff = Router::new()
        .route(
            "/api/candidates",
            get(candidates::list_candidates).post(candidates::create_candidate),
        )
        .route("/api/candidates/:id", put(candidates::update_candidate))
        .route(
            "/api/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route("/api/companies/:id", put(companies::update_company))
        .layer(from_fn_with_state(
            state.clone(),
            auth_mw::require_admin_or_recruiter,
        ));

    let admin = Router::new()
        .route("/api/candidates/:id", delete(candidates::delete_candidate))
        .route("/api/companies/:id", delete(companies::delete_company))
        .layer(from_fn_with_state(state.clone(), auth_mw::require_admin));

    let candidate = Router::new()
        .route("/api/profile/me", get(profile::me))
        .layer(from_fn_with_state(state.clone(), auth_mw::require_candidate));

    Router::new()
        .route("/health", get(health::health))
        .merge(auth_public)
        .merge(authenticated)
        .merge(staff)
        .merge(admin)
        .merge(candidate)
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found() -> Error {
    Error::NotFound("Route not found".to_string())
}
