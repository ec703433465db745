pub mod auth_dto;
pub mod candidate_dto;
pub mod company_dto;
pub mod interview_dto;

use axum::extract::FromRequest;

use crate::error::Error;

/// `axum::Json` with rejections folded into the API error envelope, so a
/// malformed or incomplete body surfaces as `400 {"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);
