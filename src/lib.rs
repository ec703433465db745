pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService, candidate_service::CandidateService,
    company_service::CompanyService, interview_service::InterviewService,
    mailer_service::MailerService, onboarding_service::OnboardingService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub candidate_service: CandidateService,
    pub company_service: CompanyService,
    pub interview_service: InterviewService,
    pub onboarding_service: OnboardingService,
    pub mailer: MailerService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let config = Arc::new(config);
        let mailer = MailerService::new(pool.clone(), &config);
        let auth_service =
            AuthService::new(pool.clone(), mailer.clone(), config.jwt_secret.clone());
        let candidate_service = CandidateService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());
        let onboarding_service = OnboardingService::new(pool.clone(), mailer.clone());

        Self {
            pool,
            config,
            auth_service,
            candidate_service,
            company_service,
            interview_service,
            onboarding_service,
            mailer,
        }
    }
}
