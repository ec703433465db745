use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const CANDIDATE_STATUSES: [&str; 8] = [
    "application_sent",
    "shortlisted",
    "interview_scheduled",
    "offer",
    "joined",
    "hired",
    "rejected",
    "active",
];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub status: String,
    pub assigned_company: Option<Uuid>,
    pub interview_date: Option<DateTime<Utc>>,
    pub skills: Vec<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Candidate joined with display fields for the self-service profile view.
/// The company and creator names are resolved at read time, not stored.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub status: String,
    pub assigned_company: Option<Uuid>,
    pub assigned_company_name: Option<String>,
    pub interview_date: Option<DateTime<Utc>>,
    pub skills: Vec<String>,
    pub created_by_name: Option<String>,
    pub created_by_email: Option<String>,
    pub created_at: DateTime<Utc>,
}
