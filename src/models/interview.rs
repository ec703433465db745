use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const INTERVIEW_KINDS: [&str; 4] = ["Technical", "HR Round", "Managerial", "Other"];

pub const INTERVIEW_STATUSES: [&str; 4] = ["scheduled", "completed", "cancelled", "rescheduled"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
    pub candidate_id: Uuid,
    // snapshot of the candidate name at creation time, not synced with renames
    pub candidate_name: String,
    pub company_id: Uuid,
    pub company_name: String,
    pub position: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub interviewer: String,
    pub created_at: DateTime<Utc>,
}
