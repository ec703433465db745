use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted notification intent. Rows are written in the same
/// transaction as the business change they announce and delivered
/// asynchronously by the outbox worker.
#[derive(Debug, Clone, FromRow)]
pub struct EmailOutbox {
    pub id: Uuid,
    pub mail_to: Vec<String>,
    pub subject: String,
    pub html_body: String,
    pub ics_attachment: Option<String>,
    pub status: String,
    pub attempts: i32,
    pub max_attempts: i32,
    pub next_retry_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
