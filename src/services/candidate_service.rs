use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::candidate_dto::UpdateCandidatePayload;
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateProfile};

pub(crate) const CANDIDATE_COLUMNS: &str = "id, name, email, phone, position, experience, \
     status, assigned_company, interview_date, skills, created_by, created_at";

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        candidate.ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    /// Full-document replace; email is normalized the same way creation
    /// normalizes it.
    pub async fn update(&self, id: Uuid, payload: UpdateCandidatePayload) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "UPDATE candidates \
             SET name = $1, email = $2, phone = $3, position = $4, experience = $5, \
                 status = $6, skills = $7, assigned_company = $8, interview_date = $9 \
             WHERE id = $10 \
             RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(&payload.name)
        .bind(payload.email.to_lowercase())
        .bind(&payload.phone)
        .bind(&payload.position)
        .bind(&payload.experience)
        .bind(&payload.status)
        .bind(&payload.skills)
        .bind(payload.assigned_company)
        .bind(payload.interview_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        candidate.ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "UPDATE candidates SET status = $1 WHERE id = $2 RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        candidate.ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Candidate not found".to_string()));
        }
        Ok(())
    }

    /// Self-service profile view: the candidate record resolved by the
    /// caller's login email, with display names joined in.
    pub async fn get_profile_by_email(&self, email: &str) -> Result<CandidateProfile> {
        let profile = sqlx::query_as::<_, CandidateProfile>(
            r#"SELECT c.id, c.name, c.email, c.phone, c.position, c.experience, c.status,
                      c.assigned_company, co.name AS assigned_company_name,
                      c.interview_date, c.skills,
                      u.name AS created_by_name, u.email AS created_by_email,
                      c.created_at
               FROM candidates c
               LEFT JOIN companies co ON co.id = c.assigned_company
               LEFT JOIN users u ON u.id = c.created_by
               WHERE c.email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        profile.ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }
}
