use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::interview_dto::{
    CreateInterviewPayload, InterviewListQuery, UpdateInterviewPayload,
};
use crate::error::{Error, Result};
use crate::models::interview::Interview;

pub(crate) const INTERVIEW_COLUMNS: &str = "id, candidate_id, candidate_name, company_id, \
     company_name, position, date, time, kind, status, interviewer, created_at";

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolves both references and snapshots their current names into the
    /// interview row. The snapshots are intentionally never synced with
    /// later renames.
    pub async fn create(&self, payload: CreateInterviewPayload) -> Result<Interview> {
        let candidate_name: Option<(String,)> =
            sqlx::query_as("SELECT name FROM candidates WHERE id = $1")
                .bind(payload.candidate_id)
                .fetch_optional(&self.pool)
                .await?;
        let company_name: Option<(String,)> =
            sqlx::query_as("SELECT name FROM companies WHERE id = $1")
                .bind(payload.company_id)
                .fetch_optional(&self.pool)
                .await?;

        let (Some((candidate_name,)), Some((company_name,))) = (candidate_name, company_name)
        else {
            return Err(Error::NotFound("Candidate or Company not found".to_string()));
        };

        let status = payload
            .status
            .clone()
            .unwrap_or_else(|| "scheduled".to_string());

        let interview = sqlx::query_as::<_, Interview>(&format!(
            "INSERT INTO interviews \
                 (candidate_id, candidate_name, company_id, company_name, \
                  position, date, time, kind, status, interviewer) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {INTERVIEW_COLUMNS}"
        ))
        .bind(payload.candidate_id)
        .bind(&candidate_name)
        .bind(payload.company_id)
        .bind(&company_name)
        .bind(&payload.position)
        .bind(payload.date)
        .bind(&payload.time)
        .bind(&payload.kind)
        .bind(&status)
        .bind(&payload.interviewer)
        .fetch_one(&self.pool)
        .await?;
        Ok(interview)
    }

    pub async fn get(&self, id: Uuid) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(&format!(
            "SELECT {INTERVIEW_COLUMNS} FROM interviews WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        interview.ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    pub async fn list(&self, query: InterviewListQuery) -> Result<Vec<Interview>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {INTERVIEW_COLUMNS} FROM interviews WHERE 1 = 1"
        ));
        if let Some(status) = &query.status {
            builder.push(" AND status = ").push_bind(status.clone());
        }
        if let Some(date) = query.date {
            builder.push(" AND date = ").push_bind(date);
        }
        builder.push(" ORDER BY created_at DESC");

        let interviews = builder
            .build_query_as::<Interview>()
            .fetch_all(&self.pool)
            .await?;
        Ok(interviews)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateInterviewPayload) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(&format!(
            "UPDATE interviews \
             SET position = $1, date = $2, time = $3, kind = $4, status = $5, interviewer = $6 \
             WHERE id = $7 \
             RETURNING {INTERVIEW_COLUMNS}"
        ))
        .bind(&payload.position)
        .bind(payload.date)
        .bind(&payload.time)
        .bind(&payload.kind)
        .bind(&payload.status)
        .bind(&payload.interviewer)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        interview.ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(&format!(
            "UPDATE interviews SET status = $1 WHERE id = $2 RETURNING {INTERVIEW_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        interview.ok_or_else(|| Error::NotFound("Interview not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Interview not found".to_string()));
        }
        Ok(())
    }
}
