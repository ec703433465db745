use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::candidate_dto::CreateCandidatePayload;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::company::Company;
use crate::services::candidate_service::CANDIDATE_COLUMNS;
use crate::services::company_service::COMPANY_COLUMNS;
use crate::services::mailer_service::{MailerService, OutboundEmail};
use crate::utils::ics::{self, InterviewInvite};
use crate::utils::{crypto, secrets};

/// Creates a candidate and the notifications that go with it.
///
/// The candidate row, the login account, and the three notification
/// intents are committed in one transaction; actual delivery happens in
/// the outbox worker, so a mail-provider outage can delay emails but can
/// never roll back or fail an onboarding that committed.
#[derive(Clone)]
pub struct OnboardingService {
    pool: PgPool,
    mailer: MailerService,
}

impl OnboardingService {
    pub fn new(pool: PgPool, mailer: MailerService) -> Self {
        Self { pool, mailer }
    }

    pub async fn onboard(
        &self,
        payload: CreateCandidatePayload,
        created_by: Option<Uuid>,
    ) -> Result<Candidate> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1"
        ))
        .bind(payload.assigned_company)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Assigned company not found".to_string()))?;

        let email = payload.email.to_lowercase();
        let status = payload
            .status
            .clone()
            .unwrap_or_else(|| "active".to_string());

        let mut tx = self.pool.begin().await?;

        let taken = sqlx::query("SELECT id FROM candidates WHERE email = $1")
            .bind(&email)
            .fetch_optional(&mut *tx)
            .await?;
        if taken.is_some() {
            return Err(Error::Conflict(
                "A candidate with this email address already exists".to_string(),
            ));
        }

        // Concurrent onboardings for the same email race past the check
        // above; the unique index settles it and the loser gets a 409.
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "INSERT INTO candidates \
                 (name, email, phone, position, experience, status, \
                  assigned_company, interview_date, skills, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {CANDIDATE_COLUMNS}"
        ))
        .bind(&payload.name)
        .bind(&email)
        .bind(&payload.phone)
        .bind(&payload.position)
        .bind(&payload.experience)
        .bind(&status)
        .bind(payload.assigned_company)
        .bind(payload.interview_date)
        .bind(&payload.skills)
        .bind(created_by)
        .fetch_one(&mut *tx)
        .await?;

        let temp_password = secrets::generate_temp_password();
        let password_hash = crypto::hash_password(&temp_password)
            .map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))?;
        let account = sqlx::query(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, 'candidate') \
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(&candidate.name)
        .bind(&email)
        .bind(&password_hash)
        .execute(&mut *tx)
        .await?;
        if account.rows_affected() == 0 {
            tracing::warn!(
                email = %email,
                "login account already exists for this email; emailed temp password will not apply"
            );
        }

        self.mailer
            .enqueue(&mut *tx, onboarding_email(&candidate, &temp_password))
            .await?;
        self.mailer
            .enqueue(&mut *tx, assignment_email(&candidate, &company))
            .await?;

        let (organizer_name, organizer_email) = self.mailer.from_mailbox();
        let invite = InterviewInvite {
            position: &candidate.position,
            company_name: &company.name,
            candidate_name: &candidate.name,
            candidate_email: &candidate.email,
            organizer_name: &organizer_name,
            organizer_email: &organizer_email,
            interview_date: payload.interview_date,
        };
        match ics::render_invite(&invite, Uuid::new_v4(), Utc::now()) {
            Ok(event) => {
                self.mailer
                    .enqueue(&mut *tx, invite_email(&candidate, &company, event))
                    .await?;
            }
            Err(err) => {
                tracing::error!(error = ?err, candidate_id = %candidate.id,
                    "calendar invite generation failed; skipping invite email");
            }
        }

        tx.commit().await?;

        tracing::info!(candidate_id = %candidate.id, company_id = %company.id,
            "candidate onboarded");
        Ok(candidate)
    }
}

fn onboarding_email(candidate: &Candidate, temp_password: &str) -> OutboundEmail {
    OutboundEmail {
        to: vec![candidate.email.clone()],
        subject: "Candidate Interview platform".to_string(),
        html: format!(
            "<h2>Welcome, {name}</h2>\
             <p>Your candidate account has been created.</p>\
             <p><strong>Email:</strong> {email}</p>\
             <p><strong>Temporary Password:</strong> {password}</p>\
             <p>Please change your password after first login.</p>\
             <p>Regards,<br/>CEP Team</p>",
            name = candidate.name,
            email = candidate.email,
            password = temp_password,
        ),
        ics: None,
    }
}

fn assignment_email(candidate: &Candidate, company: &Company) -> OutboundEmail {
    OutboundEmail {
        to: vec![candidate.email.clone(), company.poc_email.clone()],
        subject: format!("Candidate Assigned – {}", candidate.name),
        html: format!(
            "<h2>Candidate Assigned</h2>\
             <p><strong>{name}</strong> has been assigned to <strong>{company}</strong>.</p>\
             <p>Position: {position}</p>\
             <p>Experience: {experience} years</p>",
            name = candidate.name,
            company = company.name,
            position = candidate.position,
            experience = candidate.experience,
        ),
        ics: None,
    }
}

fn invite_email(candidate: &Candidate, company: &Company, event: String) -> OutboundEmail {
    let date_line = candidate
        .interview_date
        .map(|d| d.format("%A, %d %B %Y").to_string())
        .unwrap_or_else(|| "to be confirmed".to_string());
    OutboundEmail {
        to: vec![candidate.email.clone()],
        subject: format!("Interview Scheduled – {}", candidate.position),
        html: format!(
            "<h2>Interview Details</h2>\
             <p>Hello {name},</p>\
             <p>Your interview for the position of <strong>{position}</strong> is scheduled.</p>\
             <p><strong>Date:</strong> {date}</p>\
             <p><strong>Company:</strong> {company}</p>\
             <p>Please find the calendar invite attached.</p>",
            name = candidate.name,
            position = candidate.position,
            date = date_line,
            company = company.name,
        ),
        ics: Some(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_candidate() -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: "Jane Candidate".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0101".to_string(),
            position: "Backend Engineer".to_string(),
            experience: "4".to_string(),
            status: "active".to_string(),
            assigned_company: Some(Uuid::new_v4()),
            interview_date: Some(Utc.with_ymd_and_hms(2026, 8, 21, 10, 0, 0).unwrap()),
            skills: vec!["rust".to_string()],
            created_by: None,
            created_at: Utc::now(),
        }
    }

    fn sample_company() -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "Tech Corp".to_string(),
            industry: "Software".to_string(),
            location: None,
            website: None,
            poc_name: "Tech Corp HR".to_string(),
            poc_email: "hr@techcorp.com".to_string(),
            poc_phone: "555-0100".to_string(),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn onboarding_email_carries_temp_password() {
        let mail = onboarding_email(&sample_candidate(), "a1B2c3D4");
        assert_eq!(mail.to, vec!["jane@example.com"]);
        assert!(mail.html.contains("a1B2c3D4"));
        assert!(mail.html.contains("jane@example.com"));
    }

    #[test]
    fn assignment_email_goes_to_candidate_and_poc() {
        let mail = assignment_email(&sample_candidate(), &sample_company());
        assert_eq!(mail.to, vec!["jane@example.com", "hr@techcorp.com"]);
        assert!(mail.subject.contains("Jane Candidate"));
        assert!(mail.html.contains("Tech Corp"));
        assert!(mail.html.contains("Backend Engineer"));
    }

    #[test]
    fn invite_email_attaches_event() {
        let mail = invite_email(
            &sample_candidate(),
            &sample_company(),
            "BEGIN:VCALENDAR\r\n".to_string(),
        );
        assert_eq!(mail.to, vec!["jane@example.com"]);
        assert!(mail.subject.contains("Backend Engineer"));
        assert!(mail.ics.as_deref().unwrap().starts_with("BEGIN:VCALENDAR"));
        assert!(mail.html.contains("Friday, 21 August 2026"));
    }
}
