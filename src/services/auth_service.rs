use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::{LoginPayload, LoginResponse, ResetPasswordPayload};
use crate::error::{Error, Result};
use crate::middleware::auth::issue_token;
use crate::models::otp::Otp;
use crate::models::user::User;
use crate::services::mailer_service::{MailerService, OutboundEmail};
use crate::utils::{crypto, secrets};

const OTP_TTL_MINUTES: i64 = 10;

const USER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    mailer: MailerService,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(pool: PgPool, mailer: MailerService, jwt_secret: String) -> Self {
        Self {
            pool,
            mailer,
            jwt_secret,
        }
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<LoginResponse> {
        let user = self.find_by_email(&payload.email).await?;
        let Some(user) = user else {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        };

        let valid = crypto::verify_password(&payload.password, &user.password_hash)
            .map_err(|e| Error::Internal(format!("password verification failed: {}", e)))?;
        if !valid {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }

        let token = issue_token(&self.jwt_secret, &user)
            .map_err(|e| Error::Internal(format!("token signing failed: {}", e)))?;
        Ok(LoginResponse { token, user })
    }

    pub async fn current_user(&self, user_id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        user.ok_or_else(|| Error::NotFound("User not found".to_string()))
    }

    /// Issues a reset code for the account. At most one code is
    /// outstanding per email; a repeat request overwrites the previous
    /// one. The code email is committed together with the OTP row.
    pub async fn send_otp(&self, email: &str) -> Result<()> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        let code = secrets::generate_otp_code();
        let expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO otps (email, code, expires_at) VALUES ($1, $2, $3) \
             ON CONFLICT (email) DO UPDATE \
             SET code = EXCLUDED.code, expires_at = EXCLUDED.expires_at, updated_at = NOW()",
        )
        .bind(&user.email)
        .bind(&code)
        .bind(expires_at)
        .execute(&mut *tx)
        .await?;

        self.mailer
            .enqueue(&mut *tx, otp_email(&user.email, &code))
            .await?;
        tx.commit().await?;

        tracing::info!(email = %user.email, "password reset OTP issued");
        Ok(())
    }

    /// Single-use reset: the OTP row is deleted in the same transaction
    /// that stores the new password hash.
    pub async fn reset_password(&self, payload: ResetPasswordPayload) -> Result<()> {
        let record = sqlx::query_as::<_, Otp>(
            "SELECT email, code, expires_at, created_at, updated_at FROM otps WHERE email = $1",
        )
        .bind(&payload.email)
        .fetch_optional(&self.pool)
        .await?;

        let valid = record.as_ref().is_some_and(|r| {
            crypto::secrets_match(&r.code, &payload.otp) && r.expires_at >= Utc::now()
        });
        if !valid {
            return Err(Error::BadRequest("Invalid or expired OTP".to_string()));
        }

        let password_hash = crypto::hash_password(&payload.new_password)
            .map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE users SET password_hash = $1, updated_at = NOW() WHERE email = $2")
            .bind(&password_hash)
            .bind(&payload.email)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM otps WHERE email = $1")
            .bind(&payload.email)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

fn otp_email(to: &str, code: &str) -> OutboundEmail {
    OutboundEmail {
        to: vec![to.to_string()],
        subject: "Password Reset OTP".to_string(),
        html: format!(
            "<p>Your OTP is <strong>{}</strong>. It expires in {} minutes.</p>",
            code, OTP_TTL_MINUTES
        ),
        ics: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_email_contains_code() {
        let mail = otp_email("admin@cep.com", "482913");
        assert_eq!(mail.to, vec!["admin@cep.com"]);
        assert!(mail.html.contains("482913"));
        assert!(mail.ics.is_none());
    }
}
