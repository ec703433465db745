use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::utils::crypto;

/// Default accounts for a fresh deployment, one per role. Runs only when
/// the users table is empty so existing installs are never touched.
pub async fn seed_default_users(pool: &PgPool) -> Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let defaults = [
        ("Admin User", "admin@cep.com", "admin@123", "admin"),
        ("John Recruiter", "recruiter@cep.com", "recruiter123", "recruiter"),
        ("Tech Corp HR", "hr@techcorp.com", "hr@123", "company"),
        ("Jane Candidate", "candidate@email.com", "123@sou", "candidate"),
    ];

    for (name, email, password, role) in defaults {
        let password_hash = crypto::hash_password(password)
            .map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))?;
        sqlx::query(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(name)
        .bind(email)
        .bind(&password_hash)
        .bind(role)
        .execute(pool)
        .await?;
    }

    tracing::info!("seeded default users");
    Ok(())
}
