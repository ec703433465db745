use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::Error, models::user::User, AppState};

pub const TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

pub fn issue_token(secret: &str, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn decode_claims(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

async fn authorize(state: AppState, mut req: Request, next: Next, allowed: &[&str]) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return Error::Unauthorized("Missing authorization header".to_string()).into_response();
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Error::Unauthorized("Invalid authorization header".to_string()).into_response();
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Error::Unauthorized("Unsupported authorization scheme".to_string()).into_response();
    };

    match decode_claims(&state.config.jwt_secret, token) {
        Ok(claims) => {
            if !allowed.is_empty()
                && !allowed.iter().any(|r| r.eq_ignore_ascii_case(&claims.role))
            {
                return Error::Forbidden("Insufficient role".to_string()).into_response();
            }
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(_) => Error::Unauthorized("Invalid or expired token".to_string()).into_response(),
    }
}

pub async fn require_bearer_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    authorize(state, req, next, &[]).await
}

pub async fn require_admin_or_recruiter(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    authorize(state, req, next, &["admin", "recruiter"]).await
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    authorize(state, req, next, &["admin"]).await
}

pub async fn require_candidate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    authorize(state, req, next, &["candidate"]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_user(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Admin User".to_string(),
            email: "admin@cep.com".to_string(),
            password_hash: String::new(),
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn token_roundtrip_preserves_identity() {
        let user = sample_user("admin");
        let token = issue_token("test_secret_key", &user).unwrap();
        let claims = decode_claims("test_secret_key", &token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "admin@cep.com");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("test_secret_key", &sample_user("admin")).unwrap();
        assert!(decode_claims("other_secret", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "admin@cep.com".to_string(),
            role: "admin".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key"),
        )
        .unwrap();
        assert!(decode_claims("test_secret_key", &token).is_err());
    }
}
