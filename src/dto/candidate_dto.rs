use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::candidate::CANDIDATE_STATUSES;

pub fn validate_candidate_status(status: &str) -> Result<(), ValidationError> {
    if CANDIDATE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown candidate status"))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub position: String,
    #[validate(length(min = 1))]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub assigned_company: Uuid,
    pub interview_date: DateTime<Utc>,
    #[validate(custom(function = "validate_candidate_status"))]
    pub status: Option<String>,
}

/// Full-document replace; every column is set from the payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub position: String,
    #[validate(length(min = 1))]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub assigned_company: Option<Uuid>,
    pub interview_date: Option<DateTime<Utc>>,
    #[validate(custom(function = "validate_candidate_status"))]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCandidateStatusPayload {
    #[validate(custom(function = "validate_candidate_status"))]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_rejects_blank_fields() {
        let payload = CreateCandidatePayload {
            name: String::new(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            position: "Backend Engineer".to_string(),
            experience: "4".to_string(),
            skills: vec![],
            assigned_company: Uuid::new_v4(),
            interview_date: Utc::now(),
            status: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn status_must_be_known() {
        assert!(validate_candidate_status("shortlisted").is_ok());
        assert!(validate_candidate_status("on_hold").is_err());
    }
}
