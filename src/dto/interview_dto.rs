use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::interview::{INTERVIEW_KINDS, INTERVIEW_STATUSES};

pub fn validate_interview_kind(kind: &str) -> Result<(), ValidationError> {
    if INTERVIEW_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown interview type"))
    }
}

pub fn validate_interview_status(status: &str) -> Result<(), ValidationError> {
    if INTERVIEW_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown interview status"))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewPayload {
    pub candidate_id: Uuid,
    pub company_id: Uuid,
    #[validate(length(min = 1))]
    pub position: String,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub time: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_interview_kind"))]
    pub kind: String,
    #[validate(length(min = 1))]
    pub interviewer: String,
    #[validate(custom(function = "validate_interview_status"))]
    pub status: Option<String>,
}

/// Full-document replace of the mutable fields. The candidate/company
/// references and their name snapshots are fixed at creation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewPayload {
    #[validate(length(min = 1))]
    pub position: String,
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub time: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_interview_kind"))]
    pub kind: String,
    #[validate(length(min = 1))]
    pub interviewer: String,
    #[validate(custom(function = "validate_interview_status"))]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInterviewStatusPayload {
    #[validate(custom(function = "validate_interview_status"))]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct InterviewListQuery {
    pub status: Option<String>,
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_must_be_known() {
        assert!(validate_interview_kind("Technical").is_ok());
        assert!(validate_interview_kind("HR Round").is_ok());
        assert!(validate_interview_kind("Casual Chat").is_err());
    }

    #[test]
    fn status_must_be_known() {
        assert!(validate_interview_status("rescheduled").is_ok());
        assert!(validate_interview_status("postponed").is_err());
    }
}
