use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub industry: String,
    pub location: Option<String>,
    pub website: Option<String>,
    #[validate(length(min = 1))]
    pub poc_name: String,
    #[validate(email)]
    pub poc_email: String,
    #[validate(length(min = 1))]
    pub poc_phone: String,
}

/// Full-document replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub industry: String,
    pub location: Option<String>,
    pub website: Option<String>,
    #[validate(length(min = 1))]
    pub poc_name: String,
    #[validate(email)]
    pub poc_email: String,
    #[validate(length(min = 1))]
    pub poc_phone: String,
    pub active: bool,
}
