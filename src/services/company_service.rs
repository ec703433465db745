use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::company_dto::{CreateCompanyPayload, UpdateCompanyPayload};
use crate::error::{Error, Result};
use crate::models::company::Company;

pub(crate) const COMPANY_COLUMNS: &str = "id, name, industry, location, website, \
     poc_name, poc_email, poc_phone, active, created_at, updated_at";

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateCompanyPayload) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (name, industry, location, website, poc_name, poc_email, poc_phone, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE) \
             RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&payload.name)
        .bind(&payload.industry)
        .bind(&payload.location)
        .bind(&payload.website)
        .bind(&payload.poc_name)
        .bind(&payload.poc_email)
        .bind(&payload.poc_phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(company)
    }

    pub async fn get(&self, id: Uuid) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        company.ok_or_else(|| Error::NotFound("Company not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(companies)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateCompanyPayload) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "UPDATE companies \
             SET name = $1, industry = $2, location = $3, website = $4, \
                 poc_name = $5, poc_email = $6, poc_phone = $7, active = $8, updated_at = NOW() \
             WHERE id = $9 \
             RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&payload.name)
        .bind(&payload.industry)
        .bind(&payload.location)
        .bind(&payload.website)
        .bind(&payload.poc_name)
        .bind(&payload.poc_email)
        .bind(&payload.poc_phone)
        .bind(payload.active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        company.ok_or_else(|| Error::NotFound("Company not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Company not found".to_string()));
        }
        Ok(())
    }
}
