use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

/// Runtime configuration, loaded once in `main` and handed to `AppState`.
/// Services receive what they need through constructors rather than
/// reading process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from: String,
    pub auth_rps: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            jwt_secret: get_env("JWT_SECRET")?,
            mail_api_url: get_env("MAIL_API_URL")?,
            mail_api_key: get_env("MAIL_API_KEY")?,
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "CEP Team <cep@gmail.com>".to_string()),
            auth_rps: get_env_parse("AUTH_RPS")?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}
