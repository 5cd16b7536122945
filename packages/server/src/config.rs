use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub banner_api_key: Option<String>,
    pub youtube_api_key: Option<String>,
    pub jwt_secret: String,
    pub jwt_issuer: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key: env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?,
            banner_api_key: env::var("BANNER_API_KEY").ok(),
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok(),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "courseforge".to_string()),
        })
    }
}
