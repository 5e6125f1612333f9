use std::env;

use thiserror::Error;

use crate::constants::{DEFAULT_OAUTH_TOKEN_URL, DEFAULT_SHEETS_API_BASE};

/// Error raised while loading startup configuration (fatal, prevents startup)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}")]
    InvalidVar(&'static str),
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub allowed_origins: Vec<String>,
    /// Spreadsheet holding one sheet (tab) per team
    pub sheet_id: String,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_refresh_token: String,
    pub sheets_api_base: String,
    pub oauth_token_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidVar("SERVER_PORT"))?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let sheet_id = require("SHEET_ID")?;
        let oauth_client_id = require("OAUTH_CLIENT_ID")?;
        let oauth_client_secret = require("OAUTH_CLIENT_SECRET")?;
        let oauth_refresh_token = require("OAUTH_REFRESH_TOKEN")?;

        let sheets_api_base =
            env::var("SHEETS_API_BASE").unwrap_or_else(|_| DEFAULT_SHEETS_API_BASE.to_string());
        let oauth_token_url =
            env::var("OAUTH_TOKEN_URL").unwrap_or_else(|_| DEFAULT_OAUTH_TOKEN_URL.to_string());

        Ok(Config {
            server_host,
            server_port,
            allowed_origins,
            sheet_id,
            oauth_client_id,
            oauth_client_secret,
            oauth_refresh_token,
            sheets_api_base,
            oauth_token_url,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Read a required variable; set-but-empty counts as missing
fn require(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}
