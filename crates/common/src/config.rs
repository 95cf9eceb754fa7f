//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote TopTopFootball platform API
    pub api_base_url: String,

    /// Path of the session token file; in-memory session when unset
    pub session_file: Option<PathBuf>,

    /// Listen port for the gateway
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let api_base_url = env::var("TOPTOP_API_BASE_URL")
            .map_err(|_| anyhow::anyhow!("TOPTOP_API_BASE_URL is required"))?;

        let session_file = env::var("SESSION_FILE").ok().map(PathBuf::from);

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?;

        Ok(Self {
            api_base_url,
            session_file,
            port,
        })
    }
}
