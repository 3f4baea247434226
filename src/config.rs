// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Default delay before a feedback message hides itself.
pub const DEFAULT_MESSAGE_HIDE_MS: u64 = 5000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activities API (no trailing slash)
    pub api_base_url: String,
    /// Host page port
    pub port: u16,
    /// How long a feedback message stays visible
    pub message_hide_after: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("ACTIVITIES_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let port = match env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", v))?,
            Err(_) => 8080,
        };

        let hide_ms = match env::var("MESSAGE_HIDE_MS") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("MESSAGE_HIDE_MS", v))?,
            Err(_) => DEFAULT_MESSAGE_HIDE_MS,
        };

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url),
            port,
            message_hide_after: Duration::from_millis(hide_ms),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:9".to_string(),
            port: 8080,
            message_hide_after: Duration::from_millis(DEFAULT_MESSAGE_HIDE_MS),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
