use std::env;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// The bearer token comes from the environment (never hardcoded). The .env
/// file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Base URL of the profile API, e.g. `https://dashboard.example.com/api`.
    pub api_url: String,
    /// Bearer credential issued by the auth service.
    pub token: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the token has no default; commands that talk to the API call
    /// `require_token` first.
    pub fn load() -> Result<Self> {
        let timeout_secs = match env::var("GLIMPSE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("GLIMPSE_TIMEOUT_SECS is not a number: {raw}"))?,
            Err(_) => 30,
        };

        Ok(Self {
            api_url: env::var("GLIMPSE_API_URL")
                .unwrap_or_else(|_| crate::api::client::DEFAULT_API_URL.to_string()),
            token: env::var("GLIMPSE_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            timeout_secs,
        })
    }

    /// Check that a bearer token is configured.
    pub fn require_token(&self) -> Result<()> {
        if self.token.is_none() {
            anyhow::bail!(
                "GLIMPSE_TOKEN not set. Add it to your .env file.\n\
                 Sign in to the dashboard to obtain a token."
            );
        }
        Ok(())
    }
}
