//! Environment configuration for the `contacts` binary
//!
//! All settings come from environment variables:
//!
//! - `CONTACTS_API_BASE_URL`: Contact service base URL (default `http://localhost:8000`)
//! - `CONTACTS_HTTP_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//! - `CONTACTS_PAGE_SIZE`: Contacts per page (default 5)
//! - `CONTACTS_SEARCH_SCOPE`: `collection` or `page` (default `collection`)
//! - `CONTACTS_LOG_LEVEL`: trace, debug, info, warn, error (default `warn`)

use anyhow::{Context, Result};
use contacts_core::{ApiConfig, ContactsConfig, SearchScope, ViewConfig};
use std::env;
use tracing::Level;

/// Application configuration
pub struct Config {
    pub api_base_url: Option<String>,
    pub http_timeout_secs: Option<u64>,
    pub page_size: Option<usize>,
    pub search_scope: Option<SearchScope>,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base_url: env::var("CONTACTS_API_BASE_URL").ok(),
            http_timeout_secs: parse_var("CONTACTS_HTTP_TIMEOUT_SECS")?,
            page_size: parse_var("CONTACTS_PAGE_SIZE")?,
            search_scope: env::var("CONTACTS_SEARCH_SCOPE")
                .ok()
                .map(|s| s.parse())
                .transpose()
                .context("CONTACTS_SEARCH_SCOPE")?,
            log_level: env::var("CONTACTS_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.as_ref().is_some_and(|u| u.is_empty()) {
            anyhow::bail!(
                "CONTACTS_API_BASE_URL cannot be empty. \
                Set it via: export CONTACTS_API_BASE_URL=http://localhost:8000"
            );
        }

        if self.log_level().is_none() {
            anyhow::bail!(
                "CONTACTS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            );
        }

        self.contacts_config()
            .validate()
            .context("Invalid contacts configuration")?;

        Ok(())
    }

    /// Tracing level named by `CONTACTS_LOG_LEVEL`
    pub fn log_level(&self) -> Option<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }

    /// Library configuration with environment overrides applied
    pub fn contacts_config(&self) -> ContactsConfig {
        let mut api = ApiConfig::default();
        if let Some(url) = &self.api_base_url {
            api.base_url = url.clone();
        }
        if let Some(timeout) = self.http_timeout_secs {
            api.timeout_secs = timeout;
        }

        let mut view = ViewConfig::default();
        if let Some(page_size) = self.page_size {
            view.page_size = page_size;
        }
        if let Some(scope) = self.search_scope {
            view.search_scope = scope;
        }

        ContactsConfig { api, view }
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a number. Got: {}", name, value)),
        Err(_) => Ok(None),
    }
}
