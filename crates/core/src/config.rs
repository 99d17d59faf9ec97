//! Runtime configuration, read from the environment.

use std::time::Duration;

use crate::constants::{DEFAULT_NOTICE_TTL_MS, DEFAULT_PROJECT_NAME, DEFAULT_SUBMIT_COOLDOWN_MS};
use crate::env_config::{env_non_empty, env_parse_with_default};
use crate::error::CoreError;

pub const ENV_PROJECT_NAME: &str = "WAITLIST_PROJECT_NAME";
pub const ENV_NOTICE_TTL_MS: &str = "WAITLIST_NOTICE_TTL_MS";
pub const ENV_SUBMIT_COOLDOWN_MS: &str = "WAITLIST_SUBMIT_COOLDOWN_MS";
pub const ENV_TRUST_FORWARDED_FOR: &str = "WAITLIST_TRUST_FORWARDED_FOR";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistConfig {
    /// Stamped on every signup and visitor record.
    pub project_name: String,
    pub notice_ttl: Duration,
    pub submit_cooldown: Duration,
    /// Key the submit cooldown on the first `X-Forwarded-For` hop instead of
    /// the peer address. Only safe behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,
    /// `None` selects the in-memory backend.
    pub database_url: Option<String>,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_owned(),
            notice_ttl: Duration::from_millis(DEFAULT_NOTICE_TTL_MS),
            submit_cooldown: Duration::from_millis(DEFAULT_SUBMIT_COOLDOWN_MS),
            trust_forwarded_for: false,
            database_url: None,
        }
    }
}

impl WaitlistConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        let config = Self {
            project_name: env_non_empty(ENV_PROJECT_NAME)
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_owned()),
            notice_ttl: Duration::from_millis(env_parse_with_default(
                ENV_NOTICE_TTL_MS,
                DEFAULT_NOTICE_TTL_MS,
            )),
            submit_cooldown: Duration::from_millis(env_parse_with_default(
                ENV_SUBMIT_COOLDOWN_MS,
                DEFAULT_SUBMIT_COOLDOWN_MS,
            )),
            trust_forwarded_for: env_parse_with_default(ENV_TRUST_FORWARDED_FOR, false),
            database_url: env_non_empty(ENV_DATABASE_URL),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.project_name.trim().is_empty() {
            return Err(CoreError::InvalidConfig("project name must not be blank".to_owned()));
        }
        if self.notice_ttl.is_zero() {
            return Err(CoreError::InvalidConfig(format!("{ENV_NOTICE_TTL_MS} must be > 0")));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    #[must_use]
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        self.database_url = url;
        self
    }
}
