use std::time::Duration;

use business::domain::chat::errors::PizzaGptError;
use business::domain::chat::value_objects::{Credentials, Environment};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENVIRONMENT_VAR: &str = "PIZZAGPT_ENVIRONMENT";
const SECRET_KEY_VAR: &str = "PIZZAGPT_SECRET_KEY";
const ORIGIN_VAR: &str = "PIZZAGPT_ORIGIN";
const TIMEOUT_VAR: &str = "PIZZAGPT_TIMEOUT_SECS";
const BASE_URL_VAR: &str = "PIZZAGPT_BASE_URL";

/// Connection settings for a [`crate::client::PizzaGptClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaGptConfig {
    pub environment: Environment,
    /// `None` means the development default credentials.
    pub credentials: Option<Credentials>,
    pub timeout: Duration,
    /// Replaces the environment's host, e.g. for a self-hosted or stub server.
    pub base_url: Option<String>,
}

impl Default for PizzaGptConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }
}

impl PizzaGptConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - PIZZAGPT_ENVIRONMENT: production | staging | development (default: production)
    /// - PIZZAGPT_SECRET_KEY: secret sent as `x-secret` (default: development secret)
    /// - PIZZAGPT_ORIGIN: origin header, only read with a secret (default: environment base URL)
    /// - PIZZAGPT_TIMEOUT_SECS: request timeout in seconds (default: 30)
    /// - PIZZAGPT_BASE_URL: host override (default: environment base URL)
    pub fn from_env() -> Result<Self, PizzaGptError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PizzaGptError> {
        let environment = match lookup(ENVIRONMENT_VAR) {
            Some(value) => value.parse().map_err(PizzaGptError::configuration)?,
            None => Environment::default(),
        };

        let credentials = lookup(SECRET_KEY_VAR)
            .filter(|secret| !secret.is_empty())
            .map(|secret| {
                let origin = lookup(ORIGIN_VAR)
                    .filter(|origin| !origin.is_empty())
                    .unwrap_or_else(|| environment.base_url().to_string());
                Credentials::new(secret, origin)
            });

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(value) => parse_timeout(&value)?,
            None => DEFAULT_TIMEOUT,
        };

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            environment,
            credentials,
            timeout,
            base_url,
        })
    }
}

fn parse_timeout(value: &str) -> Result<Duration, PizzaGptError> {
    match value.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(PizzaGptError::configuration(format!(
            "{} must be a positive number of seconds, got {:?}",
            TIMEOUT_VAR, value
        ))),
    }
}
