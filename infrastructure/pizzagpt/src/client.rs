use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, ORIGIN};
use serde_json::{Map, Value};

use business::domain::chat::errors::PizzaGptError;
use business::domain::chat::model::ChatResponse;
use business::domain::chat::services::ChatCompletionClient;
use business::domain::chat::value_objects::{Credentials, Endpoint, Environment};
use business::domain::logger::Logger;

use crate::config::{DEFAULT_TIMEOUT, PizzaGptConfig};
use crate::error_mapper::{classify_error_response, classify_transport_error};

const SECRET_HEADER: &str = "x-secret";

/// HTTP client for the PizzaGPT API.
///
/// Headers are fixed at construction and sent with every request; there is no
/// per-request override. Each [`ChatCompletionClient::send_request`] call issues
/// exactly one POST bounded by the configured timeout.
pub struct PizzaGptClient {
    client: Client,
    environment: Environment,
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    logger: Arc<dyn Logger>,
}

impl PizzaGptClient {
    /// Without `credentials` the client falls back to
    /// [`Credentials::development_default`], whose secret is a public placeholder.
    pub fn new(
        environment: Environment,
        credentials: Option<Credentials>,
        timeout: Duration,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, PizzaGptError> {
        let credentials =
            credentials.unwrap_or_else(|| Credentials::development_default(environment));
        if credentials.is_development_default() {
            logger.warn(
                "Using the built-in development secret for PizzaGPT; supply credentials for production use",
            );
        }

        let client = Client::builder()
            .default_headers(default_headers(&credentials)?)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                PizzaGptError::configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            environment,
            credentials,
            base_url: environment.base_url().to_string(),
            timeout,
            logger,
        })
    }

    /// Production environment, development credentials, 30 second timeout.
    pub fn with_defaults(logger: Arc<dyn Logger>) -> Result<Self, PizzaGptError> {
        Self::new(Environment::default(), None, DEFAULT_TIMEOUT, logger)
    }

    pub fn from_config(
        config: PizzaGptConfig,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, PizzaGptError> {
        let client = Self::new(config.environment, config.credentials, config.timeout, logger)?;
        Ok(match config.base_url {
            Some(base_url) => client.with_base_url(base_url),
            None => client,
        })
    }

    /// Sends requests to `base_url` instead of the environment's host. Headers,
    /// including the origin derived from the environment, stay as configured.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns `<base url>/api/<endpoint path>`.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/api/{}", self.base_url, endpoint.path())
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn post(
        &self,
        url: &str,
        data: &Map<String, Value>,
    ) -> Result<ChatResponse, PizzaGptError> {
        let response = self
            .client
            .post(url)
            .json(data)
            .send()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = match response.error_for_status_ref() {
                Err(e) => e.to_string(),
                Ok(_) => format!("HTTP status {} for url ({})", status, url),
            };
            let body = response.bytes().await.unwrap_or_default();
            return Err(classify_error_response(status.as_u16(), &body, &error_text));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(url, e))?;
        let received_at = Utc::now();

        let decoded: Value = serde_json::from_slice(&body).map_err(|e| {
            PizzaGptError::malformed_response(format!("response body is not valid JSON: {}", e))
        })?;

        ChatResponse::from_body(decoded, received_at)
    }
}

#[async_trait]
impl ChatCompletionClient for PizzaGptClient {
    async fn send_request(
        &self,
        endpoint: Endpoint,
        data: &Map<String, Value>,
    ) -> Result<ChatResponse, PizzaGptError> {
        let url = self.endpoint_url(endpoint);
        self.logger.debug(&format!("POST {}", url));

        self.post(&url, data).await.inspect_err(|error| match error {
            PizzaGptError::Connection { .. } => {
                self.logger.error(&format!("Connection error: {}", error))
            }
            _ => self.logger.error(&format!("Request error: {}", error)),
        })
    }
}

fn default_headers(credentials: &Credentials) -> Result<HeaderMap, PizzaGptError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        ORIGIN,
        HeaderValue::from_str(credentials.origin()).map_err(|_| {
            PizzaGptError::configuration("origin contains characters not allowed in a header")
        })?,
    );

    let mut secret = HeaderValue::from_str(credentials.secret_key()).map_err(|_| {
        PizzaGptError::configuration("secret key contains characters not allowed in a header")
    })?;
    secret.set_sensitive(true);
    headers.insert(SECRET_HEADER, secret);

    Ok(headers)
}
