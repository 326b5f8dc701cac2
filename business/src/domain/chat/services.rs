use async_trait::async_trait;
use serde_json::{Map, Value};

use super::errors::PizzaGptError;
use super::model::ChatResponse;
use super::value_objects::Endpoint;

/// Service port for sending one request to a PizzaGPT endpoint.
///
/// Implementations issue exactly one HTTP request per call and classify every
/// failure into a [`PizzaGptError`]; they never retry.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn send_request(
        &self,
        endpoint: Endpoint,
        data: &Map<String, Value>,
    ) -> Result<ChatResponse, PizzaGptError>;
}
