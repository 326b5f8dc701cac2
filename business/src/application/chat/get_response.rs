use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::PizzaGptError;
use crate::domain::chat::model::ChatCompletionRequest;
use crate::domain::chat::services::ChatCompletionClient;
use crate::domain::chat::use_cases::get_response::GetResponseUseCase;
use crate::domain::chat::value_objects::Endpoint;
use crate::domain::logger::Logger;

/// "Text in, text out" facade over a [`ChatCompletionClient`].
///
/// Every call is independent: no history, no caching, no retries.
pub struct PizzaGptService {
    pub client: Arc<dyn ChatCompletionClient>,
    pub logger: Arc<dyn Logger>,
}

impl PizzaGptService {
    pub fn new(client: Arc<dyn ChatCompletionClient>, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }
}

#[async_trait]
impl GetResponseUseCase for PizzaGptService {
    async fn get_response(&self, question: &str) -> Result<String, PizzaGptError> {
        let payload = ChatCompletionRequest::new(question).into_payload();

        match self
            .client
            .send_request(Endpoint::ChatCompletion, &payload)
            .await
        {
            Ok(response) => Ok(response.into_content()),
            Err(error) => {
                self.logger
                    .error(&format!("Failed to get PizzaGPT response: {}", error));
                Err(error)
            }
        }
    }
}
