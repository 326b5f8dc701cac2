use async_trait::async_trait;

use crate::domain::chat::errors::PizzaGptError;

/// Ask a question, get the reply text back.
#[async_trait]
pub trait GetResponseUseCase: Send + Sync {
    async fn get_response(&self, question: &str) -> Result<String, PizzaGptError>;
}
