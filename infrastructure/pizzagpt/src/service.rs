use std::sync::Arc;

use business::application::chat::get_response::PizzaGptService;
use business::domain::chat::errors::PizzaGptError;
use business::domain::logger::Logger;
use logger::TracingLogger;

use crate::client::PizzaGptClient;
use crate::config::PizzaGptConfig;

/// Service backed by a default [`PizzaGptClient`]: production, development
/// credentials, 30 second timeout, logging through `tracing`.
pub fn default_service() -> Result<PizzaGptService, PizzaGptError> {
    service_from_config(PizzaGptConfig::default())
}

pub fn service_from_config(config: PizzaGptConfig) -> Result<PizzaGptService, PizzaGptError> {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
    let client = PizzaGptClient::from_config(config, logger.clone())?;

    Ok(PizzaGptService::new(Arc::new(client), logger))
}
