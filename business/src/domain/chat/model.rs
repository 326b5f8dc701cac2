use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::PizzaGptError;

/// Body of a chat-completion request: `{"question": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub question: String,
}

impl ChatCompletionRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    pub fn into_payload(self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("question".to_string(), Value::String(self.question));
        payload
    }
}

/// Successful reply, created once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    content: String,
    timestamp: DateTime<Utc>,
    raw_response: Map<String, Value>,
}

impl ChatResponse {
    /// Builds a response from a decoded success body.
    ///
    /// The body must be a JSON object with a string `content` field; every other
    /// field is kept untouched in [`ChatResponse::raw_response`].
    pub fn from_body(body: Value, timestamp: DateTime<Utc>) -> Result<Self, PizzaGptError> {
        let Value::Object(raw_response) = body else {
            return Err(PizzaGptError::malformed_response(
                "response body is not a JSON object",
            ));
        };

        let content = match raw_response.get("content") {
            Some(Value::String(content)) => content.clone(),
            Some(_) => {
                return Err(PizzaGptError::malformed_response(
                    "field `content` is not a string",
                ));
            }
            None => {
                return Err(PizzaGptError::malformed_response(
                    "missing field `content`",
                ));
            }
        };

        Ok(Self {
            content,
            timestamp,
            raw_response,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Time the response was received.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The complete decoded body, `content` included.
    pub fn raw_response(&self) -> &Map<String, Value> {
        &self.raw_response
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
