/// Every failure the PizzaGPT client or service can surface.
///
/// Match on the variant to handle one kind, or treat the whole enum as the
/// catch-all for PizzaGPT-specific faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PizzaGptError {
    /// The host could not be reached, the request timed out, or it failed
    /// without a usable response.
    #[error("Failed to connect to {url}: {cause}")]
    Connection { url: String, cause: String },
    /// The host answered with a non-success status.
    #[error("API Error {status_code}: {message}")]
    Response { status_code: u16, message: String },
    /// The host answered with success but the body broke the response contract.
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl PizzaGptError {
    pub fn connection(url: impl Into<String>, cause: impl Into<String>) -> Self {
        PizzaGptError::Connection {
            url: url.into(),
            cause: cause.into(),
        }
    }
    pub fn response(status_code: u16, message: impl Into<String>) -> Self {
        PizzaGptError::Response {
            status_code,
            message: message.into(),
        }
    }
    pub fn malformed_response(reason: impl Into<String>) -> Self {
        PizzaGptError::MalformedResponse {
            reason: reason.into(),
        }
    }
    pub fn configuration(reason: impl Into<String>) -> Self {
        PizzaGptError::Configuration(reason.into())
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, PizzaGptError::Connection { .. })
    }

    pub fn is_response(&self) -> bool {
        matches!(self, PizzaGptError::Response { .. })
    }

    /// Status code of a `Response` error, `None` for every other kind.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PizzaGptError::Response { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_url_in_connection_message() {
        let error = PizzaGptError::connection(
            "https://www.pizzagpt.it/api/chatx-completion",
            "connection refused",
        );

        let message = error.to_string();

        assert!(message.contains("https://www.pizzagpt.it/api/chatx-completion"));
        assert!(message.contains("connection refused"));
        assert!(error.is_connection());
    }

    #[test]
    fn should_format_response_error_with_status_and_message() {
        let error = PizzaGptError::response(429, "rate limited");

        assert_eq!(error.to_string(), "API Error 429: rate limited");
        assert_eq!(error.status_code(), Some(429));
        assert!(error.is_response());
    }

    #[test]
    fn should_have_no_status_code_outside_response_errors() {
        assert_eq!(PizzaGptError::malformed_response("empty").status_code(), None);
        assert_eq!(PizzaGptError::configuration("bad").status_code(), None);
        assert_eq!(PizzaGptError::connection("u", "c").status_code(), None);
    }
}
