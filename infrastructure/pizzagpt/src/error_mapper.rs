use std::error::Error as _;

use serde_json::Value;

use business::domain::chat::errors::PizzaGptError;

/// Classifies a non-success HTTP response.
///
/// Ordered fallback, field by field:
/// 1. body is a JSON object: server-declared `statusCode` and `message` where present
///    and well-typed, otherwise the raw HTTP status and `error_text` for that field;
/// 2. body is anything else: raw HTTP status and `error_text`.
pub fn classify_error_response(status: u16, body: &[u8], error_text: &str) -> PizzaGptError {
    let declared = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => return PizzaGptError::response(status, error_text),
    };

    let status_code = declared
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .unwrap_or(status);
    let message = declared
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error_text.to_string());

    PizzaGptError::response(status_code, message)
}

/// Classifies a failure that produced no usable response: refused connections,
/// DNS failures, timeouts and broken bodies all become `Connection` errors.
pub fn classify_transport_error(url: &str, error: reqwest::Error) -> PizzaGptError {
    PizzaGptError::connection(url, describe(&error.without_url()))
}

/// Flattens an error and its sources into one line.
fn describe(error: &reqwest::Error) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|part| part.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    if error.is_timeout() && !parts.iter().any(|part| part.contains("timed out")) {
        parts.push("operation timed out".to_string());
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERROR_TEXT: &str = "HTTP status client error (429 Too Many Requests)";

    #[test]
    fn should_prefer_server_declared_status_and_message() {
        let body = br#"{"statusCode": 429, "message": "rate limited"}"#;

        let error = classify_error_response(400, body, ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(429, "rate limited"));
    }

    #[test]
    fn should_fall_back_to_raw_status_when_status_code_missing() {
        let body = br#"{"message": "pizza oven on fire"}"#;

        let error = classify_error_response(503, body, ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(503, "pizza oven on fire"));
    }

    #[test]
    fn should_fall_back_to_error_text_when_message_missing() {
        let body = br#"{"statusCode": 418}"#;

        let error = classify_error_response(500, body, ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(418, ERROR_TEXT));
    }

    #[test]
    fn should_ignore_wrongly_typed_fields() {
        let body = br#"{"statusCode": "429", "message": {"text": "nope"}}"#;

        let error = classify_error_response(502, body, ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(502, ERROR_TEXT));
    }

    #[test]
    fn should_ignore_status_code_outside_http_range() {
        let body = br#"{"statusCode": 70000, "message": "odd"}"#;

        let error = classify_error_response(500, body, ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(500, "odd"));
    }

    #[test]
    fn should_use_raw_status_for_non_json_body() {
        let error = classify_error_response(500, b"<html>Internal Server Error</html>", ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(500, ERROR_TEXT));
    }

    #[test]
    fn should_use_raw_status_for_json_that_is_not_an_object() {
        let error = classify_error_response(400, br#"["bad", "request"]"#, ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(400, ERROR_TEXT));
    }

    #[test]
    fn should_use_raw_status_for_empty_body() {
        let error = classify_error_response(404, b"", ERROR_TEXT);

        assert_eq!(error, PizzaGptError::response(404, ERROR_TEXT));
    }
}
