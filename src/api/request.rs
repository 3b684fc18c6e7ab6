//! Request payload validation for the analysis endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InfographicError, Result};

/// The body of an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    /// Extract the `text` field from an already parsed JSON value.
    ///
    /// A missing field, a non-string field and an empty string are all
    /// reported as invalid input.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value.get("text") {
            Some(Value::String(text)) if !text.is_empty() => Ok(AnalyzeRequest {
                text: text.clone(),
            }),
            Some(Value::String(_)) => Err(InfographicError::invalid_input("text is empty")),
            Some(other) => Err(InfographicError::invalid_input(format!(
                "text must be a string, got {}",
                json_type_name(other)
            ))),
            None => Err(InfographicError::invalid_input("text field is missing")),
        }
    }

    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| InfographicError::invalid_input(format!("malformed JSON body: {e}")))?;
        if !value.is_object() {
            return Err(InfographicError::invalid_input(
                "request body must be a JSON object",
            ));
        }
        Self::from_value(&value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&InfographicError> for ErrorBody {
    fn from(error: &InfographicError) -> Self {
        ErrorBody {
            error: error.user_message().into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_string_text() {
        let request = AnalyzeRequest::from_slice(r#"{"text": "Привет. Мир."}"#.as_bytes()).unwrap();
        assert_eq!(request.text, "Привет. Мир.");
    }

    #[test]
    fn test_rejects_missing_wrong_typed_and_empty_text() {
        for value in [json!({}), json!({"text": 42}), json!({"text": null}), json!({"text": ""})] {
            let err = AnalyzeRequest::from_value(&value).unwrap_err();
            assert!(matches!(err, InfographicError::InvalidInput(_)), "{value}");
        }
    }

    #[test]
    fn test_rejects_malformed_bodies() {
        assert!(matches!(
            AnalyzeRequest::from_slice(b"{not json"),
            Err(InfographicError::InvalidInput(_))
        ));
        assert!(matches!(
            AnalyzeRequest::from_slice(br#"["text"]"#),
            Err(InfographicError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_error_body_uses_user_message() {
        let body = ErrorBody::from(&InfographicError::too_long(5001, 5000));
        assert_eq!(body.error, "Текст слишком длинный. Максимум 5000 символов.");
    }
}
