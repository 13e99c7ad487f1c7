use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Error,
}

/// The `error` object of an error envelope.
///
/// `details` is kept as raw JSON here; its shape depends on `code` and is
/// resolved by [`crate::convert::error_from_schema`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Error {
    #[serde(default)]
    pub code: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// `details` of an input validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetailsInvalidInput {
    pub fields: Vec<ErrorDetailsInvalidInputField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetailsInvalidInputField {
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub messages: Vec<String>,
}
