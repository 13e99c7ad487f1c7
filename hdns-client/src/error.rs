use std::fmt;

use serde::{Deserialize, Serialize};

/// Error code reported by the API.
///
/// Codes follow HTTP status semantics; the provider may add its own, which
/// need not fit an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i64);

impl ErrorCode {
    pub const BAD_REQUEST: Self = Self(400);
    pub const UNAUTHORIZED: Self = Self(401);
    pub const FORBIDDEN: Self = Self(403);
    pub const NOT_FOUND: Self = Self(404);
    pub const CONFLICT: Self = Self(409);
    pub const UNPROCESSABLE_ENTITY: Self = Self(422);
    pub const RATE_LIMIT_EXCEEDED: Self = Self(429);

    /// Codes whose `details` carry per-field validation messages.
    pub fn is_validation(self) -> bool {
        matches!(self, Self::BAD_REQUEST | Self::UNPROCESSABLE_ENTITY)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation messages reported for one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidInputField {
    pub name: String,
    pub messages: Vec<String>,
}

/// Details of an input validation error, in server order. Field names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidInputDetails {
    pub fields: Vec<InvalidInputField>,
}

impl InvalidInputDetails {
    /// Messages reported for `name`, if the field was rejected.
    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.messages.as_slice())
    }
}

/// Structured `details` of an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum ErrorDetails {
    /// Input validation failure, decoded from 400/422 responses.
    InvalidInput(InvalidInputDetails),
    /// Any other shape, preserved as received.
    Unknown(serde_json::Value),
}

/// An error response decoded from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<ErrorDetails>,
    /// Seconds to wait before retrying, from the `Retry-After` header.
    pub retry_after: Option<u64>,
}

impl ApiError {
    pub fn invalid_input(&self) -> Option<&InvalidInputDetails> {
        match &self.details {
            Some(ErrorDetails::InvalidInput(d)) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for ApiError {}

/// Errors returned by every client operation.
///
/// Transport failures (`Network`, `Timeout`) are never decoded as API errors;
/// only responses that actually arrived with a non-2xx status become
/// [`HdnsError::Api`].
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind")]
pub enum HdnsError {
    /// Connection, DNS resolution, TLS or body read failure.
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// The transport deadline elapsed.
    #[error("Request timeout: {detail}")]
    Timeout { detail: String },

    /// A response body could not be decoded.
    #[error("Parse error: {detail}")]
    Parse { detail: String },

    /// A request body could not be encoded.
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },

    /// The API answered with an error.
    #[error(transparent)]
    Api(ApiError),
}

impl HdnsError {
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this is an API error carrying `code`.
    pub fn is_api_error(&self, code: ErrorCode) -> bool {
        self.api_error().is_some_and(|e| e.code == code)
    }

    pub fn is_not_found(&self) -> bool {
        self.is_api_error(ErrorCode::NOT_FOUND)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.is_api_error(ErrorCode::RATE_LIMIT_EXCEEDED)
    }

    /// Whether the error is a normal outcome of user input (bad fields,
    /// missing resources, auth) rather than an infrastructure fault.
    ///
    /// Used to pick `warn` over `error` when logging.
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Api(e) => {
                (400..500).contains(&e.code.0) && e.code != ErrorCode::RATE_LIMIT_EXCEEDED
            }
            _ => false,
        }
    }
}

impl From<ApiError> for HdnsError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

/// Whether `err` is an API error with the given code.
pub fn is_error(err: &HdnsError, code: ErrorCode) -> bool {
    err.is_api_error(code)
}

/// Convenience type alias for `Result<T, HdnsError>`.
pub type Result<T> = std::result::Result<T, HdnsError>;
