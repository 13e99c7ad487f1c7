//! HTTP transport shared by the resource clients.
//!
//! One call here is one network round-trip. Nothing is retried: a 429 comes
//! back as an [`ApiError`] carrying `Retry-After`, and backoff is up to the
//! caller. Dropping the returned future aborts the request.
//!
//! Failures are kept apart by origin:
//! - the request never completed → [`HdnsError::Network`] / [`HdnsError::Timeout`]
//! - a 2xx body did not decode → [`HdnsError::Parse`]
//! - a non-2xx response arrived → [`HdnsError::Api`], decoded from the error envelope

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, RETRY_AFTER};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{AUTH_HEADER, ClientConfig};
use crate::convert::error_from_schema;
use crate::error::{ApiError, ErrorCode, HdnsError, Result};
use crate::schema::ErrorResponse;
use crate::types::Response;
use crate::utils::log_sanitizer::truncate_for_log;

/// A response that made it back over the wire, whatever its status.
#[derive(Debug)]
pub(crate) struct Reply {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl Reply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status and headers, without the body.
    pub fn response(&self) -> Response {
        Response {
            status: self.status,
            headers: self.headers.clone(),
            meta: None,
        }
    }

    /// Decodes a 2xx body into `T`, or the error envelope of anything else.
    pub fn json<T>(&self) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
    {
        if !self.is_success() {
            return Err(api_error(self));
        }
        let value = parse_json(&self.body)?;
        Ok((value, self.response()))
    }

    /// Like [`Reply::json`] for responses whose success body is irrelevant.
    pub fn empty(&self) -> Result<Response> {
        if !self.is_success() {
            return Err(api_error(self));
        }
        Ok(self.response())
    }
}

/// Authenticated `reqwest` client bound to one [`ClientConfig`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| HdnsError::Network {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request and decodes a JSON response body into `T`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await?.json()
    }

    /// Sends a request whose success response has no body of interest (DELETE).
    pub async fn request_empty(&self, method: Method, path: &str) -> Result<Response> {
        self.send::<()>(method, path, None).await?.empty()
    }

    /// Performs the round-trip. Only transport failures are errors here; the
    /// status is left for the caller to interpret.
    pub async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Reply>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        log::debug!("[hdns] {method} {url}");

        let mut builder: RequestBuilder = self
            .client
            .request(method, &url)
            .header(AUTH_HEADER, self.config.token());

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| HdnsError::Serialization {
                detail: e.to_string(),
            })?;
            log::debug!(
                "[hdns] Request Body: {}",
                truncate_for_log(&String::from_utf8_lossy(&bytes))
            );
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = builder.send().await.map_err(transport_error)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        log::debug!("[hdns] Response Status: {status}");

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(e)
            } else {
                HdnsError::Network {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;
        log::debug!("[hdns] Response Body: {}", truncate_for_log(&body));

        Ok(Reply {
            status,
            headers,
            body,
        })
    }
}

fn transport_error(e: reqwest::Error) -> HdnsError {
    if e.is_timeout() {
        HdnsError::Timeout {
            detail: e.to_string(),
        }
    } else {
        HdnsError::Network {
            detail: e.to_string(),
        }
    }
}

/// Decodes a JSON body, reporting failures as [`HdnsError::Parse`].
pub(crate) fn parse_json<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("[hdns] JSON parse failed: {e}");
        log::error!("[hdns] Raw response: {}", truncate_for_log(body));
        HdnsError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Builds the domain error for a non-2xx response.
///
/// Bodies that are not an error envelope still yield an [`ApiError`], coded
/// with the HTTP status, so status-based predicates keep working.
fn api_error(raw: &Reply) -> HdnsError {
    let mut error = match serde_json::from_str::<ErrorResponse>(&raw.body) {
        Ok(envelope) => error_from_schema(envelope.error),
        Err(_) => ApiError {
            code: ErrorCode(i64::from(raw.status)),
            message: fallback_message(raw.status, &raw.body),
            details: None,
            retry_after: None,
        },
    };
    if error.code.0 == 0 {
        error.code = ErrorCode(i64::from(raw.status));
    }
    error.retry_after = raw
        .headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let err = HdnsError::Api(error);
    if err.is_expected() {
        log::warn!("[hdns] API error (HTTP {}): {err}", raw.status);
    } else {
        log::error!("[hdns] API error (HTTP {}): {err}", raw.status);
    }
    err
}

fn fallback_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        truncate_for_log(body)
    }
}

/// Appends URL-encoded query parameters to `path`.
pub(crate) fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}
