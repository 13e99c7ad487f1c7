//! Client configuration.

use std::fmt;
use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dns.hetzner.com/api/v1";
/// Header carrying the API token.
pub(crate) const AUTH_HEADER: &str = "Auth-API-Token";

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default whole-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Everything a client needs to reach the API.
///
/// Passed explicitly to [`Client::new`](crate::Client::new),
/// [`ZoneClient::new`](crate::ZoneClient::new) and
/// [`RecordClient::new`](crate::RecordClient::new).
///
/// ```rust
/// use std::time::Duration;
/// use hdns_client::ClientConfig;
///
/// let config = ClientConfig::new("my-token")
///     .with_endpoint("http://127.0.0.1:8080/api/v1/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.endpoint(), "http://127.0.0.1:8080/api/v1");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    endpoint: String,
    token: String,
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            user_agent: format!("hdns-client/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Overrides the base URL. A trailing `/` is dropped.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Deadline for a whole request, connection included.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &crate::utils::log_sanitizer::mask_secret(&self.token))
            .field("user_agent", &self.user_agent)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}
