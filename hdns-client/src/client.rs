//! Entry point bundling both resource clients.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http_client::HttpClient;
use crate::record::RecordClient;
use crate::zone::ZoneClient;

/// Zone and record clients sharing one configuration and connection pool.
///
/// Holds no mutable state; clone it freely and call it from as many tasks as
/// needed.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    pub zone: ZoneClient,
    pub record: RecordClient,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            zone: ZoneClient::with_http(http.clone()),
            record: RecordClient::with_http(http.clone()),
            http,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }
}
