//! # hdns-client
//!
//! Typed client for the Hetzner DNS hosting API: zones and records, with
//! create/read/update/delete, bulk record operations, pagination, and decoded
//! API errors.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hdns_client::{Client, ClientConfig, RecordCreateOpts, RecordListOpts, ListOpts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("your-token"))?;
//!
//!     for zone in client.zone.all().await? {
//!         println!("{} ({} records)", zone.name, zone.records_count);
//!     }
//!
//!     let (record, _) = client
//!         .record
//!         .create(RecordCreateOpts {
//!             name: "www".to_string(),
//!             ttl: 300,
//!             record_type: "A".to_string(),
//!             value: "192.0.2.1".to_string(),
//!             zone_id: "zone-id".to_string(),
//!         })
//!         .await?;
//!     println!("created {}", record.id);
//!
//!     let (page, _) = client
//!         .record
//!         .list(&RecordListOpts {
//!             list: ListOpts::new(1, 50),
//!             zone_id: Some("zone-id".to_string()),
//!         })
//!         .await?;
//!     println!("{} records on this page, more: {}", page.items.len(), page.has_more());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, HdnsError>`](HdnsError):
//!
//! - [`HdnsError::Network`] / [`HdnsError::Timeout`]: the request did not complete
//! - [`HdnsError::Parse`]: a response body (or a timestamp in it) could not be decoded
//! - [`HdnsError::Api`]: the API answered with an error; match on its code with
//!   [`is_error`] or [`HdnsError::is_api_error`]
//!
//! `get_by_id` returns `Ok((None, _))` for a missing resource; `update` and
//! `delete` report the same situation as an [`ErrorCode::NOT_FOUND`] error.
//! Nothing is retried: on [`ErrorCode::RATE_LIMIT_EXCEEDED`], back off using
//! [`ApiError::retry_after`] and try again.

mod client;
mod config;
pub mod convert;
mod error;
mod http_client;
mod record;
pub mod schema;
mod types;
mod utils;
mod zone;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{
    ApiError, ErrorCode, ErrorDetails, HdnsError, InvalidInputDetails, InvalidInputField, Result,
    is_error,
};
pub use record::RecordClient;
pub use types::{
    BaseRecord, ListOpts, PaginatedResponse, Pagination, Record, RecordBulkCreateResult,
    RecordBulkUpdateItem, RecordBulkUpdateResult, RecordCreateOpts, RecordListOpts,
    RecordUpdateOpts, Response, Zone, ZoneCreateOpts, ZoneListOpts, ZoneTxtVerification,
    ZoneUpdateOpts,
};
pub use zone::ZoneClient;
