//! Wire schema: exact mirrors of the JSON payloads exchanged with the API.
//!
//! These types are kept separate from the domain model in [`crate::types`] so
//! that quirks of the wire format (nullable lists, legacy timestamps, the
//! `type` keyword) stay out of the public API. [`crate::convert`] maps between
//! the two.

mod error;
mod meta;
mod record;
mod time;
mod zone;

use serde::{Deserialize, Deserializer};

pub use error::{Error, ErrorDetailsInvalidInput, ErrorDetailsInvalidInputField, ErrorResponse};
pub use meta::{Meta, MetaPagination};
pub use record::{
    BaseRecord, Record, RecordBulkCreateRequest, RecordBulkCreateResponse,
    RecordBulkUpdateRequest, RecordBulkUpdateResponse, RecordListResponse, RecordRequest,
    RecordResponse, RecordUpdateItem,
};
pub use time::{Time, TimeParseError};
pub use zone::{Zone, ZoneListResponse, ZoneRequest, ZoneResponse, ZoneTxtVerification};

/// Decodes `null` as the type's default value.
///
/// Missing fields are covered by `#[serde(default)]`; this covers fields the
/// API sends explicitly as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
