use serde::{Deserialize, Serialize};

use super::{Meta, Time, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneTxtVerification {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
}

/// A zone as returned by `/zones` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub ttl: u32,
    pub created: Time,
    pub is_secondary_dns: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub legacy_dns_host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub legacy_ns: Vec<String>,
    pub modified: Time,
    #[serde(deserialize_with = "null_as_default")]
    pub ns: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    pub paused: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub permission: String,
    #[serde(deserialize_with = "null_as_default")]
    pub project: String,
    pub records_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub registrar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub txt_verification: ZoneTxtVerification,
    pub verified: Time,
}

/// Body of `POST /zones` and `PUT /zones/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRequest {
    pub name: String,
    pub ttl: u32,
}

/// `{zone: Zone}`, returned by get, create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub zone: Zone,
}

/// `{zones: [Zone], meta?}`, returned by both the full and the paginated listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub zones: Vec<Zone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
