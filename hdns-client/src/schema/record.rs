use serde::{Deserialize, Serialize};

use super::{Meta, Time, null_as_default};

/// Record fields shared by persisted and not-yet-persisted records.
///
/// Bulk responses use this shape for records that were validated or
/// rejected but not (yet) created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ttl: u32,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zone_id: String,
}

/// A persisted record: the base fields plus identity and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created: Time,
    #[serde(default)]
    pub modified: Time,
}

/// Body of `POST /records` and `PUT /records/{id}`, and one entry of a bulk create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRequest {
    pub name: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    pub zone_id: String,
}

/// One entry of a bulk update: the full field set plus the record to update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdateItem {
    pub id: String,
    #[serde(flatten)]
    pub record: RecordRequest,
}

/// `{record: Record}`, returned by get, create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub record: Record,
}

/// `{records: [Record], meta?}`, returned by both the full and the paginated listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordBulkCreateRequest {
    pub records: Vec<RecordRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordBulkCreateResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub invalid_records: Vec<BaseRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
    #[serde(deserialize_with = "null_as_default")]
    pub valid_records: Vec<BaseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordBulkUpdateRequest {
    pub records: Vec<RecordUpdateItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordBulkUpdateResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub failed_records: Vec<BaseRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
}
