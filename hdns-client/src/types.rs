use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::schema::Meta;

// ============ Pagination ============

/// Page selection for list operations.
///
/// Pages are 1-indexed. Unset fields are left out of the query string and the
/// server applies its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOpts {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Number of items per page.
    pub per_page: Option<u32>,
}

impl ListOpts {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Query parameters in a stable order. Page numbers are clamped to `>= 1`.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.max(1).to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.max(1).to_string()));
        }
        pairs
    }
}

/// Options for [`ZoneClient::list`](crate::ZoneClient::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneListOpts {
    #[serde(flatten)]
    pub list: ListOpts,
    /// Exact zone name to look up.
    pub name: Option<String>,
    /// Partial name to search for.
    pub search_name: Option<String>,
}

impl ZoneListOpts {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(search) = self.search_name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search_name", search.to_string()));
        }
        pairs.extend(self.list.query_pairs());
        pairs
    }
}

/// Options for [`RecordClient::list`](crate::RecordClient::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordListOpts {
    #[serde(flatten)]
    pub list: ListOpts,
    /// Only return records of this zone.
    pub zone_id: Option<String>,
}

impl RecordListOpts {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(zone_id) = self.zone_id.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("zone_id", zone_id.to_string()));
        }
        pairs.extend(self.list.query_pairs());
        pairs
    }
}

/// Position of one page within a listing, as reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    /// `None` on the first page.
    pub previous_page: Option<u32>,
    /// `None` on the last page.
    pub next_page: Option<u32>,
    pub last_page: u32,
    pub total_entries: u32,
}

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Page metadata, absent when the server did not paginate the listing.
    pub pagination: Option<Pagination>,
}

impl<T> PaginatedResponse<T> {
    /// Whether there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.pagination
            .is_some_and(|p| p.next_page.is_some_and(|next| next > p.page))
    }
}

// ============ Raw response ============

/// Transport-level view of a successful response.
///
/// Returned next to the decoded value so callers can inspect status, headers
/// (rate-limit counters, request ids) and list metadata.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderMap,
    pub meta: Option<Meta>,
}

impl Response {
    /// Pagination decoded from `meta`, if the response carried any.
    pub fn pagination(&self) -> Option<Pagination> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.pagination.clone())
            .map(crate::convert::pagination_from_schema)
    }
}

// ============ Zones ============

/// TXT record the provider expects before it considers a zone verified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTxtVerification {
    pub name: String,
    pub token: String,
}

/// A DNS zone hosted by the provider.
///
/// `id` is assigned by the server on creation and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// Default TTL of the zone's records, in seconds.
    pub ttl: u32,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /// `None` until the zone has been verified.
    pub verified: Option<DateTime<Utc>>,
    pub is_secondary_dns: bool,
    pub legacy_dns_host: String,
    /// Legacy name servers, in the order the server returned them.
    pub legacy_ns: Vec<String>,
    /// Authoritative name servers, in the order the server returned them.
    pub ns: Vec<String>,
    pub owner: String,
    pub paused: bool,
    pub permission: String,
    pub project: String,
    pub records_count: u32,
    pub registrar: String,
    pub status: String,
    pub txt_verification: ZoneTxtVerification,
}

/// Fields for [`ZoneClient::create`](crate::ZoneClient::create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCreateOpts {
    pub name: String,
    pub ttl: u32,
}

/// Fields for [`ZoneClient::update`](crate::ZoneClient::update). The full set is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneUpdateOpts {
    pub name: String,
    pub ttl: u32,
}

// ============ Records ============

/// Record fields without server-assigned identity.
///
/// Used for records that are not persisted: request payloads and the
/// valid/invalid/failed lists of bulk results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRecord {
    pub name: String,
    pub ttl: u32,
    /// `A`, `AAAA`, `CNAME`, `MX`, `TXT`, `NS`, ... Validated by the server only.
    pub record_type: String,
    pub value: String,
    /// Owning zone. Not checked client-side.
    pub zone_id: String,
}

/// A persisted DNS record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub base: BaseRecord,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl Record {
    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn ttl(&self) -> u32 {
        self.base.ttl
    }

    pub fn record_type(&self) -> &str {
        &self.base.record_type
    }

    pub fn value(&self) -> &str {
        &self.base.value
    }

    pub fn zone_id(&self) -> &str {
        &self.base.zone_id
    }
}

/// Fields for [`RecordClient::create`](crate::RecordClient::create).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCreateOpts {
    pub name: String,
    pub ttl: u32,
    pub record_type: String,
    pub value: String,
    pub zone_id: String,
}

/// Fields for [`RecordClient::update`](crate::RecordClient::update). The full set is sent.
pub type RecordUpdateOpts = RecordCreateOpts;

/// One entry of [`RecordClient::bulk_update`](crate::RecordClient::bulk_update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBulkUpdateItem {
    /// Record to update.
    pub id: String,
    #[serde(flatten)]
    pub fields: RecordUpdateOpts,
}

// ============ Bulk results ============

/// Outcome of a bulk create.
///
/// Every submitted record ends up in exactly one of `valid_records` or
/// `invalid_records`; `records` holds the created form of the valid ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBulkCreateResult {
    /// Accepted records, in pre-creation form.
    pub valid_records: Vec<BaseRecord>,
    /// Created records, with ids.
    pub records: Vec<Record>,
    /// Rejected records, in pre-creation form.
    pub invalid_records: Vec<BaseRecord>,
}

impl RecordBulkCreateResult {
    /// Whether the partition accounts for all `submitted` records.
    pub fn is_complete(&self, submitted: usize) -> bool {
        self.valid_records.len() + self.invalid_records.len() == submitted
            && self.records.len() == self.valid_records.len()
    }
}

/// Outcome of a bulk update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBulkUpdateResult {
    /// Updated records, in post-update form.
    pub records: Vec<Record>,
    /// Records that could not be updated, in pre-update form.
    pub failed_records: Vec<BaseRecord>,
}

impl RecordBulkUpdateResult {
    pub fn is_complete(&self, submitted: usize) -> bool {
        self.records.len() + self.failed_records.len() == submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_opts_skip_unset_fields() {
        assert!(ListOpts::default().query_pairs().is_empty());
        assert_eq!(
            ListOpts::new(0, 10).query_pairs(),
            vec![("page", "1".to_string()), ("per_page", "10".to_string())]
        );
    }

    #[test]
    fn record_list_opts_put_zone_first() {
        let opts = RecordListOpts {
            list: ListOpts::new(2, 10),
            zone_id: Some("z1".to_string()),
        };
        let keys: Vec<_> = opts.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zone_id", "page", "per_page"]);
    }

    #[test]
    fn empty_filters_are_dropped() {
        let opts = ZoneListOpts {
            name: Some(String::new()),
            search_name: Some("exa".to_string()),
            ..Default::default()
        };
        assert_eq!(opts.query_pairs(), vec![("search_name", "exa".to_string())]);
    }

    #[test]
    fn has_more_follows_next_page() {
        let mut page = PaginatedResponse::<Zone> {
            items: Vec::new(),
            pagination: Some(Pagination {
                page: 2,
                per_page: 10,
                previous_page: Some(1),
                next_page: Some(3),
                last_page: 3,
                total_entries: 25,
            }),
        };
        assert!(page.has_more());

        page.pagination = page.pagination.map(|p| Pagination {
            page: 3,
            next_page: None,
            ..p
        });
        assert!(!page.has_more());

        page.pagination = None;
        assert!(!page.has_more());
    }

    #[test]
    fn bulk_partitions_check_completeness() {
        let base = BaseRecord::default();
        let created = RecordBulkCreateResult {
            valid_records: vec![base.clone(), base.clone()],
            records: vec![Record::default(), Record::default()],
            invalid_records: vec![base.clone()],
        };
        assert!(created.is_complete(3));
        assert!(!created.is_complete(4));

        let updated = RecordBulkUpdateResult {
            records: vec![Record::default()],
            failed_records: vec![base],
        };
        assert!(updated.is_complete(2));
        assert!(!updated.is_complete(1));
    }
}
