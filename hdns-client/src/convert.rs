//! Conversions between the wire schema and the domain model.
//!
//! Every function takes its input by value and builds the output field by
//! field, so a returned domain object owns all of its data. The `*_to_schema`
//! direction exists for request bodies and for round-trip checks.

use crate::error::{ApiError, ErrorCode, ErrorDetails, InvalidInputDetails, InvalidInputField};
use crate::schema;
use crate::types::{
    BaseRecord, Pagination, Record, RecordBulkCreateResult, RecordBulkUpdateItem,
    RecordBulkUpdateResult, RecordCreateOpts, Zone, ZoneCreateOpts, ZoneTxtVerification,
};

// ============ Zones ============

pub fn zone_from_schema(s: schema::Zone) -> Zone {
    Zone {
        id: s.id,
        name: s.name,
        ttl: s.ttl,
        created: s.created.get(),
        modified: s.modified.get(),
        verified: s.verified.get(),
        is_secondary_dns: s.is_secondary_dns,
        legacy_dns_host: s.legacy_dns_host,
        legacy_ns: s.legacy_ns,
        ns: s.ns,
        owner: s.owner,
        paused: s.paused,
        permission: s.permission,
        project: s.project,
        records_count: s.records_count,
        registrar: s.registrar,
        status: s.status,
        txt_verification: ZoneTxtVerification {
            name: s.txt_verification.name,
            token: s.txt_verification.token,
        },
    }
}

pub fn zones_from_schema(s: Vec<schema::Zone>) -> Vec<Zone> {
    s.into_iter().map(zone_from_schema).collect()
}

pub fn zone_to_schema(zone: Zone) -> schema::Zone {
    schema::Zone {
        id: zone.id,
        name: zone.name,
        ttl: zone.ttl,
        created: zone.created.into(),
        is_secondary_dns: zone.is_secondary_dns,
        legacy_dns_host: zone.legacy_dns_host,
        legacy_ns: zone.legacy_ns,
        modified: zone.modified.into(),
        ns: zone.ns,
        owner: zone.owner,
        paused: zone.paused,
        permission: zone.permission,
        project: zone.project,
        records_count: zone.records_count,
        registrar: zone.registrar,
        status: zone.status,
        txt_verification: schema::ZoneTxtVerification {
            name: zone.txt_verification.name,
            token: zone.txt_verification.token,
        },
        verified: zone.verified.into(),
    }
}

pub fn zone_request(opts: ZoneCreateOpts) -> schema::ZoneRequest {
    schema::ZoneRequest {
        name: opts.name,
        ttl: opts.ttl,
    }
}

// ============ Records ============

pub fn base_record_from_schema(s: schema::BaseRecord) -> BaseRecord {
    BaseRecord {
        name: s.name,
        ttl: s.ttl,
        record_type: s.record_type,
        value: s.value,
        zone_id: s.zone_id,
    }
}

pub fn base_records_from_schema(s: Vec<schema::BaseRecord>) -> Vec<BaseRecord> {
    s.into_iter().map(base_record_from_schema).collect()
}

pub fn record_from_schema(s: schema::Record) -> Record {
    Record {
        id: s.id,
        base: base_record_from_schema(s.base),
        created: s.created.get(),
        modified: s.modified.get(),
    }
}

pub fn records_from_schema(s: Vec<schema::Record>) -> Vec<Record> {
    s.into_iter().map(record_from_schema).collect()
}

pub fn base_record_to_schema(record: BaseRecord) -> schema::BaseRecord {
    schema::BaseRecord {
        name: record.name,
        ttl: record.ttl,
        record_type: record.record_type,
        value: record.value,
        zone_id: record.zone_id,
    }
}

pub fn record_to_schema(record: Record) -> schema::Record {
    schema::Record {
        base: base_record_to_schema(record.base),
        id: record.id,
        created: record.created.into(),
        modified: record.modified.into(),
    }
}

pub fn record_request(opts: RecordCreateOpts) -> schema::RecordRequest {
    schema::RecordRequest {
        name: opts.name,
        ttl: opts.ttl,
        record_type: opts.record_type,
        value: opts.value,
        zone_id: opts.zone_id,
    }
}

pub fn record_update_item(item: RecordBulkUpdateItem) -> schema::RecordUpdateItem {
    schema::RecordUpdateItem {
        id: item.id,
        record: record_request(item.fields),
    }
}

pub fn bulk_create_result_from_schema(
    s: schema::RecordBulkCreateResponse,
) -> RecordBulkCreateResult {
    RecordBulkCreateResult {
        valid_records: base_records_from_schema(s.valid_records),
        records: records_from_schema(s.records),
        invalid_records: base_records_from_schema(s.invalid_records),
    }
}

pub fn bulk_update_result_from_schema(
    s: schema::RecordBulkUpdateResponse,
) -> RecordBulkUpdateResult {
    RecordBulkUpdateResult {
        records: records_from_schema(s.records),
        failed_records: base_records_from_schema(s.failed_records),
    }
}

// ============ Pagination ============

pub fn pagination_from_schema(s: schema::MetaPagination) -> Pagination {
    Pagination {
        page: s.page,
        per_page: s.per_page,
        previous_page: s.previous_page,
        next_page: s.next_page,
        last_page: s.last_page,
        total_entries: s.total_entries,
    }
}

// ============ Errors ============

/// Builds a domain error from the `error` object of an error envelope.
///
/// `details` are decoded according to `code`: validation codes carry a list
/// of per-field messages, anything else (or a validation payload of an
/// unexpected shape) is kept as raw JSON.
pub fn error_from_schema(s: schema::Error) -> ApiError {
    let code = ErrorCode(s.code);
    let details = s.details.map(|raw| decode_details(code, raw));
    ApiError {
        code,
        message: s.message,
        details,
        retry_after: None,
    }
}

fn decode_details(code: ErrorCode, raw: serde_json::Value) -> ErrorDetails {
    if code.is_validation() {
        match serde_json::from_value::<schema::ErrorDetailsInvalidInput>(raw.clone()) {
            Ok(d) => return ErrorDetails::InvalidInput(invalid_input_from_schema(d)),
            Err(e) => log::debug!("[hdns] details of error {code} are not a field list: {e}"),
        }
    }
    ErrorDetails::Unknown(raw)
}

fn invalid_input_from_schema(s: schema::ErrorDetailsInvalidInput) -> InvalidInputDetails {
    InvalidInputDetails {
        fields: s
            .fields
            .into_iter()
            .map(|f| InvalidInputField {
                name: f.name,
                messages: f.messages,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn wire_zone() -> schema::Zone {
        serde_json::from_value(json!({
            "id": "z1",
            "name": "example.com",
            "ttl": 86400,
            "created": "2021-01-02 03:04:05.999 +0000 UTC",
            "modified": "2021-02-01T00:00:00Z",
            "verified": "",
            "is_secondary_dns": false,
            "legacy_dns_host": "legacy.example",
            "legacy_ns": ["old1.example", "old2.example"],
            "ns": ["hydrogen.ns.hetzner.com", "oxygen.ns.hetzner.com", "helium.ns.hetzner.de"],
            "owner": "acme",
            "paused": true,
            "permission": "rw",
            "project": "p1",
            "records_count": 4,
            "registrar": "reg",
            "status": "verified",
            "txt_verification": {"name": "_hetzner", "token": "tok"}
        }))
        .unwrap()
    }

    fn wire_record() -> schema::Record {
        serde_json::from_value(json!({
            "id": "r1",
            "name": "www",
            "ttl": 300,
            "type": "A",
            "value": "192.0.2.1",
            "zone_id": "z1",
            "created": "2021-01-02T03:04:05Z",
            "modified": ""
        }))
        .unwrap()
    }

    #[test]
    fn zone_maps_every_field() {
        let zone = zone_from_schema(wire_zone());
        assert_eq!(zone.id, "z1");
        assert_eq!(zone.ttl, 86400);
        assert_eq!(
            zone.created,
            Some(
                Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap()
                    + chrono::Duration::milliseconds(999)
            )
        );
        assert!(zone.verified.is_none());
        assert!(zone.paused);
        assert_eq!(zone.registrar, "reg");
        assert_eq!(zone.records_count, 4);
        assert_eq!(zone.txt_verification.name, "_hetzner");
        assert_eq!(zone.txt_verification.token, "tok");
    }

    #[test]
    fn zone_name_server_lists_stay_separate_and_ordered() {
        let zone = zone_from_schema(wire_zone());
        assert_eq!(zone.legacy_ns, ["old1.example", "old2.example"]);
        assert_eq!(
            zone.ns,
            ["hydrogen.ns.hetzner.com", "oxygen.ns.hetzner.com", "helium.ns.hetzner.de"]
        );
    }

    #[test]
    fn missing_and_null_lists_become_empty() {
        let s: schema::Zone =
            serde_json::from_value(json!({"id": "z2", "name": "a.test", "ns": null})).unwrap();
        let zone = zone_from_schema(s);
        assert!(zone.ns.is_empty());
        assert!(zone.legacy_ns.is_empty());
        assert!(zone.created.is_none());
    }

    #[test]
    fn zone_round_trips_through_schema() {
        let zone = zone_from_schema(wire_zone());
        let again = zone_from_schema(zone_to_schema(zone.clone()));
        assert_eq!(again, zone);

        let json = serde_json::to_value(zone_to_schema(zone.clone())).unwrap();
        let reparsed = zone_from_schema(serde_json::from_value(json).unwrap());
        assert_eq!(reparsed, zone);
    }

    #[test]
    fn record_composes_base_record() {
        let record = record_from_schema(wire_record());
        assert_eq!(record.id, "r1");
        assert_eq!(record.name(), "www");
        assert_eq!(record.record_type(), "A");
        assert_eq!(record.value(), "192.0.2.1");
        assert_eq!(record.zone_id(), "z1");
        assert_eq!(record.ttl(), 300);
        assert!(record.created.is_some());
        assert!(record.modified.is_none());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = record_from_schema(wire_record());
        let json = serde_json::to_value(record_to_schema(record.clone())).unwrap();
        assert_eq!(json["type"], "A");
        assert_eq!(json["zone_id"], "z1");
        let reparsed = record_from_schema(serde_json::from_value(json).unwrap());
        assert_eq!(reparsed, record);
    }

    #[test]
    fn base_record_round_trip() {
        let base = BaseRecord {
            name: "mail".to_string(),
            ttl: 60,
            record_type: "MX".to_string(),
            value: "10 mx.example.com".to_string(),
            zone_id: "z1".to_string(),
        };
        assert_eq!(base_record_from_schema(base_record_to_schema(base.clone())), base);
    }

    #[test]
    fn request_bodies_use_wire_names() {
        let body = record_request(RecordCreateOpts {
            name: "www".to_string(),
            ttl: 60,
            record_type: "AAAA".to_string(),
            value: "2001:db8::1".to_string(),
            zone_id: "z1".to_string(),
        });
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "www",
                "ttl": 60,
                "type": "AAAA",
                "value": "2001:db8::1",
                "zone_id": "z1"
            })
        );

        let item = record_update_item(RecordBulkUpdateItem {
            id: "r9".to_string(),
            fields: RecordCreateOpts {
                name: "www".to_string(),
                ttl: 60,
                record_type: "A".to_string(),
                value: "192.0.2.9".to_string(),
                zone_id: "z1".to_string(),
            },
        });
        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json["id"], "r9");
        assert_eq!(json["type"], "A");
    }

    #[test]
    fn bulk_create_partition_is_preserved() {
        let s: schema::RecordBulkCreateResponse = serde_json::from_value(json!({
            "valid_records": [
                {"name": "a", "ttl": 60, "type": "A", "value": "192.0.2.1", "zone_id": "z1"}
            ],
            "records": [{
                "id": "r1",
                "name": "a",
                "ttl": 60,
                "type": "A",
                "value": "192.0.2.1",
                "zone_id": "z1"
            }],
            "invalid_records": [{"name": "b", "type": "A", "value": "nope", "zone_id": "z1"}]
        }))
        .unwrap();
        let result = bulk_create_result_from_schema(s);
        assert!(result.is_complete(2));
        assert_eq!(result.invalid_records[0].name, "b");
        assert_eq!(result.invalid_records[0].ttl, 0);
        assert_eq!(result.records[0].id, "r1");
    }

    #[test]
    fn bulk_update_null_lists_are_empty() {
        let s: schema::RecordBulkUpdateResponse =
            serde_json::from_value(json!({"records": null, "failed_records": null})).unwrap();
        let result = bulk_update_result_from_schema(s);
        assert!(result.records.is_empty());
        assert!(result.failed_records.is_empty());
    }

    #[test]
    fn pagination_maps_every_field() {
        let p = pagination_from_schema(schema::MetaPagination {
            page: 2,
            per_page: 10,
            previous_page: Some(1),
            next_page: Some(3),
            last_page: 3,
            total_entries: 25,
        });
        assert_eq!(p.previous_page, Some(1));
        assert_eq!(p.next_page, Some(3));
        assert_eq!(p.last_page, 3);
        assert_eq!(p.total_entries, 25);
    }

    #[test]
    fn validation_details_decode_to_invalid_input() {
        let s: schema::ErrorResponse = serde_json::from_value(json!({
            "error": {
                "code": 400,
                "message": "invalid",
                "details": {"fields": [{"name": "ttl", "messages": ["too small"]}]}
            }
        }))
        .unwrap();
        let err = error_from_schema(s.error);
        assert_eq!(err.code, ErrorCode::BAD_REQUEST);
        let Some(ErrorDetails::InvalidInput(details)) = err.details else {
            panic!("expected invalid input details, got {:?}", err.details);
        };
        assert_eq!(details.fields.len(), 1);
        assert_eq!(details.fields[0].name, "ttl");
        assert_eq!(details.fields[0].messages, ["too small"]);
    }

    #[test]
    fn unrecognised_details_are_kept_raw() {
        let err = error_from_schema(schema::Error {
            code: 409,
            message: "conflict".to_string(),
            details: Some(json!({"existing_id": "r1"})),
        });
        assert_eq!(
            err.details,
            Some(ErrorDetails::Unknown(json!({"existing_id": "r1"})))
        );

        let err = error_from_schema(schema::Error {
            code: 422,
            message: "invalid".to_string(),
            details: Some(json!(["unexpected"])),
        });
        assert!(matches!(err.details, Some(ErrorDetails::Unknown(_))));
    }

    #[test]
    fn error_without_details() {
        let err = error_from_schema(schema::Error {
            code: 404,
            message: "not found".to_string(),
            details: None,
        });
        assert_eq!(err.code, ErrorCode::NOT_FOUND);
        assert!(err.details.is_none());
    }
}
