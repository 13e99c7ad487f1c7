//! Shared test helpers: a mock API server and JSON fixtures.

#![allow(dead_code)]

use std::time::Duration;

use hdns_client::{Client, ClientConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const API_PREFIX: &str = "/api/v1";

/// Asserts that an `Option` is `Some` and unwraps it (failing the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Asserts that a `Result` is `Ok` and unwraps it (failing the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Asserts that a `Result` is `Err` and unwraps the error.
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// Path on the mock server for an API path such as `/zones`.
pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

/// Test context: a running mock server and a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: Client,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let config = ClientConfig::new(TOKEN)
            .with_endpoint(format!("{}{API_PREFIX}", server.uri()))
            .with_timeout(timeout);
        let client = Client::new(config).expect("failed to build client");
        Self { server, client }
    }
}

pub fn zone_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "ttl": 86400,
        "created": "2020-08-26 17:10:27.249 +0000 UTC",
        "modified": "2021-01-05T10:00:00Z",
        "verified": "",
        "is_secondary_dns": false,
        "legacy_dns_host": "",
        "legacy_ns": ["ns1.legacy.example", "ns2.legacy.example"],
        "ns": ["hydrogen.ns.hetzner.com", "oxygen.ns.hetzner.com"],
        "owner": "acme",
        "paused": false,
        "permission": "",
        "project": "",
        "records_count": 4,
        "registrar": "",
        "status": "verified",
        "txt_verification": { "name": "", "token": "" }
    })
}

pub fn base_record_json(zone_id: &str, name: &str, value: &str) -> Value {
    json!({
        "name": name,
        "ttl": 300,
        "type": "A",
        "value": value,
        "zone_id": zone_id
    })
}

pub fn record_json(id: &str, zone_id: &str, name: &str, value: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "ttl": 300,
        "type": "A",
        "value": value,
        "zone_id": zone_id,
        "created": "2021-02-01T08:00:00Z",
        "modified": "2021-02-01T09:30:00Z"
    })
}

pub fn meta_json(page: u32, per_page: u32, total_entries: u32) -> Value {
    let last_page = total_entries.div_ceil(per_page).max(1);
    json!({
        "pagination": {
            "page": page,
            "per_page": per_page,
            "previous_page": if page > 1 { json!(page - 1) } else { Value::Null },
            "next_page": if page < last_page { json!(page + 1) } else { Value::Null },
            "last_page": last_page,
            "total_entries": total_entries
        }
    })
}

pub fn error_json(code: u16, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}
