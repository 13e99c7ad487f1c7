//! Record operations: `/records`.

use reqwest::Method;

use crate::config::ClientConfig;
use crate::convert::{
    bulk_create_result_from_schema, bulk_update_result_from_schema, record_from_schema,
    record_request, record_update_item, records_from_schema,
};
use crate::error::Result;
use crate::http_client::{HttpClient, with_query};
use crate::schema::{
    RecordBulkCreateRequest, RecordBulkCreateResponse, RecordBulkUpdateRequest,
    RecordBulkUpdateResponse, RecordListResponse, RecordResponse,
};
use crate::types::{
    PaginatedResponse, Record, RecordBulkCreateResult, RecordBulkUpdateItem,
    RecordBulkUpdateResult, RecordCreateOpts, RecordListOpts, RecordUpdateOpts, Response,
};

/// Client for the record endpoints.
#[derive(Debug, Clone)]
pub struct RecordClient {
    http: HttpClient,
}

impl RecordClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_http(HttpClient::new(config)?))
    }

    pub(crate) fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetches a record by id.
    ///
    /// A record that does not exist is `Ok((None, _))`, not an error. Other
    /// API errors propagate. [`update`](Self::update) and
    /// [`delete`](Self::delete) report 404 as an error instead.
    pub async fn get_by_id(&self, id: &str) -> Result<(Option<Record>, Response)> {
        let path = record_path(id);
        let reply = self.http.send::<()>(Method::GET, &path, None).await?;
        match reply.json::<RecordResponse>() {
            Ok((body, resp)) => Ok((Some(record_from_schema(body.record)), resp)),
            Err(e) if e.is_not_found() => {
                log::debug!("[hdns] record {id} not found");
                Ok((None, reply.response()))
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches every record of the account in one unpaginated call.
    pub async fn all(&self) -> Result<Vec<Record>> {
        self.fetch_all("/records").await
    }

    /// Fetches every record of one zone in one unpaginated call.
    pub async fn all_in_zone(&self, zone_id: &str) -> Result<Vec<Record>> {
        let path = with_query("/records", &[("zone_id", zone_id.to_string())]);
        self.fetch_all(&path).await
    }

    async fn fetch_all(&self, path: &str) -> Result<Vec<Record>> {
        let (body, _): (RecordListResponse, _) =
            self.http.request::<_, ()>(Method::GET, path, None).await?;
        Ok(records_from_schema(body.records))
    }

    /// Fetches one page of records, optionally restricted to a zone.
    pub async fn list(
        &self,
        opts: &RecordListOpts,
    ) -> Result<(PaginatedResponse<Record>, Response)> {
        let path = with_query("/records", &opts.query_pairs());
        let (body, mut resp): (RecordListResponse, _) =
            self.http.request::<_, ()>(Method::GET, &path, None).await?;
        resp.meta = body.meta;
        let page = PaginatedResponse {
            items: records_from_schema(body.records),
            pagination: resp.pagination(),
        };
        Ok((page, resp))
    }

    pub async fn create(&self, opts: RecordCreateOpts) -> Result<(Record, Response)> {
        let body = record_request(opts);
        let (body, resp): (RecordResponse, _) =
            self.http.request(Method::POST, "/records", Some(&body)).await?;
        Ok((record_from_schema(body.record), resp))
    }

    /// Replaces all fields of a record. A missing record is an error.
    pub async fn update(&self, id: &str, opts: RecordUpdateOpts) -> Result<(Record, Response)> {
        let body = record_request(opts);
        let (body, resp): (RecordResponse, _) = self
            .http
            .request(Method::PUT, &record_path(id), Some(&body))
            .await?;
        Ok((record_from_schema(body.record), resp))
    }

    /// Deletes a record. A missing record is an error.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        self.http
            .request_empty(Method::DELETE, &record_path(id))
            .await
    }

    /// Creates several records in one request.
    ///
    /// Records the server rejects do not fail the call; they are reported in
    /// [`RecordBulkCreateResult::invalid_records`].
    pub async fn bulk_create(
        &self,
        records: Vec<RecordCreateOpts>,
    ) -> Result<(RecordBulkCreateResult, Response)> {
        let submitted = records.len();
        let body = RecordBulkCreateRequest {
            records: records.into_iter().map(record_request).collect(),
        };
        let (body, resp): (RecordBulkCreateResponse, _) = self
            .http
            .request(Method::POST, "/records/bulk", Some(&body))
            .await?;
        let result = bulk_create_result_from_schema(body);
        if !result.is_complete(submitted) {
            log::warn!(
                "[hdns] bulk create of {submitted} records answered with \
                 {} valid, {} invalid, {} created",
                result.valid_records.len(),
                result.invalid_records.len(),
                result.records.len()
            );
        }
        Ok((result, resp))
    }

    /// Updates several records in one request.
    ///
    /// Shares `POST /records/bulk` with [`bulk_create`](Self::bulk_create);
    /// each item carries the id of the record it replaces.
    ///
    /// Records that could not be updated are reported in
    /// [`RecordBulkUpdateResult::failed_records`].
    pub async fn bulk_update(
        &self,
        records: Vec<RecordBulkUpdateItem>,
    ) -> Result<(RecordBulkUpdateResult, Response)> {
        let submitted = records.len();
        let body = RecordBulkUpdateRequest {
            records: records.into_iter().map(record_update_item).collect(),
        };
        let (body, resp): (RecordBulkUpdateResponse, _) = self
            .http
            .request(Method::POST, "/records/bulk", Some(&body))
            .await?;
        let result = bulk_update_result_from_schema(body);
        if !result.is_complete(submitted) {
            log::warn!(
                "[hdns] bulk update of {submitted} records answered with {} updated, {} failed",
                result.records.len(),
                result.failed_records.len()
            );
        }
        Ok((result, resp))
    }
}

fn record_path(id: &str) -> String {
    format!("/records/{}", urlencoding::encode(id))
}
