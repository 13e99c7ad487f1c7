//! Zone operations: `/zones`.

use reqwest::Method;

use crate::config::ClientConfig;
use crate::convert::{zone_from_schema, zone_request, zones_from_schema};
use crate::error::Result;
use crate::http_client::{HttpClient, with_query};
use crate::schema::{ZoneListResponse, ZoneResponse};
use crate::types::{
    PaginatedResponse, Response, Zone, ZoneCreateOpts, ZoneListOpts, ZoneUpdateOpts,
};

/// Client for the zone endpoints.
#[derive(Debug, Clone)]
pub struct ZoneClient {
    http: HttpClient,
}

impl ZoneClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_http(HttpClient::new(config)?))
    }

    pub(crate) fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetches a zone by id.
    ///
    /// A zone that does not exist is `Ok((None, _))`, not an error. Other API
    /// errors propagate. [`update`](Self::update) and [`delete`](Self::delete)
    /// do not follow this convention: they report 404 as an error.
    pub async fn get_by_id(&self, id: &str) -> Result<(Option<Zone>, Response)> {
        let path = format!("/zones/{}", urlencoding::encode(id));
        let reply = self.http.send::<()>(Method::GET, &path, None).await?;
        match reply.json::<ZoneResponse>() {
            Ok((body, resp)) => Ok((Some(zone_from_schema(body.zone)), resp)),
            Err(e) if e.is_not_found() => {
                log::debug!("[hdns] zone {id} not found");
                Ok((None, reply.response()))
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches every zone in one unpaginated call.
    pub async fn all(&self) -> Result<Vec<Zone>> {
        let (body, _): (ZoneListResponse, _) =
            self.http.request::<_, ()>(Method::GET, "/zones", None).await?;
        Ok(zones_from_schema(body.zones))
    }

    /// Fetches one page of zones.
    pub async fn list(&self, opts: &ZoneListOpts) -> Result<(PaginatedResponse<Zone>, Response)> {
        let path = with_query("/zones", &opts.query_pairs());
        let (body, mut resp): (ZoneListResponse, _) =
            self.http.request::<_, ()>(Method::GET, &path, None).await?;
        resp.meta = body.meta;
        let page = PaginatedResponse {
            items: zones_from_schema(body.zones),
            pagination: resp.pagination(),
        };
        Ok((page, resp))
    }

    pub async fn create(&self, opts: ZoneCreateOpts) -> Result<(Zone, Response)> {
        let body = zone_request(opts);
        let (body, resp): (ZoneResponse, _) =
            self.http.request(Method::POST, "/zones", Some(&body)).await?;
        Ok((zone_from_schema(body.zone), resp))
    }

    /// Replaces the zone's mutable fields. A missing zone is an error.
    pub async fn update(&self, id: &str, opts: ZoneUpdateOpts) -> Result<(Zone, Response)> {
        let body = zone_request(ZoneCreateOpts {
            name: opts.name,
            ttl: opts.ttl,
        });
        let path = format!("/zones/{}", urlencoding::encode(id));
        let (body, resp): (ZoneResponse, _) =
            self.http.request(Method::PUT, &path, Some(&body)).await?;
        Ok((zone_from_schema(body.zone), resp))
    }

    /// Deletes a zone and all of its records. A missing zone is an error.
    pub async fn delete(&self, id: &str) -> Result<Response> {
        let path = format!("/zones/{}", urlencoding::encode(id));
        self.http.request_empty(Method::DELETE, &path).await
    }
}
