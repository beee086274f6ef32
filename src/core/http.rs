//! HTTP utilities shared by the PGA TOUR and ESPN fetchers

use crate::{config::Endpoints, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// ESPN's public endpoints reject requests without a browser-like agent.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

pub const API_KEY_HEADER: &str = "x-api-key";

/// Headers for the PGA TOUR GraphQL endpoint.
pub fn stats_headers(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(h)
}

/// Headers for the ESPN site API.
pub fn espn_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h
}

/// A reqwest client bound to a set of endpoints.
///
/// Requests are issued one at a time by the callers; nothing here spawns.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET `url` with `params`, fail on non-2xx, and parse the body as JSON.
    pub async fn get_json(
        &self,
        url: &str,
        params: &[(&str, String)],
        headers: HeaderMap,
    ) -> Result<Value> {
        debug!(%url, ?params, "GET");
        let v = self
            .http
            .get(url)
            .headers(headers)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    /// POST `body` as JSON to `url`, fail on non-2xx, and parse the reply.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Result<Value> {
        debug!(%url, "POST");
        let v = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }
}
