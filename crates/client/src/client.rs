//! HTTP transport for the data service.
//!
//! Wraps [`reqwest::Client`] with base-URL joining, the `{ "data": ... }`
//! envelope, bearer auth with the service key, and error classification.
//! Resource adapters are thin wrappers over these methods.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use velora_core::error::ServiceError;
use velora_engine::Filters;

use crate::error::{classify_status, classify_transport};

/// Request timeout for every data-service call. The engine imposes no
/// timeout of its own; this is where in-flight calls are bounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Single-record response envelope: `{ "data": {...} }`.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// List response envelope: `{ "data": [...], "total": n }`.
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
    total: u64,
}

/// Typed client for the hosted data service's REST API.
///
/// Cheap to clone behind an `Arc`; one instance is shared by every resource
/// adapter in a service.
pub struct DataClient {
    http: reqwest::Client,
    base_url: Url,
    service_key: Option<String>,
}

impl DataClient {
    /// Create a client for the service at `base_url`.
    ///
    /// `service_key`, when present, is sent as a bearer token on every
    /// request.
    pub fn new(base_url: &str, service_key: Option<String>) -> Result<Self, ServiceError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ServiceError::Config(format!("invalid data service URL: {e}")))?;
        // Relative joins drop the last path segment unless the base ends
        // with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Config(format!("HTTP client construction failed: {e}")))?;
        Ok(Self {
            http,
            base_url,
            service_key,
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services in tests).
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        service_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            service_key,
        }
    }

    /// GET a list endpoint, applying `filters` as query parameters.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &Filters,
        entity: &'static str,
    ) -> Result<(Vec<T>, u64), ServiceError> {
        let mut url = self.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &filters.page.to_string());
            pairs.append_pair("per_page", &filters.per_page.to_string());
            for (key, value) in filters.iter() {
                pairs.append_pair(key, value);
            }
        }

        let request = self.authorize(self.http.get(url));
        let response = request.send().await.map_err(|e| classify_transport(&e))?;
        let envelope: ListEnvelope<T> = Self::read_json(response, entity, None).await?;
        Ok((envelope.data, envelope.total))
    }

    pub(crate) async fn get_one<T: DeserializeOwned>(
        &self,
        path: &str,
        entity: &'static str,
        id: Option<String>,
    ) -> Result<T, ServiceError> {
        let url = self.join(path)?;
        let request = self.authorize(self.http.get(url));
        let response = request.send().await.map_err(|e| classify_transport(&e))?;
        let envelope: DataEnvelope<T> = Self::read_json(response, entity, id).await?;
        Ok(envelope.data)
    }

    pub(crate) async fn post_one<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        entity: &'static str,
    ) -> Result<T, ServiceError> {
        let url = self.join(path)?;
        let request = self.authorize(self.http.post(url)).json(body);
        let response = request.send().await.map_err(|e| classify_transport(&e))?;
        let envelope: DataEnvelope<T> = Self::read_json(response, entity, None).await?;
        Ok(envelope.data)
    }

    pub(crate) async fn patch_one<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        entity: &'static str,
        id: Option<String>,
    ) -> Result<T, ServiceError> {
        let url = self.join(path)?;
        let request = self.authorize(self.http.patch(url)).json(body);
        let response = request.send().await.map_err(|e| classify_transport(&e))?;
        let envelope: DataEnvelope<T> = Self::read_json(response, entity, id).await?;
        Ok(envelope.data)
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        entity: &'static str,
        id: String,
    ) -> Result<(), ServiceError> {
        let url = self.join(path)?;
        let request = self.authorize(self.http.delete(url));
        let response = request.send().await.map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_status(status, &body, entity, Some(id)))
    }

    fn join(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::Config(format!("invalid request path {path:?}: {e}")))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.service_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Check the status, then deserialize the body; non-2xx responses are
    /// classified, and a malformed success body surfaces as `Unknown`.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        entity: &'static str,
        id: Option<String>,
    ) -> Result<T, ServiceError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(classify_status(status, &body, entity, id));
        }
        if status == StatusCode::NO_CONTENT {
            return Err(ServiceError::Unknown(format!(
                "{entity} response had no body"
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(entity, error = %e, "malformed data service response");
            ServiceError::Unknown(format!("malformed {entity} response: {e}"))
        })
    }
}
