use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

use crate::api::errors::ApiError;
use crate::api::types::{Contract, EntityId, Inspection, InspectionUpdate};
use crate::config::config;
use crate::http::RateLimitedHttpClient;

/// Backend operations the workflow needs. Trait seam so tests and tools can
/// substitute an in-memory fake for the HTTP client.
#[async_trait]
pub trait DealerApi: Send + Sync {
    async fn fetch_contracts(&self) -> Result<Vec<Contract>, ApiError>;
    async fn fetch_inspections(&self) -> Result<Vec<Inspection>, ApiError>;
    async fn update_inspection(
        &self,
        id: &EntityId,
        update: &InspectionUpdate,
    ) -> Result<(), ApiError>;
}

/// HTTP client for the dealership backend's contract/inspection endpoints.
#[derive(Debug)]
pub struct DealerClient {
    http: RateLimitedHttpClient,
    base_url: String,
}

impl DealerClient {
    /// Build a client from the global configuration.
    pub fn new() -> Result<Self, ApiError> {
        let cfg = config().map_err(|e| ApiError::ConfigMissing(e.to_string()))?;
        let base_url = cfg.backend.base_url.clone();
        if base_url.trim().is_empty() {
            return Err(ApiError::ConfigMissing(
                "backend.base_url is empty".to_string(),
            ));
        }
        Self::with_base_url(
            base_url,
            cfg.backend.token.clone(),
            cfg.backend.rate_limit.requests_per_second,
            cfg.backend.rate_limit.burst_capacity,
            Duration::from_secs(cfg.backend.cache_ttl_seconds),
        )
    }

    /// Build a client against an explicit base URL (tests point this at a
    /// mock server).
    pub fn with_base_url(
        base_url: String,
        token: Option<String>,
        requests_per_second: u32,
        burst: u32,
        cache_ttl: Duration,
    ) -> Result<Self, ApiError> {
        let http = RateLimitedHttpClient::new(token, requests_per_second, burst, cache_ttl)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DealerApi for DealerClient {
    #[instrument(skip(self))]
    async fn fetch_contracts(&self) -> Result<Vec<Contract>, ApiError> {
        self.http.get_json(&self.url("contracts")).await
    }

    #[instrument(skip(self))]
    async fn fetch_inspections(&self) -> Result<Vec<Inspection>, ApiError> {
        self.http.get_json(&self.url("inspections")).await
    }

    #[instrument(skip(self, update))]
    async fn update_inspection(
        &self,
        id: &EntityId,
        update: &InspectionUpdate,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("inspections/{}", id.normalized()));
        self.http.put_json(&url, update).await
    }
}
