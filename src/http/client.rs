use governor::{DefaultDirectRateLimiter, Jitter, Quota, RateLimiter};
use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::api::ApiError;
use crate::observability::api_metrics;

/// Rate-limited HTTP client for the dealership backend.
///
/// GET responses are cached for a short TTL; every successful write clears
/// the cache so the caller's next fetch sees fresh data (the workflow is
/// pessimistic call-then-refresh, never an optimistic local patch).
#[derive(Debug)]
pub struct RateLimitedHttpClient {
    http: reqwest::Client,
    rate_limiter: Arc<DefaultDirectRateLimiter>,
    cache: Cache<String, CacheEntry>,
    token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    data: serde_json::Value,
}

impl RateLimitedHttpClient {
    /// `requests_per_second`/`burst` come from configuration; the backend is a
    /// small internal service, so defaults are conservative.
    pub fn new(
        token: Option<String>,
        requests_per_second: u32,
        burst: u32,
        cache_ttl: Duration,
    ) -> Result<Self, ApiError> {
        let per_second = NonZeroU32::new(requests_per_second.max(1))
            .unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst.max(1)).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(per_second).allow_burst(burst);
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|source| ApiError::Transport {
                url: "<client construction>".to_string(),
                source,
            })?;

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(cache_ttl)
            .build();

        Ok(Self {
            http,
            rate_limiter,
            cache,
            token,
        })
    }

    /// GET a JSON document, going through the rate limiter and cache.
    pub async fn get_json<T>(&self, url: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if let Some(cached) = self.cache.get(url).await {
            debug!(url = %url, "Cache hit");
            api_metrics().record_cache_hit();
            return serde_json::from_value(cached.data).map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            });
        }
        api_metrics().record_cache_miss();

        let value = self.request_json(url).await?;
        self.cache
            .insert(url.to_string(), CacheEntry { data: value.clone() })
            .await;

        serde_json::from_value(value).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// PUT a JSON body. Clears the GET cache on success so the caller's
    /// follow-up refresh observes the write.
    pub async fn put_json<B>(&self, url: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;
        api_metrics().record_request();

        let mut request = self.http.put(url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| {
            api_metrics().record_error();
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        Self::check_status(url, response).await?;
        self.clear_cache().await;
        Ok(())
    }

    async fn request_json(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;
        api_metrics().record_request();
        debug!(url = %url, "Executing backend request");

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| {
            api_metrics().record_error();
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let response = Self::check_status(url, response).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })
    }

    /// Map non-2xx responses to `ApiError::Status`, carrying the server's
    /// `message` field when the body provides one.
    async fn check_status(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        api_metrics().record_error();

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);

        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    /// Drop all cached GET responses (used after write operations).
    pub async fn clear_cache(&self) {
        self.cache.invalidate_all();
        info!("HTTP client cache cleared");
    }
}
