use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Backend API usage metrics
#[derive(Debug, Default)]
pub struct ApiMetrics {
    pub total_requests: AtomicU64,
    pub errors: AtomicU64,
    pub cache_hits: AtomicU64,
    pub cache_misses: AtomicU64,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> ApiStats {
        ApiStats {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Backend API metrics: requests={}, errors={}, cache_hits={}, cache_misses={}",
            stats.total_requests, stats.errors, stats.cache_hits, stats.cache_misses
        );
    }
}

#[derive(Debug, Clone)]
pub struct ApiStats {
    pub total_requests: u64,
    pub errors: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Global metrics instance
static API_METRICS: std::sync::LazyLock<ApiMetrics> = std::sync::LazyLock::new(ApiMetrics::new);

pub fn api_metrics() -> &'static ApiMetrics {
    &API_METRICS
}

/// Create correlated spans for workflow actions
pub fn create_workflow_span(operation: &str, contract_id: &str, correlation_id: &str) -> tracing::Span {
    tracing::info_span!(
        "workflow",
        workflow.operation = operation,
        contract.id = contract_id,
        correlation.id = correlation_id,
    )
}

/// Time an operation and record metrics
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn finish(self) {
        let duration = self.start.elapsed();
        info!(
            operation = %self.operation,
            duration_ms = duration.as_millis() as u64,
            "Operation completed"
        );
    }
}
