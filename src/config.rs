use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Inspection Desk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InspectionDeskConfig {
    /// Dealership backend connection
    pub backend: BackendConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Workflow defaults
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the dealership backend API
    pub base_url: String,
    /// Bearer token (can be set via env var)
    pub token: Option<String>,
    /// Rate limiting settings
    pub rate_limit: RateLimitConfig,
    /// TTL for cached GET responses, in seconds
    pub cache_ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Requests per second limit
    pub requests_per_second: u32,
    /// Burst capacity
    pub burst_capacity: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Role assumed when --role is not passed on the CLI
    pub default_role: String,
}

impl Default for InspectionDeskConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:3001/api".to_string(),
                token: None, // Read from env var when present
                rate_limit: RateLimitConfig {
                    requests_per_second: 5,
                    burst_capacity: 10,
                },
                cache_ttl_seconds: 30,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: true,
            },
            workflow: WorkflowConfig {
                default_role: "registration".to_string(),
            },
        }
    }
}

impl InspectionDeskConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (inspection-desk.toml)
    /// 3. Environment variables (prefixed with INSPECTION_DESK_)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&InspectionDeskConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if Path::new("inspection-desk.toml").exists() {
            builder = builder.add_source(File::with_name("inspection-desk"));
        }

        builder = builder.add_source(
            Environment::with_prefix("INSPECTION_DESK")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut desk_config: InspectionDeskConfig = config.try_deserialize()?;

        // Flat env overrides for the two values operators actually set
        if let Ok(base_url) = std::env::var("INSPECTION_DESK_BACKEND_URL") {
            desk_config.backend.base_url = base_url;
        }
        if desk_config.backend.token.is_none() {
            if let Ok(token) = std::env::var("INSPECTION_DESK_TOKEN") {
                desk_config.backend.token = Some(token);
            }
        }

        Ok(desk_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<InspectionDeskConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = InspectionDeskConfig::load_env_file();
        InspectionDeskConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static InspectionDeskConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let cfg = InspectionDeskConfig::default();
        assert!(!cfg.backend.base_url.is_empty());
        assert!(cfg.backend.rate_limit.requests_per_second >= 1);
        assert_eq!(cfg.workflow.default_role, "registration");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let cfg = InspectionDeskConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inspection-desk.toml");

        cfg.save_to_file(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let reloaded: InspectionDeskConfig = toml::from_str(&raw).unwrap();

        assert_eq!(reloaded.backend.base_url, cfg.backend.base_url);
        assert_eq!(reloaded.observability.log_level, cfg.observability.log_level);
    }
}
