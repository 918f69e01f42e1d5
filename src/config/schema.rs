//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the album
//! service and its gRPC backend. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::store::{DEFAULT_SEED_COUNT, DEFAULT_SEED_PRICE};

const GIB: usize = 1024 * 1024 * 1024;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub listener: ListenerConfig,

    /// Startup dataset.
    pub store: StoreConfig,

    /// Remote backend used by the proxied protobuf route.
    pub remote: RemoteConfig,

    /// gRPC backend settings (used by `album-backend`).
    pub backend: BackendConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8081").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8081".to_string(),
        }
    }
}

/// Synthetic dataset loaded at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of albums to seed.
    pub seed_count: usize,

    /// Price given to every seeded album.
    pub seed_price: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            seed_price: DEFAULT_SEED_PRICE,
        }
    }
}

/// Remote backend client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Backend URL (e.g., "http://127.0.0.1:9000").
    pub address: String,

    /// Largest response the client will decode, in bytes.
    pub max_message_bytes: usize,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Per-call timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:9000".to_string(),
            max_message_bytes: GIB,
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }
}

/// gRPC backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Bind address (e.g., "0.0.0.0:9000").
    pub bind_address: String,

    /// Largest message the backend will encode or decode, in bytes.
    pub max_message_bytes: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9000".to_string(),
            max_message_bytes: GIB,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for one HTTP request, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");
        assert_eq!(config.store.seed_count, 999_999);
        assert_eq!(config.remote.max_message_bytes, 1 << 30);
        assert_eq!(config.backend.bind_address, "0.0.0.0:9000");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [store]
            seed_count = 3

            [remote]
            address = "http://backend:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.seed_count, 3);
        assert_eq!(config.store.seed_price, 56.99);
        assert_eq!(config.remote.address, "http://backend:9000");
        assert_eq!(config.remote.connect_timeout_secs, 5);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");
    }
}
