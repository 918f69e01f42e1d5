//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses parse and value ranges are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a socket address")]
    InvalidSocketAddress { field: &'static str, value: String },

    #[error("remote.address: '{0}' must be an http:// or https:// URL")]
    InvalidRemoteAddress(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("store.seed_price must be a finite number, got {0}")]
    NonFinitePrice(f64),

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),
}

/// Check `config` for values that deserialize but cannot work.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_socket_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    check_socket_address(&mut errors, "backend.bind_address", &config.backend.bind_address);
    if config.observability.metrics_enabled {
        check_socket_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    let address = &config.remote.address;
    if !(address.starts_with("http://") || address.starts_with("https://")) {
        errors.push(ValidationError::InvalidRemoteAddress(address.clone()));
    }

    if !config.store.seed_price.is_finite() {
        errors.push(ValidationError::NonFinitePrice(config.store.seed_price));
    }

    let positive = [
        ("remote.max_message_bytes", config.remote.max_message_bytes as u64),
        ("remote.connect_timeout_secs", config.remote.connect_timeout_secs),
        ("remote.request_timeout_secs", config.remote.request_timeout_secs),
        ("backend.max_message_bytes", config.backend.max_message_bytes as u64),
        ("timeouts.request_secs", config.timeouts.request_secs),
        ("limits.max_body_size", config.limits.max_body_size as u64),
    ];
    for (field, value) in positive {
        if value == 0 {
            errors.push(ValidationError::Zero(field));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_socket_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidSocketAddress {
            field,
            value: value.to_string(),
        });
    }
}
