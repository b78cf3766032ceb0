//! # tally-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService, Principal};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    PostConfig, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use error::{domain_status, AppError};
pub use telemetry::{try_init_tracing_with_config, TracingConfig, TracingError};
