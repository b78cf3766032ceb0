//! Shared handler state

use std::sync::Arc;

use tally_common::{AppConfig, JwtService, StorageBackend};
use tally_service::ServiceContext;

/// Cheaply cloneable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    /// Repositories, token validation and post settings
    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Token validation used by the `AuthUser` extractor
    pub fn jwt_service(&self) -> &JwtService {
        self.services.jwt_service()
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.config.storage.backend
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("services", &self.services)
            .field("env", &self.config.app.env)
            .field("storage", &self.storage_backend())
            .finish_non_exhaustive()
    }
}
