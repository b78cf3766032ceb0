//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tally_common::{AppConfig, AppError, JwtService, StorageBackend};
use tally_db::{create_pool, MemoryStore};
use tally_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the configured rate limit is unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let mut api = create_router();
    if let Some(rate_limit) = &config.rate_limit {
        api = apply_rate_limit(api, rate_limit)?;
    }

    let router = apply_middleware(
        health_routes().merge(api),
        &config.cors,
        config.app.env.is_production(),
    );

    Ok(router.with_state(state))
}

/// Wire the configured storage backend into an `AppState`
///
/// # Errors
/// Returns an error if the PostgreSQL pool cannot be created
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let builder = ServiceContextBuilder::new()
        .jwt_service(jwt_service)
        .post_config(config.posts.clone());

    let builder = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            builder.memory_repos(&MemoryStore::new())
        }
        StorageBackend::Postgres => {
            let database = config
                .storage
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let db_config = tally_db::DatabaseConfig::new(
                database.url.clone(),
                database.max_connections,
                database.min_connections,
            );
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            builder.postgres_repos(&pool)
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on `listener` until the server stops
///
/// # Errors
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the HTTP server
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    serve(listener, app).await
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error if startup fails or the server stops with an error
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
