//! DocVault Server — multi-tenant document sharing backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use docvault_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_database::DatabasePool;
use docvault_database::repositories::connection::ConnectionRepository;
use docvault_database::repositories::document::DocumentRepository;
use docvault_database::repositories::group::GroupRepository;
use docvault_database::repositories::institute::InstituteRepository;
use docvault_database::repositories::user::UserRepository;
use docvault_service::auth::AuthService;
use docvault_service::connection::ConnectionService;
use docvault_service::document::{DocumentService, SecureLinkIssuer};
use docvault_service::group::GroupService;
use docvault_service::storage::LocalDocumentStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("DOCVAULT_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DocVault v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    let db_pool = DatabasePool::connect(&config.database).await?.into_pool();
    docvault_database::migration::run_migrations(&db_pool).await?;

    // Document store
    let store = Arc::new(LocalDocumentStore::new(&config.storage.document_root).await?);

    // Repositories
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let institute_repo = Arc::new(InstituteRepository::new(db_pool.clone()));
    let connection_repo = Arc::new(ConnectionRepository::new(db_pool.clone()));
    let group_repo = Arc::new(GroupRepository::new(db_pool.clone()));
    let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));

    // Auth primitives
    let hasher = Arc::new(PasswordHasher::new());
    let encoder = Arc::new(JwtEncoder::new(&config.auth));
    let decoder = Arc::new(JwtDecoder::new(&config.auth));

    // Services
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&institute_repo),
        Arc::clone(&hasher),
        Arc::clone(&encoder),
        config.auth.password_min_length,
    ));
    let connection_service = Arc::new(ConnectionService::new(
        Arc::clone(&connection_repo),
        Arc::clone(&user_repo),
        Arc::clone(&institute_repo),
    ));
    let group_service = Arc::new(GroupService::new(
        Arc::clone(&group_repo),
        Arc::clone(&connection_repo),
    ));
    let link_issuer = SecureLinkIssuer::new(Arc::clone(&encoder), config.links.base_url.clone());
    let document_service = Arc::new(DocumentService::new(
        Arc::clone(&document_repo),
        Arc::clone(&group_repo),
        store,
        link_issuer,
        config.storage.clone(),
        config.links.default_expiry_days,
    ));

    let config = Arc::new(config);
    let state = docvault_api::AppState {
        config: Arc::clone(&config),
        db_pool,
        jwt_decoder: decoder,
        auth_service,
        connection_service,
        group_service,
        document_service,
    };

    let app = docvault_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("DocVault server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("DocVault server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
