pub mod api;
pub mod catalog;
pub mod config;
pub mod metadata;
pub mod middleware;
pub mod server;
pub mod userdata;
pub mod util;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::userdata::Repository;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("Database error: {0}")]
    Database(#[from] userdata::DbError),
    #[error("Metadata error: {0}")]
    Metadata(#[from] metadata::MetadataError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: &str, debug_logs: bool) -> Result<(), ServerError> {
    let mut config = config::Config::from_file(config_path)?;
    config.debug_logs = debug_logs;

    info!("Using config file: {}", config_path);
    if debug_logs {
        info!("Debug logging enabled");
    }

    // User data backend: SQLite when configured, in-memory mock otherwise.
    let db: Arc<dyn Repository> = match config.get_database_path() {
        Some(db_path) => {
            info!("Opening database at {}", db_path);
            Arc::new(userdata::SqliteRepository::new(&db_path).await?)
        }
        None => {
            info!("No database configured, keeping user data in memory");
            Arc::new(userdata::MemoryRepository::from_config(&config.mock).await?)
        }
    };

    let catalog = Arc::new(catalog::CatalogRepo::new());
    info!("Loading movie catalog from {}", config.catalog.file);
    catalog
        .load(&config.catalog.file, config.mock_delay_ms())
        .await?;
    info!("Catalog ready, {} movies", catalog.len().await);

    let metadata = Arc::new(metadata::MetadataClient::new(&config.metadata)?);

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let has_tls = config.listen.tlscert.is_some() && config.listen.tlskey.is_some();

    let state = server::AppState::new(config.clone(), db, catalog, metadata);
    let app = server::build_router(state);

    if has_tls {
        let cert_path = config.listen.tlscert.as_ref().unwrap();
        let key_path = config.listen.tlskey.as_ref().unwrap();

        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .http1_only()
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}
