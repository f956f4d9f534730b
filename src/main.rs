use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pilyeon::adapters::http::{app_router, SessionCookie, SurveyHandlers};
use pilyeon::adapters::{
    BuiltinCatalogSource, FileSessionStore, InMemorySessionStore, YamlCatalogSource,
};
use pilyeon::config::{AppConfig, ServerConfig, SessionBackend, ValidationError};
use pilyeon::ports::{CatalogSource, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let catalog_source: Box<dyn CatalogSource> = match &config.survey.catalog_path {
        Some(path) => Box::new(YamlCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource::new()),
    };
    let catalog = Arc::new(catalog_source.load().await?);
    let policy = config.survey.scoring_policy(catalog.len())?;

    let store: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Memory => Arc::new(InMemorySessionStore::new(config.session.ttl())),
        SessionBackend::File => {
            let dir = config
                .session
                .storage_dir
                .as_ref()
                .ok_or(ValidationError::MissingRequired("session.storage_dir"))?;
            Arc::new(FileSessionStore::new(dir, config.session.ttl()))
        }
    };

    let cookie = SessionCookie::new(
        config.session.cookie_name.clone(),
        config.session.ttl_secs,
        config
            .session
            .secure_cookie_for(&config.server.environment),
    );

    tracing::info!(
        questions = catalog.len(),
        threshold = policy.threshold(),
        backend = ?config.session.backend,
        "Survey configured"
    );

    let handlers = SurveyHandlers::wire(catalog, store, policy);
    let app = app_router(handlers, cookie, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
