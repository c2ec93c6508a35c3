use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use slotbook::config::AppConfig;
use slotbook::handlers;
use slotbook::services::catalog::{CatalogSource, LocalCatalog, RemoteCatalog, TieredCatalog};
use slotbook::services::ledger::Ledger;
use slotbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog: Box<dyn CatalogSource> = match &config.upstream_url {
        Some(url) => {
            tracing::info!("using upstream catalog at {url} with local fallback");
            let remote = RemoteCatalog::new(
                url.clone(),
                Duration::from_millis(config.upstream_timeout_ms),
            )?;
            Box::new(TieredCatalog::new(Box::new(remote), LocalCatalog::new()))
        }
        None => {
            tracing::info!("no upstream configured, using local catalog");
            Box::new(LocalCatalog::new())
        }
    };

    let state = Arc::new(AppState {
        ledger: Mutex::new(Ledger::default()),
        catalog,
        config: config.clone(),
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
