mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use fraudwatch_api::state::AppStateInner;
use fraudwatch_core::counter::{CounterClock, REFRESH_INTERVAL};
use fraudwatch_store::{Backend, RestStore, SqliteStore};

use crate::config::{Config, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fraudwatch=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let store = match &config.store {
        StoreConfig::Sqlite { db_path } => Backend::Sqlite(SqliteStore::open(db_path)?),
        StoreConfig::Rest { url, api_key, timeout } => {
            Backend::Rest(RestStore::new(url, api_key.clone(), *timeout)?)
        }
    };
    info!("Using {} report store", store.kind());

    // "Last updated" ticks on its own; it never queries the store
    let clock = CounterClock::new();
    clock.spawn_ticker(REFRESH_INTERVAL);

    let state = Arc::new(AppStateInner {
        store,
        clock,
        counter_goal: config.counter_goal,
    });

    let app = fraudwatch_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("fraudwatch listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
