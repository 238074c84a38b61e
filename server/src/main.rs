mod clock;
mod config;
mod db;
mod metrics;
mod node;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use config::ServerConfig;
use state::AppState;
use store::{MemoryStore, PgStore, StoreKind};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = build_state(&config).await;

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "wiz khalubernetes listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}

/// Pick the store for this run. An unreachable remote database is not fatal:
/// the server starts without a store and quote calls answer 503.
async fn build_state(config: &ServerConfig) -> AppState {
    if !config.remote_db {
        tracing::info!("using embedded quote store");
        return AppState::new(Arc::new(MemoryStore::new()), &config.app_name);
    }

    let Some(url) = config.database_url.as_deref() else {
        return AppState::unavailable(StoreKind::Postgres, &config.app_name);
    };
    match db::init_pool(url, config.db_max_connections).await {
        Ok(pool) => {
            tracing::info!(max_connections = config.db_max_connections, "using postgres quote store");
            AppState::new(Arc::new(PgStore::new(pool)), &config.app_name)
        }
        Err(e) => {
            tracing::warn!(error = %e, "postgres unavailable, quote endpoints will answer 503");
            AppState::unavailable(StoreKind::Postgres, &config.app_name)
        }
    }
}
