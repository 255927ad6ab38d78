//! Binary entrypoint for the todo HTTP server.
//!
//! Configuration comes from the environment (see [`todo_server::config`]);
//! log verbosity from `RUST_LOG` (default: "info").

use std::process;

use tracing_subscriber::EnvFilter;

use todo_server::config::ServerConfig;
use todo_server::router::build_router;
use todo_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            process::exit(2);
        }
    };

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("failed to open database '{}': {}", config.db_path, e);
            process::exit(3);
        }
    };

    let app = build_router(state);
    let addr = config.addr();

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            process::exit(3);
        }
    };
    tracing::info!("todo server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        process::exit(1);
    }
}
