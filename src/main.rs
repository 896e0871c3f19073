//! # Auth Gateway Server
//!
//! Entry point for a small login backend. Users live in a Supabase (PostgREST)
//! table; this process only reads it.
//!
//! ## Endpoints
//! - `GET /`, `GET /night`, `GET /night/{id}`: greetings
//! - `POST /login`: username/password check against the users table
//! - `GET /health`: counts the users table to prove the store is reachable

// Module declarations - organize code into logical components
mod app;         // Router and middleware stack
mod config;      // Configuration management (environment variables, settings)
mod db;          // User record store (trait + PostgREST client)
mod error;       // Error handling and custom error types
mod gateway;     // Login and health logic
mod handlers;    // HTTP request handlers (routes)
mod middleware;  // Request/response interceptors (request ids)
mod state;       // Shared application state

use crate::config::Config;
use crate::state::AppState;
// Structured logging setup
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// This function:
/// 1. Sets up logging for debugging and monitoring
/// 2. Loads configuration from environment variables (fatal if the store is unset)
/// 3. Builds the store client and the gateway
/// 4. Sets up routes and middleware
/// 5. Serves until Ctrl+C / SIGTERM, then drains in-flight requests
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,auth_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config)?;
    tracing::info!(table = %config.users_table, "Application state initialized");

    let app = app::build_router(app_state);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve once Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
