//! # Application State
//!
//! This module defines the shared state that's accessible to all request handlers.
//! In Axum, state is how you share resources (store clients, configuration, etc.)
//! across different parts of your application.
//!
//! ## The State Pattern
//! Instead of creating a new store client for each request, we:
//! 1. Build the client once at startup
//! 2. Inject it into the `AuthGateway`
//! 3. Store the gateway in AppState
//! 4. Axum clones the state for each request (cheap because the store sits behind an Arc)

use crate::config::Config;
use crate::db::postgrest::PostgrestStore;
use crate::db::UserStore;
use crate::gateway::AuthGateway;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Shared application state
///
/// Read-only after startup, so no locking is needed anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Login and health logic, bound to the user record store
    pub gateway: AuthGateway,
}

impl AppState {
    /// Initialize application state from configuration
    ///
    /// Builds the PostgREST client for the configured Supabase project. No
    /// request is sent here; an unreachable store shows up in `/health`.
    pub fn new(config: &Config) -> Result<Self> {
        let store = PostgrestStore::from_config(config).context("failed to build store client")?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Build the state around any `UserStore` implementation.
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        AppState {
            gateway: AuthGateway::new(store),
        }
    }
}
