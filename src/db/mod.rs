//! # User Record Store
//!
//! The gateway never owns user data. It reads it from an external store
//! through the [`UserStore`] trait, which only needs two query shapes:
//! - equality filter on `username`, returning every matching row
//! - exact row count of the table
//!
//! ## Submodules
//! - `models`: The `UserRecord` row type
//! - `postgrest`: Production implementation over the Supabase/PostgREST REST API

pub mod models;
pub mod postgrest;

use crate::db::models::UserRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to the user record store.
///
/// "No matching rows" is not an error: `find_by_username` returns an empty list.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request never produced a usable response (connection refused,
    /// DNS failure, timeout, undecodable JSON body).
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-success HTTP status.
    #[error("store returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The store answered 2xx but the payload could not be interpreted.
    #[error("malformed store response: {0}")]
    MalformedResponse(String),
}

/// Read-only query interface over the users table.
///
/// Implementations are created once at startup and shared by every request,
/// so they must be `Send + Sync` and must not rely on interior mutability
/// for correctness.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every record whose `username` equals `username` exactly, in store order.
    async fn find_by_username(&self, username: &str) -> Result<Vec<UserRecord>, StoreError>;

    /// Exact number of rows in the users table.
    async fn count_users(&self) -> Result<u64, StoreError>;
}
