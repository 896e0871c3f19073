//! # PostgREST User Store
//!
//! `UserStore` implementation over the REST interface Supabase exposes for a
//! Postgres table (`{SUPABASE_URL}/rest/v1/{table}`).
//!
//! ## Requests
//! - Lookup: `GET  /rest/v1/users?select=*&username=eq.alice`
//! - Count:  `HEAD /rest/v1/users?select=*` with `Prefer: count=exact`; the
//!   total comes back in the `Content-Range` header (`0-9/10`, `*/0`)
//!
//! Every request carries the project key twice, as `apikey` and as a bearer
//! token, which is what the Supabase gateway expects for anonymous access.

use crate::config::Config;
use crate::db::models::UserRecord;
use crate::db::{StoreError, UserStore};
use async_trait::async_trait;
use reqwest::header::CONTENT_RANGE;
use reqwest::{RequestBuilder, Response};

/// Upper bound on how much of an error body is kept in `StoreError::Status`
const MAX_ERROR_BODY: usize = 512;

/// Store client bound to one table of one Supabase project
///
/// Holds a single `reqwest::Client` (and therefore a single connection pool)
/// for the lifetime of the process.
#[derive(Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    table_url: String,
    key: String,
}

impl PostgrestStore {
    /// Build the store client from the application configuration.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.store_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new(
            builder.build()?,
            &config.store_url,
            &config.store_key,
            &config.users_table,
        ))
    }

    pub fn new(client: reqwest::Client, base_url: &str, key: &str, table: &str) -> Self {
        Self {
            client,
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            key: key.to_string(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.key).bearer_auth(&self.key)
    }
}

#[async_trait]
impl UserStore for PostgrestStore {
    async fn find_by_username(&self, username: &str) -> Result<Vec<UserRecord>, StoreError> {
        let filter = format!("eq.{}", username);

        let response = self
            .authorized(self.client.get(&self.table_url))
            .query(&[("select", "*"), ("username", filter.as_str())])
            .send()
            .await?;

        let rows = ensure_success(response)
            .await?
            .json::<Vec<UserRecord>>()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))?;

        tracing::debug!(matches = rows.len(), "username lookup finished");
        Ok(rows)
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        let response = self
            .authorized(self.client.head(&self.table_url))
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .ok_or_else(|| StoreError::MalformedResponse("missing Content-Range header".into()))?
            .to_str()
            .map_err(|e| StoreError::MalformedResponse(format!("unreadable Content-Range header: {e}")))?;

        parse_total(range)
    }
}

/// Turn a non-2xx response into `StoreError::Status`, keeping a bounded
/// slice of the body for diagnostics.
async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status,
        body: body.chars().take(MAX_ERROR_BODY).collect(),
    })
}

/// Extract the total from a `Content-Range` value such as `0-24/3573` or `*/0`.
fn parse_total(range: &str) -> Result<u64, StoreError> {
    let (_, total) = range
        .rsplit_once('/')
        .ok_or_else(|| StoreError::MalformedResponse(format!("unexpected Content-Range {range:?}")))?;

    total
        .trim()
        .parse()
        .map_err(|_| StoreError::MalformedResponse(format!("no exact count in Content-Range {range:?}")))
}
